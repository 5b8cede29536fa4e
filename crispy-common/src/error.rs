// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Error types for manifest generation.

use std::io;
use std::path::PathBuf;

/// Failures that can end a manifest build.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The resolved firmware path does not exist.
    #[error("Firmware not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Reading the firmware or writing the manifest failed.
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Manifest JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ManifestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ManifestError>;
