// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Manifest build configuration.

use std::path::{Path, PathBuf};

/// Release channel used when none is given.
pub const DEFAULT_CHANNEL: &str = "stable";

/// File name of the manifest when no output path is given.
pub const DEFAULT_MANIFEST_NAME: &str = "manifest.json";

/// Inputs for a single manifest build.
///
/// `version` and `channel` are opaque strings: no format check is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestConfig {
    /// Firmware binary to describe.
    pub firmware: PathBuf,
    /// Release version string.
    pub version: String,
    /// Release channel (e.g. stable, beta).
    pub channel: String,
    /// Prefix for the download URL. Empty means the URL is the bare file name.
    pub base_url: String,
    /// Explicit manifest path. `None` places `manifest.json` next to the firmware.
    pub outfile: Option<PathBuf>,
    /// Free-text release notes.
    pub notes: String,
}

impl ManifestConfig {
    /// Create a configuration with default channel, no base URL and empty notes.
    pub fn new(firmware: impl Into<PathBuf>, version: impl Into<String>) -> Self {
        Self {
            firmware: firmware.into(),
            version: version.into(),
            channel: DEFAULT_CHANNEL.to_string(),
            base_url: String::new(),
            outfile: None,
            notes: String::new(),
        }
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_outfile(mut self, outfile: impl Into<PathBuf>) -> Self {
        self.outfile = Some(outfile.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Output path for a firmware already resolved to `resolved_firmware`.
    pub fn output_path(&self, resolved_firmware: &Path) -> PathBuf {
        match &self.outfile {
            Some(path) => path.clone(),
            None => default_output_path(resolved_firmware),
        }
    }
}

/// `manifest.json` in the directory containing `firmware`.
pub fn default_output_path(firmware: &Path) -> PathBuf {
    firmware
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(DEFAULT_MANIFEST_NAME)
}

/// Build the download URL for `file_name`.
///
/// A single trailing slash is stripped from `base_url` before joining.
pub fn download_url(base_url: &str, file_name: &str) -> String {
    if base_url.is_empty() {
        return file_name.to_string();
    }
    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    format!("{}/{}", base, file_name)
}
