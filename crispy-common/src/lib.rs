// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Firmware release manifest generation for crispy tooling.
//!
//! A manifest describes one firmware image for the update distribution
//! system: version, channel, release time, notes and the download URL with
//! size and MD5 of the image.

pub mod builder;
pub mod config;
pub mod digest;
pub mod error;
pub mod manifest;

// Re-export commonly used types
pub use builder::{build_manifest, build_record, BuiltManifest};
pub use config::{ManifestConfig, DEFAULT_CHANNEL, DEFAULT_MANIFEST_NAME};
pub use digest::FirmwareDigest;
pub use error::{ManifestError, Result};
pub use manifest::{FirmwareInfo, ManifestRecord};
