// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Release manifest record and its JSON form.
//!
//! Field order here is the order written to disk:
//!
//! ```text
//! {
//!   "version": "1.3.67",
//!   "channel": "stable",
//!   "released_at": "2026-10-16T09:30:00.123Z",
//!   "notes": "",
//!   "firmware": { "url": "...", "size": 123, "md5": "..." }
//! }
//! ```

use std::fs;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::digest::FirmwareDigest;
use crate::error::{ManifestError, Result};

/// Download location and integrity data for the firmware image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirmwareInfo {
    pub url: String,
    pub size: u64,
    pub md5: String,
}

/// Firmware release descriptor consumed by the update system.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRecord {
    pub version: String,
    pub channel: String,
    pub released_at: String,
    pub notes: String,
    pub firmware: FirmwareInfo,
}

/// Render a timestamp the way the update consumer expects (`...T..:..:..mmmZ`).
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl ManifestRecord {
    /// Record stamped with the current UTC time.
    pub fn new(
        version: impl Into<String>,
        channel: impl Into<String>,
        notes: impl Into<String>,
        url: impl Into<String>,
        digest: FirmwareDigest,
    ) -> Self {
        Self::new_at(version, channel, notes, url, digest, Utc::now())
    }

    /// Record stamped with `released_at`.
    pub fn new_at(
        version: impl Into<String>,
        channel: impl Into<String>,
        notes: impl Into<String>,
        url: impl Into<String>,
        digest: FirmwareDigest,
        released_at: DateTime<Utc>,
    ) -> Self {
        Self {
            version: version.into(),
            channel: channel.into(),
            released_at: format_timestamp(released_at),
            notes: notes.into(),
            firmware: FirmwareInfo {
                url: url.into(),
                size: digest.size,
                md5: digest.md5,
            },
        }
    }

    /// Pretty JSON with 2-space indentation, no trailing newline.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read a manifest previously written to `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| ManifestError::io(path, e))?;
        Self::from_json(&text)
    }

    /// Serialize and write to `path`, replacing any existing file.
    ///
    /// The JSON is fully rendered before the file is touched.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| ManifestError::io(path, e))
    }
}
