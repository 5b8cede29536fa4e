// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Manifest generation for a single firmware image.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::{download_url, ManifestConfig};
use crate::digest::FirmwareDigest;
use crate::error::{ManifestError, Result};
use crate::manifest::ManifestRecord;

/// Result of a successful build.
#[derive(Debug)]
pub struct BuiltManifest {
    pub record: ManifestRecord,
    /// Absolute firmware path the manifest describes.
    pub firmware: PathBuf,
    /// Where the manifest was written.
    pub output: PathBuf,
}

/// Resolve `path` against the current directory and check that it exists.
pub fn resolve_firmware(path: &Path) -> Result<PathBuf> {
    let resolved = std::path::absolute(path).map_err(|e| ManifestError::io(path, e))?;
    match fs::metadata(&resolved) {
        Ok(_) => Ok(resolved),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(ManifestError::NotFound { path: resolved })
        }
        Err(e) => Err(ManifestError::io(resolved, e)),
    }
}

/// Hash `path` and measure its size.
pub fn digest_file(path: &Path) -> Result<FirmwareDigest> {
    let file = File::open(path).map_err(|e| ManifestError::io(path, e))?;
    FirmwareDigest::of_reader(file).map_err(|e| ManifestError::io(path, e))
}

/// Build the manifest record for `config` without writing it.
///
/// Returns the record and the resolved firmware path.
pub fn build_record(config: &ManifestConfig) -> Result<(ManifestRecord, PathBuf)> {
    let firmware = resolve_firmware(&config.firmware)?;
    debug!("Firmware resolved to {}", firmware.display());

    let digest = digest_file(&firmware)?;
    debug!("Firmware size {} bytes, md5 {}", digest.size, digest.md5);

    let file_name = firmware
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let url = download_url(&config.base_url, &file_name);

    let record = ManifestRecord::new(
        config.version.as_str(),
        config.channel.as_str(),
        config.notes.as_str(),
        url,
        digest,
    );
    Ok((record, firmware))
}

/// Build the manifest for `config` and write it to its output path.
pub fn build_manifest(config: &ManifestConfig) -> Result<BuiltManifest> {
    let (record, firmware) = build_record(config)?;

    let output = config.output_path(&firmware);
    debug!("Writing manifest to {}", output.display());
    record.write_to(&output)?;

    Ok(BuiltManifest {
        record,
        firmware,
        output,
    })
}
