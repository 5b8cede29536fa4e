// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command implementations.

use anyhow::Result;
use log::info;

use crispy_common::{build_manifest, ManifestConfig};

/// Build the manifest for `config` and report where it was written.
pub fn build(config: &ManifestConfig) -> Result<()> {
    let built = build_manifest(config)?;

    info!(
        "Firmware: {} ({} bytes, MD5: {})",
        built.firmware.display(),
        built.record.firmware.size,
        built.record.firmware.md5
    );
    info!(
        "Release:  {} on channel {}",
        built.record.version, built.record.channel
    );
    info!("URL:      {}", built.record.firmware.url);

    println!("Manifest written to {}", built.output.display());
    Ok(())
}
