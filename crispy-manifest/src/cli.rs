// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crispy_common::{ManifestConfig, ManifestError, DEFAULT_CHANNEL};

use crate::commands;

/// Missing or malformed arguments.
pub const EXIT_USAGE: u8 = 1;
/// Firmware path does not exist.
pub const EXIT_NOT_FOUND: u8 = 2;
/// Any other failure (unreadable firmware, unwritable output, ...).
pub const EXIT_FAILURE: u8 = 3;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "crispy-manifest")]
#[command(about = "Generate a firmware release manifest for the update server")]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Firmware binary file
    #[arg(long, allow_hyphen_values = true, value_name = "PATH")]
    pub firmware: PathBuf,

    /// Release version (e.g., 1.3.67)
    #[arg(long, allow_hyphen_values = true, value_name = "X.Y.Z")]
    pub version: String,

    /// Release channel
    #[arg(long, allow_hyphen_values = true, value_name = "NAME", default_value = DEFAULT_CHANNEL)]
    pub channel: String,

    /// Base URL prefix for the download link
    #[arg(long, allow_hyphen_values = true, value_name = "URL", default_value = "")]
    pub base_url: String,

    /// Output path [default: <firmware dir>/manifest.json]
    #[arg(long, allow_hyphen_values = true, value_name = "PATH")]
    pub outfile: Option<PathBuf>,

    /// Free-text release notes
    #[arg(long, allow_hyphen_values = true, value_name = "TEXT", default_value = "")]
    pub notes: String,
}

impl Cli {
    /// Convert parsed arguments into a build configuration.
    pub fn into_config(self) -> ManifestConfig {
        let config = ManifestConfig::new(self.firmware, self.version)
            .with_channel(self.channel)
            .with_base_url(self.base_url)
            .with_notes(self.notes);

        match self.outfile {
            Some(outfile) => config.with_outfile(outfile),
            None => config,
        }
    }
}

/// Execute the parsed CLI command.
pub fn run(cli: Cli) -> Result<()> {
    commands::build(&cli.into_config())
}

/// Process exit status for a failed run.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ManifestError>() {
        Some(ManifestError::NotFound { .. }) => EXIT_NOT_FOUND,
        _ => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["crispy-manifest", "--firmware", "fw.bin", "--version", "1.2.3"])
            .unwrap();
        let config = cli.into_config();
        assert_eq!(config.firmware, PathBuf::from("fw.bin"));
        assert_eq!(config.version, "1.2.3");
        assert_eq!(config.channel, "stable");
        assert_eq!(config.base_url, "");
        assert_eq!(config.notes, "");
        assert!(config.outfile.is_none());
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "crispy-manifest",
            "--firmware",
            "fw.bin",
            "--version",
            "2.0",
            "--channel",
            "beta",
            "--base-url",
            "https://cdn.example.com/",
            "--outfile",
            "out.json",
            "--notes",
            "Fixes",
        ])
        .unwrap();
        let config = cli.into_config();
        assert_eq!(config.channel, "beta");
        assert_eq!(config.base_url, "https://cdn.example.com/");
        assert_eq!(config.outfile, Some(PathBuf::from("out.json")));
        assert_eq!(config.notes, "Fixes");
    }

    #[test]
    fn test_parse_hyphen_values() {
        let cli = Cli::try_parse_from([
            "crispy-manifest",
            "--firmware",
            "-fw.bin",
            "--version",
            "-rc1",
            "--notes",
            "- Fixed CAN bus timeout",
        ])
        .unwrap();
        let config = cli.into_config();
        assert_eq!(config.firmware, PathBuf::from("-fw.bin"));
        assert_eq!(config.version, "-rc1");
        assert_eq!(config.notes, "- Fixed CAN bus timeout");
    }

    #[test]
    fn test_missing_version_is_rejected() {
        let err = Cli::try_parse_from(["crispy-manifest", "--firmware", "fw.bin"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_flag_without_value_is_rejected() {
        assert!(Cli::try_parse_from(["crispy-manifest", "--version", "1", "--firmware"]).is_err());
    }

    #[test]
    fn test_not_found_exit_code() {
        let err = anyhow::Error::new(ManifestError::NotFound {
            path: PathBuf::from("/tmp/missing.bin"),
        });
        assert_eq!(exit_code(&err), EXIT_NOT_FOUND);
    }

    #[test]
    fn test_io_exit_code() {
        let err = anyhow::Error::new(ManifestError::Io {
            path: PathBuf::from("/tmp/out.json"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        });
        assert_eq!(exit_code(&err), EXIT_FAILURE);
    }
}
