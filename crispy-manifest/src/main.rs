// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Firmware release manifest generator.
//!
//! Usage:
//!   crispy-manifest --firmware build/fw.bin --version 1.3.67
//!   crispy-manifest --firmware fw.bin --version 1.4.0 --channel beta \
//!       --base-url https://cdn.example.com/fw/ --notes "CAN fixes"
//!
//! Exit codes: 0 success, 1 usage error, 2 firmware not found, 3 other failure.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use env_logger::Env;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = match cli::Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Help goes to stdout; everything else is a usage error.
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(cli::EXIT_USAGE),
            };
        }
    };

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(cli::exit_code(&err))
        }
    }
}
