// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::ffi::OsString;

use anyhow::Result;
use clap::Parser;

use hello::io::print_greeting;

/// Prints a greeting.
///
/// No options are recognized. Anything passed on the command line,
/// including `--help` and `--version`, is accepted and ignored.
#[derive(Debug, Parser)]
#[clap(name = env!("CARGO_CRATE_NAME"), version)]
#[command(
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true,
    ignore_errors = true
)]
pub struct App {
    #[arg(
        hide = true,
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    _ignored: Vec<OsString>,
}

fn main() -> Result<()> {
    App::parse();
    print_greeting()
}
