// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! CLI entry point for the console inspector.

use anyhow::Result;
use clap::Parser;
use wincon_cli::CliArgs;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    wincon_cli::run(args)
}
