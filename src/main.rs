// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use cli::InitError;
use thiserror::Error;

mod cli;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to initialize the CLI tool: {0}")]
    Init(#[from] InitError),

    #[error("Failed to reflow: {0}")]
    Reflow(#[from] mdscribe::error::Error),
}

fn main() -> Result<(), CliError> {
    let (options, sources) = cli::init()?;
    mdscribe::run(&options, &sources)?;
    Ok(())
}
