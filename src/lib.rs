// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

pub mod constants;
pub mod error;
pub mod inline;
pub mod list;
pub mod options;
pub mod reflow;
pub mod width;
pub mod wrap;
pub mod writer;

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use error::{Error, WriteResult};
use options::ReflowOptions;

pub const VERSION: &str = git_version::git_version!(cargo_prefix = "", fallback = "unknown");

/// The source name that stands for stdin.
pub const STDIN: &str = "-";

fn read_source(source: &Path) -> WriteResult<String> {
    if source == Path::new(STDIN) {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|err| Error::FailedToReadInput(source.to_path_buf(), err))?;
        return Ok(content);
    }
    if !source.is_file() {
        return Err(Error::TargetFileDoesNotExist(source.to_path_buf()));
    }
    std::fs::read_to_string(source).map_err(|err| Error::FailedToReadInput(source.to_path_buf(), err))
}

/// Reflows every source,
/// and either prints the result to stdout,
/// or - in check mode - verifies that the source already is reflowed.
///
/// # Errors
///
/// If a source can not be read,
/// if the output can not be written,
/// or if a check fails.
pub fn run(options: &ReflowOptions, sources: &[PathBuf]) -> WriteResult<()> {
    let stdout_path = PathBuf::from(STDIN);
    let mut stdout = std::io::stdout().lock();
    for source in sources {
        tracing::debug!("Reflowing '{}' ...", source.display());
        let original = read_source(source)?;
        let reflowed = reflow::reflow(&original, options)?;
        if options.check {
            reflow::check(&original, &reflowed)?;
            tracing::info!("'{}' is already reflowed", source.display());
        } else {
            stdout
                .write_all(reflowed.as_bytes())
                .map_err(|err| Error::FailedToWriteOutput(stdout_path.clone(), err))?;
        }
    }
    Ok(())
}
