// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The list operation that was called without any list being open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOp {
    WriteItem,
    End,
}

impl fmt::Display for ListOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteItem => write!(f, "write a list item"),
            Self::End => write!(f, "end a list"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Heading level should be between 1 and 6, but is {0}")]
    InvalidHeadingLevel(u8),

    #[error("Tried to {0}, but no list has been begun")]
    NoOpenList(ListOp),

    /// Represents all failures of the output sink.
    #[error(transparent)]
    Format(#[from] fmt::Error),

    #[error("Input is not equivalent to the (re-)flowed version of its self:\n{0}")]
    Check(String),

    #[error("The input {0} does not seem to exist")]
    TargetFileDoesNotExist(PathBuf),

    #[error("Error while reading {0}: {1}")]
    FailedToReadInput(PathBuf, std::io::Error),

    #[error("Error while writing {0}: {1}")]
    FailedToWriteOutput(PathBuf, std::io::Error),
}

impl Error {
    /// Whether this error stems from misuse of the writer API
    /// (a programming error),
    /// rather than from a failing environment.
    ///
    /// The document written up to such an error is structurally broken,
    /// and should be discarded.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(self, Self::InvalidHeadingLevel(_) | Self::NoOpenList(_))
    }
}

pub type WriteResult<T> = std::result::Result<T, Error>;
