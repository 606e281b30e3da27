// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use crate::constants::{DEFAULT_INDENTATION, DEFAULT_LINE_LENGTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterOptions {
    /// Space(s) or tab(s) representing one level of indentation,
    /// used for nested lists and indented code blocks.
    pub indentation: String,
    /// Maximum width of a wrapped line,
    /// measured in width-units:
    /// CJK ideographs count as 2, every other character as 1.
    pub line_length: usize,
}

impl WriterOptions {
    #[must_use]
    pub fn with_indentation(mut self, indentation: impl Into<String>) -> Self {
        self.indentation = indentation.into();
        self
    }

    #[must_use]
    pub const fn with_line_length(mut self, line_length: usize) -> Self {
        self.line_length = line_length;
        self
    }
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            indentation: DEFAULT_INDENTATION.to_string(),
            line_length: DEFAULT_LINE_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReflowOptions {
    pub writer: WriterOptions,
    /// Written as a level 1 heading before the first paragraph.
    pub title: Option<String>,
    /// Do not print the reflowed text but only check
    /// if the input already is in that form.
    pub check: bool,
}
