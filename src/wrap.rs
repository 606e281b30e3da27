// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use crate::width::{contains_cjk, text_width};

const SEPARATOR: &str = " ";

/// Greedy word-wrapper that knows about wide (CJK) and narrow scripts.
///
/// Input is split on whitespace into fields.
/// A field containing at least one CJK character
/// is broken up into single characters,
/// which may be packed together without any space in between.
/// All other fields are atomic,
/// and are separated from their neighbours by exactly one space.
///
/// A token wider than the limit is never split;
/// it is placed alone on its own line instead.
pub struct WordWrapper {
    limit: usize,
    used: usize,
    line: String,
    /// Whether the last token put on the current line
    /// requires a separator before the next one.
    last_needs_separator: bool,
}

impl WordWrapper {
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self {
            limit,
            used: 0,
            line: String::new(),
            last_needs_separator: false,
        }
    }

    /// Wraps `text` into lines no wider then the limit
    /// (except for single, over-long tokens).
    ///
    /// Whitespace-only input results in no lines at all.
    pub fn lines(&mut self, text: &str) -> Vec<String> {
        self.reset();

        let mut lines = vec![];
        for field in text.split_whitespace() {
            if contains_cjk(field) {
                let mut buf = [0; 4];
                for c in field.chars() {
                    self.append(&mut lines, c.encode_utf8(&mut buf), false);
                }
            } else {
                self.append(&mut lines, field, true);
            }
        }

        if self.used > 0 {
            lines.push(self.commit());
        }

        lines
    }

    fn append(&mut self, lines: &mut Vec<String>, token: &str, needs_separator: bool) {
        let token_width = text_width(token);
        let separator_width =
            usize::from(self.used > 0 && (self.last_needs_separator || needs_separator));

        if self.used > 0 && self.used + separator_width + token_width > self.limit {
            lines.push(self.commit());
        } else if separator_width > 0 {
            self.put(SEPARATOR, separator_width);
        }

        if self.used == 0 && token_width > self.limit {
            tracing::debug!(
                "Token '{token}' (width {token_width}) exceeds the line limit of {}; \
placing it on a line of its own",
                self.limit
            );
        }
        self.put(token, token_width);
        self.last_needs_separator = needs_separator;
    }

    fn put(&mut self, text: &str, width: usize) {
        if width > 0 {
            self.line.push_str(text);
            self.used += width;
        }
    }

    fn reset(&mut self) {
        self.line.clear();
        self.used = 0;
        self.last_needs_separator = false;
    }

    fn commit(&mut self) -> String {
        let line = std::mem::take(&mut self.line);
        self.reset();
        line
    }
}

/// Wraps `text` into lines of at most `limit` width-units.
///
/// See [`WordWrapper`] for the details.
#[must_use]
pub fn wrap(text: &str, limit: usize) -> Vec<String> {
    WordWrapper::new(limit).lines(text)
}
