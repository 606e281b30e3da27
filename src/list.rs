// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use crate::constants::BULLET;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

/// One level of (possibly nested) list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub kind: ListKind,
    /// Number of items written so far.
    /// Only shows up in the output of ordered lists.
    pub index: usize,
}

impl List {
    #[must_use]
    pub const fn new(kind: ListKind) -> Self {
        Self { kind, index: 0 }
    }

    /// Counts one more item, and returns its marker.
    pub fn next_marker(&mut self) -> String {
        self.index += 1;
        match self.kind {
            ListKind::Ordered => format!("{}.", self.index),
            ListKind::Unordered => BULLET.to_string(),
        }
    }
}
