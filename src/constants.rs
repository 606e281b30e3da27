// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::ops::RangeInclusive;

/// One level of list and code indentation,
/// if nothing else is configured.
pub const DEFAULT_INDENTATION: &str = "    ";

/// Maximum width of an output line in width-units,
/// if nothing else is configured.
///
/// NOTE Headings and fenced code blocks are never wrapped,
///      so they may exceed this.
pub const DEFAULT_LINE_LENGTH: usize = 80;

/// The marker used for every item of an unordered list.
pub const BULLET: &str = "-";

pub const HORIZONTAL_RULE: &str = "* * *";

pub const HEADING_MARKER: char = '#';

pub const HEADING_LEVELS: RangeInclusive<u8> = 1..=6;

/// The shortest allowed code fence.
/// Longer fences are used if the code itself contains
/// a run of backticks of this length or more.
pub const MIN_FENCE_LENGTH: usize = 3;

pub const BACKTICK: char = '`';
