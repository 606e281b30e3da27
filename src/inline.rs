// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

//! Inline span formatting.
//!
//! These are plain string transformations,
//! meant to prepare text before it is handed to the [`crate::writer::Writer`].

use crate::constants::BACKTICK;
use regex::Regex;
use std::sync::LazyLock;

static RE_BACKTICKS: LazyLock<Regex> = LazyLock::new(|| Regex::new("`+").unwrap());

const ASTERISK: char = '*';
const UNDERSCORE: char = '_';

/// Length of the longest run of consecutive backticks in `text`.
#[must_use]
pub fn longest_backtick_run(text: &str) -> usize {
    RE_BACKTICKS
        .find_iter(text)
        .map(|run| run.len())
        .max()
        .unwrap_or(0)
}

/// Escapes `text` with a backslash if it starts with ASCII punctuation.
#[must_use]
pub fn escape(text: &str) -> String {
    match text.chars().next() {
        Some(first) if first.is_ascii_punctuation() => format!("\\{text}"),
        _ => text.to_string(),
    }
}

/// Creates a code span,
/// using a delimiter that is longer then any backtick run within `text`.
#[must_use]
pub fn code(text: &str) -> String {
    let delimiter = BACKTICK.to_string().repeat(longest_backtick_run(text) + 1);
    let padding = if text.starts_with(BACKTICK) || text.ends_with(BACKTICK) {
        " "
    } else {
        ""
    };
    format!("{delimiter}{padding}{text}{padding}{delimiter}")
}

fn emphasis(text: &str, strength: usize) -> String {
    if text.is_empty() {
        return String::new();
    }
    let delimiter = if text.contains(ASTERISK) {
        UNDERSCORE
    } else {
        ASTERISK
    };
    let delimiter = delimiter.to_string().repeat(strength);
    format!("{delimiter}{text}{delimiter}")
}

/// Emphasis, using `*`, or `_` if `text` already contains `*`.
#[must_use]
pub fn em(text: &str) -> String {
    emphasis(text, 1)
}

/// Strong emphasis, using `**`, or `__` if `text` already contains `*`.
#[must_use]
pub fn strong(text: &str) -> String {
    emphasis(text, 2)
}

/// Creates a link.
///
/// The first entry of `url_and_title` is the URL,
/// all further entries are joined by a space to form the title.
/// Without any URL, a (shortcut) reference link is created.
#[must_use]
pub fn link(text: &str, url_and_title: &[&str]) -> String {
    match url_and_title {
        [] => format!("[{text}]"),
        [url] => format!("[{text}]({url})"),
        [url, title @ ..] => format!("[{text}]({url} \"{}\")", title.join(" ")),
    }
}

/// Creates an image; see [`link`].
#[must_use]
pub fn image(caption: &str, url_and_title: &[&str]) -> String {
    format!("!{}", link(caption, url_and_title))
}
