// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

//! The two-class width model used for wrapping:
//! Han (CJK ideograph) characters are wide and count as 2 width-units,
//! everything else is narrow and counts as 1.

/// Whether `c` belongs to the Han script.
///
/// Han ranges from Unicode 15.1 `Scripts.txt` (`Script=Han`),
/// with the adjacent Extension B-I blocks merged.
///
/// NOTE CJK punctuation (e.g. '，' or '。') is *not* Han,
///      and thus counts as narrow.
#[must_use]
pub const fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{2E80}'..='\u{2E99}'
        | '\u{2E9B}'..='\u{2EF3}'
        | '\u{2F00}'..='\u{2FD5}'
        | '\u{3005}'
        | '\u{3007}'
        | '\u{3021}'..='\u{3029}'
        | '\u{3038}'..='\u{303B}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{F900}'..='\u{FA6D}'
        | '\u{FA70}'..='\u{FAD9}'
        | '\u{16FE2}'..='\u{16FE3}'
        | '\u{16FF0}'..='\u{16FF1}'
        | '\u{20000}'..='\u{2A6DF}'
        | '\u{2A700}'..='\u{2EBEF}'
        | '\u{2F800}'..='\u{2FA1F}'
        | '\u{30000}'..='\u{323AF}')
}

#[must_use]
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk)
}

#[must_use]
pub const fn char_width(c: char) -> usize {
    if is_cjk(c) { 2 } else { 1 }
}

/// The width of `text` in width-units.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}
