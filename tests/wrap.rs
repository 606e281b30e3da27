// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

#[cfg(test)]
use pretty_assertions::assert_eq;
use mdscribe::width::{contains_cjk, is_cjk, text_width};
use mdscribe::wrap::{wrap, WordWrapper};

fn test_wrap(limit: usize, text: &str, expected: &[&str]) {
    let lines = wrap(text, limit);
    assert_eq!(lines, expected);
}

#[test]
fn test_width_model() {
    assert!(is_cjk('这'));
    assert!(!is_cjk('，'));
    assert!(!is_cjk('。'));
    assert!(!is_cjk('a'));
    assert!(contains_cjk("good这"));
    assert!(!contains_cjk("good, bad"));
    assert_eq!(text_width("good"), 4);
    assert_eq!(text_width("这是"), 4);
    assert_eq!(text_width("一个，"), 5);
}

#[test]
fn test_en() {
    test_wrap(10, "This is a text line.", &["This is a", "text line."]);
}

#[test]
fn test_en_punctuation() {
    test_wrap(10, "This is an, text line.", &["This is", "an, text", "line."]);
}

#[test]
fn test_cn() {
    test_wrap(10, "这是一个，测试", &["这是一个，", "测试"]);
}

#[test]
fn test_cn_punctuation() {
    // CJK punctuation is narrow, but may still start a line
    test_wrap(10, "这真是一个，测试", &["这真是一个", "，测试"]);
}

#[test]
fn test_mixed() {
    test_wrap(10, "good 这是一个，测试", &["good 这是", "一个，测试"]);
}

#[test]
fn test_short_text_is_kept() {
    test_wrap(80, "Already short enough.", &["Already short enough."]);
}

#[test]
fn test_whitespace_is_normalized() {
    test_wrap(80, "  spread \t out\n words  ", &["spread out words"]);
}

#[test]
fn test_exact_fit() {
    test_wrap(9, "abcd efgh", &["abcd efgh"]);
    test_wrap(8, "abcd efgh", &["abcd", "efgh"]);
}

#[test]
fn test_empty() {
    test_wrap(10, "", &[]);
    test_wrap(10, " \n\t ", &[]);
}

#[test]
fn test_overlong_token_stays_whole() {
    test_wrap(5, "a supercalifragilistic b", &["a", "supercalifragilistic", "b"]);
}

#[test]
fn test_overlong_first_token_has_no_empty_line_before() {
    test_wrap(3, "abcdefgh ij", &["abcdefgh", "ij"]);
}

#[test]
fn test_wrapper_is_reusable() {
    let mut wrapper = WordWrapper::new(10);
    assert_eq!(wrapper.lines("This is a text line."), ["This is a", "text line."]);
    assert_eq!(wrapper.lines("这是一个，测试"), ["这是一个，", "测试"]);
    assert_eq!(wrapper.lines(""), Vec::<String>::new());
}
