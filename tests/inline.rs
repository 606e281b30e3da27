// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

#[cfg(test)]
use pretty_assertions::assert_eq;
use mdscribe::inline::{code, em, escape, image, link, longest_backtick_run, strong};

#[test]
fn test_escape() {
    assert_eq!(escape("[]"), "\\[]");
    assert_eq!(escape("*not emphasis*"), "\\*not emphasis*");
    assert_eq!(escape("simple"), "simple");
    assert_eq!(escape("「」"), "「」");
    assert_eq!(escape(""), "");
}

#[test]
fn test_longest_backtick_run() {
    assert_eq!(longest_backtick_run("no ticks"), 0);
    assert_eq!(longest_backtick_run("some `` test ``` text"), 3);
}

#[test]
fn test_code() {
    assert_eq!(code("some text"), "`some text`");
    assert_eq!(code("some `` test ``` text"), "````some `` test ``` text````");
    assert_eq!(code("``some"), "``` ``some ```");
    assert_eq!(code("some`"), "`` some` ``");
    assert_eq!(code(""), "``");
}

#[test]
fn test_em() {
    assert_eq!(em("text"), "*text*");
    assert_eq!(em("simple * or not"), "_simple * or not_");
    assert_eq!(em("simple_or_not"), "*simple_or_not*");
    assert_eq!(em(""), "");
}

#[test]
fn test_strong() {
    assert_eq!(strong("text"), "**text**");
    assert_eq!(strong("simple * or not"), "__simple * or not__");
    assert_eq!(strong("simple_or_not"), "**simple_or_not**");
    assert_eq!(strong(""), "");
}

#[test]
fn test_link() {
    assert_eq!(link("text", &[]), "[text]");
    assert_eq!(link("text", &["url"]), "[text](url)");
    assert_eq!(link("text", &["url", "title"]), r#"[text](url "title")"#);
    assert_eq!(
        link("text", &["url", "title", "and", "more"]),
        r#"[text](url "title and more")"#
    );
}

#[test]
fn test_image() {
    assert_eq!(image("text", &[]), "![text]");
    assert_eq!(image("text", &["url"]), "![text](url)");
    assert_eq!(image("text", &["url", "title"]), r#"![text](url "title")"#);
    assert_eq!(
        image("text", &["url", "title", "and", "more"]),
        r#"![text](url "title and more")"#
    );
}
