// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

#[cfg(test)]
use pretty_assertions::assert_eq;
use mdscribe::{
    error::Error,
    options::{ReflowOptions, WriterOptions},
    reflow::{check, reflow},
};

fn reflow_opts(line_length: usize, title: Option<&str>) -> ReflowOptions {
    ReflowOptions {
        writer: WriterOptions::default().with_line_length(line_length),
        title: title.map(ToString::to_string),
        check: false,
    }
}

fn test_reflow(input: &str, expected: &str, options: &ReflowOptions) -> Result<(), Error> {
    let output = reflow(input, options)?;
    assert_eq!(output, expected);
    // reflowing is stable
    assert_eq!(reflow(&output, &reflow_opts(options.writer.line_length, None))?, output);
    Ok(())
}

#[test]
fn test_lorem() -> Result<(), Error> {
    test_reflow(
        include_str!("data/input/lorem.txt"),
        include_str!("data/output/lorem.md"),
        &reflow_opts(33, Some("Foxes")),
    )
}

#[test]
fn test_mixed_scripts() -> Result<(), Error> {
    test_reflow(
        include_str!("data/input/mixed.txt"),
        include_str!("data/output/mixed.md"),
        &reflow_opts(34, None),
    )
}

#[test]
fn test_empty_input() -> Result<(), Error> {
    assert_eq!(reflow("\n  \n", &reflow_opts(80, None))?, "");
    assert_eq!(reflow("", &reflow_opts(80, Some("Only")))?, "# Only\n");
    Ok(())
}

#[test]
fn test_check() -> Result<(), Error> {
    let options = reflow_opts(33, None);
    let formatted = include_str!("data/output/mixed.md");
    check(formatted, &reflow(formatted, &options)?)?;

    let unformatted = include_str!("data/input/lorem.txt");
    let res = check(unformatted, &reflow(unformatted, &options)?);
    match res {
        Err(Error::Check(diff)) => assert!(diff.contains("+the lazy dog. The quick brown fox")),
        other => panic!("Expected a failed check, but got {other:?}"),
    }
    Ok(())
}
