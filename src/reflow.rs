// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

//! Turns plain text into wrapped markdown paragraphs.
//!
//! NOTE This does *not* parse markdown;
//!      every input line is treated as plain words.

use crate::error::{Error, WriteResult};
use crate::options::ReflowOptions;
use crate::writer::Writer;

/// Splits `text` into paragraphs at (whitespace-only) blank lines.
fn paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = vec![];
    let mut current: Vec<&str> = vec![];
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }
    paragraphs
}

/// Writes the (optional) title and every paragraph of `text`
/// as word-wrapped markdown.
///
/// # Errors
///
/// Fails only if writing to the in-memory buffer fails.
pub fn reflow(text: &str, options: &ReflowOptions) -> WriteResult<String> {
    let mut output = String::new();
    let mut writer = Writer::with_options(&mut output, options.writer.clone());
    if let Some(title) = options.title.as_deref() {
        writer.write_h1(title)?;
    }
    let paragraphs = paragraphs(text);
    tracing::debug!("Reflowing {} paragraphs", paragraphs.len());
    for paragraph in &paragraphs {
        writer.write_paragraph(paragraph)?;
    }
    Ok(output)
}

/// Checks whether `original` is already in its reflowed form.
///
/// # Errors
///
/// If it is not, with a unified diff between the two as content.
pub fn check(original: &str, reflowed: &str) -> WriteResult<()> {
    if original == reflowed {
        Ok(())
    } else {
        let patch = diffy::create_patch(original, reflowed);
        Err(Error::Check(patch.to_string()))
    }
}
