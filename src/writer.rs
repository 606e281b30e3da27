// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Write;

use crate::constants::{
    BACKTICK, HEADING_LEVELS, HEADING_MARKER, HORIZONTAL_RULE, MIN_FENCE_LENGTH,
};
use crate::error::{Error, ListOp, WriteResult};
use crate::inline::longest_backtick_run;
use crate::list::{List, ListKind};
use crate::options::WriterOptions;
use crate::width::text_width;
use crate::wrap::wrap;

/// Blank line bookkeeping between blocks.
///
/// The blank line separating two blocks is only written
/// once the second block begins,
/// so the document never ends in a blank line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum BlankLine {
    /// Nothing is owed, and the last line written (if any) had content.
    #[default]
    Settled,
    /// A block was completed;
    /// a blank line has to precede the next block.
    Owed,
    /// The last line written was blank.
    Written,
}

/// Writes block-level markdown to `W`,
/// one physical line at a time.
///
/// Paragraphs, list items and indented code blocks
/// are word-wrapped to [`WriterOptions::line_length`];
/// headings and fenced code blocks are written as they are.
///
/// ```
/// use mdscribe::writer::Writer;
///
/// let mut output = String::new();
/// let mut writer = Writer::new(&mut output);
/// writer.write_h1("Title")?;
/// writer.begin_ordered_list()?;
/// writer.write_list_item("first")?;
/// writer.write_list_item("second")?;
/// writer.end_list()?;
/// assert_eq!(output, "# Title\n\n1. first\n2. second\n");
/// # Ok::<(), mdscribe::error::Error>(())
/// ```
pub struct Writer<W: Write> {
    output: W,
    options: WriterOptions,
    /// Currently open lists, the innermost one last.
    lists: Vec<List>,
    blank_line: BlankLine,
}

impl<W: Write> Writer<W> {
    pub fn new(output: W) -> Self {
        Self::with_options(output, WriterOptions::default())
    }

    pub fn with_options(output: W, options: WriterOptions) -> Self {
        if text_width(&options.indentation) >= options.line_length {
            tracing::warn!(
                "The indentation '{}' is not narrower then the line length of {}; \
indented content will overflow",
                options.indentation,
                options.line_length
            );
        }
        Self {
            output,
            options,
            lists: vec![],
            blank_line: BlankLine::default(),
        }
    }

    #[must_use]
    pub const fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// The number of currently open (nested) lists.
    #[must_use]
    pub fn list_depth(&self) -> usize {
        self.lists.len()
    }

    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.output
    }

    pub fn into_inner(self) -> W {
        self.output
    }

    fn write_blank_line(&mut self) -> WriteResult<()> {
        self.output.write_str("\n")?;
        self.blank_line = BlankLine::Written;
        Ok(())
    }

    /// Writes one physical line in a single write.
    ///
    /// A blank line still owed stays owed;
    /// only list items write lines without flushing it first.
    fn write_line(&mut self, prefix: &str, line: &str) -> WriteResult<()> {
        self.output.write_str(&format!("{prefix}{line}\n"))?;
        if self.blank_line == BlankLine::Written {
            self.blank_line = BlankLine::Settled;
        }
        Ok(())
    }

    /// Writes the first line with `first_prefix`,
    /// and all the others with `following_prefix`.
    fn write_lines(
        &mut self,
        lines: &[String],
        first_prefix: &str,
        following_prefix: &str,
    ) -> WriteResult<()> {
        let mut prefix = first_prefix;
        for line in lines {
            self.write_line(prefix, line)?;
            prefix = following_prefix;
        }
        Ok(())
    }

    fn flush_pending_blank_line(&mut self) -> WriteResult<()> {
        if self.blank_line == BlankLine::Owed {
            self.write_blank_line()?;
        }
        Ok(())
    }

    fn defer_blank_line(&mut self) {
        if self.blank_line != BlankLine::Written {
            self.blank_line = BlankLine::Owed;
        }
    }

    /// Writes an ATX heading.
    /// The text is never wrapped, even if it exceeds the line length.
    ///
    /// # Errors
    ///
    /// If `level` is not within 1..=6,
    /// or if writing to the output fails.
    pub fn write_heading(&mut self, level: u8, text: &str) -> WriteResult<()> {
        if !HEADING_LEVELS.contains(&level) {
            return Err(Error::InvalidHeadingLevel(level));
        }

        self.flush_pending_blank_line()?;
        let marker = HEADING_MARKER.to_string().repeat(level.into());
        self.write_line(&format!("{marker} "), text)?;
        self.defer_blank_line();
        Ok(())
    }

    /// # Errors
    ///
    /// If writing to the output fails.
    pub fn write_h1(&mut self, text: &str) -> WriteResult<()> {
        self.write_heading(1, text)
    }

    /// # Errors
    ///
    /// If writing to the output fails.
    pub fn write_h2(&mut self, text: &str) -> WriteResult<()> {
        self.write_heading(2, text)
    }

    /// # Errors
    ///
    /// If writing to the output fails.
    pub fn write_h3(&mut self, text: &str) -> WriteResult<()> {
        self.write_heading(3, text)
    }

    /// # Errors
    ///
    /// If writing to the output fails.
    pub fn write_h4(&mut self, text: &str) -> WriteResult<()> {
        self.write_heading(4, text)
    }

    /// # Errors
    ///
    /// If writing to the output fails.
    pub fn write_h5(&mut self, text: &str) -> WriteResult<()> {
        self.write_heading(5, text)
    }

    /// # Errors
    ///
    /// If writing to the output fails.
    pub fn write_h6(&mut self, text: &str) -> WriteResult<()> {
        self.write_heading(6, text)
    }

    /// Writes `text` word-wrapped as a paragraph.
    /// Text without any words writes nothing at all.
    ///
    /// # Errors
    ///
    /// If writing to the output fails.
    pub fn write_paragraph(&mut self, text: &str) -> WriteResult<()> {
        let lines = wrap(text, self.options.line_length);
        if lines.is_empty() {
            return Ok(());
        }

        self.flush_pending_blank_line()?;
        self.write_lines(&lines, "", "")?;
        self.defer_blank_line();
        Ok(())
    }

    fn begin_list(&mut self, kind: ListKind) -> WriteResult<()> {
        if self.lists.is_empty() {
            self.flush_pending_blank_line()?;
        }
        self.lists.push(List::new(kind));
        tracing::trace!("Began {kind:?} list; depth is now {}", self.lists.len());
        Ok(())
    }

    /// # Errors
    ///
    /// If writing a pending blank line to the output fails.
    pub fn begin_unordered_list(&mut self) -> WriteResult<()> {
        self.begin_list(ListKind::Unordered)
    }

    /// # Errors
    ///
    /// If writing a pending blank line to the output fails.
    pub fn begin_ordered_list(&mut self) -> WriteResult<()> {
        self.begin_list(ListKind::Ordered)
    }

    /// Writes an item of the innermost open list.
    ///
    /// The item is indented by one indentation unit per enclosing list,
    /// and wrapped lines hang below the item text, not below the marker.
    ///
    /// # Errors
    ///
    /// If no list is open,
    /// or if writing to the output fails.
    pub fn write_list_item(&mut self, text: &str) -> WriteResult<()> {
        let enclosing = self.lists.len().saturating_sub(1);
        let list = self
            .lists
            .last_mut()
            .ok_or(Error::NoOpenList(ListOp::WriteItem))?;

        let prefix = format!(
            "{}{} ",
            self.options.indentation.repeat(enclosing),
            list.next_marker()
        );
        let prefix_width = text_width(&prefix);
        let lines = wrap(text, self.options.line_length.saturating_sub(prefix_width));
        if lines.is_empty() {
            return Ok(());
        }

        let hanging = " ".repeat(prefix_width);
        self.write_lines(&lines, &prefix, &hanging)
    }

    /// Closes the innermost open list.
    /// Closing the outermost one completes the block.
    ///
    /// # Errors
    ///
    /// If no list is open.
    pub fn end_list(&mut self) -> WriteResult<()> {
        let list = self.lists.pop().ok_or(Error::NoOpenList(ListOp::End))?;
        tracing::trace!(
            "Ended {:?} list after {} items; depth is now {}",
            list.kind,
            list.index,
            self.lists.len()
        );
        if self.lists.is_empty() {
            self.defer_blank_line();
        }
        Ok(())
    }

    /// # Errors
    ///
    /// If writing to the output fails.
    pub fn write_horizontal_rule(&mut self) -> WriteResult<()> {
        self.flush_pending_blank_line()?;
        self.write_line("", HORIZONTAL_RULE)?;
        self.defer_blank_line();
        Ok(())
    }

    /// Writes `code` verbatim between two fences,
    /// the opening one annotated with `language` (which may be empty).
    ///
    /// # Errors
    ///
    /// If writing to the output fails.
    pub fn write_fenced_code_block(&mut self, code: &str, language: &str) -> WriteResult<()> {
        let fence_length = MIN_FENCE_LENGTH.max(longest_backtick_run(code) + 1);
        let fence = BACKTICK.to_string().repeat(fence_length);

        self.flush_pending_blank_line()?;
        self.write_line(&fence, language)?;
        for line in code.split('\n') {
            self.write_line("", line)?;
        }
        self.write_line(&fence, "")?;
        self.defer_blank_line();
        Ok(())
    }

    /// Writes `code` word-wrapped,
    /// with every line indented by one indentation unit.
    ///
    /// # Errors
    ///
    /// If writing to the output fails.
    pub fn write_indented_code_block(&mut self, code: &str) -> WriteResult<()> {
        let indent = self.options.indentation.clone();
        let lines = wrap(
            code,
            self.options.line_length.saturating_sub(text_width(&indent)),
        );
        if lines.is_empty() {
            return Ok(());
        }

        self.flush_pending_blank_line()?;
        self.write_lines(&lines, &indent, &indent)?;
        self.defer_blank_line();
        Ok(())
    }
}
