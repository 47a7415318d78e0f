//! In-memory document with an optional selection

use super::{HostDocument, Selection, Span};
use crate::error::{SummarizeError, SummarizeResult};
use std::ops::Range;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextDocument {
    buffer: String,
    selection: Option<Range<usize>>,
}

impl TextDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            buffer: text.into(),
            selection: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Select a byte range
    pub fn select(&mut self, range: Range<usize>) -> SummarizeResult<()> {
        if range.start > range.end {
            return Err(SummarizeError::Document(format!(
                "Selection start {} is after end {}",
                range.start, range.end
            )));
        }
        self.check_boundary(range.start)?;
        self.check_boundary(range.end)?;
        self.selection = Some(range);
        Ok(())
    }

    /// Select by character offsets, end exclusive
    pub fn select_chars(&mut self, range: Range<usize>) -> SummarizeResult<()> {
        let start = self.char_to_byte(range.start)?;
        let end = self.char_to_byte(range.end)?;
        self.select(start..end)
    }

    /// Select whole lines, 1-based and inclusive, without the final line
    /// break (`\n` or `\r\n`)
    pub fn select_lines(&mut self, first: usize, last: usize) -> SummarizeResult<()> {
        if first == 0 || first > last {
            return Err(SummarizeError::Document(format!(
                "Invalid line range {}-{}",
                first, last
            )));
        }

        let mut line_starts = vec![0];
        line_starts.extend(self.buffer.match_indices('\n').map(|(i, _)| i + 1));
        let line_count = line_starts.len();
        if last > line_count {
            return Err(SummarizeError::Document(format!(
                "Line {} is past the end of the document ({} lines)",
                last, line_count
            )));
        }

        let start = line_starts[first - 1];
        let end = if last < line_count {
            let newline = line_starts[last] - 1;
            if newline > start && self.buffer.as_bytes()[newline - 1] == b'\r' {
                newline - 1
            } else {
                newline
            }
        } else {
            self.buffer.len()
        };
        self.select(start..end)
    }

    pub fn select_all(&mut self) {
        self.selection = Some(0..self.buffer.len());
    }

    fn char_to_byte(&self, offset: usize) -> SummarizeResult<usize> {
        if offset == self.buffer.chars().count() {
            return Ok(self.buffer.len());
        }
        self.buffer
            .char_indices()
            .nth(offset)
            .map(|(i, _)| i)
            .ok_or_else(|| {
                SummarizeError::Document(format!(
                    "Character offset {} is past the end of the document",
                    offset
                ))
            })
    }

    fn check_boundary(&self, pos: usize) -> SummarizeResult<()> {
        if pos > self.buffer.len() {
            return Err(SummarizeError::Document(format!(
                "Position {} is past the end of the document ({} bytes)",
                pos,
                self.buffer.len()
            )));
        }
        if !self.buffer.is_char_boundary(pos) {
            return Err(SummarizeError::Document(format!(
                "Position {} is not on a character boundary",
                pos
            )));
        }
        Ok(())
    }

    /// Keep the selection pointing at the same text after an edit at `pos`
    fn shift_selection(&mut self, pos: usize, removed: usize, inserted: usize) {
        if let Some(range) = self.selection.as_mut() {
            if pos + removed <= range.start {
                range.start = range.start - removed + inserted;
                range.end = range.end - removed + inserted;
            }
        }
    }
}

impl HostDocument for TextDocument {
    fn selection(&self) -> Option<Selection> {
        let range = self.selection.clone()?;
        let text = self.buffer.get(range.clone())?.to_string();
        Some(Selection { range, text })
    }

    fn insert_at(&mut self, pos: usize, text: &str) -> SummarizeResult<Span> {
        self.check_boundary(pos)?;
        self.buffer.insert_str(pos, text);
        if self.selection.as_ref().is_some_and(|r| pos < r.start) {
            self.shift_selection(pos, 0, text.len());
        }
        debug!("Inserted {} bytes at {}", text.len(), pos);
        Ok(Span::new(pos, pos + text.len()))
    }

    fn replace_range(&mut self, span: Span, text: &str) -> SummarizeResult<Span> {
        if span.start > span.end {
            return Err(SummarizeError::Document(format!(
                "Span start {} is after end {}",
                span.start, span.end
            )));
        }
        self.check_boundary(span.start)?;
        self.check_boundary(span.end)?;
        self.buffer.replace_range(span.range(), text);
        self.shift_selection(span.start, span.len(), text.len());
        debug!("Replaced {}..{} with {} bytes", span.start, span.end, text.len());
        Ok(Span::new(span.start, span.start + text.len()))
    }

    fn append(&mut self, text: &str) -> SummarizeResult<Span> {
        let end = self.buffer.len();
        self.insert_at(end, text)
    }
}
