//! Host Document Module
//!
//! The narrow capability set the summarizer needs from an editor. Any host
//! exposing an equivalent capability set can drive the procedure.

use crate::error::SummarizeResult;
use std::ops::Range;

pub mod file;
pub mod text;

pub use file::FileDocument;
pub use text::TextDocument;

/// Mutable anchor over inserted text, as byte offsets into the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// The user's selection: where it is and what it contains
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Byte range in the document
    pub range: Range<usize>,
    /// Raw selected text, untrimmed
    pub text: String,
}

impl Selection {
    /// Position right after the selected text
    pub fn end(&self) -> usize {
        self.range.end
    }

    /// Selected text with surrounding whitespace removed
    pub fn input_text(&self) -> &str {
        self.text.trim()
    }

    /// Blank selections are treated like no selection at all.
    pub fn is_blank(&self) -> bool {
        self.input_text().is_empty()
    }
}

/// Trait for editor hosts
pub trait HostDocument {
    /// Current selection, or `None` when no document is active or nothing
    /// is selected
    fn selection(&self) -> Option<Selection>;

    /// Insert text at a byte position and return the span it now occupies
    fn insert_at(&mut self, pos: usize, text: &str) -> SummarizeResult<Span>;

    /// Replace the text covered by `span` and return the new span
    fn replace_range(&mut self, span: Span, text: &str) -> SummarizeResult<Span>;

    /// Append text at the end of the document
    fn append(&mut self, text: &str) -> SummarizeResult<Span>;

    /// Give the host a chance to show pending edits before a blocking call
    fn flush(&mut self) -> SummarizeResult<()> {
        Ok(())
    }
}
