#![forbid(unsafe_code)]

//! An in-memory [`HighlightSink`]: a string plus the markers attached to it.

use std::ops::Range;

use crate::sink::HighlightSink;
use crate::source::SourceText;

/// A marker attached over a character range.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attachment<M> {
    pub marker: M,
    pub start: usize,
    pub end: usize,
}

impl<M> Attachment<M> {
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// A contiguous piece of text with at most one marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run<'a, M> {
    pub text: &'a str,
    /// Character range of the run.
    pub range: Range<usize>,
    pub marker: Option<&'a M>,
}

/// Owned text with highlight markers.
///
/// Every attachment is kept in the order it was made. Attachments from
/// separate highlight passes may overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributedText<M> {
    text: String,
    char_len: usize,
    attachments: Vec<Attachment<M>>,
}

impl<M> AttributedText<M> {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let char_len = text.chars().count();
        Self {
            text,
            char_len,
            attachments: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn attachments(&self) -> &[Attachment<M>] {
        &self.attachments
    }

    /// Drop every attachment, keeping the text.
    pub fn clear_attachments(&mut self) {
        self.attachments.clear();
    }

    /// Markers covering character offset `index`, in attachment order.
    pub fn markers_at(&self, index: usize) -> impl Iterator<Item = &M> {
        self.attachments
            .iter()
            .filter(move |a| a.start <= index && index < a.end)
            .map(|a| &a.marker)
    }

    /// Split the text into runs for rendering.
    ///
    /// Unmarked gaps become runs with no marker. Where attachments overlap,
    /// the one starting first wins and the later one is clipped.
    #[must_use]
    pub fn runs(&self) -> Vec<Run<'_, M>> {
        let source = SourceText::new(&self.text);
        let mut order: Vec<&Attachment<M>> = self.attachments.iter().collect();
        order.sort_by_key(|a| a.start);

        let mut runs = Vec::with_capacity(order.len() * 2 + 1);
        let mut last_end = 0;
        for attachment in order {
            let start = attachment.start.max(last_end);
            let end = attachment.end.min(self.char_len);
            if start >= end {
                continue;
            }
            if start > last_end
                && let Some(gap) = source.slice(last_end..start)
            {
                runs.push(Run {
                    text: gap,
                    range: last_end..start,
                    marker: None,
                });
            }
            if let Some(text) = source.slice(start..end) {
                runs.push(Run {
                    text,
                    range: start..end,
                    marker: Some(&attachment.marker),
                });
            }
            last_end = end;
        }

        if last_end < self.char_len
            && let Some(tail) = source.slice(last_end..self.char_len)
        {
            runs.push(Run {
                text: tail,
                range: last_end..self.char_len,
                marker: None,
            });
        }

        runs
    }
}

impl<M> HighlightSink<M> for AttributedText<M> {
    fn text(&self) -> &str {
        &self.text
    }

    fn len(&self) -> usize {
        self.char_len
    }

    fn attach(&mut self, marker: M, start: usize, end: usize) {
        debug_assert!(start < end && end <= self.char_len, "attachment out of range");
        self.attachments.push(Attachment { marker, start, end });
    }
}

impl<M> From<&str> for AttributedText<M> {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl<M> From<String> for AttributedText<M> {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
