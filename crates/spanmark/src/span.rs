#![forbid(unsafe_code)]

//! Span values and ordered, disjoint span sets.

use std::ops::Range;

use crate::source::SourceText;
use crate::token::TokenKind;

// ---------------------------------------------------------------------------
// Span
// ---------------------------------------------------------------------------

/// A half-open character range `[start, end)` tagged with a token kind.
///
/// Scanner-produced spans satisfy `start < end <= len(source)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a span. Panics in debug builds if the range is inverted.
    #[must_use]
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span range must be ordered");
        Self { kind, start, end }
    }

    /// Length in characters.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    #[inline]
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Whether the two spans share at least one character.
    #[inline]
    #[must_use]
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Extract the span's text from its source.
    #[must_use]
    pub fn text<'a>(&self, source: &SourceText<'a>) -> Option<&'a str> {
        source.slice(self.range())
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Why a list of spans cannot form a [`SpanSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanSetError {
    /// A span has `start >= end`.
    Empty { index: usize, span: Span },
    /// A span starts before its predecessor.
    OutOfOrder { index: usize },
    /// A span starts inside its predecessor.
    Overlap { index: usize },
}

impl std::fmt::Display for SpanSetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty { index, span } => write!(
                f,
                "span {} ({} {}..{}) is empty",
                index, span.kind, span.start, span.end
            ),
            Self::OutOfOrder { index } => {
                write!(f, "span {} starts before the previous span", index)
            }
            Self::Overlap { index } => write!(f, "span {} overlaps the previous span", index),
        }
    }
}

impl std::error::Error for SpanSetError {}

fn check_spans(spans: &[Span]) -> Result<(), SpanSetError> {
    let mut prev: Option<&Span> = None;
    for (index, span) in spans.iter().enumerate() {
        if span.is_empty() {
            return Err(SpanSetError::Empty { index, span: *span });
        }
        if let Some(prev) = prev {
            if span.start < prev.start {
                return Err(SpanSetError::OutOfOrder { index });
            }
            if span.start < prev.end {
                return Err(SpanSetError::Overlap { index });
            }
        }
        prev = Some(span);
    }
    Ok(())
}

/// Validate that spans are non-empty, in bounds, ordered and non-overlapping.
#[must_use]
pub fn validate_spans(len: usize, spans: &[Span]) -> bool {
    check_spans(spans).is_ok() && spans.last().is_none_or(|s| s.end <= len)
}

// ---------------------------------------------------------------------------
// SpanSet
// ---------------------------------------------------------------------------

/// Spans in ascending `start` order with no two overlapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SpanSet {
    spans: Vec<Span>,
}

impl SpanSet {
    /// Build a set from spans that are already ordered and disjoint.
    pub fn new(spans: Vec<Span>) -> Result<Self, SpanSetError> {
        check_spans(&spans)?;
        Ok(Self { spans })
    }

    /// Build a set the scanner has produced. Invariants are only checked in
    /// debug builds.
    pub(crate) fn from_ordered(spans: Vec<Span>) -> Self {
        debug_assert!(check_spans(&spans).is_ok());
        Self { spans }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Span] {
        &self.spans
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Span> {
        self.spans.iter()
    }

    /// Spans of a single kind, in order.
    pub fn of_kind(&self, kind: TokenKind) -> impl Iterator<Item = &Span> {
        self.spans.iter().filter(move |s| s.kind == kind)
    }

    /// The span covering character offset `index`, if any.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Span> {
        let pos = self.spans.partition_point(|s| s.end <= index);
        self.spans.get(pos).filter(|s| s.start <= index)
    }

    /// Number of characters covered by spans.
    #[must_use]
    pub fn covered(&self) -> usize {
        self.spans.iter().map(Span::len).sum()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Span> {
        self.spans
    }
}

impl<'a> IntoIterator for &'a SpanSet {
    type Item = &'a Span;
    type IntoIter = std::slice::Iter<'a, Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

impl IntoIterator for SpanSet {
    type Item = Span;
    type IntoIter = std::vec::IntoIter<Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.into_iter()
    }
}

impl TryFrom<Vec<Span>> for SpanSet {
    type Error = SpanSetError;

    fn try_from(spans: Vec<Span>) -> Result<Self, Self::Error> {
        Self::new(spans)
    }
}
