#![forbid(unsafe_code)]

//! Applying spans to a mutable text container.
//!
//! Scanning and applying are separate steps: [`Scanner`] produces a
//! [`SpanSet`] from plain text, and [`apply`] attaches a marker for each span
//! to a [`HighlightSink`]. [`highlight`] does both against the sink's own text.
//!
//! A sink only ever gains markers here. Existing markers are neither read nor
//! removed; clearing stale highlights before re-highlighting is up to the owner
//! of the sink.

use crate::palette::HighlightPalette;
use crate::scanner::Scanner;
use crate::span::{Span, SpanSet};
use crate::token::TokenKind;

/// A text container that accepts highlight markers over character ranges.
pub trait HighlightSink<M> {
    /// The current text. Read once, before any attachment is made.
    fn text(&self) -> &str;

    /// Length of [`text`](Self::text) in characters.
    fn len(&self) -> usize {
        self.text().chars().count()
    }

    fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    /// Attach `marker` over the character range `[start, end)`.
    ///
    /// Callers guarantee `start < end <= self.len()`. Attachments over
    /// disjoint ranges must all be retained.
    fn attach(&mut self, marker: M, start: usize, end: usize);
}

impl<M, S: HighlightSink<M> + ?Sized> HighlightSink<M> for &mut S {
    fn text(&self) -> &str {
        (**self).text()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn attach(&mut self, marker: M, start: usize, end: usize) {
        (**self).attach(marker, start, end);
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A span could not be attached because it does not fit the sink.
///
/// This means the spans were computed from different text than the sink now
/// holds. It is never clamped or skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachError {
    /// The span ends past the end of the sink's text.
    OutOfBounds { span: Span, len: usize },
    /// The span covers no characters.
    EmptyRange { span: Span },
}

impl std::fmt::Display for AttachError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds { span, len } => write!(
                f,
                "{} span {}..{} is outside text of length {}",
                span.kind, span.start, span.end, len
            ),
            Self::EmptyRange { span } => write!(
                f,
                "{} span {}..{} is empty",
                span.kind, span.start, span.end
            ),
        }
    }
}

impl std::error::Error for AttachError {}

fn check_fits(span: &Span, len: usize) -> Result<(), AttachError> {
    if span.is_empty() {
        return Err(AttachError::EmptyRange { span: *span });
    }
    if span.end > len {
        return Err(AttachError::OutOfBounds { span: *span, len });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Apply
// ---------------------------------------------------------------------------

fn apply_each<M, S>(
    sink: &mut S,
    spans: &SpanSet,
    mut marker_for: impl FnMut(TokenKind) -> M,
) -> Result<usize, AttachError>
where
    S: HighlightSink<M> + ?Sized,
{
    let len = sink.len();
    let mut attached = 0;
    for span in spans {
        if let Err(err) = check_fits(span, len) {
            tracing::warn!(error = %err, attached, "span rejected by sink");
            return Err(err);
        }
        sink.attach(marker_for(span.kind), span.start, span.end);
        attached += 1;
    }
    tracing::debug!(attached, "highlight markers attached");
    Ok(attached)
}

/// Attach `marker` to `sink` for every span, in order.
///
/// Stops at the first span that does not fit the sink; attachments made
/// before it stay in place. Returns the number of markers attached.
pub fn apply<M, S>(sink: &mut S, spans: &SpanSet, marker: M) -> Result<usize, AttachError>
where
    M: Clone,
    S: HighlightSink<M> + ?Sized,
{
    apply_each(sink, spans, |_| marker.clone())
}

/// Like [`apply`], with the marker chosen per token kind.
pub fn apply_with<M, S>(
    sink: &mut S,
    spans: &SpanSet,
    palette: &HighlightPalette<M>,
) -> Result<usize, AttachError>
where
    M: Clone,
    S: HighlightSink<M> + ?Sized,
{
    apply_each(sink, spans, |kind| palette.marker_for(kind).clone())
}

/// Scan the sink's text with every kind enabled and attach `marker` to each
/// span found.
///
/// # Example
/// ```
/// use spanmark::{AttributedText, Rgba, highlight};
///
/// let mut text = AttributedText::new("hello @world #rust");
/// let spans = highlight(&mut text, Rgba::from_argb(0xffffff)).unwrap();
/// assert_eq!(spans.len(), 2);
/// assert_eq!(text.attachments().len(), 2);
/// ```
pub fn highlight<M, S>(sink: &mut S, marker: M) -> Result<SpanSet, AttachError>
where
    M: Clone,
    S: HighlightSink<M> + ?Sized,
{
    let spans = Scanner::new().scan_str(sink.text());
    apply(sink, &spans, marker)?;
    Ok(spans)
}

/// Scan the sink's text with `scanner` and attach per-kind markers.
pub fn highlight_with<M, S>(
    sink: &mut S,
    scanner: &Scanner,
    palette: &HighlightPalette<M>,
) -> Result<SpanSet, AttachError>
where
    M: Clone,
    S: HighlightSink<M> + ?Sized,
{
    let spans = scanner.scan_str(sink.text());
    apply_with(sink, &spans, palette)?;
    Ok(spans)
}
