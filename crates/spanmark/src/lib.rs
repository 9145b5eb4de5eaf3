#![forbid(unsafe_code)]

//! Mention, hashtag and URL highlighting for status text.
//!
//! This crate finds the parts of a plain-text post that a client renders as
//! links:
//! - [`TokenKind::Mention`] - `@name`
//! - [`TokenKind::Hashtag`] - `#tag`
//! - [`TokenKind::Url`] - `http://...` / `https://...`
//!
//! [`Scanner`] turns text into a [`SpanSet`] of disjoint, ordered character
//! ranges. [`apply`] and [`highlight`] attach a marker (usually an [`Rgba`]
//! colour) for each span to any [`HighlightSink`], such as [`AttributedText`].
//!
//! # Example
//! ```
//! use spanmark::{AttributedText, Rgba, highlight, scan};
//!
//! let spans = scan("##DoubleHash");
//! assert_eq!(spans.as_slice()[0].range(), 1..12);
//!
//! let mut text = AttributedText::new("ping @alice about #rust");
//! highlight(&mut text, Rgba::from_argb(0xffffff)).unwrap();
//! let marked: Vec<&str> = text
//!     .runs()
//!     .into_iter()
//!     .filter(|run| run.marker.is_some())
//!     .map(|run| run.text)
//!     .collect();
//! assert_eq!(marked, ["@alice", "#rust"]);
//! ```

pub mod attributed;
pub mod classify;
pub mod color;
pub mod options;
pub mod palette;
pub mod scanner;
pub mod sink;
pub mod source;
pub mod span;
pub mod token;

pub use attributed::{Attachment, AttributedText, Run};
pub use color::Rgba;
pub use options::ScanOptions;
pub use palette::HighlightPalette;
pub use scanner::{Scanner, Spans, scan};
pub use sink::{AttachError, HighlightSink, apply, apply_with, highlight, highlight_with};
pub use source::SourceText;
pub use span::{Span, SpanSet, SpanSetError, validate_spans};
pub use token::{KindSet, TokenKind};
