#![forbid(unsafe_code)]

//! Per-kind highlight markers.

use crate::color::Rgba;
use crate::token::TokenKind;

/// Maps each [`TokenKind`] to the marker attached for it.
///
/// # Example
/// ```
/// use spanmark::{HighlightPalette, Rgba, TokenKind};
///
/// let palette = HighlightPalette::uniform(Rgba::WHITE).url(Rgba::rgb(0, 0, 255));
/// assert_eq!(*palette.marker_for(TokenKind::Hashtag), Rgba::WHITE);
/// assert_eq!(*palette.marker_for(TokenKind::Url), Rgba::rgb(0, 0, 255));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighlightPalette<M = Rgba> {
    pub mention: M,
    pub hashtag: M,
    pub url: M,
}

impl<M: Clone> HighlightPalette<M> {
    /// The same marker for every kind.
    #[must_use]
    pub fn uniform(marker: M) -> Self {
        Self {
            mention: marker.clone(),
            hashtag: marker.clone(),
            url: marker,
        }
    }
}

impl<M> HighlightPalette<M> {
    #[must_use]
    pub fn marker_for(&self, kind: TokenKind) -> &M {
        match kind {
            TokenKind::Mention => &self.mention,
            TokenKind::Hashtag => &self.hashtag,
            TokenKind::Url => &self.url,
        }
    }

    #[must_use]
    pub fn mention(mut self, marker: M) -> Self {
        self.mention = marker;
        self
    }

    #[must_use]
    pub fn hashtag(mut self, marker: M) -> Self {
        self.hashtag = marker;
        self
    }

    #[must_use]
    pub fn url(mut self, marker: M) -> Self {
        self.url = marker;
        self
    }

    /// Transform every marker.
    pub fn map<N>(self, mut f: impl FnMut(M) -> N) -> HighlightPalette<N> {
        HighlightPalette {
            mention: f(self.mention),
            hashtag: f(self.hashtag),
            url: f(self.url),
        }
    }
}
