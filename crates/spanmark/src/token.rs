#![forbid(unsafe_code)]

//! Token kinds recognized by the scanner.

use bitflags::bitflags;

// ---------------------------------------------------------------------------
// Token kinds
// ---------------------------------------------------------------------------

/// Category of a highlightable token.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TokenKind {
    /// `@` followed by word characters.
    Mention,
    /// `#` followed by word characters.
    Hashtag,
    /// `http://` or `https://` followed by non-whitespace.
    Url,
}

impl TokenKind {
    /// All kinds, in scan-attempt order.
    pub const ALL: [TokenKind; 3] = [TokenKind::Mention, TokenKind::Hashtag, TokenKind::Url];

    /// The single-kind set for this kind.
    #[must_use]
    pub const fn as_set(self) -> KindSet {
        match self {
            Self::Mention => KindSet::MENTION,
            Self::Hashtag => KindSet::HASHTAG,
            Self::Url => KindSet::URL,
        }
    }

    /// Whether this token links to something outside the text (a URL).
    #[must_use]
    pub const fn is_external(self) -> bool {
        matches!(self, Self::Url)
    }

    /// Short lowercase name, used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mention => "mention",
            Self::Hashtag => "hashtag",
            Self::Url => "url",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Kind sets
// ---------------------------------------------------------------------------

bitflags! {
    /// A set of [`TokenKind`]s.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct KindSet: u8 {
        const MENTION = 1 << 0;
        const HASHTAG = 1 << 1;
        const URL = 1 << 2;
    }
}

impl Default for KindSet {
    fn default() -> Self {
        Self::all()
    }
}

impl KindSet {
    /// Whether `kind` is a member of the set.
    #[must_use]
    pub const fn has(self, kind: TokenKind) -> bool {
        self.contains(kind.as_set())
    }

    /// Iterate the member kinds in scan-attempt order.
    pub fn kinds(self) -> impl Iterator<Item = TokenKind> {
        TokenKind::ALL.into_iter().filter(move |k| self.has(*k))
    }
}

impl From<TokenKind> for KindSet {
    fn from(kind: TokenKind) -> Self {
        kind.as_set()
    }
}

impl FromIterator<TokenKind> for KindSet {
    fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(KindSet::empty(), |acc, kind| acc | kind.as_set())
    }
}
