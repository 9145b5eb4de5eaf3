#![forbid(unsafe_code)]

//! Character classes used by the scanner.
//!
//! Two different notions of "word character" are in play:
//!
//! - [`is_body_char`] decides what a mention or hashtag may contain. It is
//!   Unicode-aware, so `#tåg` and `#ろく` are whole tags.
//! - [`is_boundary_word_char`] decides whether the character *before* a
//!   candidate glues it to a preceding word. It is ASCII-only, so a tag written
//!   directly after Japanese text (`あいうえお#tag`) still counts as a tag.

use unicode_normalization::char::is_combining_mark;

use crate::token::TokenKind;

/// Whether `c` may appear in a mention or hashtag body.
///
/// Combining marks count, so a decomposed `#cafe\u{301}` keeps its accent.
#[inline]
#[must_use]
pub fn is_body_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric() || is_combining_mark(c)
}

/// Whether `c` may appear in a URL body.
#[inline]
#[must_use]
pub fn is_url_body_char(c: char) -> bool {
    !c.is_whitespace()
}

/// `[A-Za-z0-9_]`.
#[inline]
#[must_use]
pub const fn is_boundary_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Whether a token of `kind` may start right after `prev`.
///
/// `None` means the candidate is at the start of the text, which is always
/// a valid boundary. Mentions are also rejected after `=`, where they are a
/// query value inside a link (`?by=@me`) rather than a handle.
#[must_use]
pub fn accepts_boundary(kind: TokenKind, prev: Option<char>) -> bool {
    let Some(prev) = prev else {
        return true;
    };
    if is_boundary_word_char(prev) {
        return false;
    }
    match kind {
        TokenKind::Mention => prev != '=',
        TokenKind::Hashtag | TokenKind::Url => true,
    }
}
