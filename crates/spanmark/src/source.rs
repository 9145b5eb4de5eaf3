#![forbid(unsafe_code)]

//! Character-indexed view over a string.
//!
//! Span offsets count Unicode scalar values, not bytes. [`SourceText`] keeps
//! both views so a span can be turned back into a `&str` slice.

use std::ops::Range;

/// Immutable text indexed by character offset.
#[derive(Debug, Clone)]
pub struct SourceText<'a> {
    text: &'a str,
    chars: Vec<char>,
    /// Byte offset of each char, plus a trailing `text.len()`.
    byte_offsets: Vec<usize>,
}

impl<'a> SourceText<'a> {
    /// Index `text` by character.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut byte_offsets = Vec::with_capacity(text.len() + 1);
        for (byte, c) in text.char_indices() {
            chars.push(c);
            byte_offsets.push(byte);
        }
        byte_offsets.push(text.len());
        Self {
            text,
            chars,
            byte_offsets,
        }
    }

    /// The underlying string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// The text as a slice of scalar values.
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in scalar values.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Character at `index`, if in bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Byte offset of the character offset `index` (`index == len()` maps to
    /// the end of the string).
    #[must_use]
    pub fn byte_offset(&self, index: usize) -> Option<usize> {
        self.byte_offsets.get(index).copied()
    }

    /// Convert a character range to a byte range.
    #[must_use]
    pub fn byte_range(&self, range: Range<usize>) -> Option<Range<usize>> {
        if range.start > range.end {
            return None;
        }
        Some(self.byte_offset(range.start)?..self.byte_offset(range.end)?)
    }

    /// Slice by character range.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> Option<&'a str> {
        let bytes = self.byte_range(range)?;
        self.text.get(bytes)
    }
}
