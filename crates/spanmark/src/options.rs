#![forbid(unsafe_code)]

//! Scanner configuration.

use crate::token::{KindSet, TokenKind};

/// Options controlling which token kinds the scanner looks for.
///
/// # Example
/// ```
/// use spanmark::{ScanOptions, TokenKind};
///
/// let opts = ScanOptions::new().without(TokenKind::Url);
/// assert!(opts.enabled(TokenKind::Mention));
/// assert!(!opts.enabled(TokenKind::Url));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScanOptions {
    /// Kinds to recognize. Prefix characters of disabled kinds are plain text.
    pub kinds: KindSet,
}

impl ScanOptions {
    /// All kinds enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the enabled kinds.
    #[must_use]
    pub fn with_kinds(mut self, kinds: impl Into<KindSet>) -> Self {
        self.kinds = kinds.into();
        self
    }

    /// Enable one more kind.
    #[must_use]
    pub fn with(mut self, kind: TokenKind) -> Self {
        self.kinds.insert(kind.as_set());
        self
    }

    /// Disable a kind.
    #[must_use]
    pub fn without(mut self, kind: TokenKind) -> Self {
        self.kinds.remove(kind.as_set());
        self
    }

    #[inline]
    #[must_use]
    pub fn enabled(&self, kind: TokenKind) -> bool {
        self.kinds.has(kind)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn roundtrip_json() {
        let opts = ScanOptions::new().without(TokenKind::Mention);
        let json = serde_json::to_string(&opts).expect("serialize");
        let back: ScanOptions = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, opts);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let opts: ScanOptions = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(opts, ScanOptions::default());
    }

    #[test]
    fn kinds_parse_from_flag_names() {
        let opts: ScanOptions =
            serde_json::from_str(r#"{"kinds":"HASHTAG | URL"}"#).expect("deserialize");
        assert_eq!(opts.kinds, KindSet::HASHTAG | KindSet::URL);
    }
}
