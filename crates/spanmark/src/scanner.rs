#![forbid(unsafe_code)]

//! The span scanner.
//!
//! Scanning is a single left-to-right pass. At each position the scanner
//! checks for a token prefix (`@`, `#`, `http://`, `https://`), applies the
//! boundary rule against the preceding character, then greedily consumes body
//! characters. A prefix with no body is discarded and the scan moves on by one
//! position, not by the prefix length. That is what makes `##tag` match from
//! the second `#`.
//!
//! After a match the scan resumes at its end, so characters inside an accepted
//! span never start another one (a URL's `@` and `#` stay part of the URL).
//!
//! # Example
//! ```
//! use spanmark::{Scanner, TokenKind};
//!
//! let spans = Scanner::new().scan_str("hi @alice, see #rust at https://rust-lang.org");
//! let kinds: Vec<_> = spans.iter().map(|s| s.kind).collect();
//! assert_eq!(kinds, [TokenKind::Mention, TokenKind::Hashtag, TokenKind::Url]);
//! assert_eq!(spans.as_slice()[0].range(), 3..9);
//! ```

use crate::classify::{accepts_boundary, is_body_char, is_url_body_char};
use crate::options::ScanOptions;
use crate::source::SourceText;
use crate::span::{Span, SpanSet};
use crate::token::TokenKind;

const HTTP_PREFIX: [char; 7] = ['h', 't', 't', 'p', ':', '/', '/'];
const HTTPS_PREFIX: [char; 8] = ['h', 't', 't', 'p', 's', ':', '/', '/'];

/// Scans text for mentions, hashtags and URLs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    /// A scanner recognizing every token kind.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: ScanOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scan a string.
    #[must_use]
    pub fn scan_str(&self, text: &str) -> SpanSet {
        self.scan(&SourceText::new(text))
    }

    /// Scan character-indexed text, collecting every span.
    #[must_use]
    pub fn scan(&self, source: &SourceText<'_>) -> SpanSet {
        let _span = tracing::debug_span!("span_scan", chars = source.len()).entered();

        let spans: Vec<Span> = self.spans(source.chars()).collect();
        tracing::debug!(found = spans.len(), "scan finished");
        SpanSet::from_ordered(spans)
    }

    /// Lazily iterate the spans in `chars`, left to right.
    pub fn spans<'s>(&self, chars: &'s [char]) -> Spans<'s> {
        Spans {
            scanner: *self,
            chars,
            pos: 0,
        }
    }

    /// Try to match a token starting exactly at `pos`.
    fn match_at(&self, chars: &[char], pos: usize) -> Option<Span> {
        let (kind, prefix_len) = self.prefix_at(chars, pos)?;

        let prev = pos.checked_sub(1).and_then(|p| chars.get(p).copied());
        if !accepts_boundary(kind, prev) {
            return None;
        }

        let body_start = pos + prefix_len;
        let body = chars.get(body_start..)?;
        let body_len = match kind {
            TokenKind::Mention | TokenKind::Hashtag => {
                body.iter().take_while(|c| is_body_char(**c)).count()
            }
            TokenKind::Url => body.iter().take_while(|c| is_url_body_char(**c)).count(),
        };
        if body_len == 0 {
            return None;
        }

        Some(Span::new(kind, pos, body_start + body_len))
    }

    /// Which enabled kind's prefix starts at `pos`, and how long the prefix is.
    fn prefix_at(&self, chars: &[char], pos: usize) -> Option<(TokenKind, usize)> {
        let rest = chars.get(pos..)?;
        let (kind, len) = match *rest.first()? {
            '@' => (TokenKind::Mention, 1),
            '#' => (TokenKind::Hashtag, 1),
            'h' if rest.starts_with(&HTTPS_PREFIX) => (TokenKind::Url, HTTPS_PREFIX.len()),
            'h' if rest.starts_with(&HTTP_PREFIX) => (TokenKind::Url, HTTP_PREFIX.len()),
            _ => return None,
        };
        self.options.enabled(kind).then_some((kind, len))
    }
}

/// Iterator over spans, produced by [`Scanner::spans`].
#[derive(Debug, Clone)]
pub struct Spans<'s> {
    scanner: Scanner,
    chars: &'s [char],
    pos: usize,
}

impl Iterator for Spans<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        while self.pos < self.chars.len() {
            match self.scanner.match_at(self.chars, self.pos) {
                Some(span) => {
                    tracing::trace!(
                        kind = span.kind.name(),
                        start = span.start,
                        end = span.end,
                        "span accepted"
                    );
                    self.pos = span.end;
                    return Some(span);
                }
                None => self.pos += 1,
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Spans<'_> {}

/// Scan `text` with every token kind enabled.
#[must_use]
pub fn scan(text: &str) -> SpanSet {
    Scanner::new().scan_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::KindSet;

    fn ranges(text: &str) -> Vec<(TokenKind, usize, usize)> {
        scan(text)
            .iter()
            .map(|s| (s.kind, s.start, s.end))
            .collect()
    }

    // ==========================================================
    // Single tokens
    // ==========================================================

    #[test]
    fn empty_text_has_no_spans() {
        assert!(scan("").is_empty());
    }

    #[test]
    fn plain_text_has_no_spans() {
        assert!(scan("nothing to see here").is_empty());
    }

    #[test]
    fn mention_at_start() {
        assert_eq!(ranges("@mention"), vec![(TokenKind::Mention, 0, 8)]);
    }

    #[test]
    fn mention_stops_at_punctuation() {
        assert_eq!(ranges("@bob!"), vec![(TokenKind::Mention, 0, 4)]);
    }

    #[test]
    fn hashtag_with_unicode_body() {
        assert_eq!(ranges("#tåg"), vec![(TokenKind::Hashtag, 0, 4)]);
    }

    #[test]
    fn url_consumes_query_and_fragment() {
        let url = "https://thr.ee/meh?foo=bar&wat=@at#hmm";
        assert_eq!(ranges(url), vec![(TokenKind::Url, 0, url.chars().count())]);
    }

    #[test]
    fn url_needs_a_body() {
        assert!(scan("http:// https://").is_empty());
    }

    #[test]
    fn scheme_is_case_sensitive() {
        assert!(scan("HTTPS://example.com").is_empty());
    }

    #[test]
    fn h_without_scheme_is_text() {
        assert!(scan("hello http:/nope").is_empty());
    }

    // ==========================================================
    // Boundary rule
    // ==========================================================

    #[test]
    fn embedded_in_word_is_rejected() {
        assert!(scan("aa#tagaa").is_empty());
        assert!(scan("aa@mentionaa").is_empty());
        assert!(scan("aahttps://x.y").is_empty());
    }

    #[test]
    fn after_space() {
        assert_eq!(ranges(" #test"), vec![(TokenKind::Hashtag, 1, 6)]);
    }

    #[test]
    fn double_and_triple_hash() {
        assert_eq!(ranges("##DoubleHash"), vec![(TokenKind::Hashtag, 1, 12)]);
        assert_eq!(ranges("###TripleHash"), vec![(TokenKind::Hashtag, 2, 13)]);
    }

    #[test]
    fn hashtag_after_bare_at() {
        assert_eq!(ranges("@#after_at"), vec![(TokenKind::Hashtag, 1, 10)]);
    }

    #[test]
    fn hashtag_after_hiragana() {
        assert_eq!(
            ranges("あいうえお#after_hiragana"),
            vec![(TokenKind::Hashtag, 5, 20)]
        );
    }

    #[test]
    fn tokens_after_punctuation_are_accepted() {
        assert_eq!(ranges("thanks.@bob"), vec![(TokenKind::Mention, 7, 11)]);
        assert_eq!(ranges("ping:@bob"), vec![(TokenKind::Mention, 5, 9)]);
        assert_eq!(ranges("(see)#tag"), vec![(TokenKind::Hashtag, 5, 9)]);
        assert_eq!(ranges("a/#tag"), vec![(TokenKind::Hashtag, 2, 6)]);
        assert_eq!(ranges("1+@bob"), vec![(TokenKind::Mention, 2, 6)]);
    }

    #[test]
    fn non_ascii_letter_does_not_glue_a_tag() {
        // The preceding-character test is ASCII-only, unlike the body class.
        assert_eq!(ranges("café#tag"), vec![(TokenKind::Hashtag, 4, 8)]);
    }

    #[test]
    fn hashtag_keeps_combining_accent() {
        assert_eq!(
            ranges("#cafe\u{301} time"),
            vec![(TokenKind::Hashtag, 0, 6)]
        );
    }

    #[test]
    fn mention_after_query_equals_is_rejected() {
        assert!(scan("example.com/?by=@me").is_empty());
    }

    #[test]
    fn mention_in_parens() {
        assert_eq!(ranges("(@bob)"), vec![(TokenKind::Mention, 1, 5)]);
    }

    // ==========================================================
    // Ordering and overlap
    // ==========================================================

    #[test]
    fn adjacent_urls_stay_separate() {
        let text = "http://first.thing https://second.thing";
        assert_eq!(
            ranges(text),
            vec![(TokenKind::Url, 0, 18), (TokenKind::Url, 19, 39)]
        );
    }

    #[test]
    fn mention_swallows_embedded_token() {
        assert_eq!(ranges("@aa#tagaa"), vec![(TokenKind::Mention, 0, 3)]);
        assert_eq!(ranges("@aa@mentionaa"), vec![(TokenKind::Mention, 0, 3)]);
    }

    #[test]
    fn mixed_text_yields_six_spans() {
        let text = "one #one two: @two three : https://thr.ee/meh?foo=bar&wat=@at#hmm four #four five @five ろく#six";
        let kinds: Vec<_> = scan(text).iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Hashtag,
                TokenKind::Mention,
                TokenKind::Url,
                TokenKind::Hashtag,
                TokenKind::Mention,
                TokenKind::Hashtag,
            ]
        );
    }

    #[test]
    fn scan_is_idempotent() {
        let text = "#a @b https://c.d #e";
        assert_eq!(scan(text), scan(text));
    }

    // ==========================================================
    // Options
    // ==========================================================

    #[test]
    fn disabled_kind_is_plain_text() {
        let scanner = Scanner::with_options(ScanOptions::new().without(TokenKind::Hashtag));
        let spans = scanner.scan_str("#tag @bob");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans.as_slice()[0].kind, TokenKind::Mention);
    }

    #[test]
    fn disabled_url_exposes_inner_tokens_to_boundary_rule() {
        let scanner = Scanner::with_options(ScanOptions::new().without(TokenKind::Url));
        // `#frag` follows a word character, `@at` follows `=`: neither counts.
        assert!(scanner.scan_str("https://x.y/?a=@at#frag").is_empty());
    }

    #[test]
    fn nothing_enabled_finds_nothing() {
        let scanner = Scanner::with_options(ScanOptions::new().with_kinds(KindSet::empty()));
        assert!(scanner.scan_str("@a #b http://c").is_empty());
    }

    #[test]
    fn iterator_is_lazy_and_fused() {
        let source = SourceText::new("@a #b");
        let scanner = Scanner::new();
        let mut spans = scanner.spans(source.chars());
        assert_eq!(spans.next().map(|s| s.kind), Some(TokenKind::Mention));
        assert_eq!(spans.next().map(|s| s.kind), Some(TokenKind::Hashtag));
        assert_eq!(spans.next(), None);
        assert_eq!(spans.next(), None);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::span::validate_spans;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn spans_are_valid(s in "[a-z@#:/ .hpts_=&?é]{0,80}") {
            let source = SourceText::new(&s);
            let spans = Scanner::new().scan(&source);
            prop_assert!(validate_spans(source.len(), spans.as_slice()));
        }

        #[test]
        fn spans_start_with_their_prefix(s in "\\PC{0,60}") {
            let source = SourceText::new(&s);
            for span in &Scanner::new().scan(&source) {
                let text = span.text(&source).unwrap_or_default();
                let ok = match span.kind {
                    TokenKind::Mention => text.starts_with('@'),
                    TokenKind::Hashtag => text.starts_with('#'),
                    TokenKind::Url => text.starts_with("http://") || text.starts_with("https://"),
                };
                prop_assert!(ok, "{:?} does not fit {:?}", text, span.kind);
            }
        }

        #[test]
        fn scanning_twice_is_identical(s in "\\PC{0,60}") {
            prop_assert_eq!(scan(&s), scan(&s));
        }

        #[test]
        fn word_before_token_suppresses_it(word in "[a-z0-9_]{1,5}", body in "[a-z]{1,8}") {
            let text = format!("{word}#{body}");
            prop_assert!(scan(&text).is_empty());
        }
    }
}
