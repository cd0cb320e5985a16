//! Base token definitions for the comment scanner
//!
//! This module defines the character-level tokens produced by the logos lexer.
//! The base vocabulary is deliberately small: delimiters, decoration asterisks,
//! newlines, space runs, the three inline link forms, and a catch-all word token.
//! Everything structural (continuation decoration, tag names, fenced regions,
//! tables) is recognized by the line-grouping pass on top of this stream, which
//! keeps the logos grammar free of any line-position or region state.

use logos::Logos;

/// Character-level tokens over comment source text.
///
/// `Word` excludes spaces, newlines, `*` and `[` so that the delimiter and link
/// tokens always win by longest match. A lone `[` that does not open a valid
/// link falls back to `OpenBracket` and is merged back into the surrounding
/// text by the grouping pass.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseToken {
    #[token("/**")]
    BeginComment,

    #[token("*/")]
    EndComment,

    #[token("*")]
    Asterisk,

    #[token("\n")]
    Newline,

    #[regex(r"[ \t\r]+")]
    Space,

    // Inline markdown link: [text](url)
    #[regex(r"\[[^\[\]\n]+\]\([^()\n]*\)", priority = 6)]
    InlineLink,

    // Reference-form markdown link: [text][ref]
    #[regex(r"\[[^\[\]\n]+\]\[[^\[\]\n]*\]", priority = 6)]
    ReferenceLink,

    // Bare markdown link: [text]
    #[regex(r"\[[^\[\]\n]+\]", priority = 5)]
    BareLink,

    #[token("[")]
    OpenBracket,

    #[regex(r"[^ \t\r\n*\[]+")]
    Word,
}

/// Tokenize comment source with location information.
///
/// Returns base tokens paired with their byte spans. The grouping pass uses the
/// spans to slice verbatim text (code, pre, table rows) straight out of the
/// source, so nothing is lost between tokens.
pub fn tokenize(source: &str) -> Vec<(BaseToken, logos::Span)> {
    let mut lexer = BaseToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<BaseToken> {
        tokenize(source).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(
            kinds("/** x */"),
            vec![
                BaseToken::BeginComment,
                BaseToken::Space,
                BaseToken::Word,
                BaseToken::Space,
                BaseToken::EndComment,
            ]
        );
    }

    #[test]
    fn test_end_marker_wins_over_asterisk() {
        assert_eq!(kinds("*/"), vec![BaseToken::EndComment]);
        assert_eq!(kinds("**/"), vec![BaseToken::Asterisk, BaseToken::EndComment]);
    }

    #[test]
    fn test_continuation_line() {
        assert_eq!(
            kinds(" * hello"),
            vec![
                BaseToken::Space,
                BaseToken::Asterisk,
                BaseToken::Space,
                BaseToken::Word,
            ]
        );
    }

    #[test]
    fn test_link_forms() {
        assert_eq!(kinds("[Foo]"), vec![BaseToken::BareLink]);
        assert_eq!(kinds("[Foo](http://x)"), vec![BaseToken::InlineLink]);
        assert_eq!(kinds("[Foo][bar]"), vec![BaseToken::ReferenceLink]);
    }

    #[test]
    fn test_unclosed_bracket_falls_back() {
        assert_eq!(
            kinds("a[b"),
            vec![BaseToken::Word, BaseToken::OpenBracket, BaseToken::Word]
        );
    }

    #[test]
    fn test_spans_cover_source() {
        let source = "/**\n * hi\n */";
        let tokens = tokenize(source);
        // Every byte of the source is covered by exactly one token
        let total: usize = tokens.iter().map(|(_, span)| span.len()).sum();
        assert_eq!(total, source.len());
    }
}
