//! Normalization of the raw scanner stream into comment tokens
//!
//! This is the classification table at the center of the formatter. It
//! consumes every raw token exactly once, in order, with one token of
//! lookback (`prev`), and produces the ordered [Token] sequence the renderer
//! walks.
//!
//! The table is a single exhaustive match with no wildcard arm. That is
//! deliberate: silently ignoring an unknown markup category would corrupt
//! formatting, so a raw kind outside the table is a fatal
//! [FormatError::UnclassifiedToken]. If the scanner vocabulary ever grows,
//! this match stops compiling until the new category gets an explicit branch.

use crate::error::FormatError;
use crate::scanner::{RawKind, RawToken};
use crate::tokens::Token;

/// Classify the raw scanner stream into normalized tokens.
///
/// Classification rules, given a raw token and the previously seen raw kind:
/// - `/**` and `*/` map to Begin and End.
/// - Leading-asterisk decoration is dropped (but still updates `prev`).
/// - Free-form text is trimmed and split on space runs into words; a first
///   word that is exactly `-` opens a list item. Every word is followed by a
///   space request, which is how consecutive prose lines re-join.
/// - Tag names are trimmed and emitted as a single literal.
/// - Code/pre body text loses exactly one leading space (the separator after
///   the decoration asterisk); everything else is preserved verbatim.
/// - Links are emitted unmodified.
/// - Raw whitespace after a tag or link is a joining space; raw whitespace in
///   any other position is a paragraph break.
pub fn normalize(raw: &[RawToken]) -> Result<Vec<Token>, FormatError> {
    let mut tokens = Vec::new();
    let mut prev: Option<RawKind> = None;

    for token in raw {
        match token.kind {
            RawKind::BeginComment => tokens.push(Token::Begin),
            RawKind::EndComment => tokens.push(Token::End),
            RawKind::LeadingAsterisk => {}
            RawKind::Text => {
                let trimmed = token.text.trim();
                for (index, word) in trimmed.split_whitespace().enumerate() {
                    if index == 0 && word == "-" {
                        tokens.push(Token::ListItemOpen);
                    }
                    tokens.push(Token::Literal(word.to_string()));
                    tokens.push(Token::Whitespace);
                }
            }
            RawKind::Tag => tokens.push(Token::Literal(token.text.trim().to_string())),
            RawKind::CodeText => {
                // Exactly one leading space is the separator after the
                // decoration asterisk; any further whitespace is content.
                let text = token.text.strip_prefix(' ').unwrap_or(&token.text);
                tokens.push(Token::Literal(text.to_string()));
            }
            RawKind::Link | RawKind::ReferenceLink => {
                tokens.push(Token::Literal(token.text.clone()));
            }
            RawKind::Whitespace => {
                if matches!(
                    prev,
                    Some(RawKind::Tag | RawKind::Link | RawKind::ReferenceLink)
                ) {
                    tokens.push(Token::Whitespace);
                } else {
                    tokens.push(Token::BlankLine);
                }
            }
            RawKind::CodeOpen => tokens.push(Token::CodeOpen(token.text.clone())),
            RawKind::CodeClose => tokens.push(Token::CodeClose(token.text.clone())),
            RawKind::PreOpen => tokens.push(Token::PreOpen(token.text.clone())),
            RawKind::PreClose => tokens.push(Token::PreClose(token.text.clone())),
            RawKind::TableOpen => tokens.push(Token::TableOpen),
            RawKind::TableClose => tokens.push(Token::TableClose),
            RawKind::Unknown => {
                return Err(FormatError::UnclassifiedToken(format!(
                    "{:?} {:?}",
                    token.kind, token.text
                )));
            }
        }
        prev = Some(token.kind);
    }

    Ok(tokens)
}
