//! Lexical scanner for block documentation comments
//!
//! This module orchestrates the two-stage scanning pipeline that turns comment
//! source text into the raw token vocabulary consumed by the normalizer:
//!
//! 1. Base tokenization using the logos lexer ([tokens::tokenize]): small
//!    character-level tokens with byte spans, no state.
//! 2. Line grouping ([scan]): walks the base stream one physical line at a
//!    time, strips continuation decoration, tracks the fenced-region state
//!    (code, pre, table), and produces [RawToken]s.
//!
//! Splitting the work this way keeps the logos grammar entirely positional
//! state free. Anything that depends on "where in the line are we" or "which
//! region are we inside" lives in the grouping pass, where byte spans let us
//! slice verbatim region text straight out of the source.
//!
//! Whitespace tokens are deliberately sparse. The grouping pass emits a raw
//! `Whitespace` token in exactly three situations:
//! - a blank continuation line outside a fenced region (a paragraph or
//!   structural break),
//! - a space run immediately following a tag name or link,
//! - a line break ending a line whose last content token is a tag name or link.
//!
//! A blank line inside a fenced code, pre, or table region is verbatim content
//! rather than a break, and comes out as an empty `CodeText` token.
//!
//! An ordinary line break between prose lines emits nothing: prose re-joining
//! falls out of the normalizer's per-word space requests, so the classification
//! table never has to guess whether a newline separates or joins.

pub mod tokens;

use tokens::BaseToken;

/// The raw scanner vocabulary.
///
/// This is the fixed classification domain of the normalizer. Every variant
/// the scanner can emit has exactly one branch in the classification table;
/// `Unknown` models a token category outside the table (vocabulary drift in a
/// replacement scanner) and is rejected fatally there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawKind {
    /// The `/**` opening delimiter.
    BeginComment,
    /// The `*/` closing delimiter.
    EndComment,
    /// Leading-asterisk decoration on a continuation line.
    LeadingAsterisk,
    /// A free-form prose run (may span several words, carries raw spacing).
    Text,
    /// A tag directive name at the start of a content line, e.g. `@param`.
    Tag,
    /// An inline markdown link, `[text]` or `[text](url)`.
    Link,
    /// A reference-form markdown link, `[text][ref]`.
    ReferenceLink,
    /// One verbatim line of a fenced code/pre region or a table row.
    CodeText,
    /// A code fence line opening a fenced region, e.g. `` ``` `` or `` ```rust ``.
    CodeOpen,
    /// The code fence line closing a fenced region.
    CodeClose,
    /// A `<pre>` marker line.
    PreOpen,
    /// A `</pre>` marker line.
    PreClose,
    /// Synthesized at the first row of a table; carries no text.
    TableOpen,
    /// Synthesized after the last row of a table; carries no text.
    TableClose,
    /// A structural whitespace event (see module docs for when these appear).
    Whitespace,
    /// A category outside the known vocabulary. Never produced by this
    /// scanner; exists so the normalizer's fail-fast contract is testable.
    Unknown,
}

/// A raw scanner token: a type tag plus its associated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub kind: RawKind,
    pub text: String,
}

impl RawToken {
    pub fn new(kind: RawKind, text: impl Into<String>) -> Self {
        RawToken {
            kind,
            text: text.into(),
        }
    }
}

/// Fenced-region state carried across lines by the grouping pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Prose,
    Code,
    Pre,
    Table,
}

/// Scan comment source text into the raw token stream.
///
/// The input is expected to start with `/**` and end with `*/`; scanning stops
/// at the closing delimiter and ignores anything after it.
pub fn scan(source: &str) -> Vec<RawToken> {
    let base = tokens::tokenize(source);
    let mut grouper = Grouper {
        source,
        raw: Vec::new(),
        region: Region::Prose,
        closed: false,
    };

    let mut pos = 0;
    while pos < base.len() && !grouper.closed {
        let line_start = pos;
        while pos < base.len() && base[pos].0 != BaseToken::Newline {
            pos += 1;
        }
        let line_end = if pos < base.len() {
            base[pos].1.start
        } else {
            source.len()
        };
        grouper.process_line(&base[line_start..pos], line_end);
        pos += 1;
    }

    grouper.raw
}

struct Grouper<'a> {
    source: &'a str,
    raw: Vec<RawToken>,
    region: Region,
    closed: bool,
}

fn is_tag(word: &str) -> bool {
    word.len() > 1 && word.starts_with('@')
}

/// Byte offset of the close delimiter on this line, if any.
fn close_in_line(line: &[(BaseToken, logos::Span)], from: usize) -> Option<usize> {
    line[from..]
        .iter()
        .find(|(token, _)| *token == BaseToken::EndComment)
        .map(|(_, span)| span.start)
}

impl Grouper<'_> {
    fn push(&mut self, kind: RawKind, text: impl Into<String>) {
        self.raw.push(RawToken::new(kind, text));
    }

    fn last_kind(&self) -> Option<RawKind> {
        self.raw.last().map(|token| token.kind)
    }

    /// Process one physical line. `line` excludes the terminating newline;
    /// `line_end` is the byte offset just past the last content byte.
    fn process_line(&mut self, line: &[(BaseToken, logos::Span)], line_end: usize) {
        let mut i = 0;
        while i < line.len() && line[i].0 == BaseToken::Space {
            i += 1;
        }
        if i == line.len() {
            if !self.raw.is_empty() {
                self.blank_line_token();
            }
            return;
        }

        // Content begins at the line start by default so that verbatim lines
        // without decoration keep their full leading whitespace.
        let mut content_start = line[0].1.start;
        match line[i].0 {
            BaseToken::BeginComment => {
                self.push(RawKind::BeginComment, "/**");
                content_start = line[i].1.end;
                i += 1;
            }
            BaseToken::Asterisk if !self.raw.is_empty() => {
                // Continuation decoration; a run of asterisks is one marker
                while i < line.len() && line[i].0 == BaseToken::Asterisk {
                    content_start = line[i].1.end;
                    i += 1;
                }
                self.push(RawKind::LeadingAsterisk, "*");
            }
            _ => {}
        }

        let mut first_word = i;
        while first_word < line.len() && line[first_word].0 == BaseToken::Space {
            first_word += 1;
        }
        if first_word == line.len() {
            // Blank continuation line
            self.blank_line_token();
            return;
        }
        if line[first_word].0 == BaseToken::EndComment {
            self.push(RawKind::EndComment, "*/");
            self.closed = true;
            return;
        }

        // The close delimiter ends the comment in every region, including on
        // fence marker lines, so the content is cut at it up front and the
        // EndComment token is emitted after the region dispatch.
        let close_at = close_in_line(line, first_word);
        let content_end = close_at.unwrap_or(line_end);
        let content = &self.source[content_start..content_end];
        let trimmed = content.trim().to_string();
        match self.region {
            Region::Code => {
                if trimmed.starts_with("```") {
                    self.push(RawKind::CodeClose, trimmed);
                    self.region = Region::Prose;
                } else {
                    self.verbatim_line(content_start, content_end);
                }
            }
            Region::Pre => {
                if trimmed == "</pre>" {
                    self.push(RawKind::PreClose, trimmed);
                    self.region = Region::Prose;
                } else {
                    self.verbatim_line(content_start, content_end);
                }
            }
            Region::Table => {
                if trimmed.starts_with('|') {
                    self.verbatim_line(content_start, content_end);
                } else {
                    self.push(RawKind::TableClose, "");
                    self.region = Region::Prose;
                    self.prose_line(line, first_word, &trimmed, content_start, content_end);
                }
            }
            Region::Prose => {
                self.prose_line(line, first_word, &trimmed, content_start, content_end);
            }
        }
        if close_at.is_some() && !self.closed {
            self.push(RawKind::EndComment, "*/");
            self.closed = true;
        }
    }

    /// Emit the token for a blank line. In prose that is a structural break;
    /// inside a fenced region it is verbatim content, so runs of blank lines
    /// survive untouched.
    fn blank_line_token(&mut self) {
        if self.region == Region::Prose {
            self.push(RawKind::Whitespace, " ");
        } else {
            self.push(RawKind::CodeText, "");
        }
    }

    /// Process a prose-region line: region openers first, then the word walk.
    fn prose_line(
        &mut self,
        line: &[(BaseToken, logos::Span)],
        first_word: usize,
        trimmed: &str,
        content_start: usize,
        content_end: usize,
    ) {
        if trimmed.starts_with("```") {
            self.push(RawKind::CodeOpen, trimmed);
            self.region = Region::Code;
            return;
        }
        if trimmed == "<pre>" {
            self.push(RawKind::PreOpen, trimmed);
            self.region = Region::Pre;
            return;
        }
        if trimmed.starts_with('|') {
            self.push(RawKind::TableOpen, "");
            self.region = Region::Table;
            self.verbatim_line(content_start, content_end);
            return;
        }

        let mut run: Option<(usize, usize)> = None;
        let mut k = first_word;
        while k < line.len() {
            let (token, span) = &line[k];
            match token {
                BaseToken::EndComment => {
                    self.flush_run(&mut run);
                    self.push(RawKind::EndComment, "*/");
                    self.closed = true;
                    return;
                }
                BaseToken::InlineLink | BaseToken::BareLink => {
                    self.flush_run(&mut run);
                    let text = self.source[span.clone()].to_string();
                    self.push(RawKind::Link, text);
                    k = self.joining_space(line, k);
                }
                BaseToken::ReferenceLink => {
                    self.flush_run(&mut run);
                    let text = self.source[span.clone()].to_string();
                    self.push(RawKind::ReferenceLink, text);
                    k = self.joining_space(line, k);
                }
                BaseToken::Word if k == first_word && is_tag(&self.source[span.clone()]) => {
                    let text = self.source[span.clone()].to_string();
                    self.push(RawKind::Tag, text);
                    k = self.joining_space(line, k);
                }
                BaseToken::Word
                | BaseToken::Asterisk
                | BaseToken::OpenBracket
                | BaseToken::Space
                | BaseToken::BeginComment => {
                    run = match run {
                        None => Some((span.start, span.end)),
                        Some((start, _)) => Some((start, span.end)),
                    };
                }
                BaseToken::Newline => {}
            }
            k += 1;
        }
        self.flush_run(&mut run);

        // A tag or link at the end of a line still needs a joining space
        // before whatever the next line contributes.
        if matches!(
            self.last_kind(),
            Some(RawKind::Tag | RawKind::Link | RawKind::ReferenceLink)
        ) {
            self.push(RawKind::Whitespace, " ");
        }
    }

    /// Emit one verbatim line (code, pre, or table row) as a CodeText token.
    /// The caller has already cut `content_end` at any close delimiter.
    fn verbatim_line(&mut self, content_start: usize, content_end: usize) {
        let text = &self.source[content_start..content_end];
        let text = text.strip_suffix('\r').unwrap_or(text);
        if !text.trim().is_empty() {
            self.push(RawKind::CodeText, text);
        }
    }

    /// Emit the single joining-space token required after a tag or link when a
    /// space run follows it on the same line. Returns the index to resume at.
    fn joining_space(&mut self, line: &[(BaseToken, logos::Span)], k: usize) -> usize {
        if k + 1 < line.len() && line[k + 1].0 == BaseToken::Space {
            self.push(RawKind::Whitespace, " ");
            k + 1
        } else {
            k
        }
    }

    fn flush_run(&mut self, run: &mut Option<(usize, usize)>) {
        if let Some((start, end)) = run.take() {
            let text = self.source[start..end].to_string();
            self.push(RawKind::Text, text);
        }
    }
}
