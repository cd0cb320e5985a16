//! Normalized token model for comment formatting
//!
//! The normalizer turns the raw scanner stream into this closed set of comment
//! events. The renderer consumes the sequence exactly once, mapping each
//! variant to one writer operation, so the enum doubles as the renderer's
//! dispatch table: adding a variant without updating the renderer is a compile
//! error.
//!
//! Tokens are created once per formatting call, never mutated, and never
//! outlive the call.

/// One normalized comment event.
///
/// Payload-carrying variants hold the associated text; structural variants
/// have none. A prose `Literal` is a single whitespace-free word; a verbatim
/// `Literal` (code, pre, table row) is one source line with its interior
/// whitespace intact. `Whitespace` requests a single joining space that the
/// writer may fold into a line break.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum Token {
    /// The `/**` opening delimiter.
    Begin,
    /// The `*/` closing delimiter; always the last token of a valid sequence.
    End,
    /// A paragraph or structural break: one blank output line.
    BlankLine,
    /// A request for one joining space (or a soft line break).
    Whitespace,
    /// A word, tag name, link, or verbatim line to emit.
    Literal(String),
    /// The start of a bullet list item; emitted just before its `-` literal.
    ListItemOpen,
    /// A `<pre>` marker line; verbatim mode until PreClose.
    PreOpen(String),
    /// A `</pre>` marker line.
    PreClose(String),
    /// A code fence line (e.g. `` ```rust ``); verbatim mode until CodeClose.
    CodeOpen(String),
    /// The closing code fence line.
    CodeClose(String),
    /// Start of a table; verbatim mode, no marker line of its own.
    TableOpen,
    /// End of a table.
    TableClose,
}
