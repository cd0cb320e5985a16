//! # docblock
//!
//! A width-aware reformatter for block documentation comments
//! (`/** ... */`).
//!
//! The formatter re-flows prose to a maximum line width while preserving the
//! structural markup inside the comment: tag directives (`@param`,
//! `@return`, ...), bullet list items, fenced code and `<pre>` regions,
//! tables, and inline link references. A comment whose content is short
//! enough to fit is collapsed onto a single line.
//!
//! ## Pipeline
//!
//! Formatting is a fixed sequence of stages, each exposed as its own module
//! so callers and tests can drive them individually:
//!
//! 1. [scanner]: logos base tokenization plus a line-grouping pass that
//!    produces the raw token vocabulary.
//! 2. [normalize]: the classification table that turns raw tokens into the
//!    normalized [Token](tokens::Token) sequence. Exhaustive, no fallthrough:
//!    an unknown raw category is a fatal error.
//! 3. [render]: one writer request per token, driving the stateful
//!    [CommentWriter](writer::CommentWriter) that owns column tracking and
//!    line breaking.
//! 4. [collapse]: rewrites a short one-content-line comment onto a single
//!    physical line.
//!
//! Every call is independent: no state is shared or reused across comments.

pub mod collapse;
pub mod error;
pub mod normalize;
pub mod render;
pub mod scanner;
pub mod tokens;
pub mod writer;

pub use error::FormatError;
pub use tokens::Token;

/// Maximum output line width, in columns, applied by the writer and by the
/// collapse pass's budget computation.
pub const MAX_LINE_WIDTH: usize = 100;

/// Format one block documentation comment at the default line width.
///
/// `input` must start with `/**` and end with `*/`; the output does too.
/// `block_indent` is the number of columns of code indentation the enclosing
/// formatter will place the comment after; interior lines include it, the
/// first line does not.
pub fn format_comment(input: &str, block_indent: usize) -> Result<String, FormatError> {
    format_comment_with_width(input, block_indent, MAX_LINE_WIDTH)
}

/// Format one block documentation comment at an explicit line width.
pub fn format_comment_with_width(
    input: &str,
    block_indent: usize,
    max_width: usize,
) -> Result<String, FormatError> {
    let raw = scanner::scan(input);
    let tokens = normalize::normalize(&raw)?;
    let rendered = render::render(&tokens, block_indent, max_width)?;
    Ok(collapse::collapse_if_possible(
        block_indent,
        max_width,
        &rendered,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_comment_collapses() {
        assert_eq!(
            format_comment("/**\n * hello world\n */", 0).unwrap(),
            "/** hello world */"
        );
    }

    #[test]
    fn test_truncated_comment_is_fatal() {
        assert_eq!(
            format_comment("/** never closed", 0).unwrap_err(),
            FormatError::MissingTerminator
        );
    }
}
