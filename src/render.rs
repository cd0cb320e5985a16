//! Rendering: one writer request per normalized token
//!
//! A single forward pass with a fixed one-to-one mapping from token kind to
//! writer operation. The pass returns as soon as it sees the comment-end
//! token, so anything after it is never visited. Exhausting the sequence
//! without one is a fatal [FormatError::MissingTerminator]: every valid
//! normalized sequence terminates with End.

use crate::error::FormatError;
use crate::tokens::Token;
use crate::writer::CommentWriter;

/// Render a normalized token sequence into formatted comment text.
pub fn render(
    tokens: &[Token],
    block_indent: usize,
    max_width: usize,
) -> Result<String, FormatError> {
    let mut writer = CommentWriter::new(block_indent, max_width);
    for token in tokens {
        match token {
            Token::Begin => writer.begin_comment(),
            Token::End => return Ok(writer.end_comment()),
            Token::BlankLine => writer.blank_line(),
            Token::Whitespace => writer.request_space(),
            Token::Literal(word) => writer.literal(word),
            Token::ListItemOpen => writer.open_list_item(),
            Token::PreOpen(marker) => writer.open_pre(marker),
            Token::PreClose(marker) => writer.close_pre(marker),
            Token::CodeOpen(marker) => writer.open_code(marker),
            Token::CodeClose(marker) => writer.close_code(marker),
            Token::TableOpen => writer.open_table(),
            Token::TableClose => writer.close_table(),
        }
    }
    Err(FormatError::MissingTerminator)
}
