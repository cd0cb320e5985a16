//! Line-filling writer for rendered comments
//!
//! The writer is the only stateful piece of the pipeline: it owns column
//! tracking, decides whether a requested space becomes a space or a line
//! break, and renders the indentation and continuation markers. The renderer
//! drives it with exactly one call per token and never looks inside.
//!
//! Output shape: the first line is `/**` with no indent (the caller owns the
//! placement of the opening delimiter), interior lines are
//! `{indent} * {content}`, and the final line is `{indent} */`.
//!
//! Break policy: a requested space is the only soft break point. A literal
//! arriving with no pending space is hard-joined to the current line, so
//! adjacent tokens such as a link and its trailing punctuation are never
//! split; a single word longer than the width budget overflows rather than
//! being broken. Verbatim literals (code, pre, table rows) go one per line
//! and are exempt from the width bound entirely.

/// A stateful line-filling sink for one comment.
#[derive(Debug)]
pub struct CommentWriter {
    block_indent: usize,
    max_width: usize,
    lines: Vec<String>,
    line: String,
    pending_space: bool,
    verbatim: bool,
    hang_indent: usize,
}

impl CommentWriter {
    pub fn new(block_indent: usize, max_width: usize) -> Self {
        CommentWriter {
            block_indent,
            max_width,
            lines: Vec::new(),
            line: String::new(),
            pending_space: false,
            verbatim: false,
            hang_indent: 0,
        }
    }

    pub fn begin_comment(&mut self) {
        self.lines.push("/**".to_string());
    }

    /// Finish the comment and return the accumulated text. Trailing blank
    /// lines are dropped so the close delimiter sits right under the content.
    pub fn end_comment(&mut self) -> String {
        self.finish_line();
        while self
            .lines
            .last()
            .map(|line| line.trim() == "*")
            .unwrap_or(false)
        {
            self.lines.pop();
        }
        let mut close = " ".repeat(self.block_indent);
        close.push_str(" */");
        self.lines.push(close);
        self.lines.join("\n")
    }

    /// Request one joining space before the next literal. The writer folds it
    /// into a line break instead when the next word would overflow.
    pub fn request_space(&mut self) {
        self.pending_space = true;
    }

    /// Emit a blank interior line. Runs of blanks collapse to one, and blanks
    /// directly after the opening delimiter are dropped.
    pub fn blank_line(&mut self) {
        self.finish_line();
        self.hang_indent = 0;
        match self.lines.last() {
            None => {}
            Some(last) if last.trim() == "*" => {}
            Some(last) if last.ends_with("/**") => {}
            Some(_) => {
                let mut blank = " ".repeat(self.block_indent);
                blank.push_str(" *");
                self.lines.push(blank);
            }
        }
    }

    pub fn literal(&mut self, word: &str) {
        if self.verbatim {
            self.finish_line();
            self.push_marker_line(word);
            return;
        }
        if self.line.is_empty() {
            self.line.push_str(word);
        } else if self.pending_space {
            // Width is measured in characters, not bytes
            let width =
                self.block_indent + 3 + self.line.chars().count() + 1 + word.chars().count();
            if width > self.max_width {
                self.finish_line();
                self.line = " ".repeat(self.hang_indent);
                self.line.push_str(word);
            } else {
                self.line.push(' ');
                self.line.push_str(word);
            }
        } else {
            self.line.push_str(word);
        }
        self.pending_space = false;
    }

    /// Start a bullet list item on its own line. Wrapped continuations of the
    /// item get a two-column hang indent until the next structural break.
    pub fn open_list_item(&mut self) {
        self.finish_line();
        self.hang_indent = 2;
    }

    pub fn open_pre(&mut self, marker: &str) {
        self.open_verbatim(marker);
    }

    pub fn close_pre(&mut self, marker: &str) {
        self.close_verbatim(marker);
    }

    pub fn open_code(&mut self, marker: &str) {
        self.open_verbatim(marker);
    }

    pub fn close_code(&mut self, marker: &str) {
        self.close_verbatim(marker);
    }

    /// Tables have no marker line of their own; the rows carry the markup.
    pub fn open_table(&mut self) {
        self.open_verbatim("");
    }

    pub fn close_table(&mut self) {
        self.close_verbatim("");
    }

    fn open_verbatim(&mut self, marker: &str) {
        self.finish_line();
        self.hang_indent = 0;
        if !marker.is_empty() {
            self.push_marker_line(marker);
        }
        self.verbatim = true;
    }

    fn close_verbatim(&mut self, marker: &str) {
        self.finish_line();
        if !marker.is_empty() {
            self.push_marker_line(marker);
        }
        self.verbatim = false;
    }

    /// Push the current line, if it has content, as an interior line.
    fn finish_line(&mut self) {
        if !self.line.is_empty() {
            let mut out = " ".repeat(self.block_indent);
            out.push_str(" * ");
            out.push_str(&self.line);
            self.lines.push(out);
            self.line.clear();
        }
        self.pending_space = false;
    }

    /// Push one pre-formed interior line (verbatim content or a region
    /// marker), bypassing the width budget.
    fn push_marker_line(&mut self, text: &str) {
        let mut out = " ".repeat(self.block_indent);
        out.push_str(" *");
        if !text.is_empty() {
            out.push(' ');
            out.push_str(text);
        }
        self.lines.push(out);
        self.pending_space = false;
    }
}
