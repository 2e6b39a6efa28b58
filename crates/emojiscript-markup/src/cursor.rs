//! Position tracking over the source text.

/// Saved cursor position, restored to backtrack a speculative lookahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    offset: usize,
    line: usize,
    column: usize,
}

/// A cursor over UTF-8 text that tracks 1-based line and column.
///
/// Offsets are byte offsets; columns count characters.
#[derive(Debug, Clone)]
pub struct Cursor {
    input: String,
    offset: usize,
    line: usize,
    column: usize,
}

impl Cursor {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn peek(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.offset..].chars();
        chars.next();
        chars.next()
    }

    /// Move past the current character, returning it.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            self.advance();
        }
    }

    /// Consume characters while `pred` holds and return them.
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &str {
        let start = self.offset;
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
        &self.input[start..self.offset]
    }

    /// Unconsumed input.
    pub fn remaining(&self) -> &str {
        &self.input[self.offset..]
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            offset: self.offset,
            line: self.line,
            column: self.column,
        }
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.offset = checkpoint.offset;
        self.line = checkpoint.line;
        self.column = checkpoint.column;
    }
}

/// Whitespace as the scanner sees it: space, tab, CR, LF.
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_and_column() {
        let mut cursor = Cursor::new("ab\ncd");
        cursor.advance();
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (1, 3));
        cursor.advance();
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
        assert_eq!(cursor.peek(), Some('c'));
        assert_eq!(cursor.peek_next(), Some('d'));
    }

    #[test]
    fn test_multibyte_columns() {
        let mut cursor = Cursor::new("é<");
        cursor.advance();
        assert_eq!(cursor.column(), 2);
        assert_eq!(cursor.remaining(), "<");
    }

    #[test]
    fn test_checkpoint_restore() {
        let mut cursor = Cursor::new("one\ntwo");
        let saved = cursor.checkpoint();
        cursor.take_while(|c| c != 'w');
        assert_eq!(cursor.line(), 2);
        cursor.restore(saved);
        assert_eq!((cursor.line(), cursor.column()), (1, 1));
        assert_eq!(cursor.remaining(), "one\ntwo");
    }

    #[test]
    fn test_end_of_input() {
        let mut cursor = Cursor::new("x");
        assert_eq!(cursor.advance(), Some('x'));
        assert_eq!(cursor.remaining(), "");
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.peek(), None);
    }
}
