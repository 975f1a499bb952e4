use std::sync::Arc;

/// Cursor into a source text. Tokens and nodes keep frozen copies of it as
/// the bounds of the text they were built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub index: usize,
    pub line: usize,
    pub column: usize,
    pub file_name: Arc<str>,
    pub full_text: Arc<str>,
}

impl Position {
    // Sits on the first character of the text
    pub fn new(file_name: &str, full_text: &str) -> Self {
        Self {
            index: 0,
            line: 0,
            column: 0,
            file_name: Arc::from(file_name),
            full_text: Arc::from(full_text),
        }
    }

    /// Moves past `consumed`, the character the cursor was sitting on.
    pub fn advance(&mut self, consumed: Option<char>) -> &mut Self {
        self.index += 1;
        self.column += 1;

        if consumed == Some('\n') {
            self.line += 1;
            self.column = 0;
        }

        self
    }

    // Copy of the cursor moved one character further
    pub fn next(&self, consumed: Option<char>) -> Self {
        let mut next = self.clone();
        next.advance(consumed);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_on_same_line() {
        let mut pos = Position::new("<test>", "12");
        pos.advance(Some('1'));

        assert_eq!((pos.index, pos.line, pos.column), (1, 0, 1));
    }

    #[test]
    fn advance_past_new_line() {
        let mut pos = Position::new("<test>", "1\n2");
        pos.advance(Some('1')).advance(Some('\n'));

        assert_eq!((pos.index, pos.line, pos.column), (2, 1, 0));
    }

    #[test]
    fn copies_are_frozen() {
        let mut pos = Position::new("<test>", "123");
        let start = pos.clone();
        pos.advance(Some('1'));

        assert_eq!(start.index, 0);
        assert_eq!(pos.index, 1);
        assert_eq!(start.next(Some('1')), pos);
    }
}
