use crate::lexer::{Checkpoint, Lexer};
use common_framework::{LexerError, Position};

/// Cursor access for scanning code.
///
/// Rules and scanners are written against this trait rather than a concrete
/// tokenizer, so they can run over anything that owns a [`Lexer`]. Only the
/// two accessors are required; everything else forwards to the lexer.
pub trait LexContext {
    /// Returns a reference to the lexer.
    fn lexer(&self) -> &Lexer;

    /// Returns a mutable reference to the lexer.
    fn lexer_mut(&mut self) -> &mut Lexer;

    /// Returns the current position.
    fn position(&self) -> Position {
        self.lexer().position()
    }

    /// Returns true if at end of input.
    fn is_eof(&self) -> bool {
        self.lexer().is_eof()
    }

    /// Peeks at the next character without advancing, `None` at end of input.
    fn peek(&self) -> Option<char> {
        self.lexer().peek().ok()
    }

    /// Peeks at the character `offset` away from the cursor.
    fn peek_at(&self, offset: isize) -> Option<char> {
        self.lexer().peek_at(offset).ok()
    }

    fn read(&mut self, length: usize) -> Result<String, LexerError> {
        self.lexer_mut().read(length)
    }

    fn consume(&mut self) -> Result<char, LexerError> {
        self.lexer_mut().consume()
    }

    fn push(&mut self, length: usize) -> Result<String, LexerError> {
        self.lexer_mut().push(length)
    }

    fn lookahead(&self, pattern: &str) -> bool {
        self.lexer().lookahead(pattern)
    }

    fn lookbehind(&self, pattern: &str) -> bool {
        self.lexer().lookbehind(pattern)
    }

    /// Consumes characters while the predicate returns true.
    fn consume_while<F>(&mut self, predicate: F) -> String
    where
        F: FnMut(char) -> bool,
        Self: Sized,
    {
        self.lexer_mut().consume_while(predicate)
    }

    /// Creates a checkpoint of the current state.
    fn checkpoint(&self) -> Checkpoint {
        self.lexer().checkpoint()
    }

    /// Restores the cursor to a checkpoint.
    fn restore(&mut self, checkpoint: Checkpoint) {
        self.lexer_mut().restore(checkpoint);
    }
}

impl LexContext for Lexer {
    fn lexer(&self) -> &Lexer {
        self
    }

    fn lexer_mut(&mut self) -> &mut Lexer {
        self
    }
}
