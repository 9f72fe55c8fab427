use common_framework::{Checkpoint, ParserError, Position};
use lexer_framework::{Token, Type};

/// A borrowing cursor over a token sequence, for reducers that walk the
/// tokens instead of folding over them.
#[derive(Debug, Clone)]
pub struct TokenCursor<'t> {
    tokens: &'t [Token],
    current: usize,
}

impl<'t> TokenCursor<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, current: 0 }
    }

    /// Returns the current token without advancing.
    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.current)
    }

    /// Returns the token `offset` places past the current one without advancing.
    pub fn peek_at(&self, offset: usize) -> Option<&'t Token> {
        self.current
            .checked_add(offset)
            .and_then(|index| self.tokens.get(index))
    }

    /// Advances past the current token and returns it.
    pub fn advance(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.current)?;
        self.current += 1;
        Some(token)
    }

    pub fn is_eof(&self) -> bool {
        self.current >= self.tokens.len()
    }

    pub fn token_index(&self) -> usize {
        self.current
    }

    /// Returns the position of the current token, or of the end of the last
    /// token once the cursor is exhausted.
    pub fn position(&self) -> Position {
        if let Some(token) = self.peek() {
            return token.position();
        }
        match self.tokens.last() {
            Some(last) => {
                let mut end = last.position();
                let width = last.len().saturating_sub(1);
                end.index += width;
                end.column += width;
                end
            }
            None => Position::default(),
        }
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(self.current, self.position())
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.current = checkpoint.token_index().min(self.tokens.len());
    }

    /// Advances past the current token if it has the given kind.
    pub fn consume_if(&mut self, kind: Type) -> Option<&'t Token> {
        match self.peek() {
            Some(token) if token.kind() == kind => self.advance(),
            _ => None,
        }
    }

    /// Advances past the current token, failing if it does not have the
    /// given kind.
    pub fn expect(&mut self, kind: Type) -> Result<&'t Token, ParserError> {
        match self.peek() {
            Some(token) if token.kind() == kind => {
                self.current += 1;
                Ok(token)
            }
            Some(token) => Err(ParserError::UnexpectedToken {
                expected: kind.to_string(),
                found: token.kind().to_string(),
                position: token.position(),
            }),
            None => Err(ParserError::UnexpectedEnd {
                expected: kind.to_string(),
            }),
        }
    }
}

impl<'t> Iterator for TokenCursor<'t> {
    type Item = &'t Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tokens.len().saturating_sub(self.current);
        (remaining, Some(remaining))
    }
}
