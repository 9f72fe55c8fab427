use crate::kind::Type;
use common_framework::Position;

/// A recognized span of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: Type,
    text: String,
    position: Position,
}

impl Token {
    pub fn new<S: Into<String>>(kind: Type, text: S, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    pub fn kind(&self) -> Type {
        self.kind
    }

    /// Returns the exact text the token matched.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the position the token starts at.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the length of the matched text in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
