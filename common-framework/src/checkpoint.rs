use crate::Position;

/// A saved place in a token sequence, for backtracking after a speculative
/// match fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    token_index: usize,
    /// Where the token at `token_index` starts in the source text.
    position: Position,
}

impl Checkpoint {
    pub fn new(token_index: usize, position: Position) -> Self {
        Self {
            token_index,
            position,
        }
    }

    pub fn token_index(&self) -> usize {
        self.token_index
    }

    pub fn position(&self) -> Position {
        self.position
    }
}
