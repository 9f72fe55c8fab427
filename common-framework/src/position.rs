use crate::error::LexerError;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Represents a location in the source text.
///
/// `index` is a 0-based character offset, `column` and `line` are 1-based
/// display coordinates derived from it. Equality, hashing and ordering only
/// look at `index`; the other two fields are display data.
#[derive(Debug, Clone, Copy, Default)]
pub struct Position {
    /// Character offset from the start of the input (0-indexed)
    pub index: usize,
    /// Column number (1-indexed once reading begins)
    pub column: usize,
    /// Line number (1-indexed once reading begins)
    pub line: usize,
}

impl Position {
    /// Creates a position with the given values.
    pub fn new(index: usize, column: usize, line: usize) -> Self {
        Self {
            index,
            column,
            line,
        }
    }

    /// Returns an independent duplicate of this position.
    pub fn copy(&self) -> Self {
        *self
    }

    /// Returns a new position with `index` and `column` shifted by `offset`.
    ///
    /// Fails only when the index would become negative; the column stops
    /// at 0. The line is left untouched, line changes only happen through
    /// the newline-aware cursor movement of the lexer.
    pub fn adjust(&self, offset: isize) -> Result<Self, LexerError> {
        let index = self
            .index
            .checked_add_signed(offset)
            .ok_or(LexerError::NegativePosition {
                index: self.index,
                offset,
            })?;
        Ok(Self {
            index,
            column: self.column.saturating_add_signed(offset),
            line: self.line,
        })
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index.cmp(&other.index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} ({})", self.line, self.column, self.index)
    }
}
