use crate::error::TokenizerError;
use std::fmt;

/// Lifecycle phase of a tokenizer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Context {
    /// Bound to a lexer, not yet scanning.
    #[default]
    Start,
    /// The scanner is pulling characters from the lexer.
    Scanning,
    /// The scanner returned successfully.
    Finish,
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Context::Start => "start",
            Context::Scanning => "scanning",
            Context::Finish => "finish",
        };
        f.write_str(name)
    }
}

/// The phase of one tokenizer run with only the legal transitions exposed:
/// `Start -> Scanning` through [`begin`](Self::begin) and
/// `Scanning -> Finish` through [`finish`](Self::finish).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContextState {
    current: Context,
}

impl ContextState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase.
    pub fn current(&self) -> Context {
        self.current
    }

    pub fn begin(&mut self) -> Result<(), TokenizerError> {
        self.transition(Context::Start, Context::Scanning)
    }

    pub fn finish(&mut self) -> Result<(), TokenizerError> {
        self.transition(Context::Scanning, Context::Finish)
    }

    fn transition(&mut self, from: Context, to: Context) -> Result<(), TokenizerError> {
        if self.current != from {
            return Err(TokenizerError::InvalidTransition {
                from: self.current,
                to,
            });
        }
        self.current = to;
        Ok(())
    }
}
