use crate::traits::Reducer;
use common_framework::{Context, ParserError, Result};
use lexer_framework::{Source, Tokenizer};
use std::path::Path;
use tracing::debug;

/// A parser: a reducer bound to a tokenizer running its scanner.
pub struct Parser<R>
where
    R: Reducer,
{
    reducer: R,
    tokenizer: Tokenizer<R::Scanner>,
}

impl<R> Parser<R>
where
    R: Reducer,
{
    /// Creates a new parser over an existing tokenizer.
    pub fn new(reducer: R, tokenizer: Tokenizer<R::Scanner>) -> Self {
        Self { reducer, tokenizer }
    }

    /// Returns a reference to the tokenizer.
    pub fn tokenizer(&self) -> &Tokenizer<R::Scanner> {
        &self.tokenizer
    }

    pub fn reducer(&self) -> &R {
        &self.reducer
    }

    pub fn into_parts(self) -> (R, Tokenizer<R::Scanner>) {
        (self.reducer, self.tokenizer)
    }

    /// Runs the tokenizer if it has not produced its tokens yet, then
    /// reduces them.
    pub fn parse(&mut self) -> Result<R::Output> {
        match self.tokenizer.context() {
            Context::Start => {
                self.tokenizer.run()?;
            }
            Context::Scanning => {
                return Err(ParserError::TokenizerFailed {
                    context: Context::Scanning,
                }
                .into());
            }
            Context::Finish => {}
        }

        debug!(
            target: "parser_framework::parser",
            tokens = self.tokenizer.tokens().len(),
            "Reducing"
        );
        self.reducer.reduce(self.tokenizer.tokens())
    }
}

impl<R> Parser<R>
where
    R: Reducer,
    R::Scanner: Default,
{
    /// Creates a parser over the given text with a default scanner.
    pub fn from_text<T: Into<String>>(reducer: R, text: T) -> Self {
        Self::new(reducer, Tokenizer::from_text(R::Scanner::default(), text))
    }

    /// Creates a parser over the contents of a file with a default scanner.
    pub fn from_file<P: AsRef<Path>>(reducer: R, path: P) -> Result<Self> {
        let tokenizer = Tokenizer::from_file(R::Scanner::default(), path)?;
        Ok(Self::new(reducer, tokenizer))
    }

    pub fn open(reducer: R, source: Source) -> Result<Self> {
        let tokenizer = Tokenizer::open(R::Scanner::default(), source)?;
        Ok(Self::new(reducer, tokenizer))
    }
}

impl<R> std::fmt::Debug for Parser<R>
where
    R: Reducer + std::fmt::Debug,
    R::Scanner: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("reducer", &self.reducer)
            .field("tokenizer", &self.tokenizer)
            .finish()
    }
}
