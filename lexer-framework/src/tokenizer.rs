use crate::context::LexContext;
use crate::kind::Type;
use crate::lexer::Lexer;
use crate::source::Source;
use crate::token::Token;
use common_framework::{
    Context, ContextState, Error, LexerError, Position, Result, TokenizerError,
};
use std::path::Path;
use tracing::{debug, warn};

/// The scanning procedure of a tokenizer.
///
/// A scanner pulls characters from the state's lexer and appends tokens
/// through [`TokenizerState::push_token`]. The tokenizer drives the
/// `Start -> Scanning -> Finish` lifecycle around it.
pub trait Scanner {
    fn scan(&mut self, state: &mut TokenizerState) -> Result<()>;
}

impl<F> Scanner for F
where
    F: FnMut(&mut TokenizerState) -> Result<()>,
{
    fn scan(&mut self, state: &mut TokenizerState) -> Result<()> {
        self(state)
    }
}

/// The mutable part of a tokenizer that a scanner works on.
#[derive(Debug)]
pub struct TokenizerState {
    lexer: Lexer,
    tokens: Vec<Token>,
    context: ContextState,
    start: Option<Position>,
}

impl TokenizerState {
    fn new(lexer: Lexer) -> Self {
        Self {
            lexer,
            tokens: Vec::new(),
            context: ContextState::new(),
            start: None,
        }
    }

    /// Returns the lifecycle phase of the run.
    pub fn context(&self) -> Context {
        self.context.current()
    }

    /// Returns the tokens produced so far, in production order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Marks the next character as the start of the next token.
    pub fn mark(&mut self) {
        self.start = Some(self.lexer.next_position());
    }

    /// Appends a token. This is the only way tokens are added.
    ///
    /// The token is placed at the latest [`mark`](Self::mark), or at the
    /// current lexer position when nothing was marked since the previous
    /// token.
    pub fn push_token<S: Into<String>>(&mut self, kind: Type, text: S) -> &Token {
        let position = self.start.take().unwrap_or_else(|| self.lexer.position());
        let token = Token::new(kind, text, position);
        debug!(
            target: "lexer_framework::tokenizer",
            kind = %token.kind(),
            text = ?token.text(),
            line = position.line,
            column = position.column,
            "Produced token"
        );
        let index = self.tokens.len();
        self.tokens.push(token);
        &self.tokens[index]
    }
}

impl LexContext for TokenizerState {
    fn lexer(&self) -> &Lexer {
        &self.lexer
    }

    fn lexer_mut(&mut self) -> &mut Lexer {
        &mut self.lexer
    }
}

/// Drives a [`Scanner`] over a lexer to produce a token sequence.
#[derive(Debug)]
pub struct Tokenizer<S> {
    scanner: S,
    state: TokenizerState,
}

impl<S> Tokenizer<S>
where
    S: Scanner,
{
    /// Creates a tokenizer bound to the given lexer.
    pub fn new(scanner: S, lexer: Lexer) -> Self {
        Self {
            scanner,
            state: TokenizerState::new(lexer),
        }
    }

    /// Creates a tokenizer over the given text.
    pub fn from_text<T: Into<String>>(scanner: S, text: T) -> Self {
        Self::new(scanner, Lexer::new(text))
    }

    /// Creates a tokenizer over the contents of a file.
    pub fn from_file<P: AsRef<Path>>(scanner: S, path: P) -> Result<Self, LexerError> {
        Ok(Self::new(scanner, Lexer::from_file(path)?))
    }

    pub fn open(scanner: S, source: Source) -> Result<Self, LexerError> {
        Ok(Self::new(scanner, Lexer::open(source)?))
    }

    pub fn lexer(&self) -> &Lexer {
        &self.state.lexer
    }

    pub fn scanner(&self) -> &S {
        &self.scanner
    }

    /// Returns the tokens produced so far.
    ///
    /// After a failed run this holds whatever was appended before the
    /// failure.
    pub fn tokens(&self) -> &[Token] {
        &self.state.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.state.tokens
    }

    pub fn context(&self) -> Context {
        self.state.context()
    }

    pub fn is_finished(&self) -> bool {
        self.context() == Context::Finish
    }

    /// Runs the scanner and returns the produced tokens.
    ///
    /// A finished tokenizer returns its tokens without scanning again. A run
    /// that failed leaves the context at `Scanning` and cannot be restarted.
    pub fn run(&mut self) -> Result<&[Token]> {
        if self.is_finished() {
            return Ok(&self.state.tokens);
        }

        self.state.context.begin()?;
        debug!(
            target: "lexer_framework::tokenizer",
            characters = self.state.lexer.len(),
            "Scanning"
        );

        if let Err(err) = self.scanner.scan(&mut self.state) {
            let context = self.state.context();
            warn!(
                target: "lexer_framework::tokenizer",
                %context,
                tokens = self.state.tokens.len(),
                error = %err,
                "Scan failed"
            );
            return Err(tag_with_context(err, context));
        }

        self.state.context.finish()?;
        debug!(
            target: "lexer_framework::tokenizer",
            tokens = self.state.tokens.len(),
            "Finished"
        );
        Ok(&self.state.tokens)
    }
}

fn tag_with_context(err: Error, context: Context) -> Error {
    match err {
        Error::Lexer(err) => Error::Lexer(err.with_context(context)),
        other => TokenizerError::Scan {
            context,
            source: Box::new(other),
        }
        .into(),
    }
}
