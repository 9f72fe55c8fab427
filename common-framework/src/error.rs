//! Error taxonomy shared by the lexer and parser frameworks.
//!
//! Every failure surfaces as an [`Error`], which wraps one of the three
//! component errors. Nothing is retried or recovered silently.

use crate::{Context, Position};
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Root error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Lexer(#[from] LexerError),

    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),

    #[error(transparent)]
    Parser(#[from] ParserError),
}

impl Error {
    /// Returns the tokenizer context attached to this error, if any.
    pub fn context(&self) -> Option<Context> {
        match self {
            Error::Lexer(err) => err.context(),
            Error::Tokenizer(err) => err.context(),
            Error::Parser(ParserError::TokenizerFailed { context }) => Some(*context),
            Error::Parser(_) => None,
        }
    }
}

/// Cursor movement and lexer construction failures.
#[derive(Error, Debug)]
pub enum LexerError {
    #[error("length must be at least 1, got {length}")]
    InvalidLength { length: usize },

    #[error("offset {target} is outside of the {length}-character text")]
    OutOfBounds { target: isize, length: usize },

    #[error("shifting position {index} by {offset} would make it negative")]
    NegativePosition { index: usize, offset: isize },

    #[error("exactly one of text or file must be supplied")]
    InvalidSource,

    #[error("failed to load {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} does not contain valid UTF-8 text: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("{source} (tokenizer context: {context})")]
    Context {
        context: Context,
        #[source]
        source: Box<LexerError>,
    },
}

impl LexerError {
    /// Tags the error with the context active when it was raised.
    /// An already tagged error keeps its original context.
    pub fn with_context(self, context: Context) -> Self {
        match self {
            LexerError::Context { .. } => self,
            other => LexerError::Context {
                context,
                source: Box::new(other),
            },
        }
    }

    pub fn context(&self) -> Option<Context> {
        match self {
            LexerError::Context { context, .. } => Some(*context),
            _ => None,
        }
    }

    /// Returns the error without its context tag.
    pub fn kind(&self) -> &LexerError {
        match self {
            LexerError::Context { source, .. } => source.kind(),
            other => other,
        }
    }
}

/// Tokenizer contract violations.
#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error("invalid token type name {name:?}")]
    InvalidTypeName { name: String },

    #[error("cannot move tokenizer from {from} to {to}")]
    InvalidTransition { from: Context, to: Context },

    #[error("scan failed in {context} context: {source}")]
    Scan {
        context: Context,
        #[source]
        source: Box<Error>,
    },
}

impl TokenizerError {
    pub fn context(&self) -> Option<Context> {
        match self {
            TokenizerError::Scan { context, .. } => Some(*context),
            TokenizerError::InvalidTransition { from, .. } => Some(*from),
            TokenizerError::InvalidTypeName { .. } => None,
        }
    }
}

/// Parser construction and reduction failures.
#[derive(Error, Debug)]
pub enum ParserError {
    #[error("tokenizer previously failed in {context} context")]
    TokenizerFailed { context: Context },

    #[error("expected {expected}, found {found} at {position}")]
    UnexpectedToken {
        expected: String,
        found: String,
        position: Position,
    },

    #[error("expected {expected}, found end of input")]
    UnexpectedEnd { expected: String },

    #[error("{0}")]
    Reduce(String),
}
