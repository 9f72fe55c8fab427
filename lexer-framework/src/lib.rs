//! Lexer Framework
//!
//! A character cursor with exact line/column bookkeeping, an open registry
//! of token kinds, and the tokenizer driver that runs a [`Scanner`] over a
//! [`Lexer`].

pub mod context;
pub mod kind;
pub mod lexer;
pub mod rules;
pub mod source;
pub mod token;
pub mod tokenizer;
pub mod traits;

pub use common_framework::{Context, Error, LexerError, Position, Result, TokenizerError};
pub use context::LexContext;
pub use kind::Type;
pub use lexer::{Checkpoint, Lexer};
pub use rules::{RuleScanner, RuleSet};
pub use source::{FsLoader, Source, SourceLoader};
pub use token::Token;
pub use tokenizer::{Scanner, Tokenizer, TokenizerState};
pub use traits::LexingRule;
