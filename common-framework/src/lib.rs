//! Common Framework
//!
//! Components shared by lexer-framework and parser-framework: source
//! positions, backtracking checkpoints, the tokenizer lifecycle and the
//! error taxonomy.

pub mod checkpoint;
pub mod context;
pub mod error;
pub mod position;

pub use checkpoint::Checkpoint;
pub use context::{Context, ContextState};
pub use error::{Error, LexerError, ParserError, Result, TokenizerError};
pub use position::Position;
