//! Parser Framework
//!
//! Binds a [`Reducer`] to the tokenizer it pairs with and drives the
//! tokenize-then-reduce order of operations.

pub mod context;
pub mod parser;
pub mod traits;

pub use common_framework::{Checkpoint, Error, ParserError, Position, Result};
pub use context::TokenCursor;
pub use parser::Parser;
pub use traits::Reducer;
