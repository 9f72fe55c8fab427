use common_framework::Result;
use lexer_framework::{Scanner, Token};

/// The reduction procedure of a parser.
///
/// A reducer names the one scanner it is compatible with through
/// [`Reducer::Scanner`]; a [`Parser`](crate::Parser) can only be built from
/// a tokenizer running that scanner.
pub trait Reducer {
    /// The scanner whose tokens this reducer understands.
    type Scanner: Scanner;

    /// The domain result produced from the tokens.
    type Output;

    /// Builds the result from the full token sequence.
    fn reduce(&mut self, tokens: &[Token]) -> Result<Self::Output>;
}
