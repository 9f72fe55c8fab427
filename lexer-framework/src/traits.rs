use crate::context::LexContext;
use crate::kind::Type;
use crate::tokenizer::TokenizerState;
use common_framework::Result;

/// A lexing rule used by [`RuleScanner`](crate::RuleScanner).
///
/// The scanner consumes the first character of every token before asking
/// the rules, so `try_match` receives it as `first` and only has to consume
/// the rest of the token.
pub trait LexingRule<Ctx = TokenizerState>
where
    Ctx: LexContext,
{
    /// Attempts to extend a token that starts with `first`.
    /// Returns the token kind if matched, `None` otherwise.
    /// The scanner rewinds whatever a non-matching rule consumed.
    fn try_match(&mut self, first: char, ctx: &mut Ctx) -> Result<Option<Type>>;

    /// Returns the priority of this rule. Higher priority rules are tried first.
    /// Default priority is 0.
    fn priority(&self) -> i32 {
        0
    }

    /// Quick check: returns whether this rule might match a token starting
    /// with `first`.
    ///
    /// - `Some(true)`  - This rule might match (or definitely matches)
    /// - `Some(false)` - This rule definitely won't match
    /// - `None`        - Unknown, need to try full match
    #[inline]
    fn quick_check(&self, first: char) -> Option<bool> {
        let _ = first;
        None
    }
}
