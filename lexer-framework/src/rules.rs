use crate::context::LexContext;
use crate::kind::Type;
use crate::tokenizer::{Scanner, TokenizerState};
use crate::traits::LexingRule;
use common_framework::Result;
use std::cmp::Reverse;
use tracing::trace;

pub type RuleSet = Vec<Box<dyn LexingRule<TokenizerState>>>;

/// A scanner that applies lexing rules in priority order.
///
/// Each token starts by consuming one character. Rules are then offered
/// that character in priority order; a rule that declines is rewound to the
/// checkpoint taken before it ran. When no rule matches, the character
/// becomes a [`Type::UNKNOWN`] token.
pub struct RuleScanner {
    rules: RuleSet,
}

impl RuleScanner {
    /// Creates a new scanner with the given rules.
    pub fn new(rules: RuleSet) -> Self {
        // Sort rules by priority (highest first)
        let mut sorted_rules = rules;
        sorted_rules.sort_by_key(|rule| Reverse(rule.priority()));

        Self {
            rules: sorted_rules,
        }
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn match_rules(&mut self, first: char, state: &mut TokenizerState) -> Result<Type> {
        for rule in &mut self.rules {
            if let Some(false) = rule.quick_check(first) {
                continue;
            }

            let checkpoint = state.checkpoint();
            if let Some(kind) = rule.try_match(first, state)? {
                return Ok(kind);
            }
            state.restore(checkpoint);
        }

        trace!(target: "lexer_framework::tokenizer", ?first, "No rule matched");
        Ok(Type::UNKNOWN)
    }
}

impl Scanner for RuleScanner {
    fn scan(&mut self, state: &mut TokenizerState) -> Result<()> {
        while !state.is_eof() {
            state.mark();
            let start = state.lexer().offset();
            let first = state.consume()?;

            let kind = self.match_rules(first, state)?;
            let text = state.lexer().slice(start, state.lexer().offset())?;
            state.push_token(kind, text);
        }
        Ok(())
    }
}

impl std::fmt::Debug for RuleScanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleScanner")
            .field("rules", &self.rules.len())
            .finish()
    }
}
