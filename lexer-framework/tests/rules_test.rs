use lexer_framework::{
    Context, Error, LexContext, LexerError, LexingRule, RuleScanner, RuleSet, Tokenizer, Type,
};
use std::cell::Cell;
use std::rc::Rc;

fn ident() -> Type {
    Type::register("RulesTestIdent").unwrap()
}

fn keyword() -> Type {
    Type::register("RulesTestKeyword").unwrap()
}

struct IdentRule;

impl<Ctx> LexingRule<Ctx> for IdentRule
where
    Ctx: LexContext,
{
    fn try_match(&mut self, _first: char, ctx: &mut Ctx) -> Result<Option<Type>, Error> {
        ctx.consume_while(|ch| ch.is_alphanumeric());
        Ok(Some(ident()))
    }

    fn priority(&self) -> i32 {
        10
    }

    fn quick_check(&self, first: char) -> Option<bool> {
        Some(first.is_alphabetic())
    }
}

/// Matches `let`, but only after consuming the rest of the word, so a
/// mismatch exercises the rewind.
struct KeywordRule;

impl<Ctx> LexingRule<Ctx> for KeywordRule
where
    Ctx: LexContext,
{
    fn try_match(&mut self, first: char, ctx: &mut Ctx) -> Result<Option<Type>, Error> {
        let rest = ctx.consume_while(|ch| ch.is_alphanumeric());
        if first == 'l' && rest == "et" {
            Ok(Some(keyword()))
        } else {
            Ok(None)
        }
    }

    fn priority(&self) -> i32 {
        20
    }
}

struct SpacingRule;

impl<Ctx> LexingRule<Ctx> for SpacingRule
where
    Ctx: LexContext,
{
    fn try_match(&mut self, _first: char, ctx: &mut Ctx) -> Result<Option<Type>, Error> {
        ctx.consume_while(|ch| ch == ' ');
        Ok(Some(Type::SPACING))
    }

    fn quick_check(&self, first: char) -> Option<bool> {
        Some(first == ' ')
    }
}

fn rules() -> RuleSet {
    vec![
        Box::new(SpacingRule),
        Box::new(IdentRule),
        Box::new(KeywordRule),
    ]
}

#[test]
fn test_rule_scanner_priority_and_rewind() {
    let mut tokenizer = Tokenizer::from_text(RuleScanner::new(rules()), "let lettuce  x1");
    let tokens = tokenizer.run().unwrap();

    let summary: Vec<(Type, &str)> = tokens.iter().map(|t| (t.kind(), t.text())).collect();
    assert_eq!(
        summary,
        vec![
            (keyword(), "let"),
            (Type::SPACING, " "),
            (ident(), "lettuce"),
            (Type::SPACING, "  "),
            (ident(), "x1"),
        ]
    );
}

#[test]
fn test_rule_scanner_unknown_fallback() {
    let mut tokenizer = Tokenizer::from_text(RuleScanner::new(rules()), "a+b");
    let tokens = tokenizer.run().unwrap();
    let kinds: Vec<Type> = tokens.iter().map(|t| t.kind()).collect();
    assert_eq!(kinds, vec![ident(), Type::UNKNOWN, ident()]);
    assert_eq!(tokens[1].text(), "+");
    assert_eq!(tokens[1].position().index, 1);
}

#[test]
fn test_rule_scanner_without_rules() {
    let scanner = RuleScanner::new(Vec::new());
    assert!(scanner.is_empty());

    let mut tokenizer = Tokenizer::from_text(scanner, "ab");
    let tokens = tokenizer.run().unwrap();
    assert_eq!(tokens.len(), 2);
    assert!(tokens.iter().all(|t| t.kind() == Type::UNKNOWN));
}

#[test]
fn test_rule_scanner_token_positions() {
    let mut tokenizer = Tokenizer::from_text(RuleScanner::new(rules()), "ab cd\nef");
    let tokens = tokenizer.run().unwrap();
    let starts: Vec<(usize, usize, usize)> = tokens
        .iter()
        .map(|t| (t.position().index, t.position().column, t.position().line))
        .collect();
    assert_eq!(
        starts,
        vec![(0, 1, 1), (2, 3, 1), (3, 4, 1), (5, 1, 2), (6, 1, 2)]
    );
}

/// Counts how often the scanner asked it to match.
struct CountingDigitRule {
    calls: Rc<Cell<usize>>,
}

impl<Ctx> LexingRule<Ctx> for CountingDigitRule
where
    Ctx: LexContext,
{
    fn try_match(&mut self, _first: char, _ctx: &mut Ctx) -> Result<Option<Type>, Error> {
        self.calls.set(self.calls.get() + 1);
        Ok(Some(ident()))
    }

    fn quick_check(&self, first: char) -> Option<bool> {
        Some(first.is_ascii_digit())
    }
}

#[test]
fn test_quick_check_skips_rule() {
    let calls = Rc::new(Cell::new(0));
    let rules: RuleSet = vec![Box::new(CountingDigitRule {
        calls: Rc::clone(&calls),
    })];

    let mut tokenizer = Tokenizer::from_text(RuleScanner::new(rules), "a1b22");
    let tokens = tokenizer.run().unwrap();
    assert_eq!(tokens.len(), 5);
    assert_eq!(calls.get(), 3);
    assert_eq!(tokens[0].kind(), Type::UNKNOWN);
    assert_eq!(tokens[1].kind(), ident());
}

/// Reads past the end of the text on purpose.
struct OverreadRule;

impl<Ctx> LexingRule<Ctx> for OverreadRule
where
    Ctx: LexContext,
{
    fn try_match(&mut self, _first: char, ctx: &mut Ctx) -> Result<Option<Type>, Error> {
        ctx.read(10)?;
        Ok(Some(ident()))
    }
}

#[test]
fn test_rule_error_stops_scan() {
    let mut tokenizer = Tokenizer::from_text(RuleScanner::new(vec![Box::new(OverreadRule)]), "abc");
    let err = tokenizer.run().unwrap_err();

    assert_eq!(err.context(), Some(Context::Scanning));
    assert!(matches!(
        err,
        Error::Lexer(ref lexer) if matches!(lexer.kind(), LexerError::OutOfBounds { .. })
    ));
    assert!(tokenizer.tokens().is_empty());
}
