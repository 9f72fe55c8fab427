//! 文本分词与解析示例
//!
//! A plain-text tokenizer built from lexing rules, and two reducers over its
//! tokens: one that reassembles the text with a few substitutions, one that
//! splits it into sentences.

use lexer_framework::{
    LexContext, LexingRule, Result, RuleScanner, Scanner, Token, TokenizerState, Type,
};
use parser_framework::{Reducer, TokenCursor};

/// The kind of words: runs of letters and apostrophes.
pub fn word() -> Result<Type> {
    Ok(Type::register("Word")?)
}

/// The kind of numbers: runs of digits, with `.` or `,` between digits.
pub fn number() -> Result<Type> {
    Ok(Type::register("Number")?)
}

/// Characters that form a token of their own.
fn punctuation(ch: char) -> Option<Type> {
    match ch {
        '.' => Some(Type::PERIOD),
        ',' => Some(Type::COMMA),
        '!' => Some(Type::EXCLAMATION),
        '?' => Some(Type::QUESTION),
        ':' => Some(Type::COLON),
        ';' => Some(Type::SEMI_COLON),
        '\n' => Some(Type::NEW_LINE),
        '\r' => Some(Type::CARRIAGE_RETURN),
        '\t' => Some(Type::TAB),
        _ => None,
    }
}

/// 单字符标点（含换行、回车、制表符）
pub struct PunctuationRule;

impl<Ctx: LexContext> LexingRule<Ctx> for PunctuationRule {
    fn try_match(&mut self, first: char, _ctx: &mut Ctx) -> Result<Option<Type>> {
        Ok(punctuation(first))
    }

    fn priority(&self) -> i32 {
        30
    }

    fn quick_check(&self, first: char) -> Option<bool> {
        Some(punctuation(first).is_some())
    }
}

/// 连续空白，遇到有独立类型的字符即停止
pub struct SpacingRule;

impl<Ctx: LexContext> LexingRule<Ctx> for SpacingRule {
    fn try_match(&mut self, _first: char, ctx: &mut Ctx) -> Result<Option<Type>> {
        ctx.consume_while(|ch| ch.is_whitespace() && punctuation(ch).is_none());
        Ok(Some(Type::SPACING))
    }

    fn priority(&self) -> i32 {
        20
    }

    fn quick_check(&self, first: char) -> Option<bool> {
        Some(first.is_whitespace())
    }
}

/// 数字，`.` 和 `,` 仅在两侧都是数字时计入
pub struct NumberRule;

impl<Ctx: LexContext> LexingRule<Ctx> for NumberRule {
    fn try_match(&mut self, _first: char, ctx: &mut Ctx) -> Result<Option<Type>> {
        loop {
            ctx.consume_while(char::is_numeric);
            match (ctx.peek(), ctx.peek_at(1)) {
                (Some('.' | ','), Some(next)) if next.is_numeric() => {
                    ctx.consume()?;
                }
                _ => break,
            }
        }
        Ok(Some(number()?))
    }

    fn priority(&self) -> i32 {
        15
    }

    fn quick_check(&self, first: char) -> Option<bool> {
        Some(first.is_numeric())
    }
}

/// 单词：字母与撇号
pub struct WordRule;

impl<Ctx: LexContext> LexingRule<Ctx> for WordRule {
    fn try_match(&mut self, _first: char, ctx: &mut Ctx) -> Result<Option<Type>> {
        ctx.consume_while(|ch| ch.is_alphabetic() || ch == '\'');
        Ok(Some(word()?))
    }

    fn priority(&self) -> i32 {
        10
    }

    fn quick_check(&self, first: char) -> Option<bool> {
        Some(first.is_alphabetic() || first == '\'')
    }
}

/// The plain-text scanner. Anything no rule claims becomes `Unknown`.
#[derive(Debug)]
pub struct TextScanner {
    rules: RuleScanner,
}

impl Default for TextScanner {
    fn default() -> Self {
        Self {
            rules: RuleScanner::new(vec![
                Box::new(PunctuationRule),
                Box::new(SpacingRule),
                Box::new(NumberRule),
                Box::new(WordRule),
            ]),
        }
    }
}

impl Scanner for TextScanner {
    fn scan(&mut self, state: &mut TokenizerState) -> Result<()> {
        self.rules.scan(state)
    }
}

/// Reassembles the text. Periods and exclamation marks swap places, each
/// space becomes `•` and new lines become tabs.
#[derive(Debug, Default)]
pub struct TextReducer;

impl Reducer for TextReducer {
    type Scanner = TextScanner;
    type Output = String;

    fn reduce(&mut self, tokens: &[Token]) -> Result<String> {
        let mut text = String::new();
        for token in tokens {
            match token.kind() {
                Type::NEW_LINE | Type::TAB => text.push('\t'),
                Type::CARRIAGE_RETURN => text.push('\r'),
                Type::PERIOD => text.push('!'),
                Type::EXCLAMATION => text.push('.'),
                Type::SPACING => text.extend(std::iter::repeat('•').take(token.len())),
                _ => text.push_str(token.text()),
            }
        }
        Ok(text)
    }
}

fn is_terminator(kind: Type) -> bool {
    matches!(kind, Type::PERIOD | Type::EXCLAMATION | Type::QUESTION)
}

fn is_blank(kind: Type) -> bool {
    matches!(
        kind,
        Type::SPACING | Type::NEW_LINE | Type::CARRIAGE_RETURN | Type::TAB
    )
}

/// Splits the text into sentences ending in `.`, `!` or `?`, with blank
/// runs collapsed to one space. Trailing text without a terminator is kept
/// as a final sentence.
#[derive(Debug, Default)]
pub struct SentenceReducer;

impl Reducer for SentenceReducer {
    type Scanner = TextScanner;
    type Output = Vec<String>;

    fn reduce(&mut self, tokens: &[Token]) -> Result<Vec<String>> {
        let mut cursor = TokenCursor::new(tokens);
        let mut sentences = Vec::new();

        while !cursor.is_eof() {
            let mut sentence = String::new();
            while let Some(token) = cursor.advance() {
                let kind = token.kind();
                if is_blank(kind) {
                    if !sentence.is_empty() && !sentence.ends_with(' ') {
                        sentence.push(' ');
                    }
                    continue;
                }

                sentence.push_str(token.text());
                if is_terminator(kind) {
                    // "?!" and "..." close a single sentence
                    while let Some(next) = cursor.peek().filter(|t| is_terminator(t.kind())) {
                        sentence.push_str(next.text());
                        cursor.advance();
                    }
                    break;
                }
            }

            let sentence = sentence.trim_end();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
        }

        Ok(sentences)
    }
}
