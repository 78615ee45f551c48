use crate::scanner::Scanner;
use crate::token::Token;
use crate::token::TokenKind;
use anyhow::anyhow;
use anyhow::Result;
use pratt::Grammar;
use pratt::Parser;
use tracing::debug;

pub type CalcGrammar = Grammar<TokenKind, Token, i64>;

fn overflow(token: &Token) -> anyhow::Error {
    anyhow!("Overflow in {token} at {}", token.location)
}

/// Division that rounds towards negative infinity.
fn floor_div(token: &Token, left: i64, right: i64) -> Result<i64> {
    if right == 0 {
        return Err(anyhow!("Division by zero at {}", token.location));
    }
    let quotient = left.checked_div(right).ok_or_else(|| overflow(token))?;
    let remainder = left.checked_rem(right).ok_or_else(|| overflow(token))?;
    if remainder != 0 && (remainder < 0) != (right < 0) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}

/// Remainder with the sign of the divisor.
fn floor_mod(token: &Token, left: i64, right: i64) -> Result<i64> {
    if right == 0 {
        return Err(anyhow!("Division by zero at {}", token.location));
    }
    let remainder = left.checked_rem(right).ok_or_else(|| overflow(token))?;
    if remainder != 0 && (remainder < 0) != (right < 0) {
        Ok(remainder + right)
    } else {
        Ok(remainder)
    }
}

fn power(token: &Token, base: i64, exponent: i64) -> Result<i64> {
    let exponent = u32::try_from(exponent)
        .map_err(|_| anyhow!("Invalid exponent {exponent} at {}", token.location))?;
    base.checked_pow(exponent).ok_or_else(|| overflow(token))
}

fn factorial(token: &Token, n: i64) -> Result<i64> {
    if n < 0 {
        return Err(anyhow!("Factorial of negative number at {}", token.location));
    }
    (1..=n).try_fold(1i64, |acc, i| acc.checked_mul(i).ok_or_else(|| overflow(token)))
}

/// Build the grammar for integer arithmetic.
///
/// Operators from loosest to tightest: `? :`, `+ -`, `* / %`, `^` (right
/// associative), `!` (postfix), and unary `+ -`.
pub fn grammar() -> Result<CalcGrammar> {
    let mut grammar: CalcGrammar = Grammar::new(
        |token: &Token| token.kind,
        |token: &Token| Err(anyhow!("Unexpected token {token} at {}", token.location)),
    );
    grammar.declare(TokenKind::Eof);
    grammar.literal(TokenKind::Integer, |token| {
        token
            .lexeme
            .parse::<i64>()
            .map_err(|e| anyhow!("Invalid integer {token} at {}: {e}", token.location))
    })?;

    // Unary operators are registered at 0 and parse their operand at 100.
    // Registering them at 100 would raise the binding power of the infix
    // operators on the same tokens.
    grammar.set_prefix(TokenKind::Plus, 0, |_, parser| parser.parse_with(100))?;
    grammar.set_prefix(TokenKind::Minus, 0, |token, parser| {
        let operand = parser.parse_with(100)?;
        operand.checked_neg().ok_or_else(|| overflow(&token))
    })?;

    grammar.infix(TokenKind::Plus, 10, |token, left, right| {
        left.checked_add(right).ok_or_else(|| overflow(&token))
    })?;
    grammar.infix(TokenKind::Minus, 10, |token, left, right| {
        left.checked_sub(right).ok_or_else(|| overflow(&token))
    })?;
    grammar.infix(TokenKind::Star, 20, |token, left, right| {
        left.checked_mul(right).ok_or_else(|| overflow(&token))
    })?;
    grammar.infix(TokenKind::Slash, 20, |token, left, right| {
        floor_div(&token, left, right)
    })?;
    grammar.infix(TokenKind::Percent, 20, |token, left, right| {
        floor_mod(&token, left, right)
    })?;
    grammar.infix_r(TokenKind::Caret, 30, |token, left, right| {
        power(&token, left, right)
    })?;
    grammar.postfix(TokenKind::Exclamation, 40, |token, operand| {
        factorial(&token, operand)
    })?;
    grammar.enclosing(TokenKind::LParen, TokenKind::RParen, 100, |_, _, body| Ok(body))?;
    grammar.ternary(
        TokenKind::Question,
        TokenKind::Colon,
        5,
        |_, _, condition, then, orelse| Ok(if condition != 0 { then } else { orelse }),
    )?;
    Ok(grammar)
}

/// Evaluate a single expression.
///
/// All tokens up to the end of the input have to be used.
pub fn evaluate(grammar: &CalcGrammar, src: &str) -> Result<i64> {
    let tokens = Scanner::scan(src)?;
    debug!("Scanned {} tokens", tokens.len());
    let mut parser = Parser::new(grammar, tokens);
    let value = parser.parse()?;
    match parser.token() {
        Some(token) if token.kind != TokenKind::Eof => {
            let msg = format!("Expected end of input, got {token}");
            Err(anyhow!(Scanner::error(src, &token.location, &msg)))
        }
        _ => Ok(value),
    }
}
