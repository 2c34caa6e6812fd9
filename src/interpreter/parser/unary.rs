use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, check_depth, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `+`  (absolute value)
/// - `-`  (numeric negation)
///
/// Unary operators are right-associative, so `-+x` is parsed as `-(+x)`,
/// the negated absolute value of `x`. A run of prefix operators is read in a
/// loop and folded onto its operand from the inside out.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | primary
/// ```
///
/// # Errors
/// `NestingTooDeep` if the operators stack the tree beyond `MAX_NESTING`.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut ops = Vec::new();
    while let Some((token, line)) = tokens.peek() {
        let op = match token {
            Token::Plus => UnaryOperator::Abs,
            Token::Minus => UnaryOperator::Negate,
            _ => break,
        };
        ops.push((op, *line));
        tokens.next();
    }

    let mut expr = parse_primary(tokens)?;
    let mut depth = expr.depth();
    for (op, line) in ops.into_iter().rev() {
        depth += 1;
        check_depth(depth, line)?;
        expr = Expr::unary(op, expr);
    }
    Ok(expr)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := number
///              | identifier
///              | "(" expression ")"
/// ```
///
/// # Errors
/// - `UnexpectedEndOfInput` if the line ends where an operand is expected.
/// - `UnexpectedToken` for any other token in operand position.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(value), _)) => Ok(Expr::literal(*value)),
        Some((Token::Identifier(name), _)) => Ok(Expr::variable(name.as_str())),
        Some((Token::LParen, line)) => parse_grouping(tokens, *line),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses the remainder of a parenthesized expression after its `(`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}
