use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::core::{MAX_NESTING, ParseResult, check_depth, parse_expression},
    },
};

/// Parses a single input line into an expression tree.
///
/// Blank lines and lines holding only a comment produce `Ok(None)`.
///
/// # Parameters
/// - `source`: The text of the line.
/// - `line`: Its line number, used in error messages.
///
/// # Errors
/// Returns a `ParseError` if the line cannot be tokenized, is not a valid
/// statement, nests deeper than `MAX_NESTING`, or has tokens left over after
/// the statement.
///
/// # Example
/// ```
/// use abacus::interpreter::parser::statement::parse_line;
///
/// let expr = parse_line("print x = (2 + 3) * 4", 1).unwrap().unwrap();
/// assert_eq!(expr.to_string(), "print x = ((2 + 3) * 4)");
///
/// assert!(parse_line("   // nothing here", 2).unwrap().is_none());
/// assert!(parse_line("2 +", 3).is_err());
/// ```
pub fn parse_line(source: &str, line: usize) -> ParseResult<Option<Expr>> {
    let tokens = tokenize(source, line)?;
    if tokens.is_empty() {
        return Ok(None);
    }
    check_parentheses(&tokens)?;

    let mut iter = tokens.iter().peekable();
    let statement = match parse_statement(&mut iter) {
        Err(ParseError::UnexpectedEndOfInput { .. }) => {
            return Err(ParseError::UnexpectedEndOfInput { line });
        },
        result => result?,
    };

    if let Some((tok, line)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                          line:  *line, });
    }

    Ok(Some(statement))
}

/// Rejects lines whose parentheses nest deeper than `MAX_NESTING` before the
/// recursive descent starts.
fn check_parentheses(tokens: &[(Token, usize)]) -> ParseResult<()> {
    let mut open = 0_usize;
    for (token, line) in tokens {
        match token {
            Token::LParen => {
                open += 1;
                if open > MAX_NESTING {
                    return Err(ParseError::NestingTooDeep { line: *line });
                }
            },
            Token::RParen => open = open.saturating_sub(1),
            _ => {},
        }
    }
    Ok(())
}

/// Parses a single statement.
///
/// A statement is either a `print` statement or an assignment/expression:
///
/// ```text
///     statement := "print" assignment
///                | assignment
/// ```
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Print, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let expr = parse_assignment(tokens)?;
        check_depth(expr.depth() + 1, line)?;
        return Ok(Expr::print(expr));
    }
    parse_assignment(tokens)
}

/// Parses a possibly chained assignment.
///
/// Assignments are right-associative, so `a = b = 1` assigns `1` to `b` and
/// then to `a`. The leading `identifier "="` pairs are collected first and
/// wrapped around the value afterwards. Anything that does not start with
/// `identifier "="` is parsed as a plain expression.
///
/// ```text
///     assignment := identifier "=" assignment
///                 | expression
/// ```
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut targets = Vec::new();
    loop {
        let mut lookahead = tokens.clone();
        let Some((Token::Identifier(name), line)) = lookahead.next() else {
            break;
        };
        let Some((Token::Equals, _)) = lookahead.next() else {
            break;
        };
        targets.push((name.as_str(), *line));
        tokens.next();
        tokens.next();
    }

    let mut expr = parse_expression(tokens)?;
    let mut depth = expr.depth();
    for (name, line) in targets.into_iter().rev() {
        depth += 1;
        check_depth(depth, line)?;
        expr = Expr::assign(name, expr);
    }
    Ok(expr)
}
