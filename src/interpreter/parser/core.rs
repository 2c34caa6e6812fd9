use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The deepest expression tree the parser builds, counted in nodes from the
/// root to the farthest leaf. Parentheses may nest at most this deep too.
pub const MAX_NESTING: usize = 256;

/// Rejects a node that would make the tree deeper than [`MAX_NESTING`].
///
/// # Errors
/// `ParseError::NestingTooDeep` if `depth` exceeds the limit.
pub(crate) const fn check_depth(depth: usize, line: usize) -> ParseResult<()> {
    if depth > MAX_NESTING {
        return Err(ParseError::NestingTooDeep { line });
    }
    Ok(())
}

/// Parses a full arithmetic expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens)
}
