/// Core parsing entry points.
///
/// Defines the parse result type and the expression entry point.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles prefix `+`/`-`, numbers, identifiers and parenthesized groups.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence levels.
pub mod binary;

/// Statement parsing.
///
/// Implements `print`, assignments and whole-line parsing.
pub mod statement;
