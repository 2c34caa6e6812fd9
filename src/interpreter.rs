/// The evaluator module walks expression trees and computes results.
///
/// The evaluator visits every node of a tree, applies the arithmetic
/// operators, reads and writes the variable store and raises errors into the
/// diagnostics channel. It is the core execution engine of the calculator.
///
/// # Responsibilities
/// - Evaluates literals, variables, unary and binary operations, assignments
///   and print nodes.
/// - Reports evaluation errors such as division by zero or undefined
///   variables.
/// - Refuses to evaluate while earlier errors are pending.
pub mod evaluator;
/// The diagnostics module counts errors and gates trace output.
///
/// # Responsibilities
/// - Records every raised error and exposes the count.
/// - Emits trace messages through `tracing` according to a verbosity
///   threshold.
pub mod diagnostics;
/// The lexer module tokenizes input lines for further parsing.
///
/// The lexer reads the raw text of one line and produces a stream of tokens:
/// numbers, identifiers, the `print` keyword, operators and parentheses.
///
/// # Responsibilities
/// - Converts the input characters into tokens paired with the line number.
/// - Skips blanks and `//` comments.
/// - Reports unrecognized input.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// # Responsibilities
/// - Converts tokens into [`Expr`](crate::ast::Expr) trees with the usual
///   arithmetic precedence.
/// - Recognizes `print` statements and chained assignments.
/// - Reports syntax errors with their line number.
pub mod parser;
/// The session module drives one input line through parsing and evaluation.
pub mod session;
/// The symbols module holds the variable store.
///
/// # Responsibilities
/// - Declares variables and tracks whether they have been assigned.
/// - Stores and looks up values by name.
pub mod symbols;
