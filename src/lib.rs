//! # abacus
//!
//! abacus is an interactive arithmetic expression calculator written in Rust.
//! It reads one line at a time, parses it into an expression tree, evaluates
//! the tree against a session-wide variable store and reports the result or
//! the errors the line raised.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::evaluator::core::Session;

/// Defines the expression tree.
///
/// This module declares the `Expr` enum with its six node variants, the
/// operator tags and the node identifiers. Trees are built bottom-up by the
/// constructor functions and traversed read-only by the evaluator and the
/// dump/Graphviz exporters.
///
/// # Responsibilities
/// - Defines the node variants and their constructors.
/// - Hands out unique node identifiers.
/// - Renders trees as text, node dumps and Graphviz graphs.
pub mod ast;
/// Provides error types for parsing, evaluation and the variable store.
///
/// This module defines all errors that can be raised while handling an input
/// line. Every error can be converted into the crate-level [`error::Error`]
/// that the diagnostics channel records.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator, store).
/// - Attaches line numbers or node ids for context.
/// - Implements the standard error traits for reporting.
pub mod error;
/// Orchestrates the handling of input lines.
///
/// This module ties together lexing, parsing, the variable store, the
/// diagnostics channel and evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and store.
/// - Provides the [`Session`] that carries state from line to line.
pub mod interpreter;
/// The read-eval-print loop used by the binary for interactive sessions and
/// script files.
pub mod repl;

/// Evaluates a script and returns the value of its last statement.
///
/// Every line of `source` is run in one fresh [`Session`], so variables
/// assigned on earlier lines are visible to later ones. Blank and
/// comment-only lines are skipped.
///
/// # Errors
/// Returns the first error raised by any line.
///
/// # Examples
/// ```
/// use abacus::get_result;
///
/// let value = get_result("x = 10 / 2\nprint x * 2").unwrap();
/// assert_eq!(value, Some(10.0));
///
/// // 'y' is never assigned.
/// assert!(get_result("x = y + 1").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Option<f64>, Box<dyn std::error::Error>> {
    let mut session = Session::new();
    let mut result = None;

    for (index, line) in source.lines().enumerate() {
        if let Some(outcome) = session.run_line(line, index + 1) {
            if let Some(error) = outcome.errors.into_iter().next() {
                return Err(Box::new(error));
            }
            result = Some(outcome.value);
        }
    }

    Ok(result)
}
