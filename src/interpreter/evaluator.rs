/// Core evaluation logic and session state.
///
/// Contains the [`Session`](core::Session) that bundles the symbol table with
/// the diagnostics channel, the gated entry point and the per-variant
/// dispatch.
pub mod core;

/// Unary operator evaluation.
///
/// Implements absolute value and negation.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the five arithmetic operators, including the division by zero
/// checks for `/` and `%`.
pub mod binary;

/// Assignment evaluation.
///
/// Resolves the target against the symbol table and stores the value.
pub mod assign;
