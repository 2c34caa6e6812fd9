use crate::error::Error;

/// Collects the errors raised while handling one input line.
///
/// The channel counts raised errors and keeps them in order so the caller
/// can report them. Evaluation refuses to start while the count is nonzero,
/// so the caller resets the channel between lines.
///
/// Trace messages go through [`log`](Self::log) and are only emitted when
/// their level does not exceed the configured verbosity.
///
/// ## Example
/// ```
/// use abacus::{
///     ast::Expr,
///     error::{Error, EvalError},
///     interpreter::diagnostics::Diagnostics,
/// };
///
/// let node = Expr::variable("y");
/// let mut diagnostics = Diagnostics::new(0);
/// diagnostics.raise(EvalError::UndefinedSymbol { name: "y".to_string(),
///                                                node: node.id(), });
///
/// assert_eq!(diagnostics.count(), 1);
/// assert!(matches!(diagnostics.errors()[0], Error::Eval(_)));
///
/// diagnostics.reset();
/// assert_eq!(diagnostics.count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct Diagnostics {
    raised:    Vec<Error>,
    verbosity: u8,
}

impl Diagnostics {
    /// Creates an empty channel with the given verbosity threshold.
    #[must_use]
    pub const fn new(verbosity: u8) -> Self {
        Self { raised: Vec::new(),
               verbosity }
    }

    /// Records an error and emits it.
    pub fn raise(&mut self, error: impl Into<Error>) {
        let error = error.into();
        tracing::error!("{error}");
        self.raised.push(error);
    }

    /// Number of errors raised since the last reset.
    #[must_use]
    pub fn count(&self) -> usize {
        self.raised.len()
    }

    /// The errors raised since the last reset, oldest first.
    #[must_use]
    pub fn errors(&self) -> &[Error] {
        &self.raised
    }

    /// Removes and returns all raised errors, leaving the count at zero.
    pub fn take(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.raised)
    }

    /// Forgets all raised errors.
    pub fn reset(&mut self) {
        self.raised.clear();
    }

    /// The current verbosity threshold.
    #[must_use]
    pub const fn verbosity(&self) -> u8 {
        self.verbosity
    }

    /// Changes the verbosity threshold.
    pub const fn set_verbosity(&mut self, verbosity: u8) {
        self.verbosity = verbosity;
    }

    /// Returns `true` if a message of `level` would be emitted.
    #[must_use]
    pub const fn enabled(&self, level: u8) -> bool {
        level <= self.verbosity
    }

    /// Emits a trace message if `level` does not exceed the verbosity
    /// threshold. Level 0 is informational, 1 is debug, anything higher is
    /// trace output.
    pub fn log(&self, level: u8, message: impl std::fmt::Display) {
        if !self.enabled(level) {
            return;
        }
        match level {
            0 => tracing::info!("{message}"),
            1 => tracing::debug!("{message}"),
            _ => tracing::trace!("{message}"),
        }
    }
}
