use crate::{
    ast::Expr,
    error::Error,
    interpreter::{
        evaluator::core::{SENTINEL, Session},
        parser::statement::parse_line,
    },
};

/// What happened to one input line.
#[derive(Debug)]
pub struct Outcome {
    /// The value of the line, [`SENTINEL`] if it could not be evaluated.
    pub value:  f64,
    /// Every error raised while handling the line, oldest first.
    pub errors: Vec<Error>,
    /// Whether the value should be shown to the user. Assignments are
    /// silent; `print` statements and bare expressions are not.
    pub echo:   bool,
}

impl Outcome {
    /// Returns `true` if no error was raised.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Session {
    /// Handles one line of input from start to finish.
    ///
    /// The line is parsed, every assignment target in it is declared, the
    /// tree is evaluated, and the raised errors are moved into the returned
    /// [`Outcome`], leaving the diagnostics channel empty for the next line.
    /// A parse error is raised into the channel like any other error, so the
    /// tree is never evaluated.
    ///
    /// Returns `None` for blank and comment-only lines.
    ///
    /// # Example
    /// ```
    /// use abacus::interpreter::evaluator::core::Session;
    ///
    /// let mut session = Session::new();
    ///
    /// let outcome = session.run_line("x = 10 / 4", 1).unwrap();
    /// assert_eq!(outcome.value, 2.5);
    /// assert!(!outcome.echo);
    ///
    /// let outcome = session.run_line("print x * 2", 2).unwrap();
    /// assert_eq!(outcome.value, 5.0);
    /// assert!(outcome.echo);
    ///
    /// let outcome = session.run_line("y + 1", 3).unwrap();
    /// assert!(outcome.value.is_nan());
    /// assert_eq!(outcome.errors.len(), 1);
    ///
    /// assert!(session.run_line("", 4).is_none());
    /// ```
    pub fn run_line(&mut self, source: &str, line: usize) -> Option<Outcome> {
        let (value, echo) = match parse_line(source, line) {
            Ok(None) => return None,
            Ok(Some(expr)) => {
                self.declare_targets(&expr);
                (self.evaluate(&expr), !matches!(expr, Expr::Assign { .. }))
            },
            Err(e) => {
                self.diagnostics.raise(e);
                (SENTINEL, false)
            },
        };

        Some(Outcome { value,
                       errors: self.diagnostics.take(),
                       echo })
    }

    /// Declares every variable the tree assigns to. Names that already exist
    /// keep their value.
    pub fn declare_targets(&mut self, expr: &Expr) {
        for name in expr.assignment_targets() {
            if self.symbols.declare(name).is_ok() {
                self.diagnostics
                    .log(1, format_args!("Declare symbol \"{name}\""));
            }
        }
    }
}
