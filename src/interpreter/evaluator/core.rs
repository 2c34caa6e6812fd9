use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{diagnostics::Diagnostics, symbols::SymbolTable},
};

/// Result type used by the operator helpers.
///
/// The helpers return either a value or the `EvalError` to raise. The
/// recursive evaluator itself never returns errors; it raises them into the
/// diagnostics channel and yields [`SENTINEL`] instead.
pub type EvalResult<T> = Result<T, EvalError>;

/// The value every failing evaluation step yields.
pub const SENTINEL: f64 = f64::NAN;

/// One evaluation session.
///
/// A session owns the variable store and the diagnostics channel that every
/// evaluation reads and writes. Independent sessions share nothing, so they
/// can live on different threads.
///
/// ## Usage
///
/// A `Session` is created once and reused for every input line. Variables
/// assigned by one evaluation stay visible to the next; the diagnostics
/// channel must be reset between lines (see
/// [`run_line`](Session::run_line), which does it for you).
#[derive(Debug, Default)]
pub struct Session {
    /// The variable store.
    pub symbols:     SymbolTable,
    /// The error count and trace output gate.
    pub diagnostics: Diagnostics,
}

impl Session {
    /// Creates a session with an empty store and verbosity 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session whose diagnostics emit trace messages up to
    /// `verbosity`.
    #[must_use]
    pub fn with_verbosity(verbosity: u8) -> Self {
        Self { symbols:     SymbolTable::new(),
               diagnostics: Diagnostics::new(verbosity), }
    }

    /// Evaluates a tree and returns its value.
    ///
    /// This is the main entry point for evaluation. If the diagnostics channel
    /// already holds errors, nothing is evaluated and [`SENTINEL`] is
    /// returned. Otherwise the tree is visited recursively; every error is
    /// raised into the channel and the failing node yields `SENTINEL`.
    /// Sample [`Diagnostics::count`] afterwards to learn whether the call
    /// raised anything.
    ///
    /// Errors do not stop the traversal: siblings of a failing node are
    /// still evaluated and the NaN poisons the arithmetic above it.
    ///
    /// # Example
    /// ```
    /// use abacus::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::evaluator::core::Session,
    /// };
    ///
    /// let mut session = Session::new();
    /// let expr = Expr::binary(BinaryOperator::Div, Expr::literal(1.0), Expr::literal(0.0));
    ///
    /// assert!(session.evaluate(&expr).is_nan());
    /// assert_eq!(session.diagnostics.count(), 1);
    ///
    /// // Gated until the channel is reset.
    /// assert!(session.evaluate(&Expr::literal(2.0)).is_nan());
    /// session.diagnostics.reset();
    /// assert_eq!(session.evaluate(&Expr::literal(2.0)), 2.0);
    /// ```
    pub fn evaluate(&mut self, expr: &Expr) -> f64 {
        let errors = self.diagnostics.count();
        if errors > 0 {
            self.diagnostics
                .log(1, format_args!("Skip the AST, {errors} error(s) already raised"));
            return SENTINEL;
        }
        self.diagnostics.log(1, "Traverse the AST");
        self.eval(expr)
    }

    /// Visits one node, dispatching on its variant.
    pub(crate) fn eval(&mut self, expr: &Expr) -> f64 {
        self.diagnostics
            .log(2, format_args!("Visit {} node #{}", expr.kind(), expr.id()));

        match expr {
            Expr::Literal { value, .. } => *value,
            Expr::Variable { name, id } => match self.symbols.lookup(name) {
                Ok(value) => value,
                Err(_) => self.raise(EvalError::UndefinedSymbol { name: name.clone(),
                                                                  node: *id, }),
            },
            Expr::Unary { op, expr, id } => self.eval_unary_op(*op, expr, *id),
            Expr::Binary { left, op, right, id } => self.eval_binary_op(left, *op, right, *id),
            Expr::Assign { target, value, id } => self.eval_assign(target, value, *id),
            Expr::Print { expr, .. } => self.eval(expr),
        }
    }

    /// Raises `error` and returns the sentinel in its place.
    pub(crate) fn raise(&mut self, error: EvalError) -> f64 {
        self.diagnostics.raise(error);
        SENTINEL
    }
}
