use crate::{
    ast::{Expr, NodeId, Operator},
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, Session},
};

impl Session {
    /// Applies a unary operator to a value.
    ///
    /// Supported operators:
    /// - `Abs`: absolute value (written as a prefix `+`).
    /// - `Negate`: arithmetic negation.
    ///
    /// Any other tag is rejected with `EvalError::InvalidOperator`; a unary
    /// node carrying it was built incorrectly.
    ///
    /// # Parameters
    /// - `op`: Operator tag of the node.
    /// - `value`: The evaluated operand.
    /// - `node`: Id of the node, for error reporting.
    ///
    /// # Example
    /// ```
    /// use abacus::{
    ///     ast::{Expr, Operator},
    ///     interpreter::evaluator::core::Session,
    /// };
    ///
    /// let node = Expr::literal(0.0).id();
    ///
    /// assert_eq!(Session::apply_unary(Operator::Abs, -2.5, node).unwrap(), 2.5);
    /// assert_eq!(Session::apply_unary(Operator::Negate, 4.0, node).unwrap(), -4.0);
    /// assert!(Session::apply_unary(Operator::Mul, 4.0, node).is_err());
    /// ```
    pub const fn apply_unary(op: Operator, value: f64, node: NodeId) -> EvalResult<f64> {
        match op {
            Operator::Abs => Ok(value.abs()),
            Operator::Negate => Ok(-value),
            _ => Err(EvalError::InvalidOperator { op,
                                                  kind: "unary",
                                                  node }),
        }
    }

    pub(crate) fn eval_unary_op(&mut self, op: Operator, expr: &Expr, node: NodeId) -> f64 {
        let value = self.eval(expr);
        Self::apply_unary(op, value, node).unwrap_or_else(|e| self.raise(e))
    }
}
