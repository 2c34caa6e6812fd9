use crate::{
    ast::{Expr, NodeId, Operator},
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, Session},
};

impl Session {
    /// Applies a binary arithmetic operator to two values.
    ///
    /// `/` and `%` check for an exactly zero right operand and report
    /// `EvalError::DivisionByZero` instead of producing an infinity or NaN.
    /// `%` is the floating-point remainder: the result takes the sign of the
    /// dividend (`-5.5 % 2 == -1.5`).
    ///
    /// NaN operands are not errors; they flow through the arithmetic as
    /// usual.
    ///
    /// # Parameters
    /// - `op`: Operator tag of the node.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `node`: Id of the node, for error reporting.
    ///
    /// # Returns
    /// The computed value, or the error to raise.
    ///
    /// # Example
    /// ```
    /// use abacus::{
    ///     ast::{Expr, Operator},
    ///     error::EvalError,
    ///     interpreter::evaluator::core::Session,
    /// };
    ///
    /// let node = Expr::literal(0.0).id();
    ///
    /// assert_eq!(Session::apply_binary(Operator::Mod, 5.5, 2.0, node).unwrap(), 1.5);
    /// assert!(matches!(Session::apply_binary(Operator::Div, 1.0, 0.0, node),
    ///                  Err(EvalError::DivisionByZero { .. })));
    /// ```
    pub fn apply_binary(op: Operator, left: f64, right: f64, node: NodeId) -> EvalResult<f64> {
        match op {
            Operator::Add => Ok(left + right),
            Operator::Sub => Ok(left - right),
            Operator::Mul => Ok(left * right),
            Operator::Div | Operator::Mod if right == 0.0 => {
                Err(EvalError::DivisionByZero { node })
            },
            Operator::Div => Ok(left / right),
            Operator::Mod => Ok(left % right),
            Operator::Abs | Operator::Negate => Err(EvalError::InvalidOperator { op,
                                                                                 kind: "binary",
                                                                                 node }),
        }
    }

    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: Operator,
                                 right: &Expr,
                                 node: NodeId)
                                 -> f64 {
        let left = self.eval(left);
        let right = self.eval(right);
        Self::apply_binary(op, left, right, node).unwrap_or_else(|e| self.raise(e))
    }
}
