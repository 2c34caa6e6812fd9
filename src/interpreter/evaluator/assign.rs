use crate::{
    ast::{Expr, NodeId},
    error::EvalError,
    interpreter::evaluator::core::{SENTINEL, Session},
};

impl Session {
    /// Evaluates an assignment node.
    ///
    /// The target must be a variable reference naming a declared variable;
    /// otherwise `InvalidNode` or `UndefinedSymbol` is raised and the value
    /// expression is not evaluated. The value is stored and returned unless
    /// evaluating it raised an error, in which case the store is left as it
    /// was and the sentinel is returned.
    pub(crate) fn eval_assign(&mut self, target: &Expr, value: &Expr, node: NodeId) -> f64 {
        let Expr::Variable { name, id } = target else {
            let details = format!("assignment target is a {} node, expected a variable",
                                  target.kind());
            return self.raise(EvalError::InvalidNode { details, node });
        };

        if self.symbols.lookup(name).is_err() {
            return self.raise(EvalError::UndefinedSymbol { name: name.clone(),
                                                           node: *id, });
        }

        let errors = self.diagnostics.count();
        let result = self.eval(value);
        // A failed value never reaches the store; the old value, if any, stays.
        if self.diagnostics.count() > errors {
            self.diagnostics
                .log(1, format_args!("Leave \"{name}\" unchanged, its value raised errors"));
            return SENTINEL;
        }

        match self.symbols.assign(name, result) {
            Ok(()) => result,
            Err(_) => self.raise(EvalError::AssignmentFailed { name: name.clone(),
                                                               node }),
        }
    }
}
