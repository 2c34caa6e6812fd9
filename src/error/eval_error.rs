use crate::ast::{NodeId, Operator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors the evaluator can raise.
///
/// Every variant records the [`NodeId`] of the node that raised it. The id is
/// only meant for tracing a message back to a node in a tree dump.
pub enum EvalError {
    /// A variable was read or assigned before being declared.
    UndefinedSymbol {
        /// The name of the variable.
        name: String,
        /// The node that referenced it.
        node: NodeId,
    },
    /// A node is structurally malformed, e.g. an assignment whose target is
    /// not a variable reference.
    InvalidNode {
        /// Details about what is wrong with the node.
        details: String,
        /// The malformed node.
        node:    NodeId,
    },
    /// A node carries an operator tag that is not valid for its variant.
    InvalidOperator {
        /// The offending tag.
        op:   Operator,
        /// The variant that carried it (`"unary"` or `"binary"`).
        kind: &'static str,
        /// The node carrying the tag.
        node: NodeId,
    },
    /// The right operand of `/` or `%` was exactly zero.
    DivisionByZero {
        /// The division or modulo node.
        node: NodeId,
    },
    /// The store rejected an update for a name that was found just before.
    AssignmentFailed {
        /// The name of the variable.
        name: String,
        /// The assignment node.
        node: NodeId,
    },
}

impl EvalError {
    /// Gets the id of the node that raised the error.
    #[must_use]
    pub const fn node(&self) -> NodeId {
        match self {
            Self::UndefinedSymbol { node, .. }
            | Self::InvalidNode { node, .. }
            | Self::InvalidOperator { node, .. }
            | Self::DivisionByZero { node }
            | Self::AssignmentFailed { node, .. } => *node,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedSymbol { name, .. } => write!(f, "Symbol \"{name}\" is not defined."),
            Self::InvalidNode { details, node } => {
                write!(f, "Invalid node #{node}: {details}.")
            },
            Self::InvalidOperator { op, kind, node } => {
                write!(f, "Invalid {kind} operator '{op}' on node #{node}.")
            },
            Self::DivisionByZero { .. } => write!(f, "Division by zero."),
            Self::AssignmentFailed { name, .. } => {
                write!(f, "Assignment to symbol \"{name}\" failed: symbol not found.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
