use std::{
    fmt::Write as _,
    sync::atomic::{AtomicU64, Ordering},
};

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(0);

/// Unique, monotonically increasing identifier of an expression node.
///
/// Ids are handed out by a process-wide counter when a node is constructed.
/// They are used for dumps, Graphviz export and error messages only and carry
/// no meaning for evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    fn next() -> Self {
        Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw counter value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The operator tag stored in unary and binary nodes.
///
/// Unary nodes accept `Abs` and `Negate`, binary nodes accept `Add` through
/// `Mod`. Any other pairing can be built by hand and is rejected by the
/// evaluator with an invalid-operator error.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Floating-point remainder (`%`)
    Mod,
    /// Absolute value (prefix `+`)
    Abs,
    /// Arithmetic negation (prefix `-`)
    Negate,
}

/// Operators accepted by [`Expr::unary`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Absolute value, written as a prefix `+`.
    Abs,
    /// Arithmetic negation, written as a prefix `-`.
    Negate,
}

/// Operators accepted by [`Expr::binary`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Floating-point remainder (`%`)
    Mod,
}

impl From<UnaryOperator> for Operator {
    fn from(value: UnaryOperator) -> Self {
        match value {
            UnaryOperator::Abs => Self::Abs,
            UnaryOperator::Negate => Self::Negate,
        }
    }
}

impl From<BinaryOperator> for Operator {
    fn from(value: BinaryOperator) -> Self {
        match value {
            BinaryOperator::Add => Self::Add,
            BinaryOperator::Sub => Self::Sub,
            BinaryOperator::Mul => Self::Mul,
            BinaryOperator::Div => Self::Div,
            BinaryOperator::Mod => Self::Mod,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Abs => "abs",
            Self::Negate => "neg",
        };
        write!(f, "{operator}")
    }
}

/// An expression tree node.
///
/// `Expr` covers the six constructs of the calculator: literals, variable
/// references, unary and binary arithmetic, assignment and print. Every node
/// owns its children exclusively, so dropping the root releases the whole
/// tree. Trees are never mutated after construction; evaluation only reads
/// them.
///
/// Nodes are normally built with the constructor functions ([`Expr::literal`],
/// [`Expr::variable`], ...), which also hand out the [`NodeId`].
#[derive(Debug)]
pub enum Expr {
    /// A floating-point constant.
    Literal {
        /// The constant value.
        value: f64,
        /// Node identifier.
        id:    NodeId,
    },
    /// Reference to a variable by name, resolved against the symbol table at
    /// evaluation time.
    Variable {
        /// Name of the variable.
        name: String,
        /// Node identifier.
        id:   NodeId,
    },
    /// A unary operation.
    Unary {
        /// The operator tag, `Abs` or `Negate` for well-formed nodes.
        op:   Operator,
        /// The operand expression.
        expr: Box<Self>,
        /// Node identifier.
        id:   NodeId,
    },
    /// A binary operation, operands evaluated left to right.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator tag, `Add` through `Mod` for well-formed nodes.
        op:    Operator,
        /// Right operand.
        right: Box<Self>,
        /// Node identifier.
        id:    NodeId,
    },
    /// Assignment of `value` to the variable named by `target`.
    Assign {
        /// Assignment target. Always an [`Expr::Variable`] when built by
        /// [`Expr::assign`].
        target: Box<Self>,
        /// The value expression.
        value:  Box<Self>,
        /// Node identifier.
        id:     NodeId,
    },
    /// Yields the value of its operand unchanged; displaying it is up to the
    /// caller.
    Print {
        /// The expression to print.
        expr: Box<Self>,
        /// Node identifier.
        id:   NodeId,
    },
}

impl Expr {
    /// Creates a literal node.
    ///
    /// ## Example
    /// ```
    /// use abacus::ast::Expr;
    ///
    /// let expr = Expr::literal(2.5);
    /// assert!(matches!(expr, Expr::Literal { value, .. } if value == 2.5));
    /// ```
    #[must_use]
    pub fn literal(value: f64) -> Self {
        Self::Literal { value,
                        id: NodeId::next() }
    }

    /// Creates a variable reference. The node owns its copy of `name`.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into(),
                         id:   NodeId::next(), }
    }

    /// Creates a unary operation node.
    #[must_use]
    pub fn unary(op: UnaryOperator, expr: Self) -> Self {
        Self::Unary { op:   op.into(),
                      expr: Box::new(expr),
                      id:   NodeId::next(), }
    }

    /// Creates a binary operation node.
    ///
    /// ## Example
    /// ```
    /// use abacus::ast::{BinaryOperator, Expr};
    ///
    /// // 2 + 3 * 4
    /// let expr = Expr::binary(BinaryOperator::Add,
    ///                         Expr::literal(2.0),
    ///                         Expr::binary(BinaryOperator::Mul,
    ///                                      Expr::literal(3.0),
    ///                                      Expr::literal(4.0)));
    ///
    /// assert_eq!(expr.to_string(), "(2 + (3 * 4))");
    /// ```
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Binary { left:  Box::new(left),
                       op:    op.into(),
                       right: Box::new(right),
                       id:    NodeId::next(), }
    }

    /// Creates an assignment node. The target slot is built as
    /// `Expr::variable(name)`.
    #[must_use]
    pub fn assign(name: impl Into<String>, value: Self) -> Self {
        let target = Self::variable(name);
        Self::Assign { target: Box::new(target),
                       value:  Box::new(value),
                       id:     NodeId::next(), }
    }

    /// Creates a print node.
    #[must_use]
    pub fn print(expr: Self) -> Self {
        Self::Print { expr: Box::new(expr),
                      id:   NodeId::next(), }
    }

    /// Gets the node identifier from `self`.
    /// ## Example
    /// ```
    /// use abacus::ast::Expr;
    ///
    /// let first = Expr::literal(1.0);
    /// let second = Expr::literal(2.0);
    ///
    /// assert!(first.id() < second.id());
    /// ```
    #[must_use]
    pub const fn id(&self) -> NodeId {
        match self {
            Self::Literal { id, .. }
            | Self::Variable { id, .. }
            | Self::Unary { id, .. }
            | Self::Binary { id, .. }
            | Self::Assign { id, .. }
            | Self::Print { id, .. } => *id,
        }
    }

    /// Short name of the node variant, used in trace output and dumps.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Literal { .. } => "literal",
            Self::Variable { .. } => "variable",
            Self::Unary { .. } => "unary",
            Self::Binary { .. } => "binary",
            Self::Assign { .. } => "assign",
            Self::Print { .. } => "print",
        }
    }

    /// Returns the direct children of this node, left to right.
    #[must_use]
    pub fn children(&self) -> Vec<&Self> {
        match self {
            Self::Literal { .. } | Self::Variable { .. } => Vec::new(),
            Self::Unary { expr, .. } | Self::Print { expr, .. } => vec![expr.as_ref()],
            Self::Binary { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Self::Assign { target, value, .. } => vec![target.as_ref(), value.as_ref()],
        }
    }

    /// Number of nodes on the longest path from this node down to a leaf.
    ///
    /// ## Example
    /// ```
    /// use abacus::ast::{Expr, UnaryOperator};
    ///
    /// assert_eq!(Expr::literal(1.0).depth(), 1);
    /// assert_eq!(Expr::assign("x", Expr::unary(UnaryOperator::Negate, Expr::literal(1.0))).depth(),
    ///            3);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children()
                .into_iter()
                .map(Self::depth)
                .max()
                .unwrap_or(0)
    }

    /// Collects the names of all variables this tree assigns to, in the order
    /// the evaluator reaches them.
    ///
    /// ## Example
    /// ```
    /// use abacus::ast::Expr;
    ///
    /// let expr = Expr::print(Expr::assign("x", Expr::assign("y", Expr::literal(1.0))));
    /// assert_eq!(expr.assignment_targets(), vec!["x", "y"]);
    /// ```
    #[must_use]
    pub fn assignment_targets(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_targets(&mut names);
        names
    }

    fn collect_targets<'a>(&'a self, names: &mut Vec<&'a str>) {
        if let Self::Assign { target, .. } = self
           && let Self::Variable { name, .. } = target.as_ref()
        {
            names.push(name.as_str());
        }
        for child in self.children() {
            child.collect_targets(names);
        }
    }

    /// Lists every node of the tree, children before their parent, one line
    /// per node.
    ///
    /// ## Example
    /// ```
    /// use abacus::ast::{Expr, UnaryOperator};
    ///
    /// let expr = Expr::unary(UnaryOperator::Negate, Expr::literal(2.0));
    /// let dump = expr.dump();
    /// let lines: Vec<&str> = dump.lines().collect();
    ///
    /// assert!(lines[0].ends_with("literal value: 2.000"));
    /// assert!(lines[1].ends_with("unary node op: neg"));
    /// ```
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out);
        out
    }

    fn dump_into(&self, out: &mut String) {
        for child in self.children() {
            child.dump_into(out);
        }
        let id = self.id();
        // Writing into a String cannot fail.
        let _ = match self {
            Self::Literal { value, .. } => writeln!(out, "#{id} literal value: {value:.3}"),
            Self::Variable { name, .. } => writeln!(out, "#{id} variable name: {name}"),
            Self::Unary { op, .. } => writeln!(out, "#{id} unary node op: {op}"),
            Self::Binary { op, .. } => writeln!(out, "#{id} binary node op: {op}"),
            Self::Assign { .. } => writeln!(out, "#{id} assign node"),
            Self::Print { .. } => writeln!(out, "#{id} print node"),
        };
    }

    /// Renders the tree as a Graphviz `digraph`.
    ///
    /// Every node becomes a vertex named `n<id>` and every parent/child link
    /// an edge.
    ///
    /// ## Example
    /// ```
    /// use abacus::ast::Expr;
    ///
    /// let expr = Expr::print(Expr::literal(1.0));
    /// let dot = expr.to_dot();
    ///
    /// assert!(dot.starts_with("digraph ast {"));
    /// assert!(dot.contains("label=\"print\""));
    /// ```
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph ast {\n");
        self.dot_into(&mut out);
        out.push_str("}\n");
        out
    }

    fn dot_into(&self, out: &mut String) {
        let id = self.id();
        let label = match self {
            Self::Literal { value, .. } => value.to_string(),
            Self::Variable { name, .. } => name.clone(),
            Self::Unary { op, .. } | Self::Binary { op, .. } => op.to_string(),
            Self::Assign { .. } => "=".to_string(),
            Self::Print { .. } => "print".to_string(),
        };
        let _ = writeln!(out, "    n{id} [label=\"{label}\"];");
        for child in self.children() {
            let _ = writeln!(out, "    n{id} -> n{};", child.id());
            child.dot_into(out);
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            Self::Unary { op: Operator::Abs, expr, .. } => write!(f, "+{expr}"),
            Self::Unary { op: Operator::Negate, expr, .. } => write!(f, "-{expr}"),
            Self::Unary { op, expr, .. } => write!(f, "{op}({expr})"),
            Self::Binary { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::Assign { target, value, .. } => write!(f, "{target} = {value}"),
            Self::Print { expr, .. } => write!(f, "print {expr}"),
        }
    }
}
