/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// input line. Parse errors include unexpected tokens, unbalanced parentheses
/// and trailing input, all detected before evaluation.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error kinds the evaluator raises through the diagnostics
/// channel: undefined symbols, malformed nodes, unknown operator tags,
/// division by zero and failed assignments.
pub mod eval_error;
/// Variable store errors.
///
/// Results of the symbol table contract: duplicate declarations, unknown
/// names and declared-but-unassigned names.
pub mod symbol_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
pub use symbol_error::SymbolError;

#[derive(Debug, Clone, PartialEq)]
/// Any error that can be raised into the diagnostics channel.
pub enum Error {
    /// The input line could not be tokenized or parsed.
    Parse(ParseError),
    /// Evaluation of the expression tree failed.
    Eval(EvalError),
    /// A variable store operation failed outside of evaluation.
    Symbol(SymbolError),
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<EvalError> for Error {
    fn from(value: EvalError) -> Self {
        Self::Eval(value)
    }
}

impl From<SymbolError> for Error {
    fn from(value: SymbolError) -> Self {
        Self::Symbol(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "syntax error: {e}"),
            Self::Eval(e) => write!(f, "{e}"),
            Self::Symbol(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
            Self::Symbol(e) => Some(e),
        }
    }
}
