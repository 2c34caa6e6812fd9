use crate::interpreter::parser::core::MAX_NESTING;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A numeric literal is out of the range of `f64`.
    InvalidNumber {
        /// The literal as written.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Parentheses, prefix operators or operator chains nest deeper than the
    /// parser allows.
    NestingTooDeep {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after the statement should have completed.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// Gets the line number the error was reported on.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::ExpectedClosingParen { line }
            | Self::InvalidNumber { line, .. }
            | Self::NestingTooDeep { line }
            | Self::UnexpectedTrailingTokens { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::InvalidNumber { token, line } => {
                write!(f, "Error on line {line}: Number out of range: {token}.")
            },

            Self::NestingTooDeep { line } => write!(f,
                                                    "Error on line {line}: Expression is nested more than {MAX_NESTING} levels deep."),

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after expression. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
