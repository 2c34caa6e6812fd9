use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in an input line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens of the calculator.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_number)]
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// `print`
    #[token("print")]
    Print,
    /// Identifier tokens; variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// Blanks and line breaks.
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Holds the line number of the input being tokenized so every token can be
/// paired with it for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The line number of the input.
    pub line: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if it is finite.
/// - `None`: If the token slice is not a valid number or overflows `f64`.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok().filter(|value: &f64| value.is_finite())
}

/// Splits one input line into `(Token, line)` pairs.
///
/// # Errors
/// - `ParseError::InvalidNumber` for a literal too large for `f64`, such as
///   `1e400`.
/// - `ParseError::UnexpectedToken` with the offending text for any other
///   input the lexer does not recognize.
///
/// # Example
/// ```
/// use abacus::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = .5 * 2", 1).unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Identifier("x".to_string()),
///                 Token::Equals,
///                 Token::Number(0.5),
///                 Token::Star,
///                 Token::Number(2.0)]);
///
/// assert!(tokenize("2 $ 3", 1).is_err());
/// assert!(tokenize("1e400", 1).is_err());
/// ```
pub fn tokenize(source: &str, line: usize) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line });

    while let Some(token) = lexer.next() {
        let Ok(tok) = token else {
            let token = lexer.slice().to_string();
            let line = lexer.extras.line;
            // Out-of-range literals still match a number pattern.
            return Err(match token.parse::<f64>() {
                           Ok(value) if value.is_infinite() => ParseError::InvalidNumber { token, line },
                           _ => ParseError::UnexpectedToken { token, line },
                       });
        };
        tokens.push((tok, lexer.extras.line));
    }

    Ok(tokens)
}
