use std::io::{self, BufRead, Write};

use crate::{
    error::Error,
    interpreter::{evaluator::core::Session, parser::statement::parse_line, session::Outcome},
};

const HELP: &str = "\
Enter an expression, an assignment or a print statement:
    2 + 3 * 4
    x = (2 + 3) * 4
    print x % 3
Prefix '+' takes the absolute value, prefix '-' negates.

Commands:
    help          show this message
    symbols       list all variables and their values
    dump <expr>   show the nodes of an expression tree
    dot <expr>    show an expression tree as a Graphviz graph
    quit, exit    leave the calculator";

/// A line of REPL input that is not a calculator statement.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// Show the command overview.
    Help,
    /// Leave the loop.
    Quit,
    /// List the variable store.
    Symbols,
    /// Show the node dump of an expression.
    Dump(&'a str),
    /// Show the Graphviz rendering of an expression.
    Dot(&'a str),
}

impl<'a> Command<'a> {
    /// Recognizes a command line. Anything else is left to the parser.
    ///
    /// ## Example
    /// ```
    /// use abacus::repl::Command;
    ///
    /// assert_eq!(Command::parse("  quit "), Some(Command::Quit));
    /// assert_eq!(Command::parse("dump 1 + 2"), Some(Command::Dump("1 + 2")));
    /// assert_eq!(Command::parse("help + 1"), None);
    /// assert_eq!(Command::parse("1 + 2"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &'a str) -> Option<Self> {
        let input = input.trim();
        let (word, rest) = input.split_once(char::is_whitespace)
                                .map_or((input, ""), |(word, rest)| (word, rest.trim()));
        match (word, rest) {
            ("help", "") => Some(Self::Help),
            ("quit" | "exit", "") => Some(Self::Quit),
            ("symbols", "") => Some(Self::Symbols),
            ("dump", expr) if !expr.is_empty() => Some(Self::Dump(expr)),
            ("dot", expr) if !expr.is_empty() => Some(Self::Dot(expr)),
            _ => None,
        }
    }
}

/// Reads statements line by line, evaluates them in `session` and writes
/// results and errors to `output`.
///
/// With `interactive` set a banner and a `calc> ` prompt are written and the
/// REPL commands are recognized; otherwise every line is treated as a
/// statement, which is how script files are run. Errors never stop the loop.
///
/// # Returns
/// The number of lines that raised at least one error.
///
/// # Errors
/// Only I/O errors on `input` or `output` are returned.
///
/// # Example
/// ```
/// use abacus::{interpreter::evaluator::core::Session, repl::run};
///
/// let mut session = Session::new();
/// let mut output = Vec::new();
/// let failed = run(&mut session, "x = 3\nprint x * 2\n1 / 0\n".as_bytes(), &mut output, false).unwrap();
///
/// assert_eq!(failed, 1);
/// assert_eq!(String::from_utf8(output).unwrap(),
///            "6\nerror: Division by zero.\n");
/// ```
pub fn run<R: BufRead, W: Write>(session: &mut Session,
                                 mut input: R,
                                 mut output: W,
                                 interactive: bool)
                                 -> io::Result<usize> {
    let mut failed = 0;

    if interactive {
        writeln!(output,
                 "ABACUS v{}\n'help' for commands.",
                 env!("CARGO_PKG_VERSION"))?;
    }

    let mut line = String::new();
    let mut number = 0;

    loop {
        if interactive {
            write!(output, "calc> ")?;
            output.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        number += 1;

        if interactive && let Some(command) = Command::parse(&line) {
            match command {
                Command::Help => writeln!(output, "{HELP}")?,
                Command::Quit => break,
                Command::Symbols => write!(output, "{}", session.symbols.dump())?,
                Command::Dump(source) => match parse_line(source, number) {
                    Ok(Some(expr)) => write!(output, "{}", expr.dump())?,
                    Ok(None) => {},
                    Err(e) => report(&mut output, &[e.into()])?,
                },
                Command::Dot(source) => match parse_line(source, number) {
                    Ok(Some(expr)) => write!(output, "{}", expr.to_dot())?,
                    Ok(None) => {},
                    Err(e) => report(&mut output, &[e.into()])?,
                },
            }
            continue;
        }

        if let Some(outcome) = session.run_line(&line, number) {
            if !outcome.is_ok() {
                failed += 1;
            }
            write_outcome(&mut output, &outcome)?;
        }
    }

    Ok(failed)
}

fn write_outcome<W: Write>(output: &mut W, outcome: &Outcome) -> io::Result<()> {
    if outcome.is_ok() {
        if outcome.echo {
            writeln!(output, "{}", outcome.value)?;
        }
        return Ok(());
    }
    report(output, &outcome.errors)
}

fn report<W: Write>(output: &mut W, errors: &[Error]) -> io::Result<()> {
    for error in errors {
        writeln!(output, "error: {error}")?;
    }
    Ok(())
}
