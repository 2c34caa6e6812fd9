use std::{fs, io};

use abacus::{interpreter::evaluator::core::Session, repl};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// abacus is an interactive calculator for arithmetic expressions with
/// variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Increases the amount of trace output on stderr (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Tells abacus to run a script file, one statement per line, instead of
    /// a single expression.
    #[arg(short, long)]
    file: bool,

    /// The statement to evaluate, or the script path with `--file`. Starts an
    /// interactive session when omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut session = Session::with_verbosity(args.verbose);
    let stdout = io::stdout();

    let result = match args.contents {
        None => repl::run(&mut session, io::stdin().lock(), stdout.lock(), true),
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                             eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                             std::process::exit(1);
                         });
            repl::run(&mut session, script.as_bytes(), stdout.lock(), false)
        },
        Some(statement) => repl::run(&mut session, statement.as_bytes(), stdout.lock(), false),
    };

    match result {
        Ok(0) => {},
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        },
    }
}

/// Installs the stderr trace subscriber. `RUST_LOG` takes precedence over the
/// filter derived from `-v`.
fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "off",
        1 => "abacus=debug",
        _ => "abacus=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                    .with_target(true)
                                                    .with_level(true))
                                  .with(filter)
                                  .init();
}
