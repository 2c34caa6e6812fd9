use std::fs;

use abacus::{
    error::{Error, ParseError},
    get_result,
    interpreter::{
        evaluator::core::Session,
        parser::{core::MAX_NESTING, statement::parse_line},
    },
    repl,
};
use walkdir::WalkDir;

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let mut session = Session::new();

        for (i, line) in content.lines().enumerate() {
            let outcome = session.run_line(line, i + 1);
            let Some(expected) = expectation(line) else {
                continue;
            };
            count += 1;

            let outcome =
                outcome.unwrap_or_else(|| panic!("{path:?}:{}: no statement on line", i + 1));
            match expected {
                Expected::Error => assert!(!outcome.is_ok(),
                                           "{path:?}:{}: `{line}` succeeded with {}",
                                           i + 1,
                                           outcome.value),
                Expected::Value(value) => {
                    assert!(outcome.is_ok(),
                            "{path:?}:{}: `{line}` failed: {:?}",
                            i + 1,
                            outcome.errors);
                    assert!((outcome.value - value).abs() <= 1e-9,
                            "{path:?}:{}: `{line}` gave {}, expected {value}",
                            i + 1,
                            outcome.value);
                },
            }
        }
    }

    assert!(count > 0, "No expectations found in tests/scripts");
}

enum Expected {
    Value(f64),
    Error,
}

fn expectation(line: &str) -> Option<Expected> {
    let (_, expected) = line.split_once("// expect ")?;
    match expected.trim() {
        "error" => Some(Expected::Error),
        value => Some(Expected::Value(value.parse()
                                           .unwrap_or_else(|_| panic!("bad expectation: {line}")))),
    }
}

fn assert_value(src: &str, expected: f64) {
    match get_result(src) {
        Ok(Some(value)) => assert_eq!(value, expected, "Script: {src}"),
        Ok(None) => panic!("Script produced no value: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if get_result(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn parsed(src: &str) -> String {
    parse_line(src, 1).unwrap()
                      .map(|expr| expr.to_string())
                      .unwrap_or_default()
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_value("x = 1 + 2\nprint x", 3.0);
    assert_value("x = 7 * 9\nprint x", 63.0);
    assert_value("x = 8 - 5\nprint x", 3.0);
    assert_value("x = 10 / 4\nprint x", 2.5);
    assert_value("x = 5.5 % 2\nprint x", 1.5);
}

#[test]
fn precedence_and_grouping() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("10 - 4 - 3", 3.0);
    assert_value("24 / 4 / 2", 3.0);
    assert_value("2 * -3", -6.0);

    assert_eq!(parsed("1 - 2 - 3"), "((1 - 2) - 3)");
    assert_eq!(parsed("1 + 2 * 3 % 4"), "(1 + ((2 * 3) % 4))");
}

#[test]
fn prefix_plus_is_absolute_value() {
    assert_value("+(2 - 5)", 3.0);
    assert_value("-+(2 - 5)", -3.0);
    assert_value("- -4", 4.0);
}

#[test]
fn chained_assignment() {
    assert_value("a = b = 4\nprint a + b", 8.0);
    assert_eq!(parsed("a = b = 4"), "a = b = 4");
}

#[test]
fn print_assignment_returns_value() {
    assert_value("print x = 10 / 2", 5.0);
    assert_value("print x = 10 / 2\nx * x", 25.0);
}

#[test]
fn numbers_in_every_notation() {
    assert_value(".5 + 1.25", 1.75);
    assert_value("2e3", 2000.0);
    assert_value("1.5E-1 * 10", 1.5);
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    assert_value("// setup\n\nx = 2 // two\n   \nprint x", 2.0);
    assert!(get_result("// nothing\n").unwrap().is_none());
}

#[test]
fn self_reference_uses_previous_value() {
    assert_value("x = 1\nx = x + 1\nx = x * 10\nprint x", 20.0);
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("x = 1 / 0");
    assert_failure("5 % 0");
}

#[test]
fn unknown_variable_is_error() {
    assert_failure("print foo + 1");
}

#[test]
fn syntax_errors() {
    assert_failure("2 +");
    assert_failure("(2 + 3");
    assert_failure("2 3");
    assert_failure("x = ");
    assert_failure("3 = x");
    assert_failure("2 # 3");
    assert_failure("print");
}

#[test]
fn session_survives_errors() {
    let mut session = Session::new();

    let outcome = session.run_line("x = 4", 1).unwrap();
    assert!(outcome.is_ok());

    let outcome = session.run_line("x = x / 0", 2).unwrap();
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.value.is_nan());

    let outcome = session.run_line("(x", 3).unwrap();
    assert_eq!(outcome.errors.len(), 1);

    let outcome = session.run_line("print x", 4).unwrap();
    assert!(outcome.is_ok());
    assert_eq!(outcome.value, 4.0);
}

#[test]
fn failed_line_still_declares_its_target() {
    let mut session = Session::new();
    let outcome = session.run_line("y = z", 1).unwrap();

    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(session.symbols.lookup("y"), Ok(0.0));
    assert!(session.symbols.is_assigned("y").is_err());
}

#[test]
fn parse_errors_carry_the_line() {
    let mut session = Session::new();
    let outcome = session.run_line("1 + (2", 7).unwrap();

    assert_eq!(outcome.errors.len(), 1);
    match &outcome.errors[0] {
        Error::Parse(e) => assert_eq!(e.line_number(), 7),
        other => panic!("Expected a parse error, got {other:?}"),
    }
    assert!(outcome.errors[0].to_string().contains("line 7"),
            "{}",
            outcome.errors[0]);
}

#[test]
fn unassigned_target_reads_as_zero_on_later_lines() {
    let mut session = Session::new();

    assert!(!session.run_line("y = z", 1).unwrap().is_ok());

    let outcome = session.run_line("print y + 1", 2).unwrap();
    assert!(outcome.is_ok());
    assert_eq!(outcome.value, 1.0);
}

fn nesting_error(source: &str) -> ParseError {
    let mut session = Session::new();
    let outcome = session.run_line(source, 3).unwrap();

    assert_eq!(outcome.errors.len(), 1);
    match outcome.errors.into_iter().next() {
        Some(Error::Parse(e)) => e,
        other => panic!("Expected a parse error, got {other:?}"),
    }
}

#[test]
fn deep_nesting_is_a_parse_error() {
    let negations = format!("{}1", "-".repeat(100_000));
    let groups = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
    let unclosed = format!("{}1", "(".repeat(100_000));
    let chain = format!("1{}", " + 1".repeat(100_000));
    let assignments = format!("{}1", "x = ".repeat(100_000));

    for source in [negations, groups, unclosed, chain, assignments] {
        assert_eq!(nesting_error(&source), ParseError::NestingTooDeep { line: 3 });
    }
}

#[test]
fn nesting_up_to_the_limit_is_accepted() {
    let mut session = Session::new();

    let negations = format!("{}1", "-".repeat(MAX_NESTING - 1));
    let outcome = session.run_line(&negations, 1).unwrap();
    assert!(outcome.is_ok(), "{:?}", outcome.errors);
    assert_eq!(outcome.value, -1.0);

    let groups = format!("{}2{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
    let outcome = session.run_line(&groups, 2).unwrap();
    assert!(outcome.is_ok(), "{:?}", outcome.errors);
    assert_eq!(outcome.value, 2.0);

    let chain = format!("1{}", " + 1".repeat(MAX_NESTING - 1));
    let outcome = session.run_line(&chain, 3).unwrap();
    assert!(outcome.is_ok(), "{:?}", outcome.errors);
    assert_eq!(outcome.value, MAX_NESTING as f64);

    let too_deep = format!("{}1", "-".repeat(MAX_NESTING));
    assert!(!session.run_line(&too_deep, 4).unwrap().is_ok());
}

#[test]
fn out_of_range_numbers_are_rejected() {
    assert_eq!(parse_line("x = 1e400", 2).unwrap_err(),
               ParseError::InvalidNumber { token: "1e400".to_string(),
                                           line:  2, });
    assert_eq!(parse_line("2 $ 3", 4).unwrap_err(),
               ParseError::UnexpectedToken { token: "$".to_string(),
                                             line:  4, });
    assert_value("1e308 * 1", 1e308);
}

#[test]
fn interactive_commands() {
    let mut session = Session::new();
    let mut output = Vec::new();
    let input = "x = 2\nsymbols\ndump -x\nhelp\nprint x / 0\nquit\nprint 99\n";

    let failed = repl::run(&mut session, input.as_bytes(), &mut output, true).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert_eq!(failed, 1);
    assert!(output.starts_with("ABACUS v"));
    assert!(output.contains("calc> "));
    assert!(output.contains("name: x value = 2.000"));
    assert!(output.contains("variable name: x"));
    assert!(output.contains("unary node op: neg"));
    assert!(output.contains("quit, exit"));
    assert!(output.contains("error: Division by zero."));
    assert!(!output.contains("99"));
}

#[test]
fn dot_command_renders_graph() {
    let mut session = Session::new();
    let mut output = Vec::new();

    repl::run(&mut session, "dot 1 + 2\n".as_bytes(), &mut output, true).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("digraph ast {"));
    assert_eq!(output.matches(" -> ").count(), 2);
}

#[test]
fn script_mode_treats_commands_as_statements() {
    let mut session = Session::new();
    let mut output = Vec::new();

    let failed = repl::run(&mut session, "help\n".as_bytes(), &mut output, false).unwrap();

    assert_eq!(failed, 1);
    assert!(String::from_utf8(output).unwrap().starts_with("error: "));
}
