use abacus::{error::SymbolError, interpreter::symbols::SymbolTable};

#[test]
fn declare_twice_is_an_error() {
    let mut symbols = SymbolTable::new();
    symbols.declare("x").unwrap();
    symbols.assign("x", 2.0).unwrap();

    assert_eq!(symbols.declare("x"),
               Err(SymbolError::AlreadyExists { name: "x".to_string() }));
    assert_eq!(symbols.lookup("x"), Ok(2.0));
    assert_eq!(symbols.len(), 1);
}

#[test]
fn assign_requires_declaration() {
    let mut symbols = SymbolTable::new();

    assert_eq!(symbols.assign("x", 1.0),
               Err(SymbolError::NotFound { name: "x".to_string() }));
    assert!(symbols.is_empty());
}

#[test]
fn lookup_of_unknown_name_fails() {
    let symbols = SymbolTable::new();
    assert_eq!(symbols.lookup("nope"),
               Err(SymbolError::NotFound { name: "nope".to_string() }));
}

#[test]
fn unassigned_reads_default() {
    let mut symbols = SymbolTable::new();
    symbols.declare("x").unwrap();

    assert_eq!(symbols.lookup("x"), Ok(0.0));
    assert_eq!(symbols.is_assigned("x"),
               Err(SymbolError::NotAssigned { name: "x".to_string() }));
}

#[test]
fn is_assigned_distinguishes_all_three_states() {
    let mut symbols = SymbolTable::new();
    symbols.declare("set").unwrap();
    symbols.declare("unset").unwrap();
    symbols.assign("set", 3.0).unwrap();

    assert_eq!(symbols.is_assigned("set"), Ok(true));
    assert!(matches!(symbols.is_assigned("unset"), Err(SymbolError::NotAssigned { .. })));
    assert!(matches!(symbols.is_assigned("missing"), Err(SymbolError::NotFound { .. })));
}

#[test]
fn assign_overwrites() {
    let mut symbols = SymbolTable::new();
    symbols.declare("x").unwrap();
    symbols.assign("x", 3.0).unwrap();
    symbols.assign("x", -1.5).unwrap();

    assert_eq!(symbols.lookup("x"), Ok(-1.5));
    assert_eq!(symbols.is_assigned("x"), Ok(true));
}

#[test]
fn iteration_is_ordered_by_name() {
    let mut symbols = SymbolTable::new();
    for name in ["delta", "alpha", "charlie", "bravo"] {
        symbols.declare(name).unwrap();
    }

    let names: Vec<&str> = symbols.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["alpha", "bravo", "charlie", "delta"]);
}

#[test]
fn clear_forgets_everything() {
    let mut symbols = SymbolTable::new();
    symbols.declare("x").unwrap();
    symbols.clear();

    assert!(symbols.is_empty());
    assert!(!symbols.contains("x"));
    assert!(symbols.declare("x").is_ok());
}

#[test]
fn errors_have_readable_messages() {
    assert_eq!(SymbolError::AlreadyExists { name: "x".to_string() }.to_string(),
               "Symbol 'x' is already declared.");
    assert_eq!(SymbolError::NotFound { name: "x".to_string() }.to_string(),
               "Symbol 'x' is not declared.");
    assert_eq!(SymbolError::NotAssigned { name: "x".to_string() }.to_string(),
               "Symbol 'x' has not been assigned a value.");
}
