use std::{collections::HashMap, fmt::Write as _};

use crate::error::SymbolError;

/// Result type of the variable store operations.
pub type SymbolResult<T> = Result<T, SymbolError>;

/// A single variable store entry.
///
/// `value` is only meaningful once `assigned` is set; before that it holds
/// the zero default returned by [`SymbolTable::lookup`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Symbol {
    /// Current value of the variable.
    pub value:    f64,
    /// Whether the variable has been assigned since it was declared.
    pub assigned: bool,
}

/// The session-wide variable store.
///
/// One flat namespace keyed by name. Entries are created by
/// [`declare`](Self::declare) and live until the table is dropped or
/// [`clear`](Self::clear)ed.
///
/// ## Example
/// ```
/// use abacus::{error::SymbolError, interpreter::symbols::SymbolTable};
///
/// let mut symbols = SymbolTable::new();
/// symbols.declare("x").unwrap();
///
/// assert_eq!(symbols.lookup("x").unwrap(), 0.0);
/// assert!(matches!(symbols.is_assigned("x"), Err(SymbolError::NotAssigned { .. })));
///
/// symbols.assign("x", 3.0).unwrap();
/// assert_eq!(symbols.lookup("x").unwrap(), 3.0);
/// assert!(symbols.is_assigned("x").unwrap());
/// ```
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: HashMap<String, Symbol>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name` as an unassigned variable.
    ///
    /// # Errors
    /// `SymbolError::AlreadyExists` if the name is already declared. The
    /// existing entry is left untouched.
    pub fn declare(&mut self, name: &str) -> SymbolResult<()> {
        if self.entries.contains_key(name) {
            return Err(SymbolError::AlreadyExists { name: name.to_string() });
        }
        self.entries.insert(name.to_string(), Symbol::default());
        Ok(())
    }

    /// Stores `value` in a declared variable and marks it assigned.
    ///
    /// # Errors
    /// `SymbolError::NotFound` if `name` was never declared.
    pub fn assign(&mut self, name: &str, value: f64) -> SymbolResult<()> {
        let symbol = self.entries
                         .get_mut(name)
                         .ok_or_else(|| SymbolError::NotFound { name: name.to_string() })?;
        symbol.value = value;
        symbol.assigned = true;
        Ok(())
    }

    /// Returns the current value of `name`, `0.0` if it was declared but never
    /// assigned.
    ///
    /// # Errors
    /// `SymbolError::NotFound` if `name` was never declared.
    pub fn lookup(&self, name: &str) -> SymbolResult<f64> {
        self.entries
            .get(name)
            .map(|symbol| symbol.value)
            .ok_or_else(|| SymbolError::NotFound { name: name.to_string() })
    }

    /// Tells whether `name` has been assigned.
    ///
    /// # Errors
    /// - `SymbolError::NotFound` if `name` was never declared.
    /// - `SymbolError::NotAssigned` if it is declared but was never assigned.
    pub fn is_assigned(&self, name: &str) -> SymbolResult<bool> {
        match self.entries.get(name) {
            Some(Symbol { assigned: true, .. }) => Ok(true),
            Some(_) => Err(SymbolError::NotAssigned { name: name.to_string() }),
            None => Err(SymbolError::NotFound { name: name.to_string() }),
        }
    }

    /// Returns `true` if `name` has been declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of declared variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over all entries ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        let mut entries: Vec<_> = self.entries
                                      .iter()
                                      .map(|(name, symbol)| (name.as_str(), symbol))
                                      .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    /// Lists every entry with its value, one line per name.
    ///
    /// ## Example
    /// ```
    /// use abacus::interpreter::symbols::SymbolTable;
    ///
    /// let mut symbols = SymbolTable::new();
    /// symbols.declare("b").unwrap();
    /// symbols.declare("a").unwrap();
    /// symbols.assign("a", 1.5).unwrap();
    ///
    /// assert_eq!(symbols.dump(),
    ///            "name: a value = 1.500\nname: b value = not assigned\n");
    /// ```
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (name, symbol) in self.iter() {
            // Writing into a String cannot fail.
            let _ = if symbol.assigned {
                writeln!(out, "name: {name} value = {:.3}", symbol.value)
            } else {
                writeln!(out, "name: {name} value = not assigned")
            };
        }
        out
    }
}
