#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents the failure modes of the variable store.
pub enum SymbolError {
    /// The name was declared a second time.
    AlreadyExists {
        /// The duplicated name.
        name: String,
    },
    /// The name was never declared.
    NotFound {
        /// The unknown name.
        name: String,
    },
    /// The name is declared but has never been assigned a value.
    NotAssigned {
        /// The unassigned name.
        name: String,
    },
}

impl std::fmt::Display for SymbolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyExists { name } => write!(f, "Symbol '{name}' is already declared."),
            Self::NotFound { name } => write!(f, "Symbol '{name}' is not declared."),
            Self::NotAssigned { name } => {
                write!(f, "Symbol '{name}' has not been assigned a value.")
            },
        }
    }
}

impl std::error::Error for SymbolError {}
