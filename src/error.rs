//! Ledger Errors

/// Common result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Errors surfaced by the ledger and the UI state
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerError {
    /// Add was attempted with a blank title
    EmptyTitle,
    /// No tab with that name
    UnknownTab(String),
    /// Stored blob could not be parsed
    CorruptState(String),
    /// Stored blob was written by a newer schema
    UnsupportedSchema(u32),
    /// Storage read or write failed
    Storage(String),
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::EmptyTitle => write!(f, "Please enter a title!"),
            LedgerError::UnknownTab(name) => write!(f, "Unknown tab: {}", name),
            LedgerError::CorruptState(msg) => write!(f, "Saved data is corrupt: {}", msg),
            LedgerError::UnsupportedSchema(version) => {
                write!(f, "Saved data uses unsupported schema version {}", version)
            }
            LedgerError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for LedgerError {}
