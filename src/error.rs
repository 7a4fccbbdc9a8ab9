use thiserror::Error;
use tracing::{error, warn};

/// Error severity for UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,     // informational
    Warning,  // recoverable, the feature keeps working with defaults
    Error,    // operation failed
}

/// Domain-specific errors for termfolio.
///
/// Focus navigation and command matching never fail; these cover the
/// ambient edges: configuration and the small persisted stores.
#[derive(Error, Debug)]
pub enum TermfolioError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read '{path}': {source}")]
    StoreRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    StoreWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse stored JSON: {0}")]
    StoreParse(#[from] serde_json::Error),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

impl TermfolioError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Config(_) => ErrorSeverity::Warning,
            Self::StoreRead { .. } => ErrorSeverity::Warning,
            Self::StoreWrite { .. } => ErrorSeverity::Error,
            Self::StoreParse(_) => ErrorSeverity::Warning,
            Self::UnknownCommand(_) => ErrorSeverity::Info,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Config(msg) => format!("Configuration issue: {}", msg),
            Self::StoreRead { path, .. } => format!("Could not read {}", path),
            Self::StoreWrite { path, .. } => format!("Could not save {}", path),
            Self::StoreParse(e) => format!("Saved data is corrupt: {}", e),
            Self::UnknownCommand(id) => format!("No command named '{}'", id),
        }
    }
}

pub type Result<T> = std::result::Result<T, TermfolioError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the user doesn't need to know.
///
/// # Examples
///
/// ```ignore
/// use termfolio::error::ResultExt;
///
/// // Keep the palette working even if the remembered query can't be saved
/// store.save(&query).warn_on_err();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}
