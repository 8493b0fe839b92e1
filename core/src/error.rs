//! Error types for graph lookups, search selection and report export
//!
//! Every failure in the core is a recoverable value the caller can inspect.

use thiserror::Error;

/// Errors that can occur while building the graph or running a search
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("No path found from {start} to {goal}")]
    GoalUnreachable { start: String, goal: String },

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;

impl SearchError {
    /// Whether this error means the search finished without reaching the goal
    pub fn is_unreachable(&self) -> bool {
        matches!(self, SearchError::GoalUnreachable { .. })
    }
}
