//! Error types for the data-layer tools.

/// Errors from inventory lookups and reservation commits.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Invalid tool request: {0}")]
    InvalidRequest(String),
    #[error("Tool backend unavailable: {0}")]
    Unavailable(String),
}
