//! Error types for the port panel

/// Errors that can occur while talking to the port controller
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected response payload: {0}")]
    Payload(String),

    #[error("Command rejected with HTTP status {0}")]
    Rejected(u16),
}

/// Result type alias for panel operations
pub type Result<T> = std::result::Result<T, PanelError>;
