//! Error types for port operations.

/// Location source errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The configured source does not exist (missing file, 404).
    #[error("Location source not found: {location}")]
    NotFound { location: String },

    /// Reaching the source failed - includes operation name for tracing.
    #[error("Transport error in {operation}: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },

    /// The payload was not a list of location nodes.
    #[error("Could not decode location data: {0}")]
    Decode(String),
}

impl SourceError {
    /// Create a NotFound error for a file path or URL.
    pub fn not_found(location: impl ToString) -> Self {
        Self::NotFound {
            location: location.to_string(),
        }
    }

    /// Create a Transport error with operation context.
    pub fn transport(operation: &'static str, message: impl ToString) -> Self {
        Self::Transport {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Decode error.
    pub fn decode(message: impl ToString) -> Self {
        Self::Decode(message.to_string())
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
