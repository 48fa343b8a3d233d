//! External collaborator ports (location data source, user notifications).

use async_trait::async_trait;
use ubigeo_domain::{LocationNode, SelectionError};

use super::error::SourceError;

// =============================================================================
// Location Source
// =============================================================================

/// Supplies the complete flat node list for one selection session.
///
/// No pagination, no server-side filtering: one call returns everything.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationSourcePort: Send + Sync {
    async fn fetch_nodes(&self) -> Result<Vec<LocationNode>, SourceError>;

    /// Where the data comes from, for logs.
    fn describe(&self) -> String;
}

// =============================================================================
// Notifications
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Warning,
    Error,
}

/// A user-facing message. The engine never renders these itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: NoticeSeverity,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Error,
            message: message.into(),
        }
    }
}

impl From<&SelectionError> for Notice {
    fn from(error: &SelectionError) -> Self {
        if error.is_warning() {
            Self::warning(error.to_string())
        } else {
            Self::error(error.to_string())
        }
    }
}

/// Hands messages to whatever presents them (toast, dialog, log).
#[cfg_attr(test, mockall::automock)]
pub trait NotifierPort: Send + Sync {
    fn notify(&self, notice: Notice);
}
