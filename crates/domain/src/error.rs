//! Unified error types for the domain layer
//!
//! Two families live here:
//! - [`DomainError`] for construction and parsing failures of value objects
//! - [`SelectionError`] for everything that can go wrong while resolving or
//!   finalizing a location selection. Every variant renders a message that
//!   can be handed to a user as-is.

use thiserror::Error;

use crate::ids::NodeId;
use crate::value_objects::Level;

/// Error type for value object construction and state transitions
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// State transition not allowed
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

impl DomainError {
    /// Creates a validation error for violated invariants.
    ///
    /// # Example
    /// ```ignore
    /// if code.is_empty() {
    ///     return Err(DomainError::validation("Location code cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an invalid state transition error
    pub fn invalid_state_transition(msg: impl Into<String>) -> Self {
        Self::InvalidStateTransition(msg.into())
    }
}

/// Failures of hierarchy loading, preload resolution, and finalization.
///
/// None of these are fatal to a selection session: the caller surfaces the
/// message and the controller stays in whatever consistent state it had.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// One or more levels have no nodes after loading.
    #[error("Location data is incomplete: no entries for {}", join_levels(.missing))]
    DatasetIncomplete { missing: Vec<Level> },

    /// A stored identifier does not resolve to a node at the expected level.
    #[error("Stored {level} identifier is not valid")]
    InvalidPreloadId { level: Level },

    /// No district matches the stored code and name.
    #[error("No district found with code '{code}' and name '{name}'")]
    LeafNotFound { code: String, name: String },

    /// Climbing from the district hit a missing or mis-leveled parent.
    #[error("Location chain is broken at {level} level")]
    BrokenChain { level: Level },

    /// Finalize was attempted before every level was chosen.
    #[error("Select a {missing} before confirming")]
    IncompleteSelectionOnFinalize { missing: Level },

    /// The controller was already suspended when a preload started.
    #[error("A stored selection is already being restored")]
    PreloadInProgress,

    /// A user choice that is not among the current options for its level.
    #[error("Cannot select {level} {id}: it is not available for the current selection")]
    OptionUnavailable { level: Level, id: NodeId },
}

impl SelectionError {
    /// The level the failure refers to, when there is exactly one.
    pub fn level(&self) -> Option<Level> {
        match self {
            Self::InvalidPreloadId { level }
            | Self::BrokenChain { level }
            | Self::OptionUnavailable { level, .. } => Some(*level),
            Self::IncompleteSelectionOnFinalize { missing } => Some(*missing),
            Self::DatasetIncomplete { .. }
            | Self::LeafNotFound { .. }
            | Self::PreloadInProgress => None,
        }
    }

    /// Whether the failure leaves the session usable without user action.
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::DatasetIncomplete { .. })
    }
}

fn join_levels(levels: &[Level]) -> String {
    levels
        .iter()
        .map(Level::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
