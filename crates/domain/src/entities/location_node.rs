//! A single node of the administrative hierarchy, as delivered by the backend

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::NodeId;
use crate::value_objects::Level;

/// A country, department, province, or district.
///
/// The backend sends these as a flat, unordered list. Field aliases accept
/// the backend's own naming (`padre_id`, `nivel`, `codigo`, `nombre`).
///
/// # Invariants
///
/// - `level == Country` nodes have no parent
/// - every other node has a parent one level up
///
/// The invariants are not enforced on construction since the dataset is
/// trusted; [`LocationNode::validate`] checks the local half of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationNode {
    pub id: NodeId,
    #[serde(default, alias = "parent_id", alias = "padre_id")]
    pub parent_id: Option<NodeId>,
    #[serde(alias = "nivel")]
    pub level: Level,
    #[serde(alias = "codigo")]
    pub code: String,
    #[serde(alias = "nombre")]
    pub name: String,
}

impl LocationNode {
    pub fn new(
        id: impl Into<NodeId>,
        parent_id: Option<NodeId>,
        level: Level,
        code: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            parent_id,
            level,
            code: code.into(),
            name: name.into(),
        }
    }

    /// A country node.
    pub fn country(id: impl Into<NodeId>, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, None, Level::Country, code, name)
    }

    /// A node below the root, attached to `parent_id`.
    pub fn child_of(
        parent_id: impl Into<NodeId>,
        id: impl Into<NodeId>,
        level: Level,
        code: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::new(id, Some(parent_id.into()), level, code, name)
    }

    /// Checks the parent rule that can be verified without the rest of the dataset.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if a country has a parent or a
    /// non-country node has none.
    pub fn validate(&self) -> Result<(), DomainError> {
        match (self.level, self.parent_id) {
            (Level::Country, Some(parent)) => Err(DomainError::validation(format!(
                "Country {} cannot have parent {}",
                self.id, parent
            ))),
            (level, None) if !level.is_root() => Err(DomainError::validation(format!(
                "{} {} has no parent",
                level, self.id
            ))),
            _ => Ok(()),
        }
    }

    /// Case-insensitive name comparison used for leaf lookup.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
