use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a location node as assigned by the backend.
///
/// Identifiers are plain integers on the wire; the newtype keeps them from
/// being confused with codes or level indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(i64);

impl NodeId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for NodeId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<NodeId> for i64 {
    fn from(value: NodeId) -> Self {
        value.0
    }
}
