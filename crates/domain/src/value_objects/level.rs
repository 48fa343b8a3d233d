//! Hierarchy levels
//!
//! The hierarchy has exactly four ranks. On the wire a level is its index
//! (0..=3); anything else is rejected at deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// One of the four hierarchy ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Level {
    Country = 0,
    Department = 1,
    Province = 2,
    District = 3,
}

impl Level {
    /// All levels, root first.
    pub const ALL: [Level; 4] = [
        Level::Country,
        Level::Department,
        Level::Province,
        Level::District,
    ];

    /// Number of levels in the hierarchy.
    pub const COUNT: usize = 4;

    /// Position of this level in a selection tuple.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The level directly above, `None` for the root.
    pub fn parent(self) -> Option<Level> {
        match self {
            Level::Country => None,
            Level::Department => Some(Level::Country),
            Level::Province => Some(Level::Department),
            Level::District => Some(Level::Province),
        }
    }

    /// The level directly below, `None` for the leaf.
    pub fn child(self) -> Option<Level> {
        match self {
            Level::Country => Some(Level::Department),
            Level::Department => Some(Level::Province),
            Level::Province => Some(Level::District),
            Level::District => None,
        }
    }

    /// Levels strictly below this one, nearest first.
    pub fn descendants(self) -> impl Iterator<Item = Level> {
        Level::ALL.into_iter().skip(self.index() + 1)
    }

    pub fn is_root(self) -> bool {
        self == Level::Country
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Country => "country",
            Level::Department => "department",
            Level::Province => "province",
            Level::District => "district",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for Level {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Level::Country),
            1 => Ok(Level::Department),
            2 => Ok(Level::Province),
            3 => Ok(Level::District),
            other => Err(DomainError::parse(format!(
                "Invalid hierarchy level: {} (expected 0-3)",
                other
            ))),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level as u8
    }
}

impl std::str::FromStr for Level {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "country" | "0" => Ok(Level::Country),
            "department" | "1" => Ok(Level::Department),
            "province" | "2" => Ok(Level::Province),
            "district" | "3" => Ok(Level::District),
            _ => Err(DomainError::parse(format!("Unknown hierarchy level: {}", s))),
        }
    }
}
