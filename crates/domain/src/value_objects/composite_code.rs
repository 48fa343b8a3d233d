//! Composite external representation of a finished selection
//!
//! A stored selection is persisted as `"<code>-<name>"` of its district.
//! Parsing splits on `-` into exactly two parts, so a name that itself
//! contains a hyphen cannot be read back.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Separator between code and name.
pub const COMPOSITE_SEPARATOR: char = '-';

/// A district code and name pair, as stored by the calling form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CompositeCode {
    code: String,
    name: String,
}

impl CompositeCode {
    /// Build from separate parts, kept verbatim.
    ///
    /// Padding is preserved so a value built from a stored district reads
    /// back to the same code and name the dataset holds.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if either part is blank.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        let name = name.into();
        if code.trim().is_empty() {
            return Err(DomainError::validation("Location code cannot be empty"));
        }
        if name.trim().is_empty() {
            return Err(DomainError::validation("Location name cannot be empty"));
        }
        Ok(Self { code, name })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this value survives a `to_string` / `parse` cycle.
    pub fn round_trips(&self) -> bool {
        !self.code.contains(COMPOSITE_SEPARATOR) && !self.name.contains(COMPOSITE_SEPARATOR)
    }

    pub fn into_parts(self) -> (String, String) {
        (self.code, self.name)
    }
}

impl fmt::Display for CompositeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.code, COMPOSITE_SEPARATOR, self.name)
    }
}

impl std::str::FromStr for CompositeCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(COMPOSITE_SEPARATOR).collect();
        match parts.as_slice() {
            [code, name] => Self::new(*code, *name).map_err(|e| DomainError::parse(e.to_string())),
            _ => Err(DomainError::parse(format!(
                "Expected '<code>{}<name>', got '{}'",
                COMPOSITE_SEPARATOR, s
            ))),
        }
    }
}

impl TryFrom<String> for CompositeCode {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CompositeCode> for String {
    fn from(value: CompositeCode) -> String {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_code_and_name() {
        let composite: CompositeCode = "150131-San Isidro".parse().unwrap();
        assert_eq!(composite.code(), "150131");
        assert_eq!(composite.name(), "San Isidro");
        assert_eq!(composite.to_string(), "150131-San Isidro");
    }

    #[test]
    fn hyphenated_name_does_not_parse() {
        let err = "080910-Santa Ana-Norte".parse::<CompositeCode>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));

        let composite = CompositeCode::new("080910", "Santa Ana-Norte").unwrap();
        assert!(!composite.round_trips());
    }

    #[test]
    fn padded_parts_are_kept_verbatim() {
        let composite = CompositeCode::new("150131", "SAN ISIDRO  ").unwrap();
        let back: CompositeCode = composite.to_string().parse().unwrap();
        assert_eq!(back.name(), "SAN ISIDRO  ");
        assert_eq!(back, composite);
    }

    #[test]
    fn missing_separator_or_part_is_rejected() {
        assert!("150131".parse::<CompositeCode>().is_err());
        assert!("150131-".parse::<CompositeCode>().is_err());
        assert!("-San Isidro".parse::<CompositeCode>().is_err());
        assert!("150131-   ".parse::<CompositeCode>().is_err());
    }

    #[test]
    fn serde_uses_string_form() {
        let composite = CompositeCode::new("150131", "San Isidro").unwrap();
        let json = serde_json::to_string(&composite).unwrap();
        assert_eq!(json, "\"150131-San Isidro\"");
        let back: CompositeCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, composite);
    }
}
