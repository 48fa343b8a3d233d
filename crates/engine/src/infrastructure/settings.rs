//! Picker configuration from the environment
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `UBIGEO_SOURCE_FILE` | JSON file with the node list (wins over the URL) |
//! | `UBIGEO_SOURCE_URL` | HTTP endpoint returning the node list |
//! | `UBIGEO_HTTP_TIMEOUT_SECS` | Request timeout, default 30 |

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::infrastructure::file_source::JsonFileLocationSource;
use crate::infrastructure::http_source::{HttpLocationSource, DEFAULT_HTTP_TIMEOUT_SECS};
use crate::infrastructure::ports::LocationSourcePort;

pub const SOURCE_FILE_VAR: &str = "UBIGEO_SOURCE_FILE";
pub const SOURCE_URL_VAR: &str = "UBIGEO_SOURCE_URL";
pub const HTTP_TIMEOUT_VAR: &str = "UBIGEO_HTTP_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("No location source configured: set UBIGEO_SOURCE_FILE or UBIGEO_SOURCE_URL")]
    MissingSource,
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}

/// Where the node list is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSettings {
    File { path: PathBuf },
    Http { url: String, timeout_secs: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerSettings {
    pub source: SourceSettings,
}

impl PickerSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(path) = non_empty(SOURCE_FILE_VAR) {
            return Ok(Self {
                source: SourceSettings::File {
                    path: PathBuf::from(path),
                },
            });
        }

        let url = non_empty(SOURCE_URL_VAR).ok_or(SettingsError::MissingSource)?;
        let timeout_secs = match non_empty(HTTP_TIMEOUT_VAR) {
            Some(raw) => raw.parse().map_err(|_| SettingsError::InvalidValue {
                var: HTTP_TIMEOUT_VAR,
                value: raw,
            })?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            source: SourceSettings::Http { url, timeout_secs },
        })
    }

    /// Build the configured source adapter.
    pub fn build_source(&self) -> Arc<dyn LocationSourcePort> {
        match &self.source {
            SourceSettings::File { path } => Arc::new(JsonFileLocationSource::new(path.clone())),
            SourceSettings::Http { url, timeout_secs } => {
                Arc::new(HttpLocationSource::with_timeout(url, *timeout_secs))
            }
        }
    }
}

/// Load `.env.local` then `.env` from `repo_root`, if present.
///
/// Variables already set in the process environment are not overridden.
pub fn load_dotenv(repo_root: &Path) {
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
