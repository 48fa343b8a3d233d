//! Location sources that do not go over the network.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use ubigeo_domain::LocationNode;

use crate::infrastructure::payload::decode_nodes;
use crate::infrastructure::ports::{LocationSourcePort, SourceError};

/// Reads the node list from a JSON file on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileLocationSource {
    path: PathBuf,
}

impl JsonFileLocationSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl LocationSourcePort for JsonFileLocationSource {
    async fn fetch_nodes(&self) -> Result<Vec<LocationNode>, SourceError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SourceError::not_found(self.path.display())
            } else {
                SourceError::transport("read_file", e)
            }
        })?;
        decode_nodes(&bytes)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// A fixed node list, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticLocationSource {
    nodes: Vec<LocationNode>,
}

impl StaticLocationSource {
    pub fn new(nodes: Vec<LocationNode>) -> Self {
        Self { nodes }
    }
}

#[async_trait]
impl LocationSourcePort for StaticLocationSource {
    async fn fetch_nodes(&self) -> Result<Vec<LocationNode>, SourceError> {
        Ok(self.nodes.clone())
    }

    fn describe(&self) -> String {
        format!("static:{} nodes", self.nodes.len())
    }
}
