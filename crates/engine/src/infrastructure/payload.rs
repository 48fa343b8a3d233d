//! Decoding of location payloads shared by the HTTP and file sources.

use serde::Deserialize;
use ubigeo_domain::LocationNode;

use crate::infrastructure::ports::SourceError;

/// Backends answer either with a bare array or with `{"data": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum NodesPayload {
    Bare(Vec<LocationNode>),
    Wrapped { data: Vec<LocationNode> },
}

impl NodesPayload {
    pub(crate) fn into_nodes(self) -> Vec<LocationNode> {
        match self {
            Self::Bare(nodes) | Self::Wrapped { data: nodes } => nodes,
        }
    }
}

pub(crate) fn decode_nodes(bytes: &[u8]) -> Result<Vec<LocationNode>, SourceError> {
    serde_json::from_slice::<NodesPayload>(bytes)
        .map(NodesPayload::into_nodes)
        .map_err(SourceError::decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_bare_array() {
        let nodes = decode_nodes(br#"[{"id": 1, "level": 0, "code": "PE", "name": "PERU"}]"#).unwrap();
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn decodes_wrapped_array() {
        let nodes = decode_nodes(
            br#"{"data": [{"id": 1, "padre_id": null, "nivel": 0, "codigo": "PE", "nombre": "PERU"}]}"#,
        )
        .unwrap();
        assert_eq!(nodes[0].name, "PERU");
    }

    #[test]
    fn rejects_unknown_level() {
        let err = decode_nodes(br#"[{"id": 1, "level": 7, "code": "X", "name": "X"}]"#).unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
    }
}
