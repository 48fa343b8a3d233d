//! Preload resolution - restoring a stored selection into a controller
//!
//! Two strategies, picked by the shape of the stored data:
//! - by identifiers: each id must exist at its level
//! - by district code and name: find the district, climb its parents,
//!   then assign the walked chain by identifiers
//!
//! Every lookup happens before the controller is touched. A failure leaves
//! the controller exactly as it was; a success leaves it `Complete`.
//!
//! Identifier preload checks levels only. Four ids that each exist at the
//! right level but do not form a parent chain are assigned as given.

use serde::{Deserialize, Serialize};

use crate::aggregates::{CascadeSelection, CascadeSelectionController, LocationHierarchy};
use crate::entities::LocationNode;
use crate::error::SelectionError;
use crate::ids::NodeId;
use crate::value_objects::{CompositeCode, Level};

/// Stored selection data supplied by the calling form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreloadRequest {
    ByIds {
        pais: NodeId,
        departamento: NodeId,
        provincia: NodeId,
        distrito: NodeId,
    },
    ByCodeAndName {
        codigo: String,
        nombre: String,
    },
}

impl PreloadRequest {
    pub fn by_ids(chain: [NodeId; Level::COUNT]) -> Self {
        let [pais, departamento, provincia, distrito] = chain;
        Self::ByIds {
            pais,
            departamento,
            provincia,
            distrito,
        }
    }

    pub fn by_code_and_name(codigo: impl Into<String>, nombre: impl Into<String>) -> Self {
        Self::ByCodeAndName {
            codigo: codigo.into(),
            nombre: nombre.into(),
        }
    }

    pub fn strategy(&self) -> &'static str {
        match self {
            Self::ByIds { .. } => "by_ids",
            Self::ByCodeAndName { .. } => "by_code_and_name",
        }
    }
}

impl From<CompositeCode> for PreloadRequest {
    fn from(composite: CompositeCode) -> Self {
        let (codigo, nombre) = composite.into_parts();
        Self::ByCodeAndName { codigo, nombre }
    }
}

/// Resolves stored selections against one hierarchy.
#[derive(Debug, Clone, Copy)]
pub struct PreloadResolver<'h> {
    hierarchy: &'h LocationHierarchy,
}

impl<'h> PreloadResolver<'h> {
    pub fn new(hierarchy: &'h LocationHierarchy) -> Self {
        Self { hierarchy }
    }

    /// Dispatch on the request shape.
    pub fn resolve(
        &self,
        controller: &mut CascadeSelectionController,
        request: &PreloadRequest,
    ) -> Result<CascadeSelection, SelectionError> {
        match request {
            PreloadRequest::ByIds {
                pais,
                departamento,
                provincia,
                distrito,
            } => self.resolve_by_ids(controller, [*pais, *departamento, *provincia, *distrito]),
            PreloadRequest::ByCodeAndName { codigo, nombre } => {
                self.resolve_by_code_and_name(controller, codigo, nombre)
            }
        }
    }

    /// Assign four identifiers, root first, after checking each exists at
    /// its level.
    ///
    /// # Errors
    ///
    /// - `InvalidPreloadId { level }` for the shallowest id that does not resolve
    /// - `PreloadInProgress` if the controller is already suspended
    pub fn resolve_by_ids(
        &self,
        controller: &mut CascadeSelectionController,
        chain: [NodeId; Level::COUNT],
    ) -> Result<CascadeSelection, SelectionError> {
        for (level, id) in Level::ALL.into_iter().zip(chain) {
            if self.hierarchy.node_at(level, id).is_none() {
                return Err(SelectionError::InvalidPreloadId { level });
            }
        }
        controller
            .assign_chain(chain)
            .map_err(|_| SelectionError::PreloadInProgress)?;
        Ok(controller.selection())
    }

    /// Find the district by code and name, climb to the country, and assign
    /// the walked chain.
    ///
    /// # Errors
    ///
    /// - `LeafNotFound` if no district matches
    /// - `BrokenChain { level }` at the first missing or mis-leveled parent
    pub fn resolve_by_code_and_name(
        &self,
        controller: &mut CascadeSelectionController,
        code: &str,
        name: &str,
    ) -> Result<CascadeSelection, SelectionError> {
        let chain = self.chain_for_leaf(code, name)?;
        self.resolve_by_ids(controller, chain)
    }

    /// The root-first id chain of the district matching `code` and `name`,
    /// without touching any controller.
    pub fn chain_for_leaf(
        &self,
        code: &str,
        name: &str,
    ) -> Result<[NodeId; Level::COUNT], SelectionError> {
        let leaf = self
            .hierarchy
            .find_leaf(code, name)
            .ok_or_else(|| SelectionError::LeafNotFound {
                code: code.to_string(),
                name: name.to_string(),
            })?;
        let province = self.climb(leaf, Level::Province)?;
        let department = self.climb(province, Level::Department)?;
        let country = self.climb(department, Level::Country)?;
        Ok([country.id, department.id, province.id, leaf.id])
    }

    fn climb(
        &self,
        child: &LocationNode,
        expected: Level,
    ) -> Result<&'h LocationNode, SelectionError> {
        child
            .parent_id
            .and_then(|parent| self.hierarchy.by_id(parent))
            .filter(|parent| parent.level == expected)
            .ok_or(SelectionError::BrokenChain { level: expected })
    }
}
