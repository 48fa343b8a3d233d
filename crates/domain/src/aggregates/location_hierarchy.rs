//! Location hierarchy - immutable index over one session's flat node list
//!
//! Built once from the backend's unordered list and never mutated. A new
//! selection session builds a new hierarchy; nothing is shared between them.
//!
//! Lookups preserve the order nodes were delivered in, so "first match"
//! means first in the backend's list.

use std::collections::HashMap;

use crate::entities::LocationNode;
use crate::error::SelectionError;
use crate::ids::NodeId;
use crate::value_objects::Level;

/// Level- and id-indexed view of the location dataset.
///
/// # Example
///
/// ```
/// use ubigeo_domain::{Level, LocationHierarchy, LocationNode, NodeId};
///
/// let hierarchy = LocationHierarchy::load(vec![
///     LocationNode::country(1, "PE", "PERU"),
///     LocationNode::child_of(1, 2, Level::Department, "15", "LIMA"),
/// ]);
///
/// let departments = hierarchy.children_of(Level::Department, Some(NodeId::new(1)));
/// assert_eq!(departments.len(), 1);
/// assert!(!hierarchy.is_complete());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocationHierarchy {
    nodes: Vec<LocationNode>,
    by_id: HashMap<NodeId, usize>,
    by_level: [Vec<usize>; Level::COUNT],
    by_parent: HashMap<NodeId, Vec<usize>>,
}

impl LocationHierarchy {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Index a flat node list.
    ///
    /// Loading never fails. An incomplete dataset is still indexed; call
    /// [`check_complete`](Self::check_complete) to find out whether every
    /// level is reachable. When two nodes share an id the first one is the
    /// one returned by [`by_id`](Self::by_id).
    pub fn load(nodes: impl IntoIterator<Item = LocationNode>) -> Self {
        let nodes: Vec<LocationNode> = nodes.into_iter().collect();
        let mut by_id = HashMap::with_capacity(nodes.len());
        let mut by_level: [Vec<usize>; Level::COUNT] = Default::default();
        let mut by_parent: HashMap<NodeId, Vec<usize>> = HashMap::new();

        for (idx, node) in nodes.iter().enumerate() {
            by_id.entry(node.id).or_insert(idx);
            by_level[node.level.index()].push(idx);
            if let Some(parent_id) = node.parent_id {
                by_parent.entry(parent_id).or_default().push(idx);
            }
        }

        Self {
            nodes,
            by_id,
            by_level,
            by_parent,
        }
    }

    /// A hierarchy with no nodes, the state after a failed fetch.
    pub fn empty() -> Self {
        Self::default()
    }

    // =========================================================================
    // Completeness
    // =========================================================================

    /// Levels that have no nodes at all, root first.
    pub fn missing_levels(&self) -> Vec<Level> {
        Level::ALL
            .into_iter()
            .filter(|level| self.by_level[level.index()].is_empty())
            .collect()
    }

    /// True if every level has at least one node.
    pub fn is_complete(&self) -> bool {
        self.by_level.iter().all(|ids| !ids.is_empty())
    }

    /// Report missing levels as a non-fatal `DatasetIncomplete`.
    pub fn check_complete(&self) -> Result<(), SelectionError> {
        let missing = self.missing_levels();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(SelectionError::DatasetIncomplete { missing })
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Selectable nodes at `level` under `parent_id`.
    ///
    /// For the root level the parent is ignored and every country is
    /// returned. For deeper levels a `None` parent yields nothing.
    pub fn children_of(&self, level: Level, parent_id: Option<NodeId>) -> Vec<&LocationNode> {
        if level.is_root() {
            return self.at_level(level).collect();
        }
        let Some(parent_id) = parent_id else {
            return Vec::new();
        };
        self.by_parent
            .get(&parent_id)
            .map(|children| {
                children
                    .iter()
                    .map(|&idx| &self.nodes[idx])
                    .filter(|node| node.level == level)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All nodes at one level, in delivery order.
    pub fn at_level(&self, level: Level) -> impl Iterator<Item = &LocationNode> + '_ {
        self.by_level[level.index()]
            .iter()
            .map(move |&idx| &self.nodes[idx])
    }

    pub fn by_id(&self, id: NodeId) -> Option<&LocationNode> {
        self.by_id.get(&id).map(|&idx| &self.nodes[idx])
    }

    /// The node with `id`, only if it sits at `level`.
    pub fn node_at(&self, level: Level, id: NodeId) -> Option<&LocationNode> {
        self.by_id(id).filter(|node| node.level == level)
    }

    /// First district whose code matches exactly and whose name matches
    /// ignoring case.
    pub fn find_leaf(&self, code: &str, name: &str) -> Option<&LocationNode> {
        self.at_level(Level::District)
            .find(|node| node.code == code && node.name_matches(name))
    }

    /// Parent links from `id` up to the root, starting with the node itself.
    ///
    /// Stops at the first missing parent. Never walks more than
    /// [`Level::COUNT`] links, so a cyclic dataset cannot loop.
    pub fn ancestry(&self, id: NodeId) -> Vec<&LocationNode> {
        let mut chain = Vec::with_capacity(Level::COUNT);
        let mut current = self.by_id(id);
        while let Some(node) = current {
            chain.push(node);
            if chain.len() == Level::COUNT {
                break;
            }
            current = node.parent_id.and_then(|parent| self.by_id(parent));
        }
        chain
    }

    /// Non-root nodes whose parent is missing or not exactly one level up.
    ///
    /// The dataset is trusted, so these are kept in the index; this exists
    /// for diagnostics only.
    pub fn orphans(&self) -> Vec<&LocationNode> {
        self.nodes
            .iter()
            .filter(|node| !node.level.is_root())
            .filter(|node| {
                let parent = node.parent_id.and_then(|parent| self.by_id(parent));
                parent.map(|p| Some(p.level) != node.level.parent()).unwrap_or(true)
            })
            .collect()
    }

    pub fn nodes(&self) -> &[LocationNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
