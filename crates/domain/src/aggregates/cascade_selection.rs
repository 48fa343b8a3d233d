//! Cascading four-level selection
//!
//! # Invariant
//!
//! Outside of suspension, a chosen level always has its parent level chosen
//! and the chosen node's parent is that parent choice. Writing level `k`
//! clears `k+1..=3` before the call returns, so no reader ever sees a stale
//! descendant.
//!
//! Preload needs to write all four levels at once without each write
//! wiping the previous one. It does so between `begin_suspend` and
//! `end_suspend`, during which writes do not cascade.

use serde::{Deserialize, Serialize};

use crate::aggregates::LocationHierarchy;
use crate::entities::LocationNode;
use crate::error::{DomainError, SelectionError};
use crate::ids::NodeId;
use crate::value_objects::Level;

/// One chosen identifier per level, `[country, department, province, district]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CascadeSelection([Option<NodeId>; Level::COUNT]);

/// Progress of a selection, derived from which levels are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Empty,
    Partial,
    Complete,
}

impl CascadeSelection {
    pub fn new(levels: [Option<NodeId>; Level::COUNT]) -> Self {
        Self(levels)
    }

    /// A fully chosen selection, root first.
    pub fn from_chain(chain: [NodeId; Level::COUNT]) -> Self {
        Self(chain.map(Some))
    }

    #[inline]
    pub fn get(&self, level: Level) -> Option<NodeId> {
        self.0[level.index()]
    }

    pub fn country(&self) -> Option<NodeId> {
        self.get(Level::Country)
    }

    pub fn department(&self) -> Option<NodeId> {
        self.get(Level::Department)
    }

    pub fn province(&self) -> Option<NodeId> {
        self.get(Level::Province)
    }

    pub fn district(&self) -> Option<NodeId> {
        self.get(Level::District)
    }

    pub fn as_array(&self) -> [Option<NodeId>; Level::COUNT] {
        self.0
    }

    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    pub fn state(&self) -> SelectionState {
        match self.0.iter().filter(|id| id.is_some()).count() {
            0 => SelectionState::Empty,
            n if n == Level::COUNT => SelectionState::Complete,
            _ => SelectionState::Partial,
        }
    }

    /// Shallowest level without a choice.
    pub fn first_missing(&self) -> Option<Level> {
        Level::ALL.into_iter().find(|level| self.get(*level).is_none())
    }

    /// Whether the cascade invariant holds against `hierarchy`.
    ///
    /// Every chosen id must exist at its level, and every chosen non-root
    /// node must be a child of the choice one level up.
    pub fn is_consistent(&self, hierarchy: &LocationHierarchy) -> bool {
        Level::ALL.into_iter().all(|level| {
            let Some(id) = self.get(level) else {
                return true;
            };
            let Some(node) = hierarchy.node_at(level, id) else {
                return false;
            };
            match level.parent() {
                None => true,
                Some(parent_level) => match self.get(parent_level) {
                    Some(parent_id) => node.parent_id == Some(parent_id),
                    None => false,
                },
            }
        })
    }

    fn set(&mut self, level: Level, id: Option<NodeId>) {
        self.0[level.index()] = id;
    }

    fn clear_below(&mut self, level: Level) {
        for below in level.descendants() {
            self.0[below.index()] = None;
        }
    }
}

impl From<[Option<NodeId>; Level::COUNT]> for CascadeSelection {
    fn from(levels: [Option<NodeId>; Level::COUNT]) -> Self {
        Self(levels)
    }
}

/// Whether writes cascade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ControllerMode {
    #[default]
    Normal,
    Suspended,
}

/// Holds the per-level choices of one selection session.
///
/// # Example
///
/// ```
/// use ubigeo_domain::{CascadeSelection, CascadeSelectionController, Level, NodeId};
///
/// let mut controller = CascadeSelectionController::from_selection(CascadeSelection::new([
///     Some(NodeId::new(1)),
///     Some(NodeId::new(2)),
///     Some(NodeId::new(3)),
///     None,
/// ]));
///
/// controller.set_level(Level::Country, NodeId::new(5));
/// assert_eq!(
///     controller.selection().as_array(),
///     [Some(NodeId::new(5)), None, None, None]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CascadeSelectionController {
    selection: CascadeSelection,
    mode: ControllerMode,
}

impl CascadeSelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing selection in `Normal` mode. The selection is
    /// taken as-is.
    pub fn from_selection(selection: CascadeSelection) -> Self {
        Self {
            selection,
            mode: ControllerMode::Normal,
        }
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Choose `node_id` at `level`.
    ///
    /// In `Normal` mode every deeper level is cleared in the same call.
    /// In `Suspended` mode only `level` is written.
    pub fn set_level(&mut self, level: Level, node_id: NodeId) {
        self.selection.set(level, Some(node_id));
        if self.mode == ControllerMode::Normal {
            self.selection.clear_below(level);
        }
    }

    /// Choose `node_id` at `level` only if it is one of the current
    /// [`options`](Self::options) for that level.
    ///
    /// This is the entry point for user choices; it keeps the cascade
    /// invariant for any sequence of calls.
    ///
    /// # Errors
    ///
    /// - `OptionUnavailable` if the parent level is unset or the node is not
    ///   a child of the parent choice
    /// - `PreloadInProgress` while suspended
    ///
    /// The selection is not touched on error.
    pub fn try_set_level(
        &mut self,
        level: Level,
        node_id: NodeId,
        hierarchy: &LocationHierarchy,
    ) -> Result<(), SelectionError> {
        if self.mode == ControllerMode::Suspended {
            return Err(SelectionError::PreloadInProgress);
        }
        let available = self
            .options(level, hierarchy)
            .iter()
            .any(|node| node.id == node_id);
        if !available {
            return Err(SelectionError::OptionUnavailable { level, id: node_id });
        }
        self.set_level(level, node_id);
        Ok(())
    }

    /// Drop the choice at `level`, and in `Normal` mode every deeper one.
    pub fn clear_level(&mut self, level: Level) {
        self.selection.set(level, None);
        if self.mode == ControllerMode::Normal {
            self.selection.clear_below(level);
        }
    }

    /// Enter `Suspended` mode.
    ///
    /// # Errors
    ///
    /// `DomainError::InvalidStateTransition` if already suspended.
    pub fn begin_suspend(&mut self) -> Result<(), DomainError> {
        if self.mode == ControllerMode::Suspended {
            return Err(DomainError::invalid_state_transition(
                "selection is already suspended",
            ));
        }
        self.mode = ControllerMode::Suspended;
        Ok(())
    }

    /// Leave `Suspended` mode.
    ///
    /// # Errors
    ///
    /// `DomainError::InvalidStateTransition` if not suspended.
    pub fn end_suspend(&mut self) -> Result<(), DomainError> {
        if self.mode == ControllerMode::Normal {
            return Err(DomainError::invalid_state_transition(
                "selection is not suspended",
            ));
        }
        self.mode = ControllerMode::Normal;
        Ok(())
    }

    /// Write all four levels inside one suspension.
    ///
    /// # Errors
    ///
    /// `DomainError::InvalidStateTransition` if a suspension is already open;
    /// the selection is not touched in that case.
    pub fn assign_chain(&mut self, chain: [NodeId; Level::COUNT]) -> Result<(), DomainError> {
        self.begin_suspend()?;
        for (level, id) in Level::ALL.into_iter().zip(chain) {
            self.set_level(level, id);
        }
        self.end_suspend()
    }

    /// Clear every level and return to `Normal` mode.
    pub fn reset(&mut self) {
        self.selection = CascadeSelection::default();
        self.mode = ControllerMode::Normal;
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn selection(&self) -> CascadeSelection {
        self.selection
    }

    pub fn get(&self, level: Level) -> Option<NodeId> {
        self.selection.get(level)
    }

    pub fn mode(&self) -> ControllerMode {
        self.mode
    }

    pub fn is_complete(&self) -> bool {
        self.selection.is_complete()
    }

    pub fn state(&self) -> SelectionState {
        self.selection.state()
    }

    /// Nodes the user can pick at `level` given the current choices.
    pub fn options<'h>(&self, level: Level, hierarchy: &'h LocationHierarchy) -> Vec<&'h LocationNode> {
        let parent = level.parent().and_then(|parent| self.get(parent));
        hierarchy.children_of(level, parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{arb_dataset, scenario_nodes};
    use proptest::prelude::*;

    fn id(value: i64) -> NodeId {
        NodeId::new(value)
    }

    #[test]
    fn setting_root_clears_descendants() {
        let mut controller = CascadeSelectionController::from_selection(CascadeSelection::new([
            Some(id(1)),
            Some(id(2)),
            Some(id(3)),
            None,
        ]));

        controller.set_level(Level::Country, id(5));

        assert_eq!(controller.selection().as_array(), [Some(id(5)), None, None, None]);
        assert_eq!(controller.state(), SelectionState::Partial);
    }

    #[test]
    fn setting_middle_level_keeps_ancestors() {
        let mut controller = CascadeSelectionController::from_selection(CascadeSelection::from_chain(
            [id(1), id(2), id(3), id(4)],
        ));

        controller.set_level(Level::Department, id(7));

        assert_eq!(controller.selection().as_array(), [Some(id(1)), Some(id(7)), None, None]);
    }

    #[test]
    fn clear_level_cascades() {
        let mut controller = CascadeSelectionController::from_selection(CascadeSelection::from_chain(
            [id(1), id(2), id(3), id(4)],
        ));

        controller.clear_level(Level::Province);

        assert_eq!(controller.selection().as_array(), [Some(id(1)), Some(id(2)), None, None]);
    }

    #[test]
    fn suspended_writes_do_not_cascade() {
        let mut controller = CascadeSelectionController::new();
        controller.begin_suspend().unwrap();
        controller.set_level(Level::Country, id(1));
        controller.set_level(Level::Department, id(2));
        controller.set_level(Level::Province, id(3));
        controller.set_level(Level::District, id(4));
        controller.end_suspend().unwrap();

        assert!(controller.is_complete());
        assert_eq!(controller.mode(), ControllerMode::Normal);
    }

    #[test]
    fn suspension_must_be_balanced() {
        let mut controller = CascadeSelectionController::new();
        assert!(controller.end_suspend().is_err());
        controller.begin_suspend().unwrap();
        assert!(matches!(
            controller.begin_suspend(),
            Err(DomainError::InvalidStateTransition(_))
        ));
        controller.end_suspend().unwrap();
    }

    #[test]
    fn assign_chain_refuses_nested_suspension() {
        let mut controller = CascadeSelectionController::new();
        controller.begin_suspend().unwrap();
        assert!(controller.assign_chain([id(1), id(2), id(3), id(4)]).is_err());
        assert_eq!(controller.state(), SelectionState::Empty);
    }

    #[test]
    fn reset_returns_to_empty_normal() {
        let mut controller = CascadeSelectionController::new();
        controller.begin_suspend().unwrap();
        controller.set_level(Level::Country, id(1));
        controller.reset();

        assert_eq!(controller.state(), SelectionState::Empty);
        assert_eq!(controller.mode(), ControllerMode::Normal);
    }

    #[test]
    fn options_follow_parent_choice() {
        let hierarchy = LocationHierarchy::load(scenario_nodes());
        let mut controller = CascadeSelectionController::new();

        assert!(controller.options(Level::Department, &hierarchy).is_empty());
        controller.set_level(Level::Country, id(1));
        let departments = controller.options(Level::Department, &hierarchy);
        assert_eq!(departments.len(), 1);
        assert_eq!(departments[0].id, id(2));
    }

    #[test]
    fn first_missing_reports_shallowest_gap() {
        let selection = CascadeSelection::new([Some(id(1)), Some(id(2)), None, None]);
        assert_eq!(selection.first_missing(), Some(Level::Province));
        assert_eq!(CascadeSelection::from_chain([id(1), id(2), id(3), id(4)]).first_missing(), None);
    }

    #[test]
    fn consistency_detects_disconnected_chain() {
        let hierarchy = LocationHierarchy::load(scenario_nodes());
        assert!(CascadeSelection::from_chain([id(1), id(2), id(3), id(4)]).is_consistent(&hierarchy));
        assert!(!CascadeSelection::new([None, Some(id(2)), None, None]).is_consistent(&hierarchy));
        assert!(!CascadeSelection::from_chain([id(1), id(2), id(2), id(4)]).is_consistent(&hierarchy));
    }

    #[test]
    fn try_set_level_rejects_skipped_parent() {
        let hierarchy = LocationHierarchy::load(scenario_nodes());
        let mut controller = CascadeSelectionController::new();

        let result = controller.try_set_level(Level::Province, id(3), &hierarchy);

        assert_eq!(
            result,
            Err(SelectionError::OptionUnavailable {
                level: Level::Province,
                id: id(3)
            })
        );
        assert_eq!(controller.state(), SelectionState::Empty);
    }

    #[test]
    fn try_set_level_rejects_node_from_another_branch() {
        let mut nodes = scenario_nodes();
        nodes.push(LocationNode::child_of(1, 5, Level::Department, "04", "AREQUIPA"));
        nodes.push(LocationNode::child_of(5, 6, Level::Province, "0401", "AREQUIPA"));
        let hierarchy = LocationHierarchy::load(nodes);
        let mut controller = CascadeSelectionController::new();
        controller.try_set_level(Level::Country, id(1), &hierarchy).unwrap();
        controller.try_set_level(Level::Department, id(2), &hierarchy).unwrap();

        let result = controller.try_set_level(Level::Province, id(6), &hierarchy);

        assert!(matches!(result, Err(SelectionError::OptionUnavailable { .. })));
        assert_eq!(controller.selection().as_array(), [Some(id(1)), Some(id(2)), None, None]);
    }

    #[test]
    fn try_set_level_refuses_while_suspended() {
        let hierarchy = LocationHierarchy::load(scenario_nodes());
        let mut controller = CascadeSelectionController::new();
        controller.begin_suspend().unwrap();

        let result = controller.try_set_level(Level::Country, id(1), &hierarchy);

        assert_eq!(result, Err(SelectionError::PreloadInProgress));
        assert_eq!(controller.state(), SelectionState::Empty);
    }

    proptest! {
        #[test]
        fn validated_writes_never_orphan_a_child(
            nodes in arb_dataset(),
            ops in prop::collection::vec(
                (0u8..4, any::<bool>(), any::<usize>(), 0i64..40),
                1..60,
            ),
        ) {
            let hierarchy = LocationHierarchy::load(nodes);
            let mut controller = CascadeSelectionController::new();

            for (level_idx, from_options, pick, raw_id) in ops {
                let level = Level::try_from(level_idx).unwrap();
                let options = controller.options(level, &hierarchy);
                let node_id = if from_options && !options.is_empty() {
                    options[pick % options.len()].id
                } else {
                    id(raw_id)
                };
                let before = controller.selection();

                match controller.try_set_level(level, node_id, &hierarchy) {
                    Ok(()) => {
                        prop_assert_eq!(controller.get(level), Some(node_id));
                        for below in level.descendants() {
                            prop_assert_eq!(controller.get(below), None);
                        }
                    }
                    Err(_) => prop_assert_eq!(controller.selection(), before),
                }
                prop_assert!(controller.selection().is_consistent(&hierarchy));
            }
        }
    }
}
