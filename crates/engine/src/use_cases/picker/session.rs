//! Picker session - one open location picker
//!
//! A session owns the hierarchy snapshot it was opened with, the cascading
//! selection, and a one-shot preload latch. Nothing in it outlives the
//! session: opening another picker builds a fresh one.

use std::sync::Arc;

use serde::Serialize;
use ubigeo_domain::{
    CascadeSelection, CascadeSelectionController, Level, LocationHierarchy, LocationNode, NodeId,
    PreloadRequest, PreloadResolver, SelectionError, SelectionRecord, SelectionState,
    SelectionSummaryBuilder, COMPOSITE_SEPARATOR,
};

use crate::infrastructure::ports::{Notice, NotifierPort};

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error("Location data is not complete; stored selection was not restored")]
    NotReady,
    #[error("Stored selection was already restored for this session")]
    PreloadAlreadyAttempted,
    #[error("No location picker is open")]
    NoSession,
}

// =============================================================================
// Session Types
// =============================================================================

/// Whether this session has spent its single preload attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PreloadLatch {
    #[default]
    NotAttempted,
    Attempted,
}

/// What the calling form receives when the user confirms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalizedSelection {
    pub record: SelectionRecord,
    /// `"<codigo>-<nombre>"`, the persisted form
    pub composite: String,
}

// =============================================================================
// Session
// =============================================================================

pub struct PickerSession {
    hierarchy: LocationHierarchy,
    controller: CascadeSelectionController,
    latch: PreloadLatch,
    notifier: Arc<dyn NotifierPort>,
}

impl PickerSession {
    pub fn new(hierarchy: LocationHierarchy, notifier: Arc<dyn NotifierPort>) -> Self {
        Self {
            hierarchy,
            controller: CascadeSelectionController::new(),
            latch: PreloadLatch::NotAttempted,
            notifier,
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn hierarchy(&self) -> &LocationHierarchy {
        &self.hierarchy
    }

    pub fn selection(&self) -> CascadeSelection {
        self.controller.selection()
    }

    pub fn state(&self) -> SelectionState {
        self.controller.state()
    }

    pub fn is_complete(&self) -> bool {
        self.controller.is_complete()
    }

    pub fn preload_latch(&self) -> PreloadLatch {
        self.latch
    }

    /// The choices offered at `level` right now.
    pub fn options(&self, level: Level) -> Vec<&LocationNode> {
        self.controller.options(level, &self.hierarchy)
    }

    /// Names of the chosen nodes, deepest first.
    pub fn breadcrumb(&self) -> String {
        SelectionSummaryBuilder::new(&self.hierarchy).build_partial_breadcrumb(&self.selection())
    }

    // =========================================================================
    // User interaction
    // =========================================================================

    /// Choose `node_id` at `level`; deeper choices are dropped.
    ///
    /// Only one of the current [`options`](Self::options) for `level` is
    /// accepted. A rejected choice leaves the selection untouched.
    pub fn select(&mut self, level: Level, node_id: NodeId) -> Result<(), PickerError> {
        self.controller
            .try_set_level(level, node_id, &self.hierarchy)
            .map_err(|error| {
                tracing::warn!(level = %level, node_id = %node_id, error = %error, "Location choice rejected");
                error
            })?;
        tracing::debug!(level = %level, node_id = %node_id, "Location level selected");
        Ok(())
    }

    /// Drop the choice at `level` and below.
    pub fn clear(&mut self, level: Level) {
        tracing::debug!(level = %level, "Location level cleared");
        self.controller.clear_level(level);
    }

    /// Forget every choice. The preload latch is not reset.
    pub fn reset(&mut self) {
        self.controller.reset();
    }

    // =========================================================================
    // Preload
    // =========================================================================

    /// Restore a stored selection, at most once per session.
    ///
    /// Deferred with `NotReady` while any level is missing from the dataset;
    /// the latch stays open so the caller may try again. Resolution
    /// failures are reported through the notifier and leave the selection
    /// untouched.
    pub fn preload(&mut self, request: &PreloadRequest) -> Result<CascadeSelection, PickerError> {
        if self.latch == PreloadLatch::Attempted {
            return Err(PickerError::PreloadAlreadyAttempted);
        }
        if !self.hierarchy.is_complete() {
            tracing::debug!(
                strategy = request.strategy(),
                missing = ?self.hierarchy.missing_levels(),
                "Preload deferred until location data is complete"
            );
            return Err(PickerError::NotReady);
        }
        self.latch = PreloadLatch::Attempted;

        let resolver = PreloadResolver::new(&self.hierarchy);
        match resolver.resolve(&mut self.controller, request) {
            Ok(selection) => {
                tracing::info!(
                    strategy = request.strategy(),
                    district = ?selection.district(),
                    "Stored selection restored"
                );
                Ok(selection)
            }
            Err(error) => {
                tracing::warn!(
                    strategy = request.strategy(),
                    error = %error,
                    "Stored selection could not be restored"
                );
                self.report(&error);
                Err(error.into())
            }
        }
    }

    // =========================================================================
    // Finalize
    // =========================================================================

    /// Produce the record for the calling form.
    ///
    /// Blocked with `IncompleteSelectionOnFinalize` until all four levels
    /// are chosen; the failure is reported and nothing is emitted.
    pub fn finalize(&self) -> Result<FinalizedSelection, PickerError> {
        let summary = SelectionSummaryBuilder::new(&self.hierarchy);
        let selection = self.selection();

        let finalized = summary.build_record(&selection).and_then(|record| {
            let composite = summary.build_composite(&selection)?;
            Ok(FinalizedSelection { record, composite })
        });

        match finalized {
            Ok(finalized) => {
                if finalized.record.nombre.contains(COMPOSITE_SEPARATOR) {
                    tracing::warn!(
                        composite = %finalized.composite,
                        "District name contains the composite separator; it will not parse back"
                    );
                }
                tracing::info!(composite = %finalized.composite, "Location selection finalized");
                Ok(finalized)
            }
            Err(error) => {
                self.report(&error);
                Err(error.into())
            }
        }
    }

    fn report(&self, error: &SelectionError) {
        self.notifier.notify(Notice::from(error));
    }
}

impl std::fmt::Debug for PickerSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickerSession")
            .field("nodes", &self.hierarchy.len())
            .field("selection", &self.controller.selection())
            .field("latch", &self.latch)
            .finish()
    }
}
