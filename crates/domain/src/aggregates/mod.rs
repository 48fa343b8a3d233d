//! Aggregates - the session-scoped state of a location picker
//!
//! - [`LocationHierarchy`] is the immutable index over one dataset
//! - [`CascadeSelectionController`] owns the four per-level choices

pub mod cascade_selection;
pub mod location_hierarchy;

pub use cascade_selection::{
    CascadeSelection, CascadeSelectionController, ControllerMode, SelectionState,
};
pub use location_hierarchy::LocationHierarchy;
