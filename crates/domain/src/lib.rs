//! Ubigeo Domain - four-level location selection
//!
//! ## Structure
//!
//! - `entities/` - `LocationNode`, the backend's flat record
//! - `value_objects/` - `Level`, `CompositeCode`
//! - `aggregates/` - `LocationHierarchy` index and the cascading selection
//! - `services/` - preload resolution and selection summaries
//!
//! Everything here is synchronous and free of I/O. Fetching the dataset,
//! logging, and presenting messages belong to the engine crate.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod services;
pub mod value_objects;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use aggregates::{
    CascadeSelection, CascadeSelectionController, ControllerMode, LocationHierarchy,
    SelectionState,
};
pub use entities::LocationNode;
pub use error::{DomainError, SelectionError};
pub use ids::NodeId;
pub use services::{PreloadRequest, PreloadResolver, SelectionRecord, SelectionSummaryBuilder};
pub use value_objects::{CompositeCode, Level, COMPOSITE_SEPARATOR};
