//! Ubigeo engine library.
//!
//! Runs cascading location pickers over the domain model.
//!
//! ## Structure
//!
//! - `use_cases/` - Picker sessions and their lifecycle
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Shared datasets for unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
