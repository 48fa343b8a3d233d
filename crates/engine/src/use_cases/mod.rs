//! Use cases - User story orchestration.
//!
//! Use cases drive the domain aggregates through the infrastructure ports.

pub mod picker;

pub use picker::PickerUseCases;
