//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod file_source;
pub mod http_source;
pub mod notifier;
pub mod ports;
pub mod settings;

mod payload;
