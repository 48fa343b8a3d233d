//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - The location dataset (could swap HTTP -> file -> embedded list)
//! - User notifications (could swap logging -> UI toasts)

mod error;
mod external;

pub use error::SourceError;
pub use external::{LocationSourcePort, Notice, NoticeSeverity, NotifierPort};

#[cfg(test)]
pub use external::{MockLocationSourcePort, MockNotifierPort};
