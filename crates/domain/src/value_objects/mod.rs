//! Value objects - immutable types defined by their values

mod composite_code;
mod level;

pub use composite_code::{CompositeCode, COMPOSITE_SEPARATOR};
pub use level::Level;
