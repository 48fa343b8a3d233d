//! Domain services - stateless operations over the aggregates

mod preload;
mod summary;

pub use preload::{PreloadRequest, PreloadResolver};
pub use summary::{SelectionRecord, SelectionSummaryBuilder};
