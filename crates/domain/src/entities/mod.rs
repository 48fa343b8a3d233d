//! Entities - records with identity, as received from the backend

mod location_node;

pub use location_node::LocationNode;
