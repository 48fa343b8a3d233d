//! Shared test datasets for engine tests.

use ubigeo_domain::{Level, LocationNode};

/// PE > LIMA > LIMA > SAN ISIDRO, ids 1..=4.
pub fn scenario_nodes() -> Vec<LocationNode> {
    vec![
        LocationNode::country(1, "PE", "PE"),
        LocationNode::child_of(1, 2, Level::Department, "15", "LIMA"),
        LocationNode::child_of(2, 3, Level::Province, "1501", "LIMA"),
        LocationNode::child_of(3, 4, Level::District, "150131", "SAN ISIDRO"),
    ]
}

/// A second department with two districts, next to [`scenario_nodes`].
pub fn two_department_nodes() -> Vec<LocationNode> {
    let mut nodes = scenario_nodes();
    nodes.extend([
        LocationNode::child_of(1, 5, Level::Department, "04", "AREQUIPA"),
        LocationNode::child_of(5, 6, Level::Province, "0401", "AREQUIPA"),
        LocationNode::child_of(6, 7, Level::District, "040101", "AREQUIPA"),
        LocationNode::child_of(6, 8, Level::District, "040103", "CAYMA"),
    ]);
    nodes
}
