//! Shared datasets for domain tests.

use proptest::prelude::*;

use crate::entities::LocationNode;
use crate::ids::NodeId;
use crate::value_objects::Level;

/// PE > LIMA > LIMA > SAN ISIDRO, ids 1..=4.
pub(crate) fn scenario_nodes() -> Vec<LocationNode> {
    vec![
        LocationNode::country(1, "PE", "PE"),
        LocationNode::child_of(1, 2, Level::Department, "15", "LIMA"),
        LocationNode::child_of(2, 3, Level::Province, "1501", "LIMA"),
        LocationNode::child_of(3, 4, Level::District, "150131", "SAN ISIDRO"),
    ]
}

/// Id base for districts whose parent does not exist.
const DANGLING_PARENT_BASE: i64 = 1_000_000;

/// Builds a well-formed tree from nested child counts, plus `dangling`
/// districts whose parent is missing. Ids are unique and sequential.
pub(crate) fn build_dataset(shape: &[Vec<Vec<usize>>], dangling: usize) -> Vec<LocationNode> {
    let mut next_id = 0i64;
    let mut fresh = || {
        next_id += 1;
        next_id
    };
    let mut nodes = Vec::new();

    for departments in shape {
        let country = fresh();
        nodes.push(LocationNode::country(country, format!("C{country}"), format!("Country {country}")));
        for provinces in departments {
            let department = fresh();
            nodes.push(LocationNode::child_of(
                country,
                department,
                Level::Department,
                format!("D{department}"),
                format!("Department {department}"),
            ));
            for &districts in provinces {
                let province = fresh();
                nodes.push(LocationNode::child_of(
                    department,
                    province,
                    Level::Province,
                    format!("P{province}"),
                    format!("Province {province}"),
                ));
                for _ in 0..districts {
                    let district = fresh();
                    nodes.push(LocationNode::child_of(
                        province,
                        district,
                        Level::District,
                        format!("{district:06}"),
                        format!("District {district}"),
                    ));
                }
            }
        }
    }

    for k in 0..dangling {
        let district = fresh();
        nodes.push(LocationNode::new(
            district,
            Some(NodeId::new(DANGLING_PARENT_BASE + k as i64)),
            Level::District,
            format!("{district:06}"),
            format!("Stray {district}"),
        ));
    }

    nodes
}

/// Small random datasets in shuffled delivery order.
pub(crate) fn arb_dataset() -> impl Strategy<Value = Vec<LocationNode>> {
    (
        prop::collection::vec(
            prop::collection::vec(prop::collection::vec(0usize..3, 0..3), 0..3),
            1..3,
        ),
        0usize..3,
    )
        .prop_map(|(shape, dangling)| build_dataset(&shape, dangling))
        .prop_shuffle()
}
