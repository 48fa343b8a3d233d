//! Selection summaries - what a finished selection looks like to the outside

use serde::{Deserialize, Serialize};

use crate::aggregates::{CascadeSelection, LocationHierarchy};
use crate::entities::LocationNode;
use crate::error::SelectionError;
use crate::ids::NodeId;
use crate::value_objects::{Level, COMPOSITE_SEPARATOR};

/// Structured result handed to the calling form on finalize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRecord {
    pub pais: NodeId,
    pub departamento: NodeId,
    pub provincia: NodeId,
    pub distrito: NodeId,
    pub codigo: String,
    pub nombre: String,
}

impl SelectionRecord {
    /// The persisted `"<codigo>-<nombre>"` form.
    pub fn composite(&self) -> String {
        format!("{}{}{}", self.codigo, COMPOSITE_SEPARATOR, self.nombre)
    }
}

/// Derives output representations of a selection from one hierarchy.
#[derive(Debug, Clone, Copy)]
pub struct SelectionSummaryBuilder<'h> {
    hierarchy: &'h LocationHierarchy,
}

impl<'h> SelectionSummaryBuilder<'h> {
    pub fn new(hierarchy: &'h LocationHierarchy) -> Self {
        Self { hierarchy }
    }

    /// `"<code>-<name>"` of the chosen district.
    pub fn build_composite(&self, selection: &CascadeSelection) -> Result<String, SelectionError> {
        let leaf = self.chosen(selection, Level::District)?;
        Ok(format!("{}{}{}", leaf.code, COMPOSITE_SEPARATOR, leaf.name))
    }

    /// `"<district>, <province>, <department>, <country>"`.
    pub fn build_breadcrumb(&self, selection: &CascadeSelection) -> Result<String, SelectionError> {
        let names = Level::ALL
            .into_iter()
            .rev()
            .map(|level| self.chosen(selection, level).map(|node| node.name.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names.join(", "))
    }

    /// Breadcrumb of whatever has been chosen so far, deepest first.
    pub fn build_partial_breadcrumb(&self, selection: &CascadeSelection) -> String {
        Level::ALL
            .into_iter()
            .rev()
            .filter_map(|level| self.chosen(selection, level).ok())
            .map(|node| node.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The record delivered on finalize.
    ///
    /// # Errors
    ///
    /// `IncompleteSelectionOnFinalize` naming the shallowest unset level.
    /// No partial record is ever produced.
    pub fn build_record(
        &self,
        selection: &CascadeSelection,
    ) -> Result<SelectionRecord, SelectionError> {
        if let Some(missing) = selection.first_missing() {
            return Err(SelectionError::IncompleteSelectionOnFinalize { missing });
        }
        let country = self.chosen(selection, Level::Country)?;
        let department = self.chosen(selection, Level::Department)?;
        let province = self.chosen(selection, Level::Province)?;
        let district = self.chosen(selection, Level::District)?;

        Ok(SelectionRecord {
            pais: country.id,
            departamento: department.id,
            provincia: province.id,
            distrito: district.id,
            codigo: district.code.clone(),
            nombre: district.name.clone(),
        })
    }

    // An unset level and an id the hierarchy does not know both count as
    // "nothing chosen here".
    fn chosen(
        &self,
        selection: &CascadeSelection,
        level: Level,
    ) -> Result<&'h LocationNode, SelectionError> {
        selection
            .get(level)
            .and_then(|id| self.hierarchy.by_id(id))
            .ok_or(SelectionError::IncompleteSelectionOnFinalize { missing: level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::scenario_nodes;

    fn complete() -> CascadeSelection {
        CascadeSelection::from_chain([1, 2, 3, 4].map(NodeId::new))
    }

    #[test]
    fn composite_uses_district_code_and_name() {
        let hierarchy = LocationHierarchy::load(scenario_nodes());
        let builder = SelectionSummaryBuilder::new(&hierarchy);
        assert_eq!(builder.build_composite(&complete()).unwrap(), "150131-SAN ISIDRO");
    }

    #[test]
    fn breadcrumb_runs_leaf_to_root() {
        let hierarchy = LocationHierarchy::load(scenario_nodes());
        let builder = SelectionSummaryBuilder::new(&hierarchy);
        assert_eq!(
            builder.build_breadcrumb(&complete()).unwrap(),
            "SAN ISIDRO, LIMA, LIMA, PE"
        );
    }

    #[test]
    fn partial_breadcrumb_skips_unset_levels() {
        let hierarchy = LocationHierarchy::load(scenario_nodes());
        let builder = SelectionSummaryBuilder::new(&hierarchy);
        let selection =
            CascadeSelection::new([Some(NodeId::new(1)), Some(NodeId::new(2)), None, None]);
        assert_eq!(builder.build_partial_breadcrumb(&selection), "LIMA, PE");
        assert_eq!(builder.build_partial_breadcrumb(&CascadeSelection::default()), "");
    }

    #[test]
    fn record_carries_ids_and_district() {
        let hierarchy = LocationHierarchy::load(scenario_nodes());
        let record = SelectionSummaryBuilder::new(&hierarchy)
            .build_record(&complete())
            .unwrap();

        assert_eq!(record.pais, NodeId::new(1));
        assert_eq!(record.distrito, NodeId::new(4));
        assert_eq!(record.codigo, "150131");
        assert_eq!(record.composite(), "150131-SAN ISIDRO");

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["provincia"], 3);
        assert_eq!(json["nombre"], "SAN ISIDRO");
    }

    #[test]
    fn incomplete_selection_has_no_record() {
        let hierarchy = LocationHierarchy::load(scenario_nodes());
        let builder = SelectionSummaryBuilder::new(&hierarchy);
        let selection =
            CascadeSelection::new([Some(NodeId::new(1)), Some(NodeId::new(2)), None, None]);

        assert_eq!(
            builder.build_record(&selection),
            Err(SelectionError::IncompleteSelectionOnFinalize {
                missing: Level::Province
            })
        );
        assert!(builder.build_composite(&selection).is_err());
        assert!(builder.build_breadcrumb(&selection).is_err());
    }

    #[test]
    fn unknown_id_counts_as_missing() {
        let hierarchy = LocationHierarchy::load(scenario_nodes());
        let selection = CascadeSelection::from_chain([1, 2, 3, 99].map(NodeId::new));
        assert_eq!(
            SelectionSummaryBuilder::new(&hierarchy).build_record(&selection),
            Err(SelectionError::IncompleteSelectionOnFinalize {
                missing: Level::District
            })
        );
    }
}
