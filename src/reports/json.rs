//! JSON format report generation

use serde_json::json;

use super::{ReportGenerator, hidden_components};
use crate::error::ModuleCarouselError;
use crate::graph::ModuleGraph;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, graph: &ModuleGraph) -> Result<String, ModuleCarouselError> {
        let edges: Vec<_> = graph
            .edges()
            .iter()
            .map(|(from, to)| json!({ "from": from, "to": to }))
            .collect();

        let report = json!({
            "has_cycles": graph.has_cycles(),
            "cycle_count": graph.cycle_count(),
            "nodes": graph.nodes(),
            "edges": edges,
            "entry_nodes": graph.entry_nodes(),
            "end_nodes": graph.end_nodes(),
            "paths": graph.paths(),
            "circular": graph.circular(),
            "sorted_by_dependencies": graph.sorted_by_dependencies(),
            "tangled_components": hidden_components(graph),
        });

        serde_json::to_string_pretty(&report).map_err(ModuleCarouselError::Json)
    }
}
