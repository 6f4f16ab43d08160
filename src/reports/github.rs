//! GitHub Actions format report generation

use std::fmt::Write;

use super::{ReportGenerator, format_cycle, hidden_components};
use crate::error::ModuleCarouselError;
use crate::graph::ModuleGraph;

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, graph: &ModuleGraph) -> Result<String, ModuleCarouselError> {
        let mut output = String::new();
        let hidden = hidden_components(graph);

        if !graph.has_cycles() && hidden.is_empty() {
            writeln!(
                output,
                "::notice title=Module Check::No circular module dependencies detected! ✅"
            )?;
            return Ok(output);
        }

        for cycle in graph.circular() {
            writeln!(
                output,
                "::error title=Circular module dependency::{}",
                format_cycle(cycle)
            )?;
        }

        for component in &hidden {
            writeln!(
                output,
                "::warning title=Tangled modules::{}",
                component.join(", ")
            )?;
        }

        writeln!(
            output,
            "::notice title=Recommendation::To break these cycles, move the shared code into a \
             module that both sides can import."
        )?;

        Ok(output)
    }
}
