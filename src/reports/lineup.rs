//! Dependency ordering reports for the lineup command

use std::fmt::Write;

use console::style;
use serde_json::json;

use crate::error::ModuleCarouselError;
use crate::graph::ModuleGraph;
use crate::utils::string::pluralize;

#[derive(Default)]
pub struct LineupReportGenerator;

impl LineupReportGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate_human_report(&self, graph: &ModuleGraph) -> Result<String, ModuleCarouselError> {
        let mut output = String::new();
        let sorted = graph.sorted_by_dependencies();

        writeln!(
            output,
            "{} Module lineup ({} {}):\n",
            style("🎠").cyan().bold(),
            style(sorted.len()).yellow().bold(),
            pluralize("chain", sorted.len())
        )?;

        let arrow = format!(" {} ", style("→").dim());
        let width = sorted.len().to_string().len();
        for (i, path) in sorted.iter().enumerate() {
            writeln!(
                output,
                "  {:>width$}. {}",
                i + 1,
                path.join(arrow.as_str())
            )?;
        }

        if !graph.entry_nodes().is_empty() {
            writeln!(output, "\n{} Entry modules:", style("🚪").blue())?;
            for module in graph.entry_nodes() {
                writeln!(output, "  {} {}", style("•").dim(), style(module).bold())?;
            }
        }

        if !graph.end_nodes().is_empty() {
            writeln!(output, "\n{} Leaf modules:", style("🍃").green())?;
            for module in graph.end_nodes() {
                writeln!(output, "  {} {}", style("•").dim(), style(module).bold())?;
            }
        }

        Ok(output)
    }

    pub fn generate_json_report(&self, graph: &ModuleGraph) -> Result<String, ModuleCarouselError> {
        let report = json!({
            "sorted_by_dependencies": graph.sorted_by_dependencies(),
            "entry_nodes": graph.entry_nodes(),
            "end_nodes": graph.end_nodes(),
            "excluded_cycles": graph.circular(),
        });

        serde_json::to_string_pretty(&report).map_err(ModuleCarouselError::Json)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::core::DependencyRecord;

    fn chain() -> ModuleGraph {
        ModuleGraph::new(vec![
            DependencyRecord::new("foo3", ["foo2"]),
            DependencyRecord::new("foo2", ["foo1"]),
            DependencyRecord::new("foo1", Vec::<String>::new()),
        ])
    }

    #[test]
    fn test_human_lineup_numbers_chains() {
        let report = LineupReportGenerator::new()
            .generate_human_report(&chain())
            .unwrap();
        let report = console::strip_ansi_codes(&report);

        assert!(report.contains("Module lineup (3 chains):"));
        assert!(report.contains("  1. foo1\n"));
        assert!(report.contains("  2. foo2 → foo1\n"));
        assert!(report.contains("  3. foo3 → foo2 → foo1\n"));
    }

    #[test]
    fn test_json_lineup() {
        let report = LineupReportGenerator::new()
            .generate_json_report(&chain())
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(
            json["sorted_by_dependencies"],
            json!([["foo1"], ["foo2", "foo1"], ["foo3", "foo2", "foo1"]])
        );
        assert_eq!(json["entry_nodes"], json!(["foo3"]));
        assert_eq!(json["end_nodes"], json!(["foo1"]));
        assert_eq!(json["excluded_cycles"], json!([]));
    }
}
