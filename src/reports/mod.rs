//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//! - github: GitHub Actions workflow commands
//! - lineup: Dependency ordering for the lineup command

pub mod github;
pub mod human;
pub mod json;
pub mod lineup;

use crate::error::ModuleCarouselError;
use crate::graph::ModuleGraph;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report describing the cycles of a module graph
    fn generate_report(&self, graph: &ModuleGraph) -> Result<String, ModuleCarouselError>;
}

/// Render a reduced cycle as `a → b → a`
pub(crate) fn format_cycle(cycle: &[String]) -> String {
    cycle
        .iter()
        .chain(cycle.first())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Strongly connected components whose members differ from every reduced
/// cycle, i.e. cycles only visible when every edge is followed
pub(crate) fn hidden_components(graph: &ModuleGraph) -> Vec<Vec<String>> {
    let known: Vec<Vec<&str>> = graph
        .circular()
        .iter()
        .map(|cycle| crate::detector::canonical_key(cycle))
        .collect();

    graph
        .cyclic_components()
        .into_iter()
        .filter(|component| {
            let members: Vec<&str> = component.iter().map(String::as_str).collect();
            !known.contains(&members)
        })
        .collect()
}

// Re-export for convenience
pub use github::GitHubReportGenerator;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
pub use lineup::LineupReportGenerator;
