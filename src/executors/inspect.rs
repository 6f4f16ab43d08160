//! Inspect command executor

use console::style;
use miette::{Result, WrapErr};

use super::{interactive_progress, load_graph};
use crate::cli::OutputFormat;
use crate::config::InspectConfig;
use crate::executors::CommandExecutor;
use crate::reports::{
    GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, ReportGenerator,
};

pub struct InspectExecutor;

impl CommandExecutor for InspectExecutor {
    type Config = InspectConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Inspecting modules for circular imports...\n",
            style("🎠").cyan()
        );

        let mut progress = interactive_progress();

        let graph = load_graph(&config.source, progress.as_mut())
            .wrap_err("Failed to build the module graph")?;

        if graph.nodes().is_empty() {
            eprintln!("{} No modules found to analyze", style("ℹ").blue());
            return Ok(());
        }

        if let Some(p) = progress.as_ref() {
            p.start_cycle_detection();
        }

        let tangled = graph.cyclic_components();

        if let Some(p) = progress.as_ref() {
            p.finish_cycle_detection(graph.cycle_count());
        }

        let report = match config.format {
            OutputFormat::Human => HumanReportGenerator::new(config.max_cycles).generate_report(&graph),
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&graph),
            OutputFormat::GitHub => GitHubReportGenerator::new().generate_report(&graph),
        }
        .wrap_err("Failed to generate report")?;

        print!("{report}");

        // Exit with error code if cycles found and requested
        if config.error_on_cycles && (graph.has_cycles() || !tangled.is_empty()) {
            std::process::exit(1);
        }

        Ok(())
    }
}
