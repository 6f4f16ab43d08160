//! Lineup command executor

use console::style;
use miette::{Result, WrapErr};

use super::{interactive_progress, load_graph};
use crate::cli::OutputFormat;
use crate::config::LineupConfig;
use crate::executors::CommandExecutor;
use crate::reports::LineupReportGenerator;
use crate::utils::string::pluralize;

pub struct LineupExecutor;

impl CommandExecutor for LineupExecutor {
    type Config = LineupConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Lining up modules by dependency...\n",
            style("🎠").cyan()
        );

        let mut progress = interactive_progress();

        let graph = load_graph(&config.source, progress.as_mut())
            .wrap_err("Failed to build the module graph")?;

        if graph.nodes().is_empty() {
            eprintln!("{} No modules found to line up", style("ℹ").blue());
            return Ok(());
        }

        if graph.has_cycles() {
            eprintln!(
                "{} {} circular {} left out of the lineup; run inspect for details",
                style("⚠").yellow().bold(),
                style(graph.cycle_count()).red().bold(),
                pluralize("chain", graph.cycle_count())
            );
        }

        let generator = LineupReportGenerator::new();
        let report = match config.format {
            OutputFormat::Json => generator.generate_json_report(&graph),
            _ => generator.generate_human_report(&graph),
        }
        .wrap_err("Failed to generate lineup report")?;

        print!("{report}");

        Ok(())
    }
}
