//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{ReportGenerator, format_cycle, hidden_components};
use crate::error::ModuleCarouselError;
use crate::graph::ModuleGraph;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self { max_cycles }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, graph: &ModuleGraph) -> Result<String, ModuleCarouselError> {
        let mut output = String::new();
        let hidden = hidden_components(graph);

        writeln!(
            output,
            "\n{} {} {}, {} {}, {} entry {}, {} end {}",
            style("📦").blue(),
            style(graph.nodes().len()).bold(),
            pluralize("module", graph.nodes().len()),
            style(graph.edges().len()).bold(),
            pluralize("edge", graph.edges().len()),
            style(graph.entry_nodes().len()).bold(),
            pluralize("node", graph.entry_nodes().len()),
            style(graph.end_nodes().len()).bold(),
            pluralize("node", graph.end_nodes().len()),
        )?;

        if !graph.has_cycles() && hidden.is_empty() {
            write!(
                output,
                "\n{} No circular module dependencies detected! Every module chain ends.\n",
                style("✅").green().bold()
            )?;
            return Ok(output);
        }

        let total_cycles = graph.cycle_count();
        if total_cycles > 0 {
            write!(
                output,
                "\n{} Found {} circular {}:\n\n",
                style("❌").red().bold(),
                style(total_cycles).red().bold(),
                pluralize("chain", total_cycles)
            )?;
        }

        let limit = self.max_cycles.unwrap_or(total_cycles);
        for (i, cycle) in graph.circular().iter().take(limit).enumerate() {
            writeln!(output, "{} Cycle #{}", style("🔄").yellow(), i + 1)?;
            writeln!(
                output,
                "  {} {}",
                style("→").dim(),
                style(format_cycle(cycle)).yellow()
            )?;
            writeln!(output)?;
        }

        if limit < total_cycles {
            writeln!(
                output,
                "{} Showing {} of {} cycles. Use --max-cycles to see more.",
                style("ℹ️").blue(),
                style(limit).yellow(),
                style(total_cycles).yellow()
            )?;
        }

        if !hidden.is_empty() {
            writeln!(
                output,
                "{} {} tangled {} only visible when every import is followed:",
                style("🕸").magenta(),
                style(hidden.len()).red().bold(),
                pluralize("group", hidden.len())
            )?;
            for component in &hidden {
                writeln!(output, "  {} Modules involved:", style("📦").blue())?;
                for module in component {
                    writeln!(output, "    {} {}", style("•").dim(), style(module).bold())?;
                }
            }
            writeln!(output)?;
        }

        writeln!(
            output,
            "{} To break a cycle, remove at least one import from it.",
            style("💡").yellow()
        )?;
        writeln!(
            output,
            "{} Consider moving the shared providers into a module both sides can import.",
            style("💡").yellow()
        )?;

        Ok(output)
    }
}
