use std::collections::HashSet;
use std::io::Write;

use miette::Result;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::error::ModuleCarouselError;
use crate::graph::ModuleGraph;

// Blue-Orange Accessible Palette
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(ModuleCarouselError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(ModuleCarouselError::from)
    };
}

pub struct GraphRenderer {
    highlight_cycles: bool,
}

impl GraphRenderer {
    pub fn new(highlight_cycles: bool) -> Self {
        Self { highlight_cycles }
    }

    pub fn render_ascii(&self, graph: &ModuleGraph, output: &mut dyn Write) -> Result<()> {
        if graph.nodes().is_empty() {
            writeln_out!(output, "No modules found to visualize")?;
            return Ok(());
        }

        writeln_out!(output, "\n📊 Module Dependency Graph\n")?;

        let cycle_groups = self.cycle_groups(graph);

        for module in graph.nodes() {
            let in_cycle = self.in_any_cycle(module, &cycle_groups);

            if in_cycle {
                writeln_out!(output, "┌─────────────────────────────────────┐")?;
                writeln_out!(output, "│ {} ⚠️  IN CYCLE", module)?;
                writeln_out!(output, "└─────────────────────────────────────┘")?;
            } else {
                writeln_out!(output, "{}", module)?;
            }

            let dependencies = graph.dependencies_of(module);
            if dependencies.is_empty() {
                writeln_out!(output, "  └── (no module dependencies)")?;
            }

            for (i, dependency) in dependencies.iter().enumerate() {
                let prefix = if i == dependencies.len() - 1 {
                    "└──"
                } else {
                    "├──"
                };

                let cycle_marker = if self.is_edge_in_cycle(module, dependency, &cycle_groups) {
                    " ⚠️  [CYCLE]"
                } else {
                    ""
                };

                writeln_out!(output, "  {} → {}{}", prefix, dependency, cycle_marker)?;
            }

            writeln_out!(output)?;
        }

        if !cycle_groups.is_empty() {
            writeln_out!(output, "⚠️  = Part of a dependency cycle")?;
        }

        Ok(())
    }

    pub fn render_mermaid(&self, graph: &ModuleGraph, output: &mut dyn Write) -> Result<()> {
        writeln_out!(output, "graph TD")?;

        let cycle_groups = self.cycle_groups(graph);

        for module in graph.nodes() {
            let node_id = self.mermaid_id(module);
            let in_cycle = self.in_any_cycle(module, &cycle_groups);

            if in_cycle {
                writeln_out!(output, "    {}((\"{}\"))", node_id, module)?;
                writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{},stroke-width:3px",
                    node_id,
                    colors::CYCLE_NODE_FILL,
                    colors::CYCLE_NODE_STROKE
                )?;
            } else {
                writeln_out!(output, "    {}[\"{}\"]", node_id, module)?;
                writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{},stroke-width:2px",
                    node_id,
                    colors::NORMAL_NODE_FILL,
                    colors::NORMAL_NODE_STROKE
                )?;
            }
        }

        if !graph.edges().is_empty() {
            writeln_out!(output)?;
        }

        // Mermaid numbers links in declaration order
        let mut cycle_links = Vec::new();
        for (index, (from, to)) in graph.edges().iter().enumerate() {
            let in_cycle = self.is_edge_in_cycle(from, to, &cycle_groups);
            let arrow = if in_cycle { "==>" } else { "-->" };
            writeln_out!(
                output,
                "    {} {} {}",
                self.mermaid_id(from),
                arrow,
                self.mermaid_id(to)
            )?;
            if in_cycle {
                cycle_links.push(index.to_string());
            }
        }

        if !cycle_links.is_empty() {
            writeln_out!(
                output,
                "    linkStyle {} stroke:{},stroke-width:3px",
                cycle_links.join(","),
                colors::CYCLE_EDGE
            )?;
        }

        Ok(())
    }

    pub fn render_dot(&self, graph: &ModuleGraph, output: &mut dyn Write) -> Result<()> {
        writeln_out!(output, "digraph module_dependencies {{")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(output, "    node [shape=box, style=rounded];")?;
        writeln_out!(output)?;

        let cycle_groups = self.cycle_groups(graph);
        let view = graph.dependency_graph();

        let mut nodes: Vec<NodeIndex> = view.node_indices().collect();
        nodes.sort_by_key(|&idx| view[idx].id());

        for &idx in &nodes {
            let module = &view[idx];
            let (fill_color, stroke_color) = if self.in_any_cycle(module.id(), &cycle_groups) {
                (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE)
            } else {
                (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE)
            };

            writeln_out!(
                output,
                r#"    "{}" [label="{}", style=filled, fillcolor="{}", color="{}", penwidth=2];"#,
                module.id(),
                module.short_name(),
                fill_color,
                stroke_color
            )?;
        }

        writeln_out!(output)?;

        for &idx in &nodes {
            for edge in view.edges(idx) {
                let source = &view[edge.source()];
                let target = &view[edge.target()];

                if self.is_edge_in_cycle(source.id(), target.id(), &cycle_groups) {
                    writeln_out!(
                        output,
                        r#"    "{}" -> "{}" [color="{}", penwidth=3];"#,
                        source.id(),
                        target.id(),
                        colors::CYCLE_EDGE
                    )?;
                } else {
                    writeln_out!(
                        output,
                        r#"    "{}" -> "{}" [color="{}", penwidth=2];"#,
                        source.id(),
                        target.id(),
                        colors::NORMAL_EDGE
                    )?;
                }
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    // Circular chains plus tangled components; empty when highlighting is off
    fn cycle_groups(&self, graph: &ModuleGraph) -> Vec<HashSet<String>> {
        if !self.highlight_cycles {
            return Vec::new();
        }

        graph
            .circular()
            .iter()
            .cloned()
            .chain(graph.cyclic_components())
            .map(|group| group.into_iter().collect())
            .collect()
    }

    fn in_any_cycle(&self, module: &str, cycle_groups: &[HashSet<String>]) -> bool {
        cycle_groups.iter().any(|group| group.contains(module))
    }

    fn is_edge_in_cycle(&self, from: &str, to: &str, cycle_groups: &[HashSet<String>]) -> bool {
        cycle_groups
            .iter()
            .any(|group| group.contains(from) && group.contains(to))
    }

    fn mermaid_id(&self, name: &str) -> String {
        // Replace non-alphanumeric characters with underscores for valid Mermaid IDs
        name.chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect()
    }
}
