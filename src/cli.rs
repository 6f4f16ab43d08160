use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, CycleDisplayArgs, FormatArgs};

#[derive(Parser)]
#[command(
    name = "module-carousel",
    about = "🎠 Detect circular module imports in JavaScript and TypeScript packages",
    long_about = "module-carousel reads package.json, collects the module files of every \
                  declared dependency, follows their imports and reports the chains that loop \
                  back on themselves. It can also order modules by dependency and render the \
                  module graph.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect the carousel for modules that go round in circles
    ///
    /// Follows each module's import chain and reports the chains that
    /// return to a module already visited. Rotations of the same loop are
    /// reported once.
    #[command(
        long_about = "Analyze module imports to detect circular dependency chains. This command \
                      matches module files in every dependency listed in package.json, builds \
                      the import graph and walks each module's chain of imports. Loops are \
                      reduced so every distinct set of modules is reported once. Groups of \
                      mutually importing modules that the chains miss are listed as tangled."
    )]
    Inspect {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,

        /// Exit with error code if cycles found
        #[arg(long, env = "MODULE_CAROUSEL_ERROR_ON_CYCLES")]
        error_on_cycles: bool,
    },

    /// See the full lineup of modules, dependencies first
    ///
    /// Prints every acyclic module chain, ordered so that a chain appears
    /// before the longer chains that end with it.
    #[command(
        long_about = "Display the module chains in dependency order. A chain that is the tail of \
                      a longer chain is listed first, so modules tend to appear after the \
                      modules they import. The ordering is best effort and not a verified \
                      topological sort. Chains that end in a loop are listed by inspect instead."
    )]
    Lineup {
        #[command(flatten)]
        common: CommonArgs,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Create a spectacular visualization of the module graph
    ///
    /// Generates visual representations of the module import graph in
    /// multiple formats.
    #[command(
        long_about = "Generate visual module graphs in various formats including ASCII art, \
                      Mermaid diagrams and Graphviz DOT files. Modules and imports that take \
                      part in a cycle are highlighted."
    )]
    Spectacle {
        #[command(flatten)]
        common: CommonArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_GRAPH_FORMAT,
            env = "MODULE_CAROUSEL_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "MODULE_CAROUSEL_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight cycles in the graph
        #[arg(
            long,
            default_value = "true",
            action = clap::ArgAction::Set,
            env = "MODULE_CAROUSEL_HIGHLIGHT_CYCLES"
        )]
        highlight_cycles: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "github")]
    GitHub,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Ascii,
    Mermaid,
    Dot,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_inspect_defaults() {
        let cli = Cli::try_parse_from(["module-carousel", "inspect"]).unwrap();

        match cli.command {
            Commands::Inspect {
                common,
                format,
                error_on_cycles,
                ..
            } => {
                assert_eq!(common.pattern, vec!["**/*.module.ts".to_string()]);
                assert_eq!(format.format, OutputFormat::Human);
                assert!(!error_on_cycles);
            }
            _ => panic!("expected inspect"),
        }
    }

    #[test]
    fn test_parse_spectacle_options() {
        let cli = Cli::try_parse_from([
            "module-carousel",
            "spectacle",
            "--format",
            "mermaid",
            "--highlight-cycles",
            "false",
            "--pattern",
            "src/**/*.ts",
            "--pattern",
            "lib/**/*.ts",
        ])
        .unwrap();

        match cli.command {
            Commands::Spectacle {
                common,
                format,
                highlight_cycles,
                ..
            } => {
                assert_eq!(format, GraphFormat::Mermaid);
                assert!(!highlight_cycles);
                assert_eq!(common.pattern, vec!["src/**/*.ts", "lib/**/*.ts"]);
            }
            _ => panic!("expected spectacle"),
        }
    }
}
