//! # Module Carousel - Detect Circular Module Imports
//!
//! Module Carousel finds modules that go round in circles: chains of imports
//! between JavaScript or TypeScript modules that loop back on themselves. It
//! reads `package.json`, matches module files inside every declared
//! dependency, follows their imports and analyzes the resulting graph.
//!
//! ## Main Components
//!
//! - **Resolver**: Discovers module files and extracts the imports between
//!   them
//! - **Graph**: Derives nodes, edges, module chains and a dependency ordering
//!   from a fixed set of dependency records
//! - **Detector**: Reduces closed chains to one representative per cycle
//! - **Reports**: Generates human-readable and machine-readable reports
//!
//! ## Usage
//!
//! ### Example: Analyzing a Package
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use module_carousel::graph::ModuleGraph;
//! use module_carousel::reports::{HumanReportGenerator, ReportGenerator};
//! use module_carousel::resolver::{MatchOptions, analyze, glob_match};
//!
//! # fn main() -> miette::Result<()> {
//! let cwd = PathBuf::from("/path/to/your/app");
//!
//! // Step 1: Match module files in every dependency of package.json
//! let entries = glob_match(&MatchOptions {
//!     cwd: cwd.clone(),
//!     patterns: vec!["**/*.module.ts".to_string()],
//! })?;
//!
//! // Step 2: Follow the imports between them
//! let records = analyze(&entries, &cwd)?;
//!
//! // Step 3: Build the graph and look for cycles
//! let graph = ModuleGraph::new(records);
//! if graph.has_cycles() {
//!     println!("{}", HumanReportGenerator::new(Some(5)).generate_report(&graph)?);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Working With Records Directly
//!
//! ```
//! use module_carousel::core::DependencyRecord;
//! use module_carousel::graph::ModuleGraph;
//!
//! let graph = ModuleGraph::new(vec![
//!     DependencyRecord::new("foo1", ["foo2"]),
//!     DependencyRecord::new("foo2", ["foo3"]),
//!     DependencyRecord::new("foo3", ["foo1"]),
//! ]);
//!
//! // Rotations of one loop are reported once
//! assert_eq!(graph.circular(), [vec!["foo1", "foo2", "foo3"]]);
//! assert!(graph.paths().is_empty());
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod reports;
pub mod resolver;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();

    execute_command(cli.command)
}
