//! Command implementations for module-carousel CLI
//!
//! This module contains the implementations for each CLI command:
//! - inspect: Inspect the carousel for circular module chains
//! - lineup: See the full lineup of modules, dependencies first
//! - spectacle: Create a spectacular visualization of the module graph

pub mod inspect;
pub mod lineup;
pub mod spectacle;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Inspect { .. } => inspect::execute_inspect_command(command),
        Commands::Lineup { .. } => lineup::execute_lineup_command(command),
        Commands::Spectacle { .. } => spectacle::execute_spectacle_command(command),
    }
}
