//! Lineup command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand, RecordSource};
use crate::config::LineupConfig;
use crate::error::ModuleCarouselError;

impl FromCommand for LineupConfig {
    fn from_command(command: Commands) -> Result<Self, ModuleCarouselError> {
        match command {
            Commands::Lineup { common, format } => LineupConfig::builder()
                .with_source(RecordSource::from(&common))
                .with_format(format.format)
                .build(),
            _ => Err(ModuleCarouselError::ConfigurationError {
                message: "Invalid command type for LineupConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(LineupConfig);

/// Execute the lineup command for ordering modules by dependency
pub fn execute_lineup_command(command: Commands) -> Result<()> {
    let config = LineupConfig::from_command(command)
        .wrap_err("Failed to parse lineup command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::lineup::LineupExecutor;
    LineupExecutor::execute(config)
}
