//! Inspect command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand, RecordSource};
use crate::config::InspectConfig;
use crate::error::ModuleCarouselError;

impl FromCommand for InspectConfig {
    fn from_command(command: Commands) -> Result<Self, ModuleCarouselError> {
        match command {
            Commands::Inspect {
                common,
                format,
                cycle_display,
                error_on_cycles,
            } => InspectConfig::builder()
                .with_source(RecordSource::from(&common))
                .with_format(format.format)
                .with_error_on_cycles(error_on_cycles)
                .with_max_cycles(cycle_display.max_cycles)
                .build(),
            _ => Err(ModuleCarouselError::ConfigurationError {
                message: "Invalid command type for InspectConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(InspectConfig);

/// Execute the inspect command for detecting circular module chains
pub fn execute_inspect_command(command: Commands) -> Result<()> {
    let config = InspectConfig::from_command(command)
        .wrap_err("Failed to parse inspect command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::inspect::InspectExecutor;
    InspectExecutor::execute(config)
}
