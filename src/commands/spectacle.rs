//! Spectacle command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand, RecordSource};
use crate::config::SpectacleConfig;
use crate::error::ModuleCarouselError;

impl FromCommand for SpectacleConfig {
    fn from_command(command: Commands) -> Result<Self, ModuleCarouselError> {
        match command {
            Commands::Spectacle {
                common,
                format,
                output,
                highlight_cycles,
            } => SpectacleConfig::builder()
                .with_source(RecordSource::from(&common))
                .with_format(format)
                .with_output(output)
                .with_highlight_cycles(highlight_cycles)
                .build(),
            _ => Err(ModuleCarouselError::ConfigurationError {
                message: "Invalid command type for SpectacleConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(SpectacleConfig);

/// Execute the spectacle command for visualizing the module graph
pub fn execute_spectacle_command(command: Commands) -> Result<()> {
    let config = SpectacleConfig::from_command(command)
        .wrap_err("Failed to parse spectacle command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::spectacle::SpectacleExecutor;
    SpectacleExecutor::execute(config)
}
