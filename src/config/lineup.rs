//! Lineup command configuration

use crate::cli::OutputFormat;
use crate::common::RecordSource;
use crate::error::ModuleCarouselError;

#[derive(Debug, Clone)]
pub struct LineupConfig {
    pub source: RecordSource,
    pub format: OutputFormat,
}

impl LineupConfig {
    pub fn builder() -> LineupConfigBuilder {
        LineupConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct LineupConfigBuilder {
    source: Option<RecordSource>,
    format: Option<OutputFormat>,
}

impl LineupConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: RecordSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl crate::common::ConfigBuilder for LineupConfigBuilder {
    type Config = LineupConfig;

    fn build(self) -> Result<Self::Config, ModuleCarouselError> {
        let format = self
            .format
            .ok_or_else(|| ModuleCarouselError::ConfigurationError {
                message: "Missing required field: format".to_string(),
            })?;

        if format == OutputFormat::GitHub {
            return Err(ModuleCarouselError::ConfigurationError {
                message: "The lineup command supports human or json output".to_string(),
            });
        }

        Ok(LineupConfig {
            source: self
                .source
                .ok_or_else(|| ModuleCarouselError::ConfigurationError {
                    message: "Missing required field: source".to_string(),
                })?,
            format,
        })
    }
}
