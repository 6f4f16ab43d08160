//! Spectacle command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::common::RecordSource;
use crate::error::ModuleCarouselError;

#[derive(Debug, Clone)]
pub struct SpectacleConfig {
    pub source: RecordSource,
    pub format: GraphFormat,
    pub output: Option<PathBuf>,
    pub highlight_cycles: bool,
}

impl SpectacleConfig {
    pub fn builder() -> SpectacleConfigBuilder {
        SpectacleConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct SpectacleConfigBuilder {
    source: Option<RecordSource>,
    format: Option<GraphFormat>,
    output: Option<Option<PathBuf>>,
    highlight_cycles: Option<bool>,
}

impl SpectacleConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: RecordSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_highlight_cycles(mut self, highlight_cycles: bool) -> Self {
        self.highlight_cycles = Some(highlight_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for SpectacleConfigBuilder {
    type Config = SpectacleConfig;

    fn build(self) -> Result<Self::Config, ModuleCarouselError> {
        Ok(SpectacleConfig {
            source: self
                .source
                .ok_or_else(|| ModuleCarouselError::ConfigurationError {
                    message: "Missing required field: source".to_string(),
                })?,
            format: self
                .format
                .ok_or_else(|| ModuleCarouselError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                })?,
            output: self.output.flatten(),
            highlight_cycles: self.highlight_cycles.unwrap_or(true),
        })
    }
}
