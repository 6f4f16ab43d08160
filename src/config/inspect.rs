//! Inspect command configuration

use crate::cli::OutputFormat;
use crate::common::RecordSource;
use crate::error::ModuleCarouselError;

/// Configuration for the inspect command
///
/// This struct contains all options for detecting and reporting circular
/// module chains.
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// Where the dependency records come from
    pub source: RecordSource,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if cycles are found
    pub error_on_cycles: bool,
    /// Maximum number of cycles to report (None = all)
    pub max_cycles: Option<usize>,
}

impl InspectConfig {
    pub fn builder() -> InspectConfigBuilder {
        InspectConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct InspectConfigBuilder {
    source: Option<RecordSource>,
    format: Option<OutputFormat>,
    error_on_cycles: Option<bool>,
    max_cycles: Option<Option<usize>>,
}

impl InspectConfigBuilder {
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

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for InspectConfigBuilder {
    type Config = InspectConfig;

    fn build(self) -> Result<Self::Config, ModuleCarouselError> {
        Ok(InspectConfig {
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
            error_on_cycles: self.error_on_cycles.unwrap_or(false),
            max_cycles: self.max_cycles.flatten(),
        })
    }
}
