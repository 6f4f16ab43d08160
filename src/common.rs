//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::constants::discovery::DEFAULT_PATTERN;

/// Common arguments shared by multiple commands
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Package root containing package.json (defaults to current directory)
    #[arg(long, value_name = "DIR", env = "MODULE_CAROUSEL_CWD")]
    pub cwd: Option<PathBuf>,

    /// Glob pattern selecting module files inside each dependency
    #[arg(
        long,
        value_name = "GLOB",
        default_value = DEFAULT_PATTERN,
        env = "MODULE_CAROUSEL_PATTERN",
        value_delimiter = ','
    )]
    pub pattern: Vec<String>,

    /// Read dependency records from a JSON file instead of scanning packages
    #[arg(long, value_name = "FILE", env = "MODULE_CAROUSEL_RECORDS")]
    pub records: Option<PathBuf>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "MODULE_CAROUSEL_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Common cycle display arguments
#[derive(Args, Debug, Clone)]
pub struct CycleDisplayArgs {
    /// Maximum number of cycles to display (shows all by default)
    #[arg(long, env = "MODULE_CAROUSEL_MAX_CYCLES")]
    pub max_cycles: Option<usize>,
}

impl CommonArgs {
    /// Get the package root, using the current directory if none provided
    pub fn get_cwd(&self) -> PathBuf {
        self.cwd
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

/// Where the dependency records of a run come from
#[derive(Debug, Clone, PartialEq)]
pub enum RecordSource {
    /// Match modules in the dependencies of `<cwd>/package.json`
    Discover { cwd: PathBuf, patterns: Vec<String> },
    /// Load precomputed records from a JSON file
    File(PathBuf),
}

impl From<&CommonArgs> for RecordSource {
    fn from(args: &CommonArgs) -> Self {
        match &args.records {
            Some(path) => RecordSource::File(path.clone()),
            None => RecordSource::Discover {
                cwd: args.get_cwd(),
                patterns: args.pattern.clone(),
            },
        }
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::ModuleCarouselError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands)
    -> Result<Self, crate::error::ModuleCarouselError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::ModuleCarouselError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
