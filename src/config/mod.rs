//! # Configuration Module
//!
//! This module provides configuration structures for all module-carousel
//! commands. Each command has its own config module with a builder.
//!
//! ## Command Configurations
//!
//! - **InspectConfig**: Configuration for the `inspect` command to detect
//!   circular module chains
//! - **LineupConfig**: Configuration for the `lineup` command to order
//!   modules by dependency
//! - **SpectacleConfig**: Configuration for the `spectacle` command to
//!   visualize the module graph
//!
//! ## Example
//!
//! ```
//! use module_carousel::cli::{GraphFormat, OutputFormat};
//! use module_carousel::common::{ConfigBuilder, RecordSource};
//! use module_carousel::config::{InspectConfig, SpectacleConfig};
//!
//! let source = RecordSource::Discover {
//!     cwd: ".".into(),
//!     patterns: vec!["**/*.module.ts".to_string()],
//! };
//!
//! let inspect = InspectConfig::builder()
//!     .with_source(source.clone())
//!     .with_format(OutputFormat::Human)
//!     .with_error_on_cycles(true)
//!     .build()
//!     .unwrap();
//! assert!(inspect.error_on_cycles);
//!
//! let spectacle = SpectacleConfig::builder()
//!     .with_source(source)
//!     .with_format(GraphFormat::Dot)
//!     .build()
//!     .unwrap();
//! assert!(spectacle.highlight_cycles);
//! ```

pub mod inspect;
pub mod lineup;
pub mod spectacle;

pub use inspect::InspectConfig;
pub use lineup::LineupConfig;
pub use spectacle::SpectacleConfig;
