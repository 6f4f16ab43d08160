//! Configuration constants for module-carousel
//!
//! This module contains the defaults used throughout the application. Most of
//! them can be overridden through command line flags or environment variables.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames for the carousel animation
    pub const SPINNER_FRAMES: &[&str] = &[
        "🎠 ", // Standing horse
        "🎠◜", // Top left
        "🎠◝", // Top right
        "🎠◞", // Bottom right
        "🎠◟", // Bottom left
        "🎠○", // Empty circle
        "🎠●", // Full circle
    ];
}

/// Output formatting configuration
pub mod output {
    /// Default report format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default graph format for the spectacle command
    pub const DEFAULT_GRAPH_FORMAT: &str = "ascii";
}

/// Module discovery configuration
pub mod discovery {
    /// Manifest that lists the packages to analyze
    pub const MANIFEST_FILE: &str = "package.json";

    /// Pattern used when no `--pattern` is given
    pub const DEFAULT_PATTERN: &str = "**/*.module.ts";

    /// Directory where installed packages live
    pub const PACKAGES_DIR: &str = "node_modules";

    /// Directories never walked while matching modules
    pub const IGNORED_DIRS: &[&str] = &["node_modules", ".git"];

    /// Extensions probed, in order, when resolving an import specifier
    pub const RESOLVE_EXTENSIONS: &[&str] =
        &[".ts", ".tsx", ".mts", ".d.ts", ".js", ".mjs", ".cjs", ".jsx", ".json"];

    /// Conditions matched against `exports` maps, ESM first
    pub const CONDITION_NAMES: &[&str] = &["import", "module", "require", "default"];

    /// `package.json` fields naming a package entry, in order
    pub const MAIN_FIELDS: &[&str] = &["module", "main"];
}
