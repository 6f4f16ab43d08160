//! Command executors that handle the actual logic for each command

pub mod inspect;
pub mod lineup;
pub mod spectacle;

use std::path::Path;

use console::style;
use miette::{Result, WrapErr};

use crate::common::RecordSource;
use crate::core::DependencyRecord;
use crate::error::ModuleCarouselError;
use crate::graph::ModuleGraph;
use crate::progress::ProgressReporter;
use crate::resolver::{MatchOptions, analyze_with_progress, glob_match_with_progress};
use crate::utils::string::pluralize;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Create a progress reporter if we're in an interactive terminal
pub(crate) fn interactive_progress() -> Option<ProgressReporter> {
    console::Term::stderr()
        .is_term()
        .then(ProgressReporter::new)
}

/// Build the module graph for a run, either from a records file or by
/// discovering and analyzing modules
pub(crate) fn load_graph(
    source: &RecordSource,
    progress: Option<&mut ProgressReporter>,
) -> Result<ModuleGraph> {
    let records = match source {
        RecordSource::File(path) => load_records(path)
            .wrap_err_with(|| format!("Failed to load records from '{}'", path.display()))?,
        RecordSource::Discover { cwd, patterns } => discover_records(cwd, patterns, progress)?,
    };

    Ok(ModuleGraph::new(records))
}

fn load_records(path: &Path) -> Result<Vec<DependencyRecord>, ModuleCarouselError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ModuleCarouselError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

    serde_json::from_str(&content).map_err(|e| {
        ModuleCarouselError::records_parse(&path.display().to_string(), &content, e)
    })
}

fn discover_records(
    cwd: &Path,
    patterns: &[String],
    mut progress: Option<&mut ProgressReporter>,
) -> Result<Vec<DependencyRecord>> {
    if let Some(p) = progress.as_deref_mut() {
        p.start_discovery();
    }

    let options = MatchOptions {
        cwd: cwd.to_path_buf(),
        patterns: patterns.to_vec(),
    };
    let entries = glob_match_with_progress(&options, progress.as_deref())
        .wrap_err_with(|| format!("Failed to discover modules in '{}'", cwd.display()))?;

    match progress.as_deref_mut() {
        Some(p) => {
            p.finish_discovery(entries.len());
            p.start_import_analysis(entries.len());
        }
        None => eprintln!(
            "{} Found {} {} matching {}",
            style("✓").green(),
            style(entries.len()).yellow().bold(),
            pluralize("module", entries.len()),
            style(patterns.join(", ")).dim()
        ),
    }

    let records = analyze_with_progress(&entries, cwd, progress.as_deref())
        .wrap_err("Failed to analyze module imports")?;

    if let Some(p) = progress.as_deref_mut() {
        p.finish_import_analysis();
    }

    Ok(records)
}
