//! Core type definitions
//!
//! This module contains the basic data structures exchanged between the
//! module resolver and the graph engine, with minimal logic.

use serde::{Deserialize, Serialize};

/// Identifier of one analyzed module, usually a path relative to the
/// analysis root. Compared with exact string equality.
pub type ModuleId = String;

/// A directed dependency edge `(from, to)`
pub type Edge = (ModuleId, ModuleId);

/// The other analyzed modules a module directly imports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRecord {
    pub module: ModuleId,
    #[serde(default)]
    pub dependencies: Vec<ModuleId>,
}

impl DependencyRecord {
    pub fn new<M, I, D>(module: M, dependencies: I) -> Self
    where
        M: Into<ModuleId>,
        I: IntoIterator<Item = D>,
        D: Into<ModuleId>,
    {
        Self {
            module: module.into(),
            dependencies: dependencies.into_iter().map(Into::into).collect(),
        }
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn dependencies(&self) -> &[ModuleId] {
        &self.dependencies
    }
}
