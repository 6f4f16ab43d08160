//! Graph node types
//!
//! This module contains the node weight used by the petgraph view of a
//! module graph.

/// Represents a module in the petgraph view of the dependency graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNode {
    pub id: String,
}

impl ModuleNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Last path segment, used as a compact label
    pub fn short_name(&self) -> &str {
        self.id.rsplit('/').next().unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name() {
        assert_eq!(
            ModuleNode::new("../third/foo3/foo3.module.ts").short_name(),
            "foo3.module.ts"
        );
        assert_eq!(ModuleNode::new("plain").short_name(), "plain");
    }
}
