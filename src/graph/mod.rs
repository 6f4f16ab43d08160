//! # Module Graph Engine and Rendering
//!
//! This module builds the dependency graph over a fixed set of
//! [`DependencyRecord`](crate::core::DependencyRecord)s and answers the
//! structural queries about it.
//!
//! ## Components
//!
//! ### Graph Engine
//! - **ModuleGraph**: Immutable graph with lazily computed, cached views:
//!   nodes, edges, entry and end nodes, single-successor paths, circular
//!   chains and a dependency ordering of the acyclic paths
//! - **ModuleNode**: Node weight of the petgraph view used for rendering and
//!   strongly connected component analysis
//!
//! ### Graph Rendering
//! - **GraphRenderer**: Renders graphs as ASCII trees, Mermaid or DOT, with
//!   modules in cycles highlighted
//!
//! ## Example
//!
//! ```
//! use module_carousel::core::DependencyRecord;
//! use module_carousel::graph::ModuleGraph;
//!
//! let graph = ModuleGraph::new(vec![
//!     DependencyRecord::new("foo1", Vec::<String>::new()),
//!     DependencyRecord::new("foo2", ["foo1"]),
//!     DependencyRecord::new("foo3", ["foo2"]),
//! ]);
//!
//! assert_eq!(graph.entry_nodes(), ["foo3"]);
//! assert_eq!(graph.end_nodes(), ["foo1"]);
//! assert_eq!(graph.paths()[2], ["foo3", "foo2", "foo1"]);
//! assert!(graph.circular().is_empty());
//! ```
//!
//! ## Path Model
//!
//! Each module follows a single designated successor: the last of its edges
//! in edge order. Modules with several dependencies therefore contribute one
//! chain, not one chain per branch. [`ModuleGraph::cyclic_components`] runs
//! Tarjan's algorithm over every edge for the cycles that model cannot see.

mod engine;
mod renderer;
mod types;

pub use engine::{ModuleGraph, compare_by_dependencies};
pub use renderer::GraphRenderer;
pub use types::ModuleNode;
