use std::cell::OnceCell;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::ModuleNode;
use crate::core::{DependencyRecord, Edge, ModuleId};
use crate::detector::reduce_cycles;

/// Immutable dependency graph over one analysis run
///
/// Every view is derived from the records on first access and cached for
/// the lifetime of the graph. The records are owned, so nothing can change
/// underneath a cached view.
#[derive(Debug, Default)]
pub struct ModuleGraph {
    records: Vec<DependencyRecord>,
    nodes: OnceCell<Vec<ModuleId>>,
    edges: OnceCell<Vec<Edge>>,
    entry_nodes: OnceCell<Vec<ModuleId>>,
    end_nodes: OnceCell<Vec<ModuleId>>,
    walks: OnceCell<WalkPartition>,
    sorted_by_dependencies: OnceCell<Vec<Vec<ModuleId>>>,
}

/// Acyclic paths and reduced cycles share one traversal
#[derive(Debug)]
struct WalkPartition {
    paths: Vec<Vec<ModuleId>>,
    circular: Vec<Vec<ModuleId>>,
}

impl ModuleGraph {
    /// Create a graph that owns the given records
    pub fn new(records: Vec<DependencyRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Create a graph from borrowed records, copying them
    pub fn from_records(records: &[DependencyRecord]) -> Self {
        Self::new(records.to_vec())
    }

    pub fn records(&self) -> &[DependencyRecord] {
        &self.records
    }

    /// All module identifiers, distinct and sorted
    pub fn nodes(&self) -> &[ModuleId] {
        self.nodes.get_or_init(|| {
            let mut nodes: Vec<ModuleId> =
                self.records.iter().map(|r| r.module.clone()).collect();
            nodes.sort();
            nodes.dedup();
            nodes
        })
    }

    /// Dependency edges between analyzed modules
    ///
    /// Dependencies on modules outside the record set are dropped and
    /// repeated pairs collapse. Sorted by source; targets keep the order in
    /// which their record listed them.
    pub fn edges(&self) -> &[Edge] {
        self.edges.get_or_init(|| {
            let known: HashSet<&str> = self.nodes().iter().map(String::as_str).collect();
            let mut seen: HashSet<(&str, &str)> = HashSet::new();
            let mut edges: Vec<Edge> = Vec::new();

            for record in &self.records {
                for dependency in &record.dependencies {
                    if known.contains(dependency.as_str())
                        && seen.insert((record.module.as_str(), dependency.as_str()))
                    {
                        edges.push((record.module.clone(), dependency.clone()));
                    }
                }
            }

            edges.sort_by(|(from_a, _), (from_b, _)| from_a.cmp(from_b));
            edges
        })
    }

    /// Modules no other analyzed module depends on
    pub fn entry_nodes(&self) -> &[ModuleId] {
        self.entry_nodes.get_or_init(|| {
            let targets: HashSet<&str> = self.edges().iter().map(|(_, to)| to.as_str()).collect();
            self.nodes()
                .iter()
                .filter(|node| !targets.contains(node.as_str()))
                .cloned()
                .collect()
        })
    }

    /// Modules that depend on no other analyzed module
    pub fn end_nodes(&self) -> &[ModuleId] {
        self.end_nodes.get_or_init(|| {
            let sources: HashSet<&str> =
                self.edges().iter().map(|(from, _)| from.as_str()).collect();
            self.nodes()
                .iter()
                .filter(|node| !sources.contains(node.as_str()))
                .cloned()
                .collect()
        })
    }

    /// One walk per module that did not close back onto its start
    pub fn paths(&self) -> &[Vec<ModuleId>] {
        &self.walk_partition().paths
    }

    /// Distinct cycles found by the module walks
    pub fn circular(&self) -> &[Vec<ModuleId>] {
        &self.walk_partition().circular
    }

    /// Acyclic paths with dependencies moved ahead of their dependents
    ///
    /// A path that is the trailing part of a longer path is placed before
    /// it. Unrelated paths keep their relative order. This is a best-effort
    /// ordering, not a verified topological sort.
    pub fn sorted_by_dependencies(&self) -> &[Vec<ModuleId>] {
        self.sorted_by_dependencies.get_or_init(|| {
            let mut ordered: Vec<&Vec<ModuleId>> = Vec::with_capacity(self.paths().len());

            for path in self.paths() {
                let position = ordered
                    .iter()
                    .position(|placed| compare_by_dependencies(path, placed) == Ordering::Less);

                match position {
                    Some(index) => ordered.insert(index, path),
                    None => ordered.push(path),
                }
            }

            ordered.into_iter().cloned().collect()
        })
    }

    /// Check if the module walks found any cycle
    pub fn has_cycles(&self) -> bool {
        !self.circular().is_empty()
    }

    /// Number of distinct cycles found by the module walks
    pub fn cycle_count(&self) -> usize {
        self.circular().len()
    }

    /// Direct dependencies of a module, sorted
    pub fn dependencies_of(&self, module: &str) -> Vec<&str> {
        let mut dependencies: Vec<&str> = self
            .edges()
            .iter()
            .filter(|(from, _)| from == module)
            .map(|(_, to)| to.as_str())
            .collect();
        dependencies.sort_unstable();
        dependencies
    }

    /// Modules that directly depend on a module, sorted
    pub fn dependents_of(&self, module: &str) -> Vec<&str> {
        let mut dependents: Vec<&str> = self
            .edges()
            .iter()
            .filter(|(_, to)| to == module)
            .map(|(from, _)| from.as_str())
            .collect();
        dependents.sort_unstable();
        dependents
    }

    /// Build a petgraph view with one node per module and one edge per
    /// dependency edge
    pub fn dependency_graph(&self) -> DiGraph<ModuleNode, ()> {
        let mut graph = DiGraph::with_capacity(self.nodes().len(), self.edges().len());
        let mut indices: HashMap<&str, NodeIndex> = HashMap::new();

        for node in self.nodes() {
            let idx = graph.add_node(ModuleNode::new(node.as_str()));
            indices.insert(node.as_str(), idx);
        }

        for (from, to) in self.edges() {
            if let (Some(&from_idx), Some(&to_idx)) =
                (indices.get(from.as_str()), indices.get(to.as_str()))
            {
                graph.add_edge(from_idx, to_idx, ());
            }
        }

        graph
    }

    /// Groups of mutually reachable modules
    ///
    /// Uses Tarjan's strongly connected components over every edge, so it
    /// also reports cycles the single-successor walks cannot reach. Each
    /// group is sorted and groups are ordered by their first member.
    pub fn cyclic_components(&self) -> Vec<Vec<ModuleId>> {
        let graph = self.dependency_graph();

        let mut components: Vec<Vec<ModuleId>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
            .map(|scc| {
                let mut members: Vec<ModuleId> =
                    scc.iter().map(|&idx| graph[idx].id.clone()).collect();
                members.sort();
                members
            })
            .collect();

        components.sort();
        components
    }

    fn walk_partition(&self) -> &WalkPartition {
        self.walks.get_or_init(|| {
            let walks = self.walk_all();

            let (closed, paths): (Vec<_>, Vec<_>) =
                walks.into_iter().partition(|walk| is_closed(walk));

            WalkPartition {
                paths,
                circular: reduce_cycles(&closed),
            }
        })
    }

    fn walk_all(&self) -> Vec<Vec<ModuleId>> {
        // Later edges overwrite earlier ones: each module follows only the
        // last of its edges in sort order.
        let successors: HashMap<&str, &str> = self
            .edges()
            .iter()
            .map(|(from, to)| (from.as_str(), to.as_str()))
            .collect();

        self.nodes()
            .iter()
            .map(|start| {
                let mut walk = vec![start.clone()];
                let mut visited: HashSet<&str> = HashSet::from([start.as_str()]);
                let mut current = start.as_str();

                while let Some(&next) = successors.get(current) {
                    walk.push(next.to_string());
                    if !visited.insert(next) {
                        break;
                    }
                    current = next;
                }

                walk
            })
            .collect()
    }
}

impl From<Vec<DependencyRecord>> for ModuleGraph {
    fn from(records: Vec<DependencyRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<DependencyRecord> for ModuleGraph {
    fn from_iter<T: IntoIterator<Item = DependencyRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Rank two paths for dependency ordering
///
/// A path ranks before a longer path that ends with it, and after a shorter
/// path it ends with. Every other pair is equal-ranked. The relation is not
/// a total order.
pub fn compare_by_dependencies(a: &[ModuleId], b: &[ModuleId]) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Greater if a.ends_with(b) => Ordering::Greater,
        Ordering::Less if b.ends_with(a) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

fn is_closed(walk: &[ModuleId]) -> bool {
    walk.len() > 1 && walk.first() == walk.last()
}
