//! Directed relation graph over synset identifiers.
//!
//! A [`RelationGraph`] stores hypernym → hyponym edges between synset ids and
//! answers reachability-closure queries in both directions. The relation data
//! is intended to be a DAG, but acyclicity is never verified, so every closure
//! traversal carries an explicit visited set and terminates on cyclic input.

use ahash::{AHashMap, AHashSet};

use crate::error::{LexnetError, Result};

/// A directed graph of synset ids with forward (children) and reverse
/// (parents) adjacency.
///
/// The graph is built once during the load phase and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct RelationGraph {
    /// Outgoing edges: node -> its direct children (more specific synsets).
    children: AHashMap<u32, AHashSet<u32>>,
    /// Incoming edges: node -> its direct parents (more general synsets).
    parents: AHashMap<u32, AHashSet<u32>>,
    /// Number of distinct edges.
    edge_count: u64,
}

impl RelationGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        RelationGraph::default()
    }

    /// Add a node to the graph. Idempotent: adding an id that is already
    /// present leaves the graph unchanged.
    pub fn add_node(&mut self, id: u32) {
        if self.contains(id) {
            return;
        }
        self.children.insert(id, AHashSet::new());
        self.parents.insert(id, AHashSet::new());
    }

    /// Add an edge pointing from `parent` to `child`.
    ///
    /// Both endpoints must already be present; otherwise the call fails with
    /// [`LexnetError::InvalidReference`]. Loaders report and skip such edges
    /// so that one malformed edge never prevents the rest of the graph from
    /// loading. Returns `true` if the edge was newly inserted, `false` if it
    /// already existed.
    pub fn add_edge(&mut self, parent: u32, child: u32) -> Result<bool> {
        if !self.contains(parent) || !self.contains(child) {
            return Err(LexnetError::invalid_reference(parent, child));
        }
        let inserted = match self.children.get_mut(&parent) {
            Some(set) => set.insert(child),
            None => false,
        };
        if inserted {
            if let Some(set) = self.parents.get_mut(&child) {
                set.insert(parent);
            }
            self.edge_count += 1;
        }
        Ok(inserted)
    }

    /// Return whether the graph contains the node.
    pub fn contains(&self, id: u32) -> bool {
        self.children.contains_key(&id)
    }

    /// Return whether there is a direct edge from `parent` to `child`.
    pub fn connects_to(&self, parent: u32, child: u32) -> bool {
        self.children
            .get(&parent)
            .is_some_and(|set| set.contains(&child))
    }

    /// Return the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.children.len()
    }

    /// Return the number of distinct edges in the graph.
    pub fn edge_count(&self) -> u64 {
        self.edge_count
    }

    /// Iterate over all node ids.
    pub fn nodes(&self) -> impl Iterator<Item = u32> + '_ {
        self.children.keys().copied()
    }

    /// Return the direct children of a node, or `None` for an unknown id.
    pub fn children_of(&self, id: u32) -> Option<&AHashSet<u32>> {
        self.children.get(&id)
    }

    /// Return the direct parents of a node, or `None` for an unknown id.
    pub fn parents_of(&self, id: u32) -> Option<&AHashSet<u32>> {
        self.parents.get(&id)
    }

    /// Return all nodes reachable from `id` via outgoing (child) edges,
    /// including `id` itself. Unknown ids yield an empty set.
    pub fn descendants_of(&self, id: u32) -> AHashSet<u32> {
        self.closure(id, &self.children)
    }

    /// Return all nodes reachable from `id` via incoming (parent) edges,
    /// including `id` itself. Unknown ids yield an empty set.
    pub fn ancestors_of(&self, id: u32) -> AHashSet<u32> {
        self.closure(id, &self.parents)
    }

    /// Return the deduplicated union of [`descendants_of`](Self::descendants_of)
    /// over each id.
    pub fn descendants_of_any<I>(&self, ids: I) -> AHashSet<u32>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut result = AHashSet::new();
        for id in ids {
            self.closure_into(id, &self.children, &mut result);
        }
        result
    }

    /// Return the deduplicated union of [`ancestors_of`](Self::ancestors_of)
    /// over each id.
    pub fn ancestors_of_any<I>(&self, ids: I) -> AHashSet<u32>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut result = AHashSet::new();
        for id in ids {
            self.closure_into(id, &self.parents, &mut result);
        }
        result
    }

    /// Reachability closure of `start` over `adjacency`.
    fn closure(&self, start: u32, adjacency: &AHashMap<u32, AHashSet<u32>>) -> AHashSet<u32> {
        let mut visited = AHashSet::new();
        self.closure_into(start, adjacency, &mut visited);
        visited
    }

    /// Iterative DFS from `start`, accumulating into `visited`. The visited
    /// set doubles as the cycle guard, so traversal terminates even when the
    /// relation data is not a true DAG.
    fn closure_into(
        &self,
        start: u32,
        adjacency: &AHashMap<u32, AHashSet<u32>>,
        visited: &mut AHashSet<u32>,
    ) {
        if !adjacency.contains_key(&start) || !visited.insert(start) {
            return;
        }
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if let Some(next) = adjacency.get(&node) {
                for &n in next {
                    if visited.insert(n) {
                        stack.push(n);
                    }
                }
            }
        }
    }
}
