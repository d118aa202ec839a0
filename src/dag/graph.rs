// src/dag/graph.rs

use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, trace};

use crate::config::GraphConfig;
use crate::errors::{DagError, Result};
use crate::types::SelfLoopPolicy;

/// Anything usable as a node identifier.
///
/// The graph assigns ids no meaning beyond identity. `Debug` is required so
/// that errors and log events can name the offending node.
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> NodeId for T {}

/// In-memory dependency graph keyed by caller-supplied node ids.
///
/// An edge `from -> to` means `to` depends on `from`, so `from` is ordered
/// first. The graph keeps two adjacency maps in lockstep:
///
/// - `forward[n]`: the nodes that depend on `n` (its dependents)
/// - `backward[n]`: the nodes `n` depends on (its dependencies)
///
/// Both maps always have the same key set, and `b ∈ forward[a]` iff
/// `a ∈ backward[b]`. Every mutation checks its preconditions before
/// touching either map, so a failed call leaves the graph unchanged.
///
/// Cycles are not rejected on insertion. Use [`DependencyGraph::validate`]
/// to check acyclicity when it matters.
///
/// Iteration order is deterministic: nodes come out in insertion order and
/// each neighbour set in edge insertion order.
#[derive(Debug, Clone)]
pub struct DependencyGraph<N> {
    pub(super) forward: IndexMap<N, IndexSet<N>>,
    pub(super) backward: IndexMap<N, IndexSet<N>>,
    self_loops: SelfLoopPolicy,
}

impl<N> Default for DependencyGraph<N> {
    fn default() -> Self {
        Self {
            forward: IndexMap::default(),
            backward: IndexMap::default(),
            self_loops: SelfLoopPolicy::default(),
        }
    }
}

impl<N: NodeId> DependencyGraph<N> {
    /// Create an empty graph with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph using the `[graph]` options of `cfg`.
    pub fn with_config(cfg: &GraphConfig) -> Self {
        Self::with_self_loop_policy(cfg.graph.self_loops)
    }

    pub fn with_self_loop_policy(policy: SelfLoopPolicy) -> Self {
        Self {
            self_loops: policy,
            ..Self::default()
        }
    }

    pub fn self_loop_policy(&self) -> SelfLoopPolicy {
        self.self_loops
    }

    /// Build a graph from a mapping of each node to its dependents.
    ///
    /// Every key becomes a node, then an edge `key -> dependent` is added for
    /// each listed dependent. Dependents must themselves appear as keys.
    pub fn from_adjacency<I, D>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, D)>,
        D: IntoIterator<Item = N>,
    {
        let mut graph = Self::new();
        graph.load_adjacency(adjacency)?;
        Ok(graph)
    }

    /// Replace the contents of this graph with `adjacency` (see
    /// [`Self::from_adjacency`]), keeping the current options.
    ///
    /// On error the graph keeps its previous contents.
    pub fn load_adjacency<I, D>(&mut self, adjacency: I) -> Result<()>
    where
        I: IntoIterator<Item = (N, D)>,
        D: IntoIterator<Item = N>,
    {
        let entries: Vec<(N, Vec<N>)> = adjacency
            .into_iter()
            .map(|(node, deps)| (node, deps.into_iter().collect()))
            .collect();

        let mut fresh = Self::with_self_loop_policy(self.self_loops);
        for (node, _) in &entries {
            fresh.add_node(node.clone())?;
        }
        for (node, dependents) in &entries {
            for dependent in dependents {
                fresh.add_edge(node, dependent)?;
            }
        }

        debug!(
            nodes = fresh.size(),
            edges = fresh.edge_count(),
            "loaded graph from adjacency mapping"
        );
        *self = fresh;
        Ok(())
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Number of edges (self-loops count once).
    pub fn edge_count(&self) -> usize {
        self.forward.values().map(IndexSet::len).sum()
    }

    pub fn contains_node<Q>(&self, id: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.contains_key(id)
    }

    pub fn contains_edge<Q>(&self, from: &Q, to: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.get(from).is_some_and(|deps| deps.contains(to))
    }

    /// Add a node with no edges.
    ///
    /// Fails with [`DagError::DuplicateNode`] if the node already exists.
    pub fn add_node(&mut self, id: N) -> Result<()> {
        if self.forward.contains_key(&id) {
            return Err(DagError::duplicate_node(&id));
        }

        debug!(node = ?id, "adding node");
        self.backward.insert(id.clone(), IndexSet::new());
        self.forward.insert(id, IndexSet::new());
        Ok(())
    }

    /// Add a node unless it is already present. Returns `true` if added.
    pub fn add_node_if_not_exists(&mut self, id: N) -> bool {
        if self.forward.contains_key(&id) {
            trace!(node = ?id, "node already present; skipping add");
            return false;
        }
        // Cannot fail: presence was just checked.
        self.add_node(id).is_ok()
    }

    /// Remove a node and every edge touching it.
    ///
    /// Fails with [`DagError::NodeNotFound`] if the node does not exist.
    pub fn delete_node<Q>(&mut self, id: &Q) -> Result<()>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let Some((node, dependents)) = self.forward.shift_remove_entry(id) else {
            return Err(DagError::node_not_found(&id));
        };
        let dependencies = self.backward.shift_remove(id).unwrap_or_default();

        for parent in &dependencies {
            if let Some(set) = self.forward.get_mut(parent) {
                set.shift_remove(&node);
            }
        }
        for child in &dependents {
            if let Some(set) = self.backward.get_mut(child) {
                set.shift_remove(&node);
            }
        }

        debug!(
            node = ?node,
            severed_in = dependencies.len(),
            severed_out = dependents.len(),
            "deleted node"
        );
        Ok(())
    }

    /// Remove a node if present. Returns `true` if something was removed.
    pub fn delete_node_if_exists<Q>(&mut self, id: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        if !self.forward.contains_key(id) {
            trace!(node = ?id, "node absent; skipping delete");
            return false;
        }
        self.delete_node(id).is_ok()
    }

    /// Add the edge `from -> to` (`to` depends on `from`).
    ///
    /// Both endpoints must already exist. Adding an existing edge again is a
    /// no-op. Whether `from == to` is accepted depends on the graph's
    /// [`SelfLoopPolicy`].
    pub fn add_edge<Q>(&mut self, from: &Q, to: &Q) -> Result<()>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let Some((from_key, _)) = self.forward.get_key_value(from) else {
            return Err(DagError::node_not_found(&from));
        };
        let Some((to_key, _)) = self.forward.get_key_value(to) else {
            return Err(DagError::node_not_found(&to));
        };
        let (from_key, to_key) = (from_key.clone(), to_key.clone());

        if from_key == to_key && self.self_loops == SelfLoopPolicy::Reject {
            return Err(DagError::self_loop(&from_key));
        }

        let inserted = match self.forward.get_mut(&from_key) {
            Some(set) => set.insert(to_key.clone()),
            None => false,
        };
        if let Some(set) = self.backward.get_mut(&to_key) {
            set.insert(from_key.clone());
        }

        if inserted {
            debug!(from = ?from_key, to = ?to_key, "added edge");
        } else {
            trace!(from = ?from_key, to = ?to_key, "edge already present");
        }
        Ok(())
    }

    /// Remove the edge `from -> to`.
    ///
    /// Fails with [`DagError::EdgeNotFound`] if there is no such edge,
    /// including when either endpoint is unknown.
    pub fn delete_edge<Q>(&mut self, from: &Q, to: &Q) -> Result<()>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let removed = self
            .forward
            .get_mut(from)
            .is_some_and(|set| set.shift_remove(to));
        if !removed {
            return Err(DagError::edge_not_found(&from, &to));
        }
        if let Some(set) = self.backward.get_mut(to) {
            set.shift_remove(from);
        }

        debug!(from = ?from, to = ?to, "deleted edge");
        Ok(())
    }

    /// Rename a node, carrying all of its edges over to the new id.
    ///
    /// The node keeps its position in node order, and the new id takes the
    /// old one's position in every neighbour set.
    pub fn rename_node<Q>(&mut self, old: &Q, new: N) -> Result<()>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let Some(fwd_idx) = self.forward.get_index_of(old) else {
            return Err(DagError::node_not_found(&old));
        };
        if self.forward.contains_key(&new) {
            if <N as Borrow<Q>>::borrow(&new) == old {
                return Ok(());
            }
            return Err(DagError::duplicate_node(&new));
        }
        let Some(bwd_idx) = self.backward.get_index_of(old) else {
            return Err(DagError::node_not_found(&old));
        };

        let Some((old_key, mut dependents)) = self.forward.shift_remove_index(fwd_idx) else {
            return Err(DagError::node_not_found(&old));
        };
        let mut dependencies = self
            .backward
            .shift_remove_index(bwd_idx)
            .map(|(_, deps)| deps)
            .unwrap_or_default();

        // A self-loop shows up in the node's own sets.
        replace_in_set(&mut dependents, &old_key, &new);
        replace_in_set(&mut dependencies, &old_key, &new);

        for parent in &dependencies {
            if let Some(set) = self.forward.get_mut(parent) {
                replace_in_set(set, &old_key, &new);
            }
        }
        for child in &dependents {
            if let Some(set) = self.backward.get_mut(child) {
                replace_in_set(set, &old_key, &new);
            }
        }

        debug!(old = ?old_key, new = ?new, "renamed node");
        self.forward.shift_insert(fwd_idx, new.clone(), dependents);
        self.backward.shift_insert(bwd_idx, new, dependencies);
        Ok(())
    }

    /// Direct dependencies of `id`. Empty if `id` is unknown.
    pub fn predecessors<'a, Q>(&'a self, id: &Q) -> impl Iterator<Item = &'a N> + use<'a, N, Q>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.backward.get(id).into_iter().flatten()
    }

    /// Direct dependents of `id`. Empty if `id` is unknown.
    pub fn downstream<'a, Q>(&'a self, id: &Q) -> impl Iterator<Item = &'a N> + use<'a, N, Q>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.forward.get(id).into_iter().flatten()
    }

    /// All nodes in insertion order.
    pub fn all_nodes(&self) -> impl Iterator<Item = &N> {
        self.forward.keys()
    }

    /// All edges as `(from, to)` pairs, grouped by `from` in node order.
    pub fn all_edges(&self) -> impl Iterator<Item = (&N, &N)> {
        self.forward
            .iter()
            .flat_map(|(from, deps)| deps.iter().map(move |to| (from, to)))
    }

    /// Nodes nothing depends on.
    pub fn all_leaves(&self) -> impl Iterator<Item = &N> {
        self.forward
            .iter()
            .filter(|(_, deps)| deps.is_empty())
            .map(|(node, _)| node)
    }

    /// Independent nodes: nodes with no dependencies (the roots).
    pub fn ind_nodes(&self) -> impl Iterator<Item = &N> {
        self.backward
            .iter()
            .filter(|(_, deps)| deps.is_empty())
            .map(|(node, _)| node)
    }

    /// Drop every node and edge. Options are kept.
    pub fn reset_graph(&mut self) {
        debug!(nodes = self.size(), "resetting graph");
        self.forward.clear();
        self.backward.clear();
    }
}

/// Graphs are equal when they hold the same nodes and edges, regardless of
/// insertion order or options.
impl<N: NodeId> PartialEq for DependencyGraph<N> {
    fn eq(&self, other: &Self) -> bool {
        self.forward == other.forward
    }
}

impl<N: NodeId> Eq for DependencyGraph<N> {}

fn replace_in_set<N: NodeId>(set: &mut IndexSet<N>, old: &N, new: &N) {
    if let Some(pos) = set.get_index_of(old) {
        set.shift_remove_index(pos);
        set.shift_insert(pos, new.clone());
    }
}
