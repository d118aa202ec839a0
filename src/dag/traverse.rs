// src/dag/traverse.rs

//! Reachability closures over a [`DependencyGraph`].

use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use tracing::trace;

use crate::dag::graph::{DependencyGraph, NodeId};

impl<N: NodeId> DependencyGraph<N> {
    /// Every node reachable from `id` by following edges forward.
    ///
    /// `id` itself is never part of the result, even when a cycle leads back
    /// to it. Unknown ids yield an empty set. Nodes appear in breadth-first
    /// discovery order.
    pub fn all_downstreams<Q>(&self, id: &Q) -> IndexSet<N>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        closure(&self.forward, id)
    }

    /// Every node `id` depends on, directly or transitively.
    ///
    /// Same rules as [`Self::all_downstreams`], following edges backward.
    pub fn all_upstreams<Q>(&self, id: &Q) -> IndexSet<N>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        closure(&self.backward, id)
    }

    /// [`Self::all_downstreams`] in topological order.
    ///
    /// Closure members the sort cannot emit because they sit on a cycle are
    /// left out.
    pub fn all_downstreams_ordered<Q>(&self, id: &Q) -> Vec<N>
    where
        N: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let reachable = self.all_downstreams(id);
        if reachable.is_empty() {
            return Vec::new();
        }
        self.topological_sort()
            .into_iter()
            .filter(|n| reachable.contains(n))
            .collect()
    }
}

/// Breadth-first closure from `start` over `adjacency`.
///
/// The work list only grows and is walked by index, so each node is
/// appended once and never popped.
fn closure<N, Q>(adjacency: &IndexMap<N, IndexSet<N>>, start: &Q) -> IndexSet<N>
where
    N: NodeId + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    let Some((start_key, first)) = adjacency.get_key_value(start) else {
        return IndexSet::new();
    };

    let mut seen: HashSet<&N> = HashSet::new();
    let mut queue: Vec<&N> = Vec::new();
    for node in first {
        if seen.insert(node) {
            queue.push(node);
        }
    }

    let mut i = 0;
    while i < queue.len() {
        let current = queue[i];
        i += 1;
        if let Some(next) = adjacency.get(current) {
            for node in next {
                if seen.insert(node) {
                    queue.push(node);
                }
            }
        }
    }

    trace!(start = ?start_key, reached = queue.len(), "computed closure");
    queue
        .into_iter()
        .filter(|n| *n != start_key)
        .cloned()
        .collect()
}
