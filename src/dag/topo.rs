// src/dag/topo.rs

//! Topological ordering (Kahn's algorithm) and validity checking.
//!
//! # Tie-break policy
//!
//! Ready nodes are served first-in, first-out. The queue is seeded with the
//! roots in node insertion order; when a node is emitted, its dependents are
//! visited in edge insertion order and each one that becomes ready is
//! appended to the back. The resulting order is stable for a given sequence
//! of mutations.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use tracing::{debug, warn};

use crate::dag::graph::{DependencyGraph, NodeId};
use crate::errors::{DagError, Result};

/// Outcome of [`DependencyGraph::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<N> {
    /// Every node can be ordered (this includes the empty graph).
    Valid,
    /// The graph is non-empty but no node is free of dependencies, so the
    /// sort cannot even start.
    NoIndependentNodes { unresolved: Vec<N> },
    /// The sort stopped early; `unresolved` lists the nodes it never
    /// reached, in node order. They lie on or behind a cycle.
    Cycle { unresolved: Vec<N> },
}

impl<N> Validation<N> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    pub fn message(&self) -> &'static str {
        match self {
            Validation::Valid => "valid",
            Validation::NoIndependentNodes { .. } => "no independent nodes detected",
            Validation::Cycle { .. } => "failed topological sort",
        }
    }

    /// Nodes the topological sort could not emit. Empty when valid.
    pub fn unresolved(&self) -> &[N] {
        match self {
            Validation::Valid => &[],
            Validation::NoIndependentNodes { unresolved } | Validation::Cycle { unresolved } => {
                unresolved
            }
        }
    }
}

impl<N> fmt::Display for Validation<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl<N: NodeId> DependencyGraph<N> {
    /// Order the nodes so that every edge `a -> b` puts `a` before `b`.
    ///
    /// Never fails. On a cyclic graph the result is the partial order of
    /// the nodes that could be resolved; compare its length with
    /// [`Self::size`] or call [`Self::validate`] to detect that case.
    pub fn topological_sort(&self) -> Vec<N> {
        let mut in_degree: HashMap<&N, usize> = self
            .backward
            .iter()
            .map(|(node, deps)| (node, deps.len()))
            .collect();

        let mut queue: VecDeque<&N> = self
            .backward
            .iter()
            .filter(|(_, deps)| deps.is_empty())
            .map(|(node, _)| node)
            .collect();

        let mut order = Vec::with_capacity(self.size());
        while let Some(node) = queue.pop_front() {
            order.push(node.clone());
            for child in self.forward.get(node).into_iter().flatten() {
                if let Some(degree) = in_degree.get_mut(child) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(child);
                    }
                }
            }
        }

        debug!(emitted = order.len(), total = self.size(), "topological sort");
        order
    }

    /// Like [`Self::topological_sort`], but a cyclic graph is an error.
    pub fn try_topological_sort(&self) -> Result<Vec<N>> {
        let order = self.topological_sort();
        if order.len() == self.size() {
            return Ok(order);
        }
        Err(DagError::cycle(&self.unresolved_after(&order)))
    }

    /// Check that the graph is acyclic by running the topological sort and
    /// comparing its length with the node count.
    ///
    /// A cycle is reported, not raised: graphs built incrementally often
    /// pass through cyclic states.
    pub fn validate(&self) -> Validation<N> {
        if self.is_empty() {
            return Validation::Valid;
        }

        let order = self.topological_sort();
        if order.len() == self.size() {
            return Validation::Valid;
        }

        let unresolved = self.unresolved_after(&order);
        let result = if order.is_empty() {
            Validation::NoIndependentNodes { unresolved }
        } else {
            Validation::Cycle { unresolved }
        };
        warn!(
            unresolved = result.unresolved().len(),
            reason = result.message(),
            "graph failed validation"
        );
        result
    }

    fn unresolved_after(&self, order: &[N]) -> Vec<N> {
        let emitted: HashSet<&N> = order.iter().collect();
        self.all_nodes()
            .filter(|n| !emitted.contains(n))
            .cloned()
            .collect()
    }
}
