#![allow(dead_code)]

use depdag::{DependencyGraph, SelfLoopPolicy};

/// Builder for `DependencyGraph<String>` to simplify test setup.
///
/// Nodes named in `edge` are created on demand, so fixtures only need to
/// list isolated nodes explicitly.
pub struct GraphBuilder {
    graph: DependencyGraph<String>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: DependencyGraph::new(),
        }
    }

    pub fn self_loops(mut self, policy: SelfLoopPolicy) -> Self {
        let mut graph = DependencyGraph::with_self_loop_policy(policy);
        graph
            .load_adjacency(adjacency_of(&self.graph))
            .expect("existing fixture must reload");
        self.graph = graph;
        self
    }

    pub fn node(mut self, name: &str) -> Self {
        self.graph.add_node_if_not_exists(name.to_string());
        self
    }

    pub fn edge(mut self, from: &str, to: &str) -> Self {
        self.graph.add_node_if_not_exists(from.to_string());
        self.graph.add_node_if_not_exists(to.to_string());
        self.graph
            .add_edge(from, to)
            .expect("fixture edge must be accepted");
        self
    }

    /// Add `a -> b -> c ...` for consecutive names.
    pub fn path(mut self, names: &[&str]) -> Self {
        for name in names {
            self = self.node(name);
        }
        for pair in names.windows(2) {
            self = self.edge(pair[0], pair[1]);
        }
        self
    }

    pub fn build(self) -> DependencyGraph<String> {
        self.graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `A -> B -> C`
pub fn chain() -> DependencyGraph<String> {
    GraphBuilder::new().path(&["A", "B", "C"]).build()
}

/// `A -> B`, `A -> C`, `B -> D`, `C -> D`
pub fn diamond() -> DependencyGraph<String> {
    GraphBuilder::new()
        .edge("A", "B")
        .edge("A", "C")
        .edge("B", "D")
        .edge("C", "D")
        .build()
}

/// A closed loop through every name: `a -> b -> ... -> a`.
pub fn cycle(names: &[&str]) -> DependencyGraph<String> {
    let mut builder = GraphBuilder::new().path(names);
    if let (Some(first), Some(last)) = (names.first(), names.last()) {
        builder = builder.edge(last, first);
    }
    builder.build()
}

fn adjacency_of(graph: &DependencyGraph<String>) -> Vec<(String, Vec<String>)> {
    graph
        .all_nodes()
        .map(|n| (n.clone(), graph.downstream(n.as_str()).cloned().collect()))
        .collect()
}
