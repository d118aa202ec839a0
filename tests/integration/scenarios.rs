// tests/integration/scenarios.rs

use std::collections::HashSet;

use depdag::DependencyGraph;
use depdag_test_utils::builders::{GraphBuilder, chain, cycle, diamond};
use depdag_test_utils::init_tracing;

fn set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn empty_graph() {
    init_tracing();
    let g: DependencyGraph<String> = DependencyGraph::new();

    assert_eq!(g.size(), 0);
    assert!(g.topological_sort().is_empty());
    assert!(g.validate().is_valid());
}

#[test]
fn linear_chain() {
    init_tracing();
    let g = chain();

    assert_eq!(g.topological_sort(), ["A", "B", "C"]);
    assert_eq!(g.all_downstreams("A").into_iter().collect::<HashSet<_>>(), set(&["B", "C"]));
    assert_eq!(g.predecessors("C").cloned().collect::<HashSet<_>>(), set(&["B"]));
}

#[test]
fn diamond_orders_ends_and_reaches_everything() {
    init_tracing();
    let g = diamond();
    let order = g.topological_sort();

    assert_eq!(order.len(), 4);
    assert_eq!(order.first().map(String::as_str), Some("A"));
    assert_eq!(order.last().map(String::as_str), Some("D"));
    assert_eq!(
        g.all_downstreams("A").into_iter().collect::<HashSet<_>>(),
        set(&["B", "C", "D"])
    );
}

#[test]
fn two_node_cycle() {
    init_tracing();
    let mut g = DependencyGraph::new();
    g.add_node("A".to_string()).unwrap();
    g.add_node("B".to_string()).unwrap();
    g.add_edge("A", "B").unwrap();
    g.add_edge("B", "A").unwrap();

    assert!(!g.validate().is_valid());
    assert!(g.topological_sort().is_empty());
}

#[test]
fn longer_cycle_is_shorter_than_node_count() {
    init_tracing();
    let g = cycle(&["a", "b", "c"]);

    assert!(!g.validate().is_valid());
    assert!(g.topological_sort().len() < g.size());
}

#[test]
fn delete_middle_of_chain() {
    init_tracing();
    let mut g = chain();
    g.delete_node("B").unwrap();

    assert_eq!(g.all_edges().count(), 0);
    assert!(g.contains_node("A"));
    assert!(g.contains_node("C"));
    assert_eq!(g.ind_nodes().count(), 2);
    assert_eq!(g.all_leaves().count(), 2);
}

#[test]
fn clone_round_trip_and_independence() {
    init_tracing();
    let original = diamond();
    let mut copy = original.clone();

    let edges = |g: &DependencyGraph<String>| -> HashSet<(String, String)> {
        g.all_edges().map(|(a, b)| (a.clone(), b.clone())).collect()
    };
    assert_eq!(edges(&copy), edges(&original));
    assert_eq!(
        copy.all_nodes().collect::<Vec<_>>(),
        original.all_nodes().collect::<Vec<_>>()
    );

    let before = edges(&original);
    copy.delete_node("D").unwrap();
    copy.add_edge("B", "C").unwrap();
    assert_eq!(edges(&original), before);
    assert_eq!(original.size(), 4);
}

#[test]
fn scheduler_style_pruning_of_finished_roots() {
    // Drive the graph the way a job scheduler does: run whatever is
    // independent, drop it once done, repeat until empty.
    init_tracing();
    let mut g = GraphBuilder::new()
        .edge("fetch", "compile")
        .edge("fetch", "lint")
        .edge("compile", "test")
        .edge("lint", "test")
        .edge("test", "package")
        .build();

    let mut waves: Vec<Vec<String>> = Vec::new();
    while !g.is_empty() {
        let ready: Vec<String> = g.ind_nodes().cloned().collect();
        assert!(!ready.is_empty(), "acyclic graph must always have a root");
        for node in &ready {
            assert!(g.delete_node_if_exists(node.as_str()));
        }
        waves.push(ready);
    }

    assert_eq!(
        waves,
        vec![
            vec!["fetch".to_string()],
            vec!["compile".to_string(), "lint".to_string()],
            vec!["test".to_string()],
            vec!["package".to_string()],
        ]
    );
}

#[test]
fn rename_keeps_ordering_semantics() {
    init_tracing();
    let mut g = chain();
    g.rename_node("B", "B2".to_string()).unwrap();

    assert_eq!(g.topological_sort(), ["A", "B2", "C"]);
    assert_eq!(g.all_upstreams("C").into_iter().collect::<HashSet<_>>(), set(&["A", "B2"]));
}

#[test]
fn reset_recycles_instance() {
    init_tracing();
    let mut g = diamond();
    g.reset_graph();
    assert_eq!(g.size(), 0);

    g.add_node("fresh".to_string()).unwrap();
    assert_eq!(g.topological_sort(), ["fresh"]);
}
