use std::collections::HashMap;

use depdag::DependencyGraph;
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use proptest::prelude::*;

/// Random graph over `0..n`: any pair may be connected, so cycles and
/// self-loops occur.
fn any_graph(max_nodes: u8) -> impl Strategy<Value = DependencyGraph<u8>> {
    (1..=max_nodes).prop_flat_map(|n| {
        proptest::collection::vec((0..n, 0..n), 0..(n as usize * 2)).prop_map(move |edges| {
            let mut g = DependencyGraph::new();
            for id in 0..n {
                g.add_node(id).unwrap();
            }
            for (a, b) in edges {
                g.add_edge(&a, &b).unwrap();
            }
            g
        })
    })
}

// We ensure acyclicity by only allowing edges from lower to higher ids.
fn acyclic_graph(max_nodes: u8) -> impl Strategy<Value = DependencyGraph<u8>> {
    any_graph(max_nodes).prop_map(|g| {
        let mut dag = DependencyGraph::new();
        for id in g.all_nodes() {
            dag.add_node(*id).unwrap();
        }
        for (a, b) in g.all_edges() {
            if a < b {
                dag.add_edge(a, b).unwrap();
            }
        }
        dag
    })
}

fn to_petgraph(g: &DependencyGraph<u8>) -> DiGraphMap<u8, ()> {
    let mut pg = DiGraphMap::new();
    for n in g.all_nodes() {
        pg.add_node(*n);
    }
    for (a, b) in g.all_edges() {
        pg.add_edge(*a, *b, ());
    }
    pg
}

proptest! {
    #[test]
    fn order_respects_every_edge(g in any_graph(10)) {
        let order = g.topological_sort();
        let position: HashMap<u8, usize> =
            order.iter().enumerate().map(|(i, n)| (*n, i)).collect();

        prop_assert_eq!(position.len(), order.len(), "node emitted twice");
        for (a, b) in g.all_edges() {
            if let (Some(pa), Some(pb)) = (position.get(a), position.get(b)) {
                prop_assert!(pa < pb, "{} emitted after {}", a, b);
            }
        }
    }

    #[test]
    fn validate_agrees_with_petgraph(g in any_graph(10)) {
        let cyclic = toposort(&to_petgraph(&g), None).is_err();
        let v = g.validate();

        prop_assert_eq!(v.is_valid(), !cyclic);
        prop_assert_eq!(g.topological_sort().len() == g.size(), !cyclic);
        prop_assert_eq!(v.unresolved().len() + g.topological_sort().len(), g.size());
    }

    #[test]
    fn acyclic_graphs_sort_completely(g in acyclic_graph(12)) {
        prop_assert!(g.validate().is_valid());
        let order = g.try_topological_sort().unwrap();
        prop_assert_eq!(order.len(), g.size());
    }

    #[test]
    fn sort_is_deterministic(g in any_graph(10)) {
        let copy = g.clone();
        prop_assert_eq!(g.topological_sort(), copy.topological_sort());
    }

    #[test]
    fn ordered_closure_is_the_closure_in_sort_order(g in acyclic_graph(10), start in 0u8..10) {
        let ordered = g.all_downstreams_ordered(&start);
        let closure = g.all_downstreams(&start);

        prop_assert_eq!(ordered.len(), closure.len());
        for pair in ordered.windows(2) {
            // No later node may reach an earlier one.
            prop_assert!(!g.all_downstreams(&pair[1]).contains(&pair[0]));
        }
    }
}
