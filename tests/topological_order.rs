// tests/topological_order.rs

use std::collections::{BTreeMap, BTreeSet};

use dagprogress::{DagProgressError, normalize_adjacencies, topological_order};
use dagprogress_test_utils::builders::{GraphBuilder, workflow};
use dagprogress_test_utils::init_tracing;

fn position(order: &[String], node: &str) -> usize {
    order
        .iter()
        .position(|n| n == node)
        .unwrap_or_else(|| panic!("{node} missing from order"))
}

#[test]
fn empty_graph_has_empty_order() {
    let graph: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    let order = topological_order(&graph).unwrap();

    assert!(order.is_empty());
}

#[test]
fn single_node_without_edges_orders_to_itself() {
    let graph = BTreeMap::from([("alone", BTreeSet::new())]);

    let order = topological_order(&graph).unwrap();

    assert_eq!(order, vec!["alone"]);
}

#[test]
fn edgeless_graph_orders_every_node() {
    let graph = GraphBuilder::new().node("a").node("b").node("c").successor_sets();

    let order = topological_order(&graph).unwrap();

    assert_eq!(order.len(), 3);
}

#[test]
fn every_edge_points_forward() {
    init_tracing();

    let normalized = normalize_adjacencies(workflow().adjacencies());

    let order = topological_order(&normalized).unwrap();

    assert_eq!(order.len(), normalized.len());
    for (from, successors) in normalized.iter() {
        for to in successors {
            assert!(
                position(&order, from) < position(&order, to),
                "{from} should come before {to}"
            );
        }
    }
}

#[test]
fn sinks_missing_as_keys_are_still_ordered() {
    let graph = GraphBuilder::new().chain(&["a", "b", "c"]).successor_sets();
    assert!(!graph.contains_key("c"));

    let order = topological_order(&graph).unwrap();

    assert_eq!(order, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
}

#[test]
fn cycle_is_reported_as_dag_cycle() {
    let graph = GraphBuilder::new()
        .chain(&["A", "B", "C", "A"])
        .successor_sets();

    match topological_order(&graph) {
        Err(DagProgressError::DagCycle(msg)) => {
            assert!(msg.contains("cycle detected"));
        }
        Err(e) => panic!("Expected DagCycle error, got: {:?}", e),
        Ok(order) => panic!("Expected error, got order {:?}", order),
    }
}

#[test]
fn self_loop_is_a_cycle() {
    let graph = BTreeMap::from([("loop", BTreeSet::from(["loop"]))]);

    let result = topological_order(&graph);

    assert!(matches!(result, Err(DagProgressError::DagCycle(_))));
}
