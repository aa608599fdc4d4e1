// tests/path_weights.rs

use std::collections::BTreeMap;

use dagprogress::{
    PartialNodeOptions, normalize_adjacencies, normalize_node_options, propagate_path_weights,
    reverse, topological_order,
};
use dagprogress_test_utils::builders::{GraphBuilder, workflow};
use dagprogress_test_utils::{assert_close, init_tracing};

struct Weights {
    before: BTreeMap<String, f64>,
    remaining: BTreeMap<String, f64>,
}

fn weights_of(graph: &GraphBuilder) -> Weights {
    let adjacencies = normalize_adjacencies(graph.adjacencies());
    let options = normalize_node_options(&adjacencies, graph.options());
    let order = topological_order(&adjacencies).unwrap();
    let order_reverse: Vec<String> = order.iter().rev().cloned().collect();

    Weights {
        before: propagate_path_weights(&adjacencies, &order, &options),
        remaining: propagate_path_weights(&reverse(&adjacencies), &order_reverse, &options),
    }
}

#[test]
fn workflow_before_weights_follow_heaviest_ancestor_chain() {
    init_tracing();

    let w = weights_of(&workflow());

    assert_close(w.before["Start"], 0.0, "Start");
    assert_close(w.before["Decide"], 1.0, "Decide");
    assert_close(w.before["OhOkay"], 1.0, "OhOkay");
    assert_close(w.before["StillNo"], 2.0, "StillNo");
    assert_close(w.before["WellThatWasFun"], 4.0, "WellThatWasFun");
    assert_close(w.before["Bye"], 5.0, "Bye");
}

#[test]
fn workflow_remaining_weights_follow_heaviest_descendant_chain() {
    let w = weights_of(&workflow());

    assert_close(w.remaining["Start"], 5.0, "Start");
    assert_close(w.remaining["Decide"], 4.0, "Decide");
    assert_close(w.remaining["OhOkay"], 3.0, "OhOkay");
    assert_close(w.remaining["StillNo"], 2.0, "StillNo");
    assert_close(w.remaining["Bye"], 0.0, "Bye");
}

#[test]
fn heavier_short_branch_wins_over_longer_light_branch() {
    // a -> b -> c -> d and a -> heavy -> d, heavy weighs 5.
    let graph = GraphBuilder::new()
        .chain(&["a", "b", "c", "d"])
        .chain(&["a", "heavy", "d"])
        .weight("heavy", 5.0);

    let w = weights_of(&graph);

    assert_close(w.before["d"], 6.0, "d before");
    assert_close(w.remaining["a"], 6.0, "a remaining");
    assert_close(w.remaining["b"], 2.0, "b remaining");
}

#[test]
fn every_node_in_order_gets_a_weight_starting_at_zero() {
    let graph = GraphBuilder::new().node("x").node("y");
    let w = weights_of(&graph);

    assert_eq!(w.before.len(), 2);
    assert_close(w.before["x"], 0.0, "x");
    assert_close(w.remaining["y"], 0.0, "y");
}

#[test]
fn nodes_without_options_count_with_default_weight() {
    let adjacencies = normalize_adjacencies(&BTreeMap::from([("a", vec!["b"])]));
    let order = topological_order(&adjacencies).unwrap();
    let empty: BTreeMap<&str, PartialNodeOptions> = BTreeMap::new();
    let options = normalize_node_options(&BTreeMap::new(), &empty);

    let before = propagate_path_weights(&adjacencies, &order, &options);

    assert_close(before["b"], 1.0, "b");
}
