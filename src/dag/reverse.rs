// src/dag/reverse.rs

use std::collections::BTreeSet;

use crate::types::{Adjacencies, NodeId};

/// Transpose an adjacency map: every edge `a -> b` becomes `b -> a`.
///
/// Every node that has an entry in `adjacencies` keeps an entry in the
/// result, so a normalized map of N nodes reverses to exactly N nodes.
pub fn reverse<N: NodeId>(adjacencies: &Adjacencies<N>) -> Adjacencies<N> {
    let mut reversed: Adjacencies<N> = adjacencies
        .keys()
        .map(|node| (node.clone(), BTreeSet::new()))
        .collect();

    for (from, successors) in adjacencies.iter() {
        for to in successors.iter() {
            reversed
                .entry(to.clone())
                .or_insert_with(BTreeSet::new)
                .insert(from.clone());
        }
    }

    reversed
}
