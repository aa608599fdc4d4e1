// src/dag/path_weights.rs

//! Heaviest-path propagation over a topologically ordered graph.
//!
//! For every node the result holds the largest total weight of any path that
//! ends at that node, *excluding* the node's own weight. Which "paths" are
//! meant depends only on the adjacency map handed in:
//!
//! - original map + forward order: weight of the heaviest chain of ancestors
//!   (work done before the node),
//! - reversed map + reversed order: weight of the heaviest chain of
//!   descendants (work remaining after the node).
//!
//! Only the scalar maximum is tracked, not which path produced it.

use tracing::trace;

use crate::types::{Adjacencies, NodeId, NodeOptionsMap, PathWeights, weight_of};

/// Single relaxation pass along `order`.
///
/// `order` must be topologically consistent with `adjacencies` (every edge
/// `u -> s` has `u` before `s`); each node's value is then final by the time
/// it is visited, and no node needs revisiting.
///
/// Nodes missing from `options` count with the default weight.
pub fn propagate_path_weights<N: NodeId>(
    adjacencies: &Adjacencies<N>,
    order: &[N],
    options: &NodeOptionsMap<N>,
) -> PathWeights<N> {
    let mut weights: PathWeights<N> = order.iter().map(|node| (node.clone(), 0.0)).collect();

    for node in order {
        let Some(successors) = adjacencies.get(node) else {
            continue;
        };

        let reached = weights.get(node).copied().unwrap_or(0.0);
        let candidate = reached + weight_of(options, node);

        for next in successors.iter() {
            let current = weights.entry(next.clone()).or_insert(0.0);
            if candidate > *current {
                trace!(from = ?node, to = ?next, candidate, "relaxed path weight");
                *current = candidate;
            }
        }
    }

    weights
}
