// src/dag/subgraph.rs

use std::collections::BTreeSet;

use crate::types::{Adjacencies, NodeId};

/// Adjacency map restricted to the nodes in `keep`.
///
/// Edges leaving the kept set are dropped. Nodes of `keep` that do not occur
/// in `adjacencies` are ignored. Running the usual pipeline on the result
/// gives progress confined to that sub-DAG.
pub fn induced_subgraph<N: NodeId>(
    adjacencies: &Adjacencies<N>,
    keep: &BTreeSet<N>,
) -> Adjacencies<N> {
    adjacencies
        .iter()
        .filter(|(node, _)| keep.contains(*node))
        .map(|(node, successors)| {
            let kept = successors
                .iter()
                .filter(|next| keep.contains(*next))
                .cloned()
                .collect();
            (node.clone(), kept)
        })
        .collect()
}
