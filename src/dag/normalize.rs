// src/dag/normalize.rs

//! Graph normalization: make every referenced node explicit.
//!
//! Callers may leave sinks out of the adjacency map and may omit options for
//! any node. Normalization fills both gaps so later stages never have to deal
//! with a missing entry. Nothing here can fail.

use std::collections::BTreeSet;

use tracing::debug;

use crate::types::{Adjacencies, NodeId, NodeOptions, NodeOptionsMap, PartialNodeOptions};

/// Build an adjacency map in which every node mentioned as a source or as a
/// successor has its own entry. Sinks get an empty successor set.
///
/// Accepts any map-like input, e.g. `&HashMap<N, Vec<N>>` or
/// `&BTreeMap<N, HashSet<N>>`. Duplicate successors collapse.
pub fn normalize_adjacencies<'a, N, S, I>(raw: I) -> Adjacencies<N>
where
    N: NodeId + 'a,
    S: 'a,
    &'a S: IntoIterator<Item = &'a N>,
    I: IntoIterator<Item = (&'a N, &'a S)>,
{
    let mut normalized = Adjacencies::new();

    for (node, successors) in raw {
        let successors: BTreeSet<N> = successors.into_iter().cloned().collect();

        for next in successors.iter() {
            normalized.entry(next.clone()).or_insert_with(BTreeSet::new);
        }

        normalized
            .entry(node.clone())
            .or_insert_with(BTreeSet::new)
            .extend(successors);
    }

    debug!(nodes = normalized.len(), "normalized adjacencies");
    normalized
}

/// Produce a full options map for every node of `adjacencies`.
///
/// Options supplied for nodes outside the graph are kept as they are.
pub fn normalize_node_options<'o, N, O>(
    adjacencies: &Adjacencies<N>,
    options: O,
) -> NodeOptionsMap<N>
where
    N: NodeId + 'o,
    O: IntoIterator<Item = (&'o N, &'o PartialNodeOptions)>,
{
    let mut normalized: NodeOptionsMap<N> = options
        .into_iter()
        .map(|(node, partial)| (node.clone(), NodeOptions::from(*partial)))
        .collect();

    for (node, successors) in adjacencies.iter() {
        normalized.entry(node.clone()).or_default();
        for next in successors.iter() {
            normalized.entry(next.clone()).or_default();
        }
    }

    normalized
}
