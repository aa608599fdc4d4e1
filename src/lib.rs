// src/lib.rs

//! Per-node progress along the heaviest weighted path of a DAG.
//!
//! Every node gets a [`Progress`] record telling how far along the heaviest
//! path through it the node sits: the weight of the heaviest chain of
//! ancestors ("before"), the node's own weight, and the weight of the
//! heaviest chain of descendants ("remaining"), both raw and normalized.
//!
//! Each call is a pure, one-shot computation over the input; nothing is
//! cached or shared between calls.

pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod progress;
pub mod types;

use tracing::debug;

pub use crate::dag::{
    induced_subgraph, normalize_adjacencies, normalize_node_options, propagate_path_weights,
    reverse, topological_order,
};
pub use crate::errors::{DagProgressError, Result};
pub use crate::progress::{Progress, compose_progress};
pub use crate::types::{
    Adjacencies, DEFAULT_WEIGHT, NodeId, NodeOptions, NodeOptionsMap, PartialNodeOptions,
    PathWeights, ProgressMap,
};

/// Progress of every node, with every node at the default weight.
///
/// See [`compute_progress_with_options`].
pub fn compute_progress<'a, N, S, I>(adjacencies: I) -> Result<ProgressMap<N>>
where
    N: NodeId + 'a,
    S: 'a,
    &'a S: IntoIterator<Item = &'a N>,
    I: IntoIterator<Item = (&'a N, &'a S)>,
{
    compute_progress_with_options(adjacencies, std::iter::empty())
}

/// Progress of every node of `adjacencies`, using `options` for node weights.
///
/// Pipeline:
/// 1. normalize the graph and the options,
/// 2. build the reversed graph and a forward topological order,
/// 3. heaviest weight *before* each node: original graph, forward order,
/// 4. heaviest weight *remaining* after each node: reversed graph, reversed order,
/// 5. compose both with each node's own weight.
///
/// Fails with [`DagProgressError::DagCycle`] when the graph is not acyclic.
pub fn compute_progress_with_options<'a, 'o, N, S, I, O>(
    adjacencies: I,
    options: O,
) -> Result<ProgressMap<N>>
where
    N: NodeId + 'a + 'o,
    S: 'a,
    &'a S: IntoIterator<Item = &'a N>,
    I: IntoIterator<Item = (&'a N, &'a S)>,
    O: IntoIterator<Item = (&'o N, &'o PartialNodeOptions)>,
{
    let adjacencies = normalize_adjacencies(adjacencies);
    let options = normalize_node_options(&adjacencies, options);

    let reversed = reverse(&adjacencies);
    let order_forward = topological_order(&adjacencies)?;
    let order_reverse: Vec<N> = order_forward.iter().rev().cloned().collect();

    let before = propagate_path_weights(&adjacencies, &order_forward, &options);
    let remaining = propagate_path_weights(&reversed, &order_reverse, &options);

    debug!(nodes = adjacencies.len(), "computing progress");
    Ok(compose_progress(&before, &remaining, &options))
}
