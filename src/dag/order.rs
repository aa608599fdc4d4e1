// src/dag/order.rs

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::{debug, warn};

use crate::errors::{DagProgressError, Result};
use crate::types::{Adjacencies, NodeId};

/// Linear order of all nodes such that every edge points forward.
///
/// Successors without an entry of their own are still ordered. Fails with
/// [`DagProgressError::DagCycle`] when the graph contains a cycle (including
/// a self-loop).
pub fn topological_order<N: NodeId>(adjacencies: &Adjacencies<N>) -> Result<Vec<N>> {
    if adjacencies.is_empty() {
        return Ok(Vec::new());
    }

    // A lone node without edges is handled directly rather than going
    // through the sort.
    if adjacencies.len() == 1 {
        if let Some((node, successors)) = adjacencies.iter().next() {
            if successors.is_empty() {
                return Ok(vec![node.clone()]);
            }
        }
    }

    // Edge direction follows the adjacency map: node -> successor.
    let mut graph: DiGraphMap<&N, ()> = DiGraphMap::new();

    for node in adjacencies.keys() {
        graph.add_node(node);
    }

    for (node, successors) in adjacencies.iter() {
        for next in successors.iter() {
            graph.add_edge(node, next, ());
        }
    }

    match toposort(&graph, None) {
        Ok(order) => {
            debug!(nodes = order.len(), "computed topological order");
            Ok(order.into_iter().cloned().collect())
        }
        Err(cycle) => {
            let node = cycle.node_id();
            warn!(?node, "graph is not acyclic");
            Err(DagProgressError::DagCycle(format!(
                "cycle detected in graph involving node {:?}",
                node
            )))
        }
    }
}
