// src/progress/compose.rs

use tracing::debug;

use crate::progress::record::Progress;
use crate::types::{NodeId, NodeOptionsMap, PathWeights, ProgressMap, weight_of};

/// Combine "before" and "remaining" path weights with each node's own weight.
///
/// One record is produced per node of `before`. A node missing from
/// `remaining` is treated as having nothing after it.
pub fn compose_progress<N: NodeId>(
    before: &PathWeights<N>,
    remaining: &PathWeights<N>,
    options: &NodeOptionsMap<N>,
) -> ProgressMap<N> {
    let progresses: ProgressMap<N> = before
        .iter()
        .map(|(node, &ahead)| {
            let own = weight_of(options, node);
            let after = remaining.get(node).copied().unwrap_or(0.0);
            (node.clone(), Progress::from_raw(ahead, own, after))
        })
        .collect();

    debug!(nodes = progresses.len(), "composed node progress");
    progresses
}
