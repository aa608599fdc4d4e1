// src/types.rs

//! Shared graph types: node identifiers, adjacency and per-node option maps.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::progress::Progress;

/// Weight given to any node whose options do not specify one.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Anything usable as a node identifier.
///
/// Identifiers are opaque: they are only compared, ordered and hashed, never
/// interpreted. `&str`, `String` and integer ids all qualify.
pub trait NodeId: Clone + Ord + Hash + Debug {}

impl<T: Clone + Ord + Hash + Debug> NodeId for T {}

/// Node -> set of successor nodes. Successor order carries no meaning.
pub type Adjacencies<N> = BTreeMap<N, BTreeSet<N>>;

/// Node -> fully populated options.
pub type NodeOptionsMap<N> = BTreeMap<N, NodeOptions>;

/// Node -> heaviest path weight reaching it, excluding its own weight.
pub type PathWeights<N> = BTreeMap<N, f64>;

/// Node -> computed progress record.
pub type ProgressMap<N> = BTreeMap<N, Progress>;

/// Options as supplied by a caller; every field may be left out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct PartialNodeOptions {
    #[serde(default)]
    pub weight: Option<f64>,
}

impl PartialNodeOptions {
    pub fn with_weight(weight: f64) -> Self {
        Self {
            weight: Some(weight),
        }
    }
}

/// Options after defaults have been applied.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct NodeOptions {
    /// Contribution of this node to the weight of any path through it.
    pub weight: f64,
}

impl Default for NodeOptions {
    fn default() -> Self {
        Self {
            weight: DEFAULT_WEIGHT,
        }
    }
}

impl From<PartialNodeOptions> for NodeOptions {
    fn from(partial: PartialNodeOptions) -> Self {
        Self {
            weight: partial.weight.unwrap_or(DEFAULT_WEIGHT),
        }
    }
}

/// Own weight of `node`, falling back to [`DEFAULT_WEIGHT`] when the options
/// map has no entry for it.
pub fn weight_of<N: NodeId>(options: &NodeOptionsMap<N>, node: &N) -> f64 {
    options
        .get(node)
        .map(|o| o.weight)
        .unwrap_or(DEFAULT_WEIGHT)
}
