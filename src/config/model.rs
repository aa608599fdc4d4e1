// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::logging::LogLevel;
use crate::types::{Adjacencies, NodeOptionsMap, PartialNodeOptions, ProgressMap};

/// Graph description exactly as read from TOML, before validation.
///
/// ```toml
/// [config]
/// log_level = "debug"
///
/// [node.Start]
/// next = ["Decide", "OhOkay"]
///
/// [node.Cleanup]
/// weight = 0
/// ```
///
/// All sections are optional. Nodes that only appear in some `next` list do
/// not need a table of their own.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawGraphFile {
    /// Ambient settings from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// All nodes from `[node.<name>]`, keyed by node name.
    #[serde(default)]
    pub node: BTreeMap<String, NodeConfig>,
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigSection {
    /// Suggested verbosity for hosting applications (see
    /// [`crate::logging::init_logging`]). The library never reads it itself.
    #[serde(default)]
    pub log_level: Option<LogLevel>,
}

/// `[node.<name>]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct NodeConfig {
    /// Successor nodes (edges `name -> next`).
    #[serde(default)]
    pub next: Vec<String>,

    /// Own weight; defaults to 1 when absent.
    #[serde(default)]
    pub weight: Option<f64>,
}

/// A validated graph file: weights are finite and non-negative, and the
/// graph is acyclic.
///
/// Obtain one through `GraphFile::try_from(raw)` or the loader functions.
#[derive(Debug, Clone)]
pub struct GraphFile {
    pub config: ConfigSection,
    pub node: BTreeMap<String, NodeConfig>,
}

impl GraphFile {
    pub(crate) fn new_unchecked(config: ConfigSection, node: BTreeMap<String, NodeConfig>) -> Self {
        Self { config, node }
    }

    /// Normalized adjacency map of the described graph.
    pub fn adjacencies(&self) -> Adjacencies<String> {
        crate::dag::normalize_adjacencies(self.node.iter().map(|(name, n)| (name, &n.next)))
    }

    /// Caller-level options for every node that sets a weight.
    pub fn partial_node_options(&self) -> BTreeMap<String, PartialNodeOptions> {
        self.node
            .iter()
            .filter_map(|(name, n)| {
                n.weight
                    .map(|w| (name.clone(), PartialNodeOptions::with_weight(w)))
            })
            .collect()
    }

    /// Fully populated options for every node of the graph.
    pub fn node_options(&self) -> NodeOptionsMap<String> {
        crate::dag::normalize_node_options(&self.adjacencies(), &self.partial_node_options())
    }

    /// Progress of every node of the described graph.
    ///
    /// Cannot fail with a cycle once validated, but the error is still
    /// propagated rather than assumed away.
    pub fn compute_progress(&self) -> crate::errors::Result<ProgressMap<String>> {
        crate::compute_progress_with_options(&self.adjacencies(), &self.partial_node_options())
    }
}
