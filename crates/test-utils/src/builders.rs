#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use dagprogress::config::{ConfigSection, GraphFile, NodeConfig, RawGraphFile};
use dagprogress::{PartialNodeOptions, ProgressMap};

/// Builder for graphs keyed by `String`, to simplify test setup.
///
/// Edges are stored as given; sinks are left implicit so that tests also
/// exercise normalization.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    adjacencies: BTreeMap<String, Vec<String>>,
    options: BTreeMap<String, PartialNodeOptions>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node without any edges.
    pub fn node(mut self, name: &str) -> Self {
        self.adjacencies.entry(name.to_string()).or_default();
        self
    }

    /// Add the edge `from -> to`.
    pub fn edge(mut self, from: &str, to: &str) -> Self {
        self.adjacencies
            .entry(from.to_string())
            .or_default()
            .push(to.to_string());
        self
    }

    /// Add edges `from -> to` for every `to` in `targets`, in the given order.
    pub fn edges(mut self, from: &str, targets: &[&str]) -> Self {
        for to in targets {
            self = self.edge(from, to);
        }
        self
    }

    /// Add a chain `names[0] -> names[1] -> ...`.
    pub fn chain(mut self, names: &[&str]) -> Self {
        for pair in names.windows(2) {
            self = self.edge(pair[0], pair[1]);
        }
        self
    }

    pub fn weight(mut self, name: &str, weight: f64) -> Self {
        self.options
            .insert(name.to_string(), PartialNodeOptions::with_weight(weight));
        self
    }

    pub fn adjacencies(&self) -> &BTreeMap<String, Vec<String>> {
        &self.adjacencies
    }

    pub fn options(&self) -> &BTreeMap<String, PartialNodeOptions> {
        &self.options
    }

    /// Successor set form, for the sub-operations that take a normalized map.
    pub fn successor_sets(&self) -> BTreeMap<String, BTreeSet<String>> {
        self.adjacencies
            .iter()
            .map(|(k, v)| (k.clone(), v.iter().cloned().collect()))
            .collect()
    }

    pub fn compute(&self) -> dagprogress::Result<ProgressMap<String>> {
        dagprogress::compute_progress_with_options(&self.adjacencies, &self.options)
    }

    /// Same graph as an unvalidated config document.
    pub fn raw_graph_file(&self) -> RawGraphFile {
        let mut node: BTreeMap<String, NodeConfig> = self
            .adjacencies
            .iter()
            .map(|(name, next)| {
                (
                    name.clone(),
                    NodeConfig {
                        next: next.clone(),
                        weight: None,
                    },
                )
            })
            .collect();

        for (name, opts) in self.options.iter() {
            node.entry(name.clone()).or_default().weight = opts.weight;
        }

        RawGraphFile {
            config: ConfigSection::default(),
            node,
        }
    }

    pub fn graph_file(&self) -> GraphFile {
        GraphFile::try_from(self.raw_graph_file()).expect("Failed to build valid graph from builder")
    }
}

/// The eight-node workflow used throughout the tests. All weights default
/// to 1; the heaviest path is
/// `Start -> Decide -> DoOneThing -> DoAnother -> WellThatWasFun -> Bye`,
/// and `OhOkay -> StillNo` is a shorter side branch that merges back.
pub fn workflow() -> GraphBuilder {
    GraphBuilder::new()
        .edges("Start", &["Decide", "OhOkay"])
        .edges("Decide", &["DoOneThing", "StillNo"])
        .edge("DoOneThing", "DoAnother")
        .edge("OhOkay", "StillNo")
        .edge("DoAnother", "WellThatWasFun")
        .edge("StillNo", "WellThatWasFun")
        .edge("WellThatWasFun", "Bye")
}
