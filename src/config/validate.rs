// src/config/validate.rs

use crate::config::model::{GraphFile, RawGraphFile};
use crate::dag::{normalize_adjacencies, topological_order};
use crate::errors::{DagProgressError, Result};

impl TryFrom<RawGraphFile> for GraphFile {
    type Error = DagProgressError;

    fn try_from(raw: RawGraphFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_graph(&raw)?;
        Ok(GraphFile::new_unchecked(raw.config, raw.node))
    }
}

fn validate_raw_graph(raw: &RawGraphFile) -> Result<()> {
    validate_weights(raw)?;
    validate_self_loops(raw)?;
    validate_dag(raw)?;
    Ok(())
}

fn validate_weights(raw: &RawGraphFile) -> Result<()> {
    for (name, node) in raw.node.iter() {
        if let Some(weight) = node.weight {
            if !weight.is_finite() || weight < 0.0 {
                return Err(DagProgressError::ConfigError(format!(
                    "node '{}' has invalid weight {} (must be a finite number >= 0)",
                    name, weight
                )));
            }
        }
    }
    Ok(())
}

fn validate_self_loops(raw: &RawGraphFile) -> Result<()> {
    for (name, node) in raw.node.iter() {
        if node.next.iter().any(|next| next == name) {
            return Err(DagProgressError::DagCycle(format!(
                "node '{}' lists itself in `next`",
                name
            )));
        }
    }
    Ok(())
}

fn validate_dag(raw: &RawGraphFile) -> Result<()> {
    let adjacencies = normalize_adjacencies(raw.node.iter().map(|(name, n)| (name, &n.next)));

    // A topological sort will fail if there is a cycle.
    topological_order(&adjacencies).map(|_order| ())
}
