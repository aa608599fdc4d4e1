// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::{GraphFile, RawGraphFile};
use crate::errors::Result;

/// Load a graph file from a given path and return the raw `RawGraphFile`.
///
/// This only performs TOML deserialization; it does **not** check weights or
/// acyclicity. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawGraphFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    debug!(path = %path.display(), "read graph file");

    let raw: RawGraphFile = toml::from_str(&contents)?;

    Ok(raw)
}

/// Load a graph file from path and validate it.
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - negative or non-finite weights,
///   - self-loops and cycles.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<GraphFile> {
    let raw = load_from_path(&path)?;
    GraphFile::try_from(raw)
}

/// Parse and validate a graph description held in memory.
pub fn parse_str(contents: &str) -> Result<GraphFile> {
    let raw: RawGraphFile = toml::from_str(contents)?;
    GraphFile::try_from(raw)
}
