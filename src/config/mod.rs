// src/config/mod.rs

//! TOML graph descriptions.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a graph file from disk or from a string (`loader.rs`).
//! - Validate weights and acyclicity (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, parse_str};
pub use model::{ConfigSection, GraphFile, NodeConfig, RawGraphFile};
