// src/dag/mod.rs

//! Graph stages of the progress pipeline.
//!
//! - [`normalize`] makes every referenced node and its options explicit.
//! - [`reverse`] builds the transposed graph.
//! - [`order`] produces a topological order (and detects cycles).
//! - [`path_weights`] propagates heaviest path weights along an order.
//! - [`subgraph`] restricts a graph to a node set.

pub mod normalize;
pub mod order;
pub mod path_weights;
pub mod reverse;
pub mod subgraph;

pub use normalize::{normalize_adjacencies, normalize_node_options};
pub use order::topological_order;
pub use path_weights::propagate_path_weights;
pub use reverse::reverse;
pub use subgraph::induced_subgraph;
