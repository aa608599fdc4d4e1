// src/progress/mod.rs

//! Per-node progress records and the composer that builds them.
//!
//! - [`record`] holds the [`Progress`] record itself.
//! - [`compose`] turns "before" and "remaining" path weights into records.

pub mod compose;
pub mod record;

pub use compose::compose_progress;
pub use record::Progress;
