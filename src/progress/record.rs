// src/progress/record.rs

use serde::{Deserialize, Serialize};

/// Progress of a single node along the heaviest path through it.
///
/// The normalized fields `before`, `own` and `remaining` partition the path
/// and sum to 1; `value` is `before + own`. All of them are 0 when
/// `path_total` is 0 (a zero-weight node with no weighted ancestors or
/// descendants).
///
/// The `raw_*` fields carry the un-normalized weights so that callers can
/// aggregate progress across several nodes themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub value: f64,
    pub before: f64,
    pub own: f64,
    pub remaining: f64,
    pub raw_value: f64,
    pub raw_before: f64,
    pub raw_own: f64,
    pub raw_remaining: f64,
    pub path_total: f64,
}

impl Progress {
    /// Build a record from raw weights.
    pub fn from_raw(before: f64, own: f64, remaining: f64) -> Self {
        let path_total = before + own + remaining;
        let raw_value = before + own;

        Self {
            value: ratio(raw_value, path_total),
            before: ratio(before, path_total),
            own: ratio(own, path_total),
            remaining: ratio(remaining, path_total),
            raw_value,
            raw_before: before,
            raw_own: own,
            raw_remaining: remaining,
            path_total,
        }
    }

    /// Whether the node has nothing weighted on any path through it.
    pub fn is_degenerate(&self) -> bool {
        self.path_total == 0.0
    }

    /// Split the node's own share into `steps` equal increments.
    ///
    /// Returns the progress value reached after each step, going from just
    /// above `before` up to exactly `value`. Handy for animating a node
    /// while it is being worked on. `steps == 0` yields nothing.
    pub fn increments(&self, steps: usize) -> Vec<f64> {
        if steps == 0 {
            return Vec::new();
        }

        let span = self.value - self.before;
        (1..=steps)
            .map(|i| {
                if i == steps {
                    self.value
                } else {
                    self.before + span * (i as f64) / (steps as f64)
                }
            })
            .collect()
    }
}

fn ratio(part: f64, total: f64) -> f64 {
    if total == 0.0 { 0.0 } else { part / total }
}
