//! Run context for prioritization rule evaluation.

use crate::models::DAY_MS;

/// The fixed reference point rules evaluate against.
///
/// Deadline urgency is measured from the run start, never from the wall
/// clock, so a run is reproducible given identical inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchContext {
    /// Run start time (ms relative to the scheduling epoch).
    pub run_start_ms: i64,
}

impl DispatchContext {
    /// Creates a context anchored at the given run start.
    pub fn at_time(run_start_ms: i64) -> Self {
        Self { run_start_ms }
    }

    /// Whole-and-fractional days from the run start to a deadline.
    ///
    /// Negative when the deadline is already past.
    pub fn days_until(&self, deadline_ms: i64) -> f64 {
        (deadline_ms - self.run_start_ms) as f64 / DAY_MS as f64
    }
}
