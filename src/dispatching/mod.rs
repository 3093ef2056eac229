//! Job prioritization rules and the weighted prioritizer.
//!
//! Orders pending jobs by a weighted urgency blend: priority level,
//! deadline urgency, and order quantity. Rules are composable so the
//! blend weights can be tuned without touching the ordering logic.
//!
//! # Usage
//!
//! ```
//! use prodplan::dispatching::{rules, DispatchContext, Prioritizer};
//!
//! let prioritizer = Prioritizer::new()
//!     .with_rule(rules::PriorityLevel, 0.4)
//!     .with_rule(rules::DeadlineUrgency, 0.4)
//!     .with_rule(rules::OrderQuantity::default(), 0.2);
//!
//! let context = DispatchContext::at_time(0);
//! // let ordered = prioritizer.sort(&jobs, &context);
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::DispatchContext;
pub use engine::Prioritizer;

use crate::models::Job;
use std::fmt::Debug;

/// Score returned by a prioritization rule.
///
/// Rules score 0-100; **higher score = more urgent** (scheduled first).
pub type RuleScore = f64;

/// A rule that evaluates how urgently a job should be scheduled.
pub trait PriorityRule: Send + Sync + Debug {
    /// Rule name (e.g., "PRIORITY", "DEADLINE").
    fn name(&self) -> &'static str;

    /// Evaluates the urgency of a job given the run context.
    ///
    /// Returns a score in 0-100 where higher = more urgent.
    fn evaluate(&self, job: &Job, context: &DispatchContext) -> RuleScore;
}
