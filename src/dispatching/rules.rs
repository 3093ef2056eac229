//! Built-in prioritization rules.
//!
//! Each rule scores a job 0-100 (higher = more urgent). The standard
//! blend combines [`PriorityLevel`], [`DeadlineUrgency`], and
//! [`OrderQuantity`] at 40/40/20.

use super::{DispatchContext, PriorityRule, RuleScore};
use crate::models::Job;

/// Mapped priority level: URGENT=100, HIGH=75, MEDIUM=50, LOW=25.
#[derive(Debug, Clone, Copy)]
pub struct PriorityLevel;

impl PriorityRule for PriorityLevel {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, job: &Job, _context: &DispatchContext) -> RuleScore {
        job.priority.urgency_score()
    }
}

/// Deadline urgency, bucketed by days remaining from the run start.
///
/// <3 days → 100, <7 → 75, <14 → 50, else 25. An already-past deadline
/// lands in the most urgent bucket.
#[derive(Debug, Clone, Copy)]
pub struct DeadlineUrgency;

impl PriorityRule for DeadlineUrgency {
    fn name(&self) -> &'static str {
        "DEADLINE"
    }

    fn evaluate(&self, job: &Job, context: &DispatchContext) -> RuleScore {
        let days = context.days_until(job.deadline_ms);
        if days < 3.0 {
            100.0
        } else if days < 7.0 {
            75.0
        } else if days < 14.0 {
            50.0
        } else {
            25.0
        }
    }
}

/// Order quantity, scaled linearly up to a unit cap.
///
/// Larger orders get a mild priority bump; the default cap is 1000 units.
#[derive(Debug, Clone, Copy)]
pub struct OrderQuantity {
    /// Quantity at which the score saturates at 100.
    pub cap_units: f64,
}

impl OrderQuantity {
    /// Creates a quantity rule with a custom saturation cap.
    pub fn new(cap_units: f64) -> Self {
        Self { cap_units }
    }
}

impl Default for OrderQuantity {
    fn default() -> Self {
        Self { cap_units: 1000.0 }
    }
}

impl PriorityRule for OrderQuantity {
    fn name(&self) -> &'static str {
        "QUANTITY"
    }

    fn evaluate(&self, job: &Job, _context: &DispatchContext) -> RuleScore {
        (job.quantity as f64 / self.cap_units * 100.0).min(100.0)
    }
}
