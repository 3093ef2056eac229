//! Weighted prioritizer for job ordering.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchContext, PriorityRule};
use crate::models::Job;

#[derive(Clone)]
struct WeightedRule {
    rule: Arc<dyn PriorityRule>,
    weight: f64,
}

/// Orders jobs by a weighted blend of prioritization rules.
///
/// Jobs are sorted by descending composite score; exact ties resolve by
/// ascending job ID so the ordering is a documented contract rather than
/// an accident of input order. COMPLETED jobs are dropped before scoring
/// — they are never re-scheduled.
#[derive(Clone, Default)]
pub struct Prioritizer {
    rules: Vec<WeightedRule>,
    epsilon: f64,
}

impl Prioritizer {
    /// Creates an empty prioritizer.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            epsilon: 1e-9,
        }
    }

    /// Adds a weighted rule.
    pub fn with_rule<R: PriorityRule + 'static>(mut self, rule: R, weight: f64) -> Self {
        self.rules.push(WeightedRule {
            rule: Arc::new(rule),
            weight,
        });
        self
    }

    /// Composite urgency score for one job.
    pub fn score(&self, job: &Job, context: &DispatchContext) -> f64 {
        self.rules
            .iter()
            .map(|wr| wr.rule.evaluate(job, context) * wr.weight)
            .sum()
    }

    /// Returns schedulable jobs ordered most-urgent first.
    ///
    /// COMPLETED jobs are filtered out before scoring.
    pub fn sort<'a>(&self, jobs: &'a [Job], context: &DispatchContext) -> Vec<&'a Job> {
        let mut scored: Vec<(&Job, f64)> = jobs
            .iter()
            .filter(|j| !j.is_completed())
            .map(|j| (j, self.score(j, context)))
            .collect();

        scored.sort_by(|a, b| {
            if (a.1 - b.1).abs() > self.epsilon {
                b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal)
            } else {
                a.0.id.cmp(&b.0.id)
            }
        });

        scored.into_iter().map(|(job, _)| job).collect()
    }
}

impl std::fmt::Debug for Prioritizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prioritizer")
            .field(
                "rules",
                &self
                    .rules
                    .iter()
                    .map(|r| format!("{}(w={})", r.rule.name(), r.weight))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
