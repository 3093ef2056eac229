//! Assignment scoring.
//!
//! Scores a feasible (resource, slot) pair on three terms: resource
//! efficiency, deadline margin, and load balance. The allocator commits
//! the highest-scoring pair for each job.

use super::config::OptimizerConfig;
use crate::models::{Job, Resource, DAY_MS};

/// Scores a candidate assignment of `job` to `resource` ending at `end_ms`.
///
/// Blend: efficiency rating (30%), deadline-margin bucket (40%), and a
/// load-balance term (30%). A slot ending past the deadline takes a flat
/// penalty instead of a margin contribution, so late candidates only win
/// when nothing else is feasible.
pub fn score_assignment(
    job: &Job,
    resource: &Resource,
    end_ms: i64,
    config: &OptimizerConfig,
) -> f64 {
    let mut score = resource.efficiency_rating * config.efficiency_weight;

    let margin_days = (job.deadline_ms - end_ms) as f64 / DAY_MS as f64;
    if margin_days > 7.0 {
        score += 100.0 * config.margin_weight;
    } else if margin_days > 3.0 {
        score += 75.0 * config.margin_weight;
    } else if margin_days > 1.0 {
        score += 50.0 * config.margin_weight;
    } else if margin_days > 0.0 {
        score += 25.0 * config.margin_weight;
    } else {
        score -= config.late_penalty;
    }

    let balance = if resource.current_utilization < config.balance_relief_threshold {
        100.0
    } else {
        100.0 - resource.current_utilization
    };
    score += balance * config.balance_weight;

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HOUR_MS;

    fn config() -> OptimizerConfig {
        OptimizerConfig::default()
    }

    fn job_due(days: i64) -> Job {
        Job::new("J1").with_deadline(days * DAY_MS)
    }

    #[test]
    fn test_wide_margin_full_marks() {
        // 90% efficiency, 10 days of slack, idle resource:
        // 90*0.3 + 100*0.4 + 100*0.3 = 97
        let r = Resource::machine("M1").with_efficiency(90.0).with_utilization(10.0);
        let score = score_assignment(&job_due(10), &r, 0, &config());
        assert!((score - 97.0).abs() < 1e-9);
    }

    #[test]
    fn test_margin_buckets_step_down() {
        let r = Resource::machine("M1").with_efficiency(0.0).with_utilization(0.0);
        let cfg = config();
        // Only margin varies: 0*0.3 + bucket*0.4 + 100*0.3
        let at = |days: f64| {
            score_assignment(&job_due(20), &r, (20.0 * DAY_MS as f64 - days * DAY_MS as f64) as i64, &cfg)
        };
        assert!((at(8.0) - 70.0).abs() < 1e-9); // 100*0.4 + 30
        assert!((at(5.0) - 60.0).abs() < 1e-9); // 75*0.4 + 30
        assert!((at(2.0) - 50.0).abs() < 1e-9); // 50*0.4 + 30
        assert!((at(0.5) - 40.0).abs() < 1e-9); // 25*0.4 + 30
    }

    #[test]
    fn test_late_slot_penalized() {
        let r = Resource::machine("M1").with_efficiency(100.0).with_utilization(0.0);
        // Ends one hour past the deadline: 100*0.3 - 50 + 100*0.3 = 10
        let score = score_assignment(&job_due(1), &r, DAY_MS + HOUR_MS, &config());
        assert!((score - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_load_balance_relief_and_decay() {
        let cfg = config();
        let job = job_due(20);

        // Below the relief threshold → full balance marks.
        let idle = Resource::machine("M1").with_efficiency(0.0).with_utilization(79.0);
        let busy = Resource::machine("M2").with_efficiency(0.0).with_utilization(90.0);

        let idle_score = score_assignment(&job, &idle, 0, &cfg);
        let busy_score = score_assignment(&job, &busy, 0, &cfg);
        // idle: 100*0.3 = 30 + margin 40; busy: 10*0.3 = 3 + margin 40
        assert!((idle_score - 70.0).abs() < 1e-9);
        assert!((busy_score - 43.0).abs() < 1e-9);
        assert!(idle_score > busy_score);
    }

    #[test]
    fn test_efficiency_separates_equal_candidates() {
        let cfg = config();
        let job = job_due(20);
        let fast = Resource::machine("M1").with_efficiency(95.0).with_utilization(0.0);
        let slow = Resource::machine("M2").with_efficiency(60.0).with_utilization(0.0);

        assert!(
            score_assignment(&job, &fast, 0, &cfg) > score_assignment(&job, &slow, 0, &cfg)
        );
    }
}
