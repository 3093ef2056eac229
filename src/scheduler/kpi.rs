//! Schedule quality metrics and the optimization score.
//!
//! Computes run-level indicators over the committed task list and a
//! fixed 30-day capacity horizon, blends them into a single 0-100
//! optimization score, and derives advisory recommendations.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Utilization | Assigned hours ÷ (Σ daily capacity × horizon days) |
//! | On-Time Rate | Committed tasks ending ≤ deadline ÷ committed tasks |
//! | Makespan | Run start to latest committed end, in hours |
//! | Wasted Capacity | Horizon capacity − assigned hours |

use super::config::OptimizerConfig;
use crate::models::{Conflict, Resource, ScheduleMetrics, ScheduledTask, Severity, HOUR_MS};

/// Utilization below this draws a "take more orders" recommendation.
const LOW_UTILIZATION_PCT: f64 = 60.0;
/// Utilization above this draws a delay-risk recommendation.
const HIGH_UTILIZATION_PCT: f64 = 90.0;
/// On-time rate below this draws a deadline-review recommendation.
const ON_TIME_TARGET_PCT: f64 = 90.0;
/// Unused capacity above this draws an opportunity recommendation.
const WASTED_CAPACITY_ALERT_HOURS: f64 = 200.0;

/// Rounds to 2 decimals for reporting.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Computes aggregate metrics for a completed run.
///
/// An empty schedule reports a 100% on-time rate and zero makespan.
pub fn calculate_metrics(
    schedule: &[ScheduledTask],
    resources: &[Resource],
    start_ms: i64,
    config: &OptimizerConfig,
) -> ScheduleMetrics {
    let horizon_hours: f64 = resources
        .iter()
        .map(|r| r.capacity_hours_per_day * config.horizon_days as f64)
        .sum();
    let assigned_hours: f64 = schedule.iter().map(|t| t.duration_hours).sum();

    let avg_utilization = if horizon_hours > 0.0 {
        assigned_hours / horizon_hours * 100.0
    } else {
        0.0
    };

    let on_time_rate = if schedule.is_empty() {
        100.0
    } else {
        let on_time = schedule.iter().filter(|t| t.is_on_time()).count();
        on_time as f64 / schedule.len() as f64 * 100.0
    };

    let last_end = schedule.iter().map(|t| t.end_ms).max().unwrap_or(start_ms);
    let makespan_hours = (last_end - start_ms) as f64 / HOUR_MS as f64;

    ScheduleMetrics {
        avg_resource_utilization: round2(avg_utilization),
        on_time_completion_rate: round2(on_time_rate),
        total_makespan_hours: round2(makespan_hours),
        wasted_capacity_hours: round2(horizon_hours - assigned_hours),
    }
}

/// Blends metrics into a single 0-100 optimization score.
///
/// 40% scheduled fraction, 30% on-time rate, 20% utilization band
/// (70-85% is healthy; both under- and over-utilization are penalized),
/// 10% inverse-makespan efficiency.
pub fn optimization_score(
    metrics: &ScheduleMetrics,
    unscheduled_count: usize,
    total_jobs: usize,
    config: &OptimizerConfig,
) -> f64 {
    let scheduled_pct = if total_jobs == 0 {
        100.0
    } else {
        (total_jobs - unscheduled_count) as f64 / total_jobs as f64 * 100.0
    };

    let util = metrics.avg_resource_utilization;
    let band_score = if util >= config.utilization_band_low && util <= config.utilization_band_high
    {
        100.0
    } else if util < config.utilization_band_low {
        util * (100.0 / config.utilization_band_low)
    } else {
        (100.0 - (util - config.utilization_band_high) * 2.0).max(0.0)
    };

    let efficiency_score = (100.0 - metrics.total_makespan_hours / 10.0).max(0.0);

    let score = scheduled_pct * config.placement_weight
        + metrics.on_time_completion_rate * config.on_time_weight
        + band_score * config.utilization_weight
        + efficiency_score * config.efficiency_term_weight;

    round2(score.clamp(0.0, 100.0))
}

/// Derives ordered advisory messages from the run outcome.
///
/// Falls back to a single "well-optimized" message when nothing fires.
pub fn recommendations(
    unscheduled_count: usize,
    metrics: &ScheduleMetrics,
    conflicts: &[Conflict],
) -> Vec<String> {
    let mut out = Vec::new();

    if unscheduled_count > 0 {
        out.push(format!(
            "{unscheduled_count} job(s) could not be scheduled - consider adding resources or extending deadlines"
        ));
    }

    if metrics.avg_resource_utilization < LOW_UTILIZATION_PCT {
        out.push(format!(
            "Low resource utilization ({:.0}%) - consider reducing capacity or taking more orders",
            metrics.avg_resource_utilization
        ));
    } else if metrics.avg_resource_utilization > HIGH_UTILIZATION_PCT {
        out.push(format!(
            "High resource utilization ({:.0}%) - risk of delays, consider adding resources",
            metrics.avg_resource_utilization
        ));
    }

    if metrics.on_time_completion_rate < ON_TIME_TARGET_PCT {
        out.push(format!(
            "On-time rate is {:.0}% - review deadlines or resource allocation",
            metrics.on_time_completion_rate
        ));
    }

    let high_severity = conflicts
        .iter()
        .filter(|c| c.severity == Severity::High)
        .count();
    if high_severity > 0 {
        out.push(format!(
            "{high_severity} high-severity scheduling conflict(s) detected - immediate attention required"
        ));
    }

    if metrics.wasted_capacity_hours > WASTED_CAPACITY_ALERT_HOURS {
        out.push(format!(
            "{:.0} hours of unused capacity - opportunity for additional orders",
            metrics.wasted_capacity_hours
        ));
    }

    if out.is_empty() {
        out.push("Schedule is well-optimized with no major issues".to_string());
    }

    out
}
