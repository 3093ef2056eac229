//! Optimizer tuning constants.
//!
//! Every blending weight and threshold in the pipeline lives here as a
//! named field with a documented default, so sensitivity can be tuned or
//! tested without touching the algorithm logic.

use serde::{Deserialize, Serialize};

/// Tunable weights and thresholds for one optimizer instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    // --- Job prioritization blend (sums to 1.0) ---
    /// Weight of the mapped priority level. Default 0.40.
    pub priority_weight: f64,
    /// Weight of the deadline-urgency bucket. Default 0.40.
    pub deadline_weight: f64,
    /// Weight of the quantity term. Default 0.20.
    pub quantity_weight: f64,
    /// Units at which the quantity term saturates. Default 1000.
    pub quantity_cap_units: f64,

    // --- Resource matching ---
    /// Utilization at or above which a resource takes no new work.
    /// A soft ceiling over caller-supplied snapshots, not capacity
    /// accounting. Default 95.0.
    pub utilization_ceiling: f64,

    // --- Slot allocation ---
    /// Hour of day each working window opens. Default 8 (08:00).
    pub day_start_hour: i64,
    /// Hard cap on the day-walk so degenerate inputs terminate.
    /// Default 365.
    pub max_search_days: i64,

    // --- Assignment scoring blend ---
    /// Weight of the resource efficiency rating. Default 0.30.
    pub efficiency_weight: f64,
    /// Weight of the deadline-margin bucket. Default 0.40.
    pub margin_weight: f64,
    /// Weight of the load-balance term. Default 0.30.
    pub balance_weight: f64,
    /// Flat deduction when a candidate slot ends past the deadline.
    /// Default 50.0.
    pub late_penalty: f64,
    /// Utilization below which the load-balance term scores full marks.
    /// Default 80.0.
    pub balance_relief_threshold: f64,

    // --- Optimization score blend (sums to 1.0) ---
    /// Capacity horizon for utilization metrics, in days. Default 30.
    pub horizon_days: i64,
    /// Weight of the scheduled fraction. Default 0.40.
    pub placement_weight: f64,
    /// Weight of the on-time completion rate. Default 0.30.
    pub on_time_weight: f64,
    /// Weight of the utilization-band term. Default 0.20.
    pub utilization_weight: f64,
    /// Weight of the inverse-makespan efficiency term. Default 0.10.
    pub efficiency_term_weight: f64,
    /// Lower edge of the healthy utilization band (%). Default 70.0.
    pub utilization_band_low: f64,
    /// Upper edge of the healthy utilization band (%). Default 85.0.
    pub utilization_band_high: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            priority_weight: 0.40,
            deadline_weight: 0.40,
            quantity_weight: 0.20,
            quantity_cap_units: 1000.0,
            utilization_ceiling: 95.0,
            day_start_hour: 8,
            max_search_days: 365,
            efficiency_weight: 0.30,
            margin_weight: 0.40,
            balance_weight: 0.30,
            late_penalty: 50.0,
            balance_relief_threshold: 80.0,
            horizon_days: 30,
            placement_weight: 0.40,
            on_time_weight: 0.30,
            utilization_weight: 0.20,
            efficiency_term_weight: 0.10,
            utilization_band_low: 70.0,
            utilization_band_high: 85.0,
        }
    }
}
