//! Production scheduling optimizer for make-to-order manufacturing.
//!
//! Takes a set of production jobs and a pool of resources (machines,
//! operators, stations) and produces a complete, explainable schedule:
//! committed assignments, unplaceable jobs with conflict records,
//! aggregate quality metrics, a 0-100 optimization score, and advisory
//! recommendations. A what-if layer re-runs the pipeline under a single
//! hypothetical change and reports the metric deltas.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `Resource`, `Timeline`,
//!   `ScheduledTask`, `Conflict`, `OptimizationResult`
//! - **`validation`**: Input integrity checks (duplicate IDs, durations,
//!   capacities, percentage ranges)
//! - **`dispatching`**: Weighted priority rules for job ordering
//! - **`scheduler`**: The greedy optimization pipeline, slot allocation,
//!   assignment scoring, and KPI aggregation
//! - **`scenario`**: What-if analysis against a baseline run
//!
//! # Determinism
//!
//! Every run is anchored to an explicit start time and all tie-breaks
//! are lexicographic, so identical inputs always produce an identical
//! result. The crate never reads the wall clock.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Blazewicz et al. (2019), "Handbook on Scheduling"

pub mod dispatching;
pub mod models;
pub mod scenario;
pub mod scheduler;
pub mod validation;
