//! Production schedule optimization.
//!
//! The pipeline lives in [`optimizer`]; the other modules supply its
//! pieces: tuning constants ([`config`]), slot search ([`slots`]),
//! assignment scoring ([`scoring`]), and aggregate metrics ([`kpi`]).

pub mod config;
pub mod kpi;
pub mod optimizer;
pub mod scoring;
pub mod slots;

pub use config::OptimizerConfig;
pub use kpi::{calculate_metrics, optimization_score, recommendations};
pub use optimizer::{check_dependencies, suitable_resources, DependencyCheck, ScheduleOptimizer};
pub use scoring::score_assignment;
pub use slots::find_slot;
