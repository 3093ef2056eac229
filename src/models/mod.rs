//! Scheduling domain models.
//!
//! Core data types for the production scheduling optimizer: jobs,
//! resources, per-resource timelines, and the optimization result.
//!
//! All entities are plain value records. The optimizer never mutates
//! caller-owned jobs or resources; the only mutable state is the
//! per-run [`Timeline`] map, discarded when the run ends.

mod job;
mod resource;
mod schedule;
mod timeline;

pub use job::{Job, JobStatus, Priority, ProductionStage};
pub use resource::{Resource, ResourceKind};
pub use schedule::{
    Conflict, ConflictKind, OptimizationResult, ScheduleMetrics, ScheduledTask, Severity,
};
pub use timeline::{TimeSlot, Timeline, DAY_MS, HOUR_MS};
