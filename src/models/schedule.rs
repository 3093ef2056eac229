//! Optimization output model.
//!
//! A run produces one [`OptimizationResult`]: the committed task list,
//! the jobs that could not be placed, aggregate metrics, a 0-100
//! optimization score, advisory recommendations, and the conflicts that
//! explain every placement failure. Infeasibility is data, not an error:
//! the result is always complete and self-contained.

use serde::{Deserialize, Serialize};

use super::job::{Job, Priority};
use super::timeline::{TimeSlot, HOUR_MS};

/// A committed job-resource-time assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// Assigned job ID.
    pub job_id: String,
    /// Full job snapshot at scheduling time.
    pub job: Job,
    /// Assigned resource ID.
    pub resource_id: String,
    /// Assigned resource name (denormalized for display).
    pub resource_name: String,
    /// Committed start time (ms).
    pub start_ms: i64,
    /// Committed end time (ms).
    pub end_ms: i64,
    /// Estimated effort in hours.
    pub duration_hours: f64,
    /// The assignment score that won this placement.
    pub score: f64,
}

impl ScheduledTask {
    /// The committed interval as a time slot.
    pub fn slot(&self) -> TimeSlot {
        TimeSlot::new(self.start_ms, self.end_ms)
    }

    /// Committed duration (ms).
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }

    /// Whether this task finishes at or before its job's deadline.
    pub fn is_on_time(&self) -> bool {
        self.end_ms <= self.job.deadline_ms
    }
}

/// A recorded scheduling obstruction.
///
/// Conflicts are non-fatal: they explain why a job could not be placed
/// (or was placed with a caveat) while the run still completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    /// Conflict classification.
    pub kind: ConflictKind,
    /// Human-readable description.
    pub description: String,
    /// How serious the obstruction is.
    pub severity: Severity,
}

/// Classification of scheduling conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConflictKind {
    /// No resource covers the job's required skills.
    NoResource,
    /// A predecessor job was never placed in this run.
    Dependency,
    /// No open slot of sufficient length before the deadline.
    Capacity,
}

/// Conflict severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Conflict {
    /// No suitable resource for a job.
    pub fn no_resource(job: &Job) -> Self {
        Self {
            kind: ConflictKind::NoResource,
            description: format!(
                "No suitable resource found for job {} ({})",
                job.id, job.garment_type
            ),
            severity: Severity::High,
        }
    }

    /// Unmet predecessor jobs.
    pub fn dependency(job_id: &str, missing: &[String]) -> Self {
        Self {
            kind: ConflictKind::Dependency,
            description: format!(
                "Job {} has unmet dependencies: {}",
                job_id,
                missing.join(", ")
            ),
            severity: Severity::Medium,
        }
    }

    /// No open slot before the deadline. Urgent jobs escalate the severity.
    pub fn capacity(job: &Job) -> Self {
        Self {
            kind: ConflictKind::Capacity,
            description: format!("No available time slot for job {} before deadline", job.id),
            severity: if job.priority == Priority::Urgent {
                Severity::High
            } else {
                Severity::Medium
            },
        }
    }
}

/// Aggregate schedule quality metrics.
///
/// Percentages and hours, rounded to 2 decimals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Assigned hours over the capacity horizon (0-100%).
    pub avg_resource_utilization: f64,
    /// Committed tasks finishing at or before their deadline (0-100%).
    pub on_time_completion_rate: f64,
    /// Run start to latest committed end, in hours.
    pub total_makespan_hours: f64,
    /// Horizon capacity left unassigned, in hours.
    pub wasted_capacity_hours: f64,
}

/// Complete output of one optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Committed tasks, ordered by start time.
    pub schedule: Vec<ScheduledTask>,
    /// Jobs eligible for scheduling in this run (COMPLETED jobs excluded).
    pub total_jobs: usize,
    /// Jobs successfully placed.
    pub scheduled_jobs: usize,
    /// Jobs that could not be placed.
    pub unscheduled_jobs: Vec<Job>,
    /// Blended schedule quality score (0-100).
    pub optimization_score: f64,
    /// Aggregate metrics.
    pub metrics: ScheduleMetrics,
    /// Ordered advisory messages.
    pub recommendations: Vec<String>,
    /// Obstructions recorded during the run.
    pub conflicts: Vec<Conflict>,
}

impl OptimizationResult {
    /// Finds the committed task for a job, if it was placed.
    pub fn task_for_job(&self, job_id: &str) -> Option<&ScheduledTask> {
        self.schedule.iter().find(|t| t.job_id == job_id)
    }

    /// All committed tasks on a given resource.
    pub fn tasks_for_resource(&self, resource_id: &str) -> Vec<&ScheduledTask> {
        self.schedule
            .iter()
            .filter(|t| t.resource_id == resource_id)
            .collect()
    }

    /// Latest committed end time (ms), if anything was scheduled.
    pub fn makespan_end_ms(&self) -> Option<i64> {
        self.schedule.iter().map(|t| t.end_ms).max()
    }

    /// Whether every eligible job was placed.
    pub fn is_fully_scheduled(&self) -> bool {
        self.unscheduled_jobs.is_empty()
    }

    /// Total assigned hours across the schedule.
    pub fn assigned_hours(&self) -> f64 {
        self.schedule
            .iter()
            .map(|t| t.duration_ms() as f64 / HOUR_MS as f64)
            .sum()
    }
}
