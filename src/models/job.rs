//! Production job model.
//!
//! A job is one unit of production work: a quantity of garments for a
//! client order, moving through the shop-floor stages. Jobs carry the
//! scheduling metadata (priority, deadline, duration, required skills,
//! predecessor jobs) the optimizer dispatches on.
//!
//! # Time Representation
//! Deadlines are in milliseconds relative to the scheduling epoch (t=0);
//! estimated effort stays in hours, the unit the shop floor plans in.

use serde::{Deserialize, Serialize};

use super::timeline::HOUR_MS;

/// A production job to be scheduled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier.
    pub id: String,
    /// Originating order reference.
    pub order_id: String,
    /// Client the order belongs to.
    pub client_name: String,
    /// Garment type (e.g., "T-Shirt", "Hoodie").
    pub garment_type: String,
    /// Number of units to produce.
    pub quantity: u32,
    /// Scheduling priority level.
    pub priority: Priority,
    /// Latest completion time (ms).
    pub deadline_ms: i64,
    /// Estimated effort in hours.
    pub estimated_hours: f64,
    /// Skills a resource must have to run this job.
    pub required_skills: Vec<String>,
    /// IDs of jobs that must complete before this one starts.
    pub dependencies: Vec<String>,
    /// Current production stage.
    pub current_stage: ProductionStage,
    /// Lifecycle status.
    pub status: JobStatus,
}

/// Scheduling priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

/// Shop-floor production stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductionStage {
    Cutting,
    Printing,
    Sewing,
    Finishing,
}

/// Job lifecycle status.
///
/// A `Completed` job is never re-scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Pending,
    Scheduled,
    InProgress,
    Completed,
}

impl Priority {
    /// Urgency score used by the prioritizer (0-100).
    pub fn urgency_score(&self) -> f64 {
        match self {
            Priority::Urgent => 100.0,
            Priority::High => 75.0,
            Priority::Medium => 50.0,
            Priority::Low => 25.0,
        }
    }
}

impl Job {
    /// Creates a new pending job with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            order_id: String::new(),
            client_name: String::new(),
            garment_type: String::new(),
            quantity: 0,
            priority: Priority::Medium,
            deadline_ms: 0,
            estimated_hours: 0.0,
            required_skills: Vec::new(),
            dependencies: Vec::new(),
            current_stage: ProductionStage::Cutting,
            status: JobStatus::Pending,
        }
    }

    /// Sets the order reference.
    pub fn with_order(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = order_id.into();
        self
    }

    /// Sets the client name.
    pub fn with_client(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = client_name.into();
        self
    }

    /// Sets the garment type.
    pub fn with_garment_type(mut self, garment_type: impl Into<String>) -> Self {
        self.garment_type = garment_type.into();
        self
    }

    /// Sets the unit quantity.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the priority level.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the deadline (latest completion time in ms).
    pub fn with_deadline(mut self, deadline_ms: i64) -> Self {
        self.deadline_ms = deadline_ms;
        self
    }

    /// Sets the estimated effort in hours.
    pub fn with_estimated_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = hours;
        self
    }

    /// Adds a required skill.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.required_skills.push(skill.into());
        self
    }

    /// Adds a predecessor job ID.
    pub fn with_dependency(mut self, job_id: impl Into<String>) -> Self {
        self.dependencies.push(job_id.into());
        self
    }

    /// Sets the current production stage.
    pub fn with_stage(mut self, stage: ProductionStage) -> Self {
        self.current_stage = stage;
        self
    }

    /// Sets the lifecycle status.
    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    /// Estimated effort in milliseconds.
    pub fn duration_ms(&self) -> i64 {
        (self.estimated_hours * HOUR_MS as f64).round() as i64
    }

    /// Whether this job is already done.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.status == JobStatus::Completed
    }
}
