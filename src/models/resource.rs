//! Schedulable resource model.
//!
//! Resources are the capacity providers on the shop floor: machines,
//! operators, and work stations. Each carries a skill set, a daily
//! capacity window, and caller-supplied utilization and efficiency
//! snapshots. The optimizer never mutates a resource; utilization here
//! is a reporting snapshot, not derived capacity accounting.

use serde::{Deserialize, Serialize};

use super::job::Job;
use super::timeline::HOUR_MS;

/// A schedulable capacity provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Resource classification.
    pub kind: ResourceKind,
    /// Skills this resource can perform.
    pub skills: Vec<String>,
    /// Working hours available per day.
    pub capacity_hours_per_day: f64,
    /// Current utilization snapshot (0-100%).
    pub current_utilization: f64,
    /// Efficiency rating (0-100%).
    pub efficiency_rating: f64,
}

/// Resource classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceKind {
    Machine,
    Operator,
    Station,
}

impl Resource {
    /// Creates a new resource with an 8-hour day and a clean slate.
    pub fn new(id: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            kind,
            skills: Vec::new(),
            capacity_hours_per_day: 8.0,
            current_utilization: 0.0,
            efficiency_rating: 100.0,
        }
    }

    /// Creates a machine resource.
    pub fn machine(id: impl Into<String>) -> Self {
        Self::new(id, ResourceKind::Machine)
    }

    /// Creates an operator resource.
    pub fn operator(id: impl Into<String>) -> Self {
        Self::new(id, ResourceKind::Operator)
    }

    /// Creates a station resource.
    pub fn station(id: impl Into<String>) -> Self {
        Self::new(id, ResourceKind::Station)
    }

    /// Sets the resource name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a skill.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.push(skill.into());
        self
    }

    /// Sets the daily capacity in hours.
    pub fn with_capacity(mut self, hours_per_day: f64) -> Self {
        self.capacity_hours_per_day = hours_per_day;
        self
    }

    /// Sets the current utilization snapshot (0-100%).
    pub fn with_utilization(mut self, percent: f64) -> Self {
        self.current_utilization = percent;
        self
    }

    /// Sets the efficiency rating (0-100%).
    pub fn with_efficiency(mut self, percent: f64) -> Self {
        self.efficiency_rating = percent;
        self
    }

    /// Whether this resource has a given skill.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    /// Whether this resource covers every skill the job requires.
    pub fn can_perform(&self, job: &Job) -> bool {
        job.required_skills.iter().all(|s| self.has_skill(s))
    }

    /// Daily capacity window length in milliseconds.
    pub fn daily_window_ms(&self) -> i64 {
        (self.capacity_hours_per_day * HOUR_MS as f64).round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_builder() {
        let r = Resource::machine("M1")
            .with_name("DTG Printer 1")
            .with_skill("PRINTING")
            .with_skill("DTG")
            .with_capacity(10.0)
            .with_utilization(40.0)
            .with_efficiency(92.0);

        assert_eq!(r.id, "M1");
        assert_eq!(r.name, "DTG Printer 1");
        assert_eq!(r.kind, ResourceKind::Machine);
        assert!(r.has_skill("PRINTING"));
        assert!(!r.has_skill("SEWING"));
        assert!((r.capacity_hours_per_day - 10.0).abs() < 1e-10);
        assert_eq!(r.daily_window_ms(), 36_000_000);
    }

    #[test]
    fn test_resource_kinds() {
        assert_eq!(Resource::machine("M1").kind, ResourceKind::Machine);
        assert_eq!(Resource::operator("W1").kind, ResourceKind::Operator);
        assert_eq!(Resource::station("S1").kind, ResourceKind::Station);
    }

    #[test]
    fn test_can_perform() {
        let r = Resource::operator("W1")
            .with_skill("SEWING")
            .with_skill("FINISHING");

        let sewing = Job::new("J1").with_skill("SEWING");
        let both = Job::new("J2").with_skill("SEWING").with_skill("FINISHING");
        let cutting = Job::new("J3").with_skill("CUTTING");
        let none = Job::new("J4");

        assert!(r.can_perform(&sewing));
        assert!(r.can_perform(&both));
        assert!(!r.can_perform(&cutting));
        assert!(r.can_perform(&none)); // no requirements → any resource
    }
}
