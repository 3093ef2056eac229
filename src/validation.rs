//! Input validation for optimization runs.
//!
//! Checks structural integrity of jobs and resources before the pipeline
//! starts. Malformed input (non-positive durations or capacities,
//! duplicate IDs, out-of-range percentages) fails fast here; everything
//! else — missing skills, unplaceable jobs, unknown dependency
//! references — is modeled as a run-time conflict, not an error.

use std::collections::HashSet;

use crate::models::{Job, Resource};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A job's estimated duration is zero or negative.
    NonPositiveDuration,
    /// A resource's daily capacity is zero or negative.
    NonPositiveCapacity,
    /// A utilization or efficiency snapshot is outside 0-100.
    OutOfRangePercentage,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the inputs for an optimization run.
///
/// Checks:
/// 1. No duplicate job IDs
/// 2. No duplicate resource IDs
/// 3. Every job has a positive estimated duration
/// 4. Every resource has a positive daily capacity
/// 5. Utilization and efficiency snapshots are within 0-100
///
/// Dependency references to unknown jobs are deliberately NOT an error:
/// the resolver reports them as a conflict and scheduling continues.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(jobs: &[Job], resources: &[Resource]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut job_ids = HashSet::new();
    for job in jobs {
        if !job_ids.insert(job.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }
        if job.estimated_hours <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                format!(
                    "Job '{}' has non-positive estimated duration ({}h)",
                    job.id, job.estimated_hours
                ),
            ));
        }
    }

    let mut resource_ids = HashSet::new();
    for r in resources {
        if !resource_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate resource ID: {}", r.id),
            ));
        }
        if r.capacity_hours_per_day <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveCapacity,
                format!(
                    "Resource '{}' has non-positive daily capacity ({}h)",
                    r.id, r.capacity_hours_per_day
                ),
            ));
        }
        if !(0.0..=100.0).contains(&r.current_utilization) {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRangePercentage,
                format!(
                    "Resource '{}' utilization {}% is outside 0-100",
                    r.id, r.current_utilization
                ),
            ));
        }
        if !(0.0..=100.0).contains(&r.efficiency_rating) {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfRangePercentage,
                format!(
                    "Resource '{}' efficiency {}% is outside 0-100",
                    r.id, r.efficiency_rating
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HOUR_MS;

    fn sample_jobs() -> Vec<Job> {
        vec![
            Job::new("J1")
                .with_estimated_hours(4.0)
                .with_deadline(48 * HOUR_MS)
                .with_skill("PRINTING"),
            Job::new("J2")
                .with_estimated_hours(2.0)
                .with_deadline(72 * HOUR_MS)
                .with_dependency("J1"),
        ]
    }

    fn sample_resources() -> Vec<Resource> {
        vec![
            Resource::machine("M1").with_skill("PRINTING"),
            Resource::operator("W1").with_skill("SEWING"),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_jobs(), &sample_resources()).is_ok());
    }

    #[test]
    fn test_duplicate_job_id() {
        let jobs = vec![
            Job::new("J1").with_estimated_hours(1.0),
            Job::new("J1").with_estimated_hours(1.0),
        ];
        let errors = validate_input(&jobs, &sample_resources()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("job")));
    }

    #[test]
    fn test_duplicate_resource_id() {
        let resources = vec![Resource::machine("M1"), Resource::station("M1")];
        let errors = validate_input(&sample_jobs(), &resources).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("resource")));
    }

    #[test]
    fn test_non_positive_duration() {
        let jobs = vec![Job::new("J1").with_estimated_hours(0.0)];
        let errors = validate_input(&jobs, &sample_resources()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveDuration));

        let jobs = vec![Job::new("J1").with_estimated_hours(-2.0)];
        assert!(validate_input(&jobs, &sample_resources()).is_err());
    }

    #[test]
    fn test_non_positive_capacity() {
        let resources = vec![Resource::machine("M1").with_capacity(0.0)];
        let errors = validate_input(&sample_jobs(), &resources).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveCapacity));
    }

    #[test]
    fn test_out_of_range_percentages() {
        let resources = vec![Resource::machine("M1")
            .with_utilization(120.0)
            .with_efficiency(-5.0)];
        let errors = validate_input(&sample_jobs(), &resources).unwrap_err();
        let count = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::OutOfRangePercentage)
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_unknown_dependency_is_not_fatal() {
        let jobs = vec![Job::new("J1")
            .with_estimated_hours(1.0)
            .with_dependency("NEVER_SUPPLIED")];
        assert!(validate_input(&jobs, &sample_resources()).is_ok());
    }

    #[test]
    fn test_multiple_errors_accumulate() {
        let jobs = vec![
            Job::new("J1").with_estimated_hours(0.0),
            Job::new("J1").with_estimated_hours(1.0),
        ];
        let resources = vec![Resource::machine("M1").with_capacity(-1.0)];
        let errors = validate_input(&jobs, &resources).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
