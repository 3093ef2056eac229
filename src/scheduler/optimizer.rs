//! Greedy priority-driven schedule optimizer.
//!
//! # Pipeline
//!
//! 1. Validate inputs (fail fast on malformed jobs/resources).
//! 2. Order jobs by weighted urgency (priority, deadline, quantity).
//! 3. Per job: filter the resource pool by skills and the utilization
//!    ceiling, resolve the dependency floor, search every candidate's
//!    timeline for the earliest fitting slot, score each feasible pair,
//!    and commit the highest-scoring assignment.
//! 4. Aggregate metrics, the 0-100 optimization score, and
//!    recommendations.
//!
//! Infeasibility is data: unplaceable jobs land in `unscheduled_jobs`
//! with a conflict record, and the run always returns a complete result.
//!
//! # Complexity
//! O(n log n + n · r · d) where n=jobs, r=candidate resources,
//! d=days walked per slot search.

use std::collections::HashMap;

use super::config::OptimizerConfig;
use super::kpi;
use super::scoring::score_assignment;
use super::slots::find_slot;
use crate::dispatching::{rules, DispatchContext, Prioritizer};
use crate::models::{
    Conflict, Job, OptimizationResult, Resource, ScheduledTask, TimeSlot, Timeline, HOUR_MS,
};
use crate::validation::{validate_input, ValidationError};

/// Outcome of resolving a job's predecessors against the committed tasks.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyCheck {
    /// Whether every declared predecessor is already committed.
    pub met: bool,
    /// Predecessors not present in the committed task list.
    pub missing: Vec<String>,
    /// Latest end time among the predecessors that are committed.
    pub earliest_start_ms: Option<i64>,
}

/// Filters the pool to resources that can take the job.
///
/// A resource qualifies when its skill set covers the job's required
/// skills and its utilization snapshot is below the ceiling. An empty
/// result is a valid outcome and feeds a NO_RESOURCE conflict upstream.
pub fn suitable_resources<'a>(
    job: &Job,
    pool: &'a [Resource],
    utilization_ceiling: f64,
) -> Vec<&'a Resource> {
    pool.iter()
        .filter(|r| r.can_perform(job) && r.current_utilization < utilization_ceiling)
        .collect()
}

/// Resolves a job's dependency floor against the tasks committed so far.
///
/// Missing predecessors do not reject the job: the floor is the latest
/// end among the predecessors that *are* committed, and the caller
/// records a MEDIUM conflict for the rest. Dependency ordering is
/// advisory, not enforced.
pub fn check_dependencies(job: &Job, committed: &[ScheduledTask]) -> DependencyCheck {
    if job.dependencies.is_empty() {
        return DependencyCheck {
            met: true,
            missing: Vec::new(),
            earliest_start_ms: None,
        };
    }

    let mut missing = Vec::new();
    let mut latest_end: Option<i64> = None;

    for dep_id in &job.dependencies {
        match committed.iter().find(|t| &t.job_id == dep_id) {
            Some(task) => {
                latest_end = Some(latest_end.map_or(task.end_ms, |l| l.max(task.end_ms)));
            }
            None => missing.push(dep_id.clone()),
        }
    }

    DependencyCheck {
        met: missing.is_empty(),
        missing,
        earliest_start_ms: latest_end,
    }
}

/// Greedy schedule optimizer.
///
/// Pure and deterministic: identical inputs produce an identical result.
/// Each run builds its own per-resource timeline map and discards it, so
/// independent runs are safe to execute concurrently.
///
/// # Example
///
/// ```
/// use prodplan::models::{Job, Priority, Resource, DAY_MS};
/// use prodplan::scheduler::ScheduleOptimizer;
///
/// let jobs = vec![Job::new("J1")
///     .with_garment_type("T-Shirt")
///     .with_priority(Priority::High)
///     .with_estimated_hours(4.0)
///     .with_deadline(3 * DAY_MS)
///     .with_skill("PRINTING")];
/// let resources = vec![Resource::machine("M1")
///     .with_name("DTG Printer")
///     .with_skill("PRINTING")];
///
/// let optimizer = ScheduleOptimizer::new();
/// let result = optimizer.optimize(&jobs, &resources, 0).unwrap();
/// assert_eq!(result.scheduled_jobs, 1);
/// assert!(result.unscheduled_jobs.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleOptimizer {
    config: OptimizerConfig,
}

impl ScheduleOptimizer {
    /// Creates an optimizer with default weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom configuration.
    pub fn with_config(mut self, config: OptimizerConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Runs the full optimization pipeline.
    ///
    /// `start_ms` anchors the run: deadline urgency, the first searchable
    /// day, and the makespan all measure from it. No wall-clock reads
    /// happen anywhere in the pipeline.
    ///
    /// # Errors
    /// Returns the accumulated validation errors when the input is
    /// malformed (duplicate IDs, non-positive durations or capacities,
    /// out-of-range percentages).
    pub fn optimize(
        &self,
        jobs: &[Job],
        resources: &[Resource],
        start_ms: i64,
    ) -> Result<OptimizationResult, Vec<ValidationError>> {
        validate_input(jobs, resources)?;

        let context = DispatchContext::at_time(start_ms);
        let ordered = self.prioritizer().sort(jobs, &context);
        let total_jobs = ordered.len();

        let mut timelines: HashMap<String, Timeline> = resources
            .iter()
            .map(|r| (r.id.clone(), Timeline::new()))
            .collect();
        let mut schedule: Vec<ScheduledTask> = Vec::new();
        let mut unscheduled: Vec<Job> = Vec::new();
        let mut conflicts: Vec<Conflict> = Vec::new();

        for job in ordered {
            let candidates = suitable_resources(job, resources, self.config.utilization_ceiling);
            if candidates.is_empty() {
                unscheduled.push(job.clone());
                conflicts.push(Conflict::no_resource(job));
                continue;
            }

            let deps = check_dependencies(job, &schedule);
            if !deps.met {
                conflicts.push(Conflict::dependency(&job.id, &deps.missing));
                // Still attempted: the floor falls back to the run start.
            }
            let floor_ms = deps.earliest_start_ms.unwrap_or(start_ms).max(start_ms);

            match self.best_assignment(job, &candidates, &timelines, floor_ms) {
                Some(task) => {
                    if let Some(timeline) = timelines.get_mut(&task.resource_id) {
                        timeline.push(task.slot());
                    }
                    schedule.push(task);
                }
                None => {
                    unscheduled.push(job.clone());
                    conflicts.push(Conflict::capacity(job));
                }
            }
        }

        schedule.sort_by(|a, b| a.start_ms.cmp(&b.start_ms).then_with(|| a.job_id.cmp(&b.job_id)));

        let metrics = kpi::calculate_metrics(&schedule, resources, start_ms, &self.config);
        let optimization_score =
            kpi::optimization_score(&metrics, unscheduled.len(), total_jobs, &self.config);
        let recommendations = kpi::recommendations(unscheduled.len(), &metrics, &conflicts);

        Ok(OptimizationResult {
            scheduled_jobs: schedule.len(),
            schedule,
            total_jobs,
            unscheduled_jobs: unscheduled,
            optimization_score,
            metrics,
            recommendations,
            conflicts,
        })
    }

    /// Builds the standard weighted prioritizer from the configuration.
    fn prioritizer(&self) -> Prioritizer {
        Prioritizer::new()
            .with_rule(rules::PriorityLevel, self.config.priority_weight)
            .with_rule(rules::DeadlineUrgency, self.config.deadline_weight)
            .with_rule(
                rules::OrderQuantity::new(self.config.quantity_cap_units),
                self.config.quantity_weight,
            )
    }

    /// Evaluates every feasible (resource, slot) pair and keeps the best.
    ///
    /// Candidates are scanned in ascending resource-ID order with a
    /// strictly-greater comparison, so score ties resolve to the
    /// lexicographically smallest ID.
    fn best_assignment(
        &self,
        job: &Job,
        candidates: &[&Resource],
        timelines: &HashMap<String, Timeline>,
        floor_ms: i64,
    ) -> Option<ScheduledTask> {
        let mut ordered: Vec<&Resource> = candidates.to_vec();
        ordered.sort_by(|a, b| a.id.cmp(&b.id));

        let mut best: Option<(f64, &Resource, TimeSlot)> = None;

        for resource in ordered {
            let timeline = match timelines.get(&resource.id) {
                Some(t) => t,
                None => continue,
            };

            let slot = match find_slot(
                timeline,
                job.duration_ms(),
                floor_ms,
                job.deadline_ms,
                resource.daily_window_ms(),
                self.config.day_start_hour,
                self.config.max_search_days,
            ) {
                Some(s) => s,
                None => continue,
            };

            let score = score_assignment(job, resource, slot.end_ms, &self.config);
            if best.as_ref().map_or(true, |(b, _, _)| score > *b) {
                best = Some((score, resource, slot));
            }
        }

        best.map(|(score, resource, slot)| ScheduledTask {
            job_id: job.id.clone(),
            job: job.clone(),
            resource_id: resource.id.clone(),
            resource_name: resource.name.clone(),
            start_ms: slot.start_ms,
            end_ms: slot.end_ms,
            duration_hours: slot.duration_ms() as f64 / HOUR_MS as f64,
            score,
        })
    }
}
