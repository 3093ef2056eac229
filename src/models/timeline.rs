//! Time slots and per-resource timelines.
//!
//! # Time Model
//! All times are in milliseconds relative to a scheduling epoch (t=0).
//! The epoch is assumed to fall on a midnight so that working-day windows
//! can be derived with plain integer arithmetic.
//!
//! Timelines are ephemeral: the optimizer builds one per resource during a
//! run and discards them with the run. Nothing here is persisted.

use serde::{Deserialize, Serialize};

/// Milliseconds per hour.
pub const HOUR_MS: i64 = 3_600_000;
/// Milliseconds per day.
pub const DAY_MS: i64 = 24 * HOUR_MS;

/// A booked or candidate time interval [start, end).
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Interval start (ms, inclusive).
    pub start_ms: i64,
    /// Interval end (ms, exclusive).
    pub end_ms: i64,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(start_ms: i64, end_ms: i64) -> Self {
        Self { start_ms, end_ms }
    }

    /// Duration of this slot (ms).
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }

    /// Whether a timestamp falls within this slot.
    #[inline]
    pub fn contains(&self, time_ms: i64) -> bool {
        time_ms >= self.start_ms && time_ms < self.end_ms
    }

    /// Whether two slots overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_ms < other.end_ms && other.start_ms < self.end_ms
    }
}

/// Booked intervals on one resource, ordered by start time.
///
/// Built up as assignments are committed during a single optimization run.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    slots: Vec<TimeSlot>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a slot, keeping the list ordered by start time.
    pub fn push(&mut self, slot: TimeSlot) {
        let pos = self
            .slots
            .partition_point(|s| s.start_ms <= slot.start_ms);
        self.slots.insert(pos, slot);
    }

    /// All booked slots, ordered by start time.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Slots that overlap the given window, ordered by start time.
    pub fn overlapping(&self, window: &TimeSlot) -> Vec<TimeSlot> {
        self.slots
            .iter()
            .filter(|s| s.overlaps(window))
            .copied()
            .collect()
    }

    /// Total booked time (ms).
    pub fn total_booked_ms(&self) -> i64 {
        self.slots.iter().map(TimeSlot::duration_ms).sum()
    }

    /// Number of booked slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the timeline has no bookings.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
