//! Slot allocation over daily capacity windows.
//!
//! # Algorithm
//!
//! Walk forward day by day from the earliest-start floor. Each day's
//! working window is `[08:00, 08:00 + daily capacity)`. On a free day
//! the slot opens at the later of the window start and the floor; on a
//! busy day the allocator checks the gap before the first booked
//! interval, then each gap between consecutive intervals. The first fit
//! wins. A slot must lie entirely inside the day window and end at or
//! before the deadline.
//!
//! Jobs longer than the daily window can never fit: multi-day spillover
//! is out of scope, and such jobs surface as capacity conflicts.
//!
//! The walk stops once the window start passes the deadline, and is
//! additionally capped at `max_search_days` so degenerate inputs
//! terminate.

use crate::models::{TimeSlot, Timeline, DAY_MS, HOUR_MS};

/// Finds the earliest open interval for a job on one resource.
///
/// # Arguments
/// * `timeline` - The resource's booked intervals for this run.
/// * `duration_ms` - Required contiguous time.
/// * `floor_ms` - Earliest legal start (dependency floor or run start).
/// * `deadline_ms` - Latest acceptable end.
/// * `daily_capacity_ms` - Length of the resource's working window.
/// * `day_start_hour` - Hour of day the window opens.
/// * `max_search_days` - Termination cap on the day-walk.
///
/// Returns `None` when no fitting slot exists before the deadline.
pub fn find_slot(
    timeline: &Timeline,
    duration_ms: i64,
    floor_ms: i64,
    deadline_ms: i64,
    daily_capacity_ms: i64,
    day_start_hour: i64,
    max_search_days: i64,
) -> Option<TimeSlot> {
    if duration_ms <= 0 || duration_ms > daily_capacity_ms {
        return None;
    }

    let first_day = floor_ms.div_euclid(DAY_MS);

    for day_offset in 0..max_search_days {
        let window_start = (first_day + day_offset) * DAY_MS + day_start_hour * HOUR_MS;
        if window_start >= deadline_ms {
            break;
        }
        let window_end = window_start + daily_capacity_ms;
        let window = TimeSlot::new(window_start, window_end);

        let booked = timeline.overlapping(&window);
        let candidate_start = window_start.max(floor_ms);

        if booked.is_empty() {
            if let Some(slot) = fit(candidate_start, window_end, duration_ms, deadline_ms) {
                return Some(slot);
            }
            continue;
        }

        // Gap before the first booked interval.
        if booked[0].start_ms - candidate_start >= duration_ms {
            if let Some(slot) = fit(candidate_start, window_end, duration_ms, deadline_ms) {
                return Some(slot);
            }
        }

        // Gaps between consecutive booked intervals.
        for pair in booked.windows(2) {
            let gap_start = pair[0].end_ms.max(candidate_start);
            let gap_end = pair[1].start_ms;
            if gap_end - gap_start >= duration_ms {
                if let Some(slot) = fit(gap_start, window_end, duration_ms, deadline_ms) {
                    return Some(slot);
                }
            }
        }
    }

    None
}

/// Builds a slot at `start` if it stays inside the window and deadline.
fn fit(start_ms: i64, window_end_ms: i64, duration_ms: i64, deadline_ms: i64) -> Option<TimeSlot> {
    let end_ms = start_ms + duration_ms;
    if end_ms <= window_end_ms && end_ms <= deadline_ms {
        Some(TimeSlot::new(start_ms, end_ms))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_START: i64 = 8;
    const CAP_8H: i64 = 8 * HOUR_MS;

    fn slot_at(day: i64, start_hour: i64, end_hour: i64) -> TimeSlot {
        TimeSlot::new(
            day * DAY_MS + start_hour * HOUR_MS,
            day * DAY_MS + end_hour * HOUR_MS,
        )
    }

    fn find(
        timeline: &Timeline,
        duration_hours: i64,
        floor_ms: i64,
        deadline_ms: i64,
    ) -> Option<TimeSlot> {
        find_slot(
            timeline,
            duration_hours * HOUR_MS,
            floor_ms,
            deadline_ms,
            CAP_8H,
            DAY_START,
            365,
        )
    }

    #[test]
    fn test_free_day_starts_at_window_open() {
        let tl = Timeline::new();
        let slot = find(&tl, 4, 0, 2 * DAY_MS).unwrap();
        assert_eq!(slot, slot_at(0, 8, 12));
    }

    #[test]
    fn test_floor_pushes_start_within_day() {
        let tl = Timeline::new();
        // Floor at 10:00 → slot opens at 10:00, not 08:00.
        let slot = find(&tl, 4, 10 * HOUR_MS, 2 * DAY_MS).unwrap();
        assert_eq!(slot, slot_at(0, 10, 14));
    }

    #[test]
    fn test_floor_past_window_rolls_to_next_day() {
        let tl = Timeline::new();
        // Floor at 14:00, 6h job can't fit in [14:00, 16:00) → next day.
        let slot = find(&tl, 6, 14 * HOUR_MS, 3 * DAY_MS).unwrap();
        assert_eq!(slot, slot_at(1, 8, 14));
    }

    #[test]
    fn test_gap_before_first_booking() {
        let mut tl = Timeline::new();
        tl.push(slot_at(0, 12, 16));
        let slot = find(&tl, 3, 0, 2 * DAY_MS).unwrap();
        assert_eq!(slot, slot_at(0, 8, 11));
    }

    #[test]
    fn test_gap_between_bookings() {
        let mut tl = Timeline::new();
        tl.push(slot_at(0, 8, 10));
        tl.push(slot_at(0, 14, 16));
        let slot = find(&tl, 3, 0, 2 * DAY_MS).unwrap();
        assert_eq!(slot, slot_at(0, 10, 13));
    }

    #[test]
    fn test_no_tail_gap_rolls_to_next_day() {
        // One booking early in the day; the tail of the window is never
        // searched, so the job lands on the next day.
        let mut tl = Timeline::new();
        tl.push(slot_at(0, 8, 10));
        let slot = find(&tl, 3, 0, 3 * DAY_MS).unwrap();
        assert_eq!(slot, slot_at(1, 8, 11));
    }

    #[test]
    fn test_duration_exceeding_window_never_fits() {
        let tl = Timeline::new();
        // 10h job on an 8h/day window: no multi-day spillover.
        assert!(find(&tl, 10, 0, 30 * DAY_MS).is_none());
    }

    #[test]
    fn test_slot_must_end_before_deadline() {
        let tl = Timeline::new();
        // Deadline at 10:00 day 0 → a 4h slot ending 12:00 is rejected,
        // and no later day can help.
        assert!(find(&tl, 4, 0, 10 * HOUR_MS).is_none());
        // 2h fits exactly up to the deadline.
        let slot = find(&tl, 2, 0, 10 * HOUR_MS).unwrap();
        assert_eq!(slot, slot_at(0, 8, 10));
    }

    #[test]
    fn test_fully_booked_days_skip_forward() {
        let mut tl = Timeline::new();
        tl.push(slot_at(0, 8, 16));
        tl.push(slot_at(1, 8, 16));
        let slot = find(&tl, 5, 0, 5 * DAY_MS).unwrap();
        assert_eq!(slot, slot_at(2, 8, 13));
    }

    #[test]
    fn test_walk_terminates_on_degenerate_deadline() {
        let tl = Timeline::new();
        // Deadline before any window opens.
        assert!(find(&tl, 1, 0, 0).is_none());
        // Far-future floor with a deadline behind it.
        assert!(find(&tl, 1, 400 * DAY_MS, DAY_MS).is_none());
    }

    #[test]
    fn test_non_positive_duration_rejected() {
        let tl = Timeline::new();
        assert!(find_slot(&tl, 0, 0, DAY_MS, CAP_8H, DAY_START, 365).is_none());
        assert!(find_slot(&tl, -HOUR_MS, 0, DAY_MS, CAP_8H, DAY_START, 365).is_none());
    }

    #[test]
    fn test_search_day_cap_bounds_walk() {
        let mut tl = Timeline::new();
        // Book every window for 10 days; cap the walk at 5 → no slot.
        for day in 0..10 {
            tl.push(slot_at(day, 8, 16));
        }
        let hit = find_slot(&tl, 2 * HOUR_MS, 0, 20 * DAY_MS, CAP_8H, DAY_START, 5);
        assert!(hit.is_none());

        // With the full walk the job lands on day 10.
        let slot = find_slot(&tl, 2 * HOUR_MS, 0, 20 * DAY_MS, CAP_8H, DAY_START, 365).unwrap();
        assert_eq!(slot, slot_at(10, 8, 10));
    }
}
