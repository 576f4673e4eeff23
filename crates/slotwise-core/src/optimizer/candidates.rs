//! Candidate slot generation.
//!
//! Each category seeds a small set of anchor hours that are reasonable to
//! propose at all; every anchor is expanded with quarter-hour offsets and
//! the resulting windows are filtered against the day's fixed events.

use chrono::{DateTime, Duration, Utc};

use crate::clock::{self, MinuteOfHour};
use crate::schedule::{FixedEvent, FlexibleTask, SchedulePreferences, TaskCategory};

/// Minute offsets applied to every anchor hour.
const ANCHOR_OFFSETS: [MinuteOfHour; 4] = [
    MinuteOfHour::literal(0),
    MinuteOfHour::literal(15),
    MinuteOfHour::literal(30),
    MinuteOfHour::literal(45),
];

/// A tentative, not-yet-scored time window for a task.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub category: TaskCategory,
}

impl CandidateSlot {
    /// Duration in minutes. Always equals the task duration exactly.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Anchor hours for a category.
///
/// Work anchors track the user's configured working hours; the rest are
/// fixed tables. Fitness leans early morning, lunch, and early evening;
/// study leans morning focus and evening review; health stays inside
/// business hours; social leans toward evenings.
pub fn anchor_hours(category: TaskCategory, prefs: &SchedulePreferences) -> Vec<u8> {
    match category {
        TaskCategory::Work => (prefs.working_start.get()..prefs.working_end.get()).collect(),
        TaskCategory::Fitness => vec![6, 7, 8, 12, 17, 18],
        TaskCategory::Study => vec![8, 9, 10, 19, 20],
        TaskCategory::Health => vec![9, 10, 11, 14, 15, 16],
        TaskCategory::Social => vec![12, 17, 18, 19, 20],
        TaskCategory::Personal => vec![8, 10, 12, 15, 17, 19],
        TaskCategory::Other => vec![9, 11, 13, 15, 17],
    }
}

/// Generate conflict-free candidate slots for one calendar day.
///
/// # Arguments
/// * `day` - Midnight at the start of the target day
/// * `task` - The task being scheduled
/// * `prefs` - User preferences (work anchors follow working hours)
/// * `events_on_day` - Fixed events already filtered to this day
///
/// # Returns
/// Candidates in anchor-then-offset order. A window is dropped when its
/// end would land past midnight or when it overlaps any fixed event under
/// the half-open interval test.
pub fn generate_for_day(
    day: DateTime<Utc>,
    task: &FlexibleTask,
    prefs: &SchedulePreferences,
    events_on_day: &[FixedEvent],
) -> Vec<CandidateSlot> {
    let day_end = clock::next_day_start(day);
    let duration = Duration::minutes(task.duration_minutes as i64);
    let mut candidates = Vec::new();

    for hour in anchor_hours(task.category, prefs) {
        for offset in ANCHOR_OFFSETS {
            let start =
                day + Duration::hours(hour as i64) + Duration::minutes(offset.get() as i64);
            let end = start + duration;

            if end > day_end {
                continue;
            }
            if events_on_day.iter().any(|event| event.overlaps(start, end)) {
                continue;
            }

            candidates.push(CandidateSlot {
                start,
                end,
                category: task.category,
            });
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap()
    }

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, h, m, 0).unwrap()
    }

    #[test]
    fn anchors_expand_into_quarter_hours() {
        let task = FlexibleTask::new("Gym", 60, TaskCategory::Fitness);
        let prefs = SchedulePreferences::default();

        let candidates = generate_for_day(day(), &task, &prefs, &[]);
        // 6 fitness anchors x 4 offsets, nothing near midnight
        assert_eq!(candidates.len(), 24);
        assert!(candidates.iter().any(|c| c.start == at(6, 15)));
        assert!(candidates.iter().any(|c| c.start == at(18, 45)));
    }

    #[test]
    fn work_anchors_follow_working_hours() {
        let task = FlexibleTask::new("Deep work", 60, TaskCategory::Work);
        let prefs = SchedulePreferences::default();

        let candidates = generate_for_day(day(), &task, &prefs, &[]);
        assert!(candidates.iter().all(|c| clock::hour_of(c.start) >= 9));
        assert!(candidates.iter().all(|c| clock::hour_of(c.start) <= 16));
    }

    #[test]
    fn conflicting_windows_are_dropped() {
        let task = FlexibleTask::new("Gym", 60, TaskCategory::Fitness);
        let prefs = SchedulePreferences::default();
        // Block all of 6:00-9:00
        let event = FixedEvent::new("Flight", at(6, 0), 180).unwrap();

        let candidates = generate_for_day(day(), &task, &prefs, &[event.clone()]);
        assert!(candidates
            .iter()
            .all(|c| !event.overlaps(c.start, c.end)));
        // Every 6, 7, and 8 o'clock window ends inside the event, so only
        // the lunch and evening anchors survive.
        assert!(candidates.iter().all(|c| clock::hour_of(c.start) >= 12));
    }

    #[test]
    fn candidates_never_cross_midnight() {
        // 90 minutes from a 23:xx anchor would cross; social's latest
        // anchor is 20:45 so build the case with a long duration instead.
        let task = FlexibleTask::new("Party", 240, TaskCategory::Social);
        let prefs = SchedulePreferences::default();

        let candidates = generate_for_day(day(), &task, &prefs, &[]);
        let day_end = clock::next_day_start(day());
        assert!(candidates.iter().all(|c| c.end <= day_end));
        // 20:15 + 4h crosses midnight and must be absent
        assert!(candidates.iter().all(|c| c.start != at(20, 15)));
    }

    #[test]
    fn duration_is_exact() {
        let task = FlexibleTask::new("Gym", 90, TaskCategory::Fitness);
        let prefs = SchedulePreferences::default();
        for c in generate_for_day(day(), &task, &prefs, &[]) {
            assert_eq!(c.duration_minutes(), 90);
        }
    }
}
