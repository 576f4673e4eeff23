//! Schedule types: fixed events, flexible tasks, and user preferences.
//!
//! These are the value types the optimizer computes over. They are created
//! fresh per call by the integration layer and never mutated by the engine.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::clock::{self, HourOfDay};
use crate::error::ValidationError;

/// Category of the activity being scheduled.
///
/// Each category carries its own anchor-hour table and scoring curve in the
/// optimizer; this enum is closed on purpose so those tables stay total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Work,
    Fitness,
    Personal,
    Study,
    Health,
    Social,
    Other,
}

impl TaskCategory {
    /// All categories, in a fixed order.
    pub const ALL: [TaskCategory; 7] = [
        TaskCategory::Work,
        TaskCategory::Fitness,
        TaskCategory::Personal,
        TaskCategory::Study,
        TaskCategory::Health,
        TaskCategory::Social,
        TaskCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::Work => "work",
            TaskCategory::Fitness => "fitness",
            TaskCategory::Personal => "personal",
            TaskCategory::Study => "study",
            TaskCategory::Health => "health",
            TaskCategory::Social => "social",
            TaskCategory::Other => "other",
        }
    }
}

/// Rough part of day used for per-category user preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PartOfDay {
    Morning,
    Afternoon,
    Evening,
    #[default]
    Any,
}

impl PartOfDay {
    /// Whether an hour of day falls inside this part of day.
    ///
    /// Morning is 5:00-11:59, afternoon 12:00-16:59, evening 17:00-21:59.
    /// `Any` contains every hour.
    pub fn contains_hour(&self, hour: u32) -> bool {
        match self {
            PartOfDay::Morning => (5..12).contains(&hour),
            PartOfDay::Afternoon => (12..17).contains(&hour),
            PartOfDay::Evening => (17..22).contains(&hour),
            PartOfDay::Any => true,
        }
    }
}

/// An explicit time-of-day preference declared on a task.
///
/// One variant per preference kind, each holding only the data it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimePreference {
    /// Morning, ending before the given hour.
    Morning { before: HourOfDay },
    /// A half-open hour range within the afternoon (or anywhere, really).
    Afternoon { start: HourOfDay, end: HourOfDay },
    /// Evening, starting at or after the given hour.
    Evening { after: HourOfDay },
    /// No constraint at all.
    AnyTime,
}

impl TimePreference {
    /// Whether a candidate starting at the given hour satisfies this
    /// preference. `AnyTime` matches every hour but is treated as a weaker
    /// signal by the scorer.
    pub fn matches_hour(&self, hour: u32) -> bool {
        match self {
            TimePreference::Morning { before } => hour < before.as_u32(),
            TimePreference::Afternoon { start, end } => {
                hour >= start.as_u32() && hour < end.as_u32()
            }
            TimePreference::Evening { after } => hour >= after.as_u32(),
            TimePreference::AnyTime => true,
        }
    }
}

/// Requested recurrence for a task.
///
/// The optimizer itself never reads this; it is carried for the automation
/// layer that turns one suggestion request into several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    /// N sessions per week, days unspecified.
    WeeklyTimes { times: u8 },
    /// Specific weekdays.
    Weekdays { days: Vec<Weekday> },
}

/// An existing, immovable calendar commitment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedEvent {
    pub title: String,
    pub start: DateTime<Utc>,
    pub duration_minutes: u32,
}

impl FixedEvent {
    /// Create a fixed event. Zero-length events are rejected.
    pub fn new(
        title: impl Into<String>,
        start: DateTime<Utc>,
        duration_minutes: u32,
    ) -> Result<Self, ValidationError> {
        if duration_minutes == 0 {
            return Err(ValidationError::invalid_value(
                "duration_minutes",
                "fixed event duration must be positive",
            ));
        }
        Ok(Self {
            title: title.into(),
            start,
            duration_minutes,
        })
    }

    /// Exclusive end instant of the event.
    pub fn end(&self) -> DateTime<Utc> {
        self.start + Duration::minutes(self.duration_minutes as i64)
    }

    /// Whether this event overlaps the half-open interval `[start, end)`.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        clock::overlaps(self.start, self.end(), start, end)
    }
}

/// The activity the user wants scheduled, without a predetermined time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlexibleTask {
    pub title: String,
    pub duration_minutes: u32,
    pub category: TaskCategory,
    #[serde(default)]
    pub preferences: Vec<TimePreference>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub frequency: Option<Frequency>,
    /// How many suggestions the user asked for; the selector default
    /// applies when absent.
    #[serde(default)]
    pub suggestion_count: Option<usize>,
}

impl FlexibleTask {
    /// Create a task with the fields the optimizer requires.
    pub fn new(title: impl Into<String>, duration_minutes: u32, category: TaskCategory) -> Self {
        Self {
            title: title.into(),
            duration_minutes,
            category,
            preferences: Vec::new(),
            deadline: None,
            frequency: None,
            suggestion_count: None,
        }
    }

    /// Add an explicit time-of-day preference.
    pub fn with_preference(mut self, preference: TimePreference) -> Self {
        self.preferences.push(preference);
        self
    }

    /// Set a deadline. Read by the automation layer, not the scorer.
    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set a recurrence frequency. Read by the automation layer.
    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Ask for a specific number of suggestions.
    pub fn with_suggestion_count(mut self, count: usize) -> Self {
        self.suggestion_count = Some(count);
        self
    }
}

/// User-level scheduling preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulePreferences {
    /// Start of the working day.
    pub working_start: HourOfDay,
    /// End of the working day (exclusive). Must not precede the start.
    pub working_end: HourOfDay,
    /// Minimum gap, in minutes, wanted between a suggestion and its
    /// neighboring commitments for the slot to count as well buffered.
    pub buffer_minutes: u32,
    /// Preferred part of day per category; categories absent from the map
    /// default to `Any`.
    #[serde(default)]
    pub category_dayparts: HashMap<TaskCategory, PartOfDay>,
}

impl SchedulePreferences {
    /// Preferred part of day for a category, defaulting to `Any`.
    pub fn daypart_for(&self, category: TaskCategory) -> PartOfDay {
        self.category_dayparts
            .get(&category)
            .copied()
            .unwrap_or_default()
    }

    /// Whether an hour lies inside the configured working hours.
    pub fn in_working_hours(&self, hour: u32) -> bool {
        hour >= self.working_start.as_u32() && hour < self.working_end.as_u32()
    }

    /// Validate the invariants the optimizer relies on.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.working_start > self.working_end {
            return Err(ValidationError::invalid_value(
                "working_hours",
                format!(
                    "working hours start ({}) must not be after end ({})",
                    self.working_start.get(),
                    self.working_end.get()
                ),
            ));
        }
        Ok(())
    }
}

impl Default for SchedulePreferences {
    fn default() -> Self {
        Self {
            working_start: HourOfDay::literal(9),
            working_end: HourOfDay::literal(17),
            buffer_minutes: 30,
            category_dayparts: HashMap::new(),
        }
    }
}

/// A half-open date interval `[start, end)` the optimizer searches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Create a validated range. `start` must precede `end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ValidationError> {
        if start >= end {
            return Err(ValidationError::InvalidTimeRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Midnights of every calendar day the range touches, in order.
    pub fn days(&self) -> Vec<DateTime<Utc>> {
        let mut days = Vec::new();
        let mut cursor = clock::day_start(self.start);
        while cursor < self.end {
            days.push(cursor);
            cursor += Duration::days(1);
        }
        days
    }
}
