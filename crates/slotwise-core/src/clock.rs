//! Time arithmetic helpers.
//!
//! Small validated value types for hours and minutes, plus the day-boundary
//! and interval-overlap primitives the optimizer is built on. Everything in
//! here is a pure function of its arguments; the engine never reads the
//! wall clock.

use chrono::{DateTime, Duration, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// An hour of the day, guaranteed to be in [0, 23].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HourOfDay(u8);

impl HourOfDay {
    /// Create a validated hour of day.
    pub fn new(hour: u8) -> Result<Self, ValidationError> {
        if hour > 23 {
            return Err(ValidationError::HourOutOfRange(hour));
        }
        Ok(Self(hour))
    }

    /// Const constructor for the anchor tables. Panics at compile time on
    /// an out-of-range literal.
    pub const fn literal(hour: u8) -> Self {
        assert!(hour <= 23);
        Self(hour)
    }

    /// Raw hour value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// The hour as chrono expects it.
    pub fn as_u32(self) -> u32 {
        self.0 as u32
    }
}

/// A minute within an hour, guaranteed to be in [0, 59].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinuteOfHour(u8);

impl MinuteOfHour {
    /// Create a validated minute of hour.
    pub fn new(minute: u8) -> Result<Self, ValidationError> {
        if minute > 59 {
            return Err(ValidationError::MinuteOutOfRange(minute));
        }
        Ok(Self(minute))
    }

    /// Const constructor for the offset table.
    pub const fn literal(minute: u8) -> Self {
        assert!(minute <= 59);
        Self(minute)
    }

    /// Raw minute value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// The minute as chrono expects it.
    pub fn as_u32(self) -> u32 {
        self.0 as u32
    }
}

/// Midnight at the start of the instant's calendar day.
pub fn day_start(at: DateTime<Utc>) -> DateTime<Utc> {
    at.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Midnight at the start of the following calendar day.
pub fn next_day_start(at: DateTime<Utc>) -> DateTime<Utc> {
    day_start(at) + Duration::days(1)
}

/// Hour-of-day component of an instant.
pub fn hour_of(at: DateTime<Utc>) -> u32 {
    at.hour()
}

/// Whether two instants fall on the same calendar day.
pub fn same_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.date_naive() == b.date_naive()
}

/// Half-open interval overlap test: `[a_start, a_end)` vs `[b_start, b_end)`.
///
/// Intervals that merely touch (one ends exactly when the other starts) do
/// not overlap.
pub fn overlaps(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && a_end > b_start
}

/// Whole minutes from `earlier` to `later`; zero when the order is reversed.
pub fn gap_minutes(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    (later - earlier).num_minutes().max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn dt(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, h, m, 0).unwrap()
    }

    #[test]
    fn hour_of_day_validation() {
        assert!(HourOfDay::new(0).is_ok());
        assert!(HourOfDay::new(23).is_ok());
        assert!(HourOfDay::new(24).is_err());
        assert_eq!(HourOfDay::literal(9).get(), 9);
    }

    #[test]
    fn minute_of_hour_validation() {
        assert!(MinuteOfHour::new(59).is_ok());
        assert!(MinuteOfHour::new(60).is_err());
    }

    #[test]
    fn day_boundaries() {
        let at = dt(14, 30);
        assert_eq!(hour_of(day_start(at)), 0);
        assert_eq!(next_day_start(at) - day_start(at), Duration::days(1));
        assert!(same_day(day_start(at), at));
        assert!(!same_day(at, next_day_start(at)));
    }

    #[test]
    fn half_open_overlap() {
        // Clean overlap
        assert!(overlaps(dt(9, 0), dt(10, 0), dt(9, 30), dt(10, 30)));
        // Containment
        assert!(overlaps(dt(9, 0), dt(12, 0), dt(10, 0), dt(11, 0)));
        // Touching endpoints do not overlap
        assert!(!overlaps(dt(9, 0), dt(10, 0), dt(10, 0), dt(11, 0)));
        assert!(!overlaps(dt(10, 0), dt(11, 0), dt(9, 0), dt(10, 0)));
    }

    #[test]
    fn gap_minutes_never_negative() {
        assert_eq!(gap_minutes(dt(9, 0), dt(9, 45)), 45);
        assert_eq!(gap_minutes(dt(9, 45), dt(9, 0)), 0);
    }
}
