//! Weighted multi-factor scoring for candidate slots.
//!
//! Every candidate gets a composite score in [0, 1]:
//!
//! ```text
//! score = clamp(0, 1, 0.5 + Σ weight_i · subscore_i)
//! ```
//!
//! The five factors are category time-of-day fit, task/user preference
//! fit, buffer adequacy around neighboring commitments, a fixed energy
//! curve, and a time-of-day diversity bonus. Each sub-score lands in
//! [0, 1] before weighting and the breakdown is kept per factor so the
//! reasoning layer can explain the result.

use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::clock::{self, hour_of};
use crate::optimizer::candidates::CandidateSlot;
use crate::schedule::{FixedEvent, FlexibleTask, PartOfDay, SchedulePreferences, TaskCategory};

/// Neutral baseline every candidate starts from before factor weighting.
pub const BASE_SCORE: f64 = 0.5;

/// Individual scoring factor with weight and raw score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreTerm {
    /// Factor name
    pub name: &'static str,
    /// Weight for this factor
    pub weight: f64,
    /// Raw sub-score (0.0 to 1.0, higher is better)
    pub score: f64,
    /// Weighted contribution
    pub contribution: f64,
}

impl ScoreTerm {
    /// Create a new term, clamping the raw score into [0, 1].
    pub fn new(name: &'static str, weight: f64, score: f64) -> Self {
        let score = score.clamp(0.0, 1.0);
        Self {
            name,
            weight,
            score,
            contribution: weight * score,
        }
    }
}

/// Complete scoring breakdown for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Individual factor terms
    pub terms: Vec<ScoreTerm>,
    /// Composite score, clamped to [0.0, 1.0]
    pub total_score: f64,
}

impl ScoreBreakdown {
    /// Build a breakdown from factor terms; applies the baseline and clamp.
    pub fn from_terms(terms: Vec<ScoreTerm>) -> Self {
        let weighted: f64 = terms.iter().map(|t| t.contribution).sum();
        Self {
            terms,
            total_score: (BASE_SCORE + weighted).clamp(0.0, 1.0),
        }
    }

    /// Look up a factor's raw sub-score by name.
    pub fn factor(&self, name: &str) -> Option<f64> {
        self.terms.iter().find(|t| t.name == name).map(|t| t.score)
    }
}

/// Weights for the five scoring factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    /// Category-optimal-time fit
    pub category_fit: f64,
    /// Task/user time-preference fit
    pub preference_fit: f64,
    /// Buffer adequacy around neighboring events
    pub buffer: f64,
    /// Fixed energy-level curve
    pub energy: f64,
    /// Time-of-day diversity bonus
    pub diversity: f64,
}

impl FactorWeights {
    /// Default balanced weights.
    pub fn balanced() -> Self {
        Self {
            category_fit: 0.30,
            preference_fit: 0.25,
            buffer: 0.20,
            energy: 0.10,
            diversity: 0.05,
        }
    }

    /// Validate that all weights are in [0.0, 1.0].
    pub fn validate(&self) -> Result<(), String> {
        let weights = [
            ("category_fit", self.category_fit),
            ("preference_fit", self.preference_fit),
            ("buffer", self.buffer),
            ("energy", self.energy),
            ("diversity", self.diversity),
        ];

        for (name, weight) in weights {
            if !(0.0..=1.0).contains(&weight) {
                return Err(format!(
                    "Weight '{}' must be in [0.0, 1.0], got {}",
                    name, weight
                ));
            }
        }
        Ok(())
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self::balanced()
    }
}

/// Category-optimal-time fit.
///
/// Piecewise per-category curve over the hour of day, in [0.2, 1.0].
/// Business-hours categories peak at 1.0 mid-day; fitness peaks at 0.9 in
/// the early morning with secondary lunch and evening windows; social is
/// weekday-evening and weekend biased.
pub fn category_fit_score(category: TaskCategory, hour: u32, weekday: Weekday) -> f64 {
    match category {
        TaskCategory::Work => match hour {
            9..=11 => 1.0,
            13..=15 => 0.9,
            8 | 16 => 0.7,
            12 => 0.7,
            17 => 0.5,
            _ => 0.2,
        },
        TaskCategory::Fitness => match hour {
            6..=8 => 0.9,
            17..=19 => 0.8,
            12..=13 => 0.7,
            9..=11 | 14..=16 => 0.5,
            20..=21 => 0.4,
            _ => 0.2,
        },
        TaskCategory::Study => match hour {
            9..=10 => 1.0,
            8 | 11 => 0.9,
            19..=21 => 0.8,
            14..=16 => 0.6,
            12..=13 | 17..=18 => 0.5,
            _ => 0.2,
        },
        TaskCategory::Health => match hour {
            10..=11 => 1.0,
            9 | 14..=16 => 0.9,
            12..=13 => 0.7,
            8 | 17 => 0.5,
            _ => 0.2,
        },
        TaskCategory::Social => {
            let weekend = matches!(weekday, Weekday::Sat | Weekday::Sun);
            if weekend {
                match hour {
                    11..=21 => 1.0,
                    10 | 22 => 0.7,
                    _ => 0.3,
                }
            } else {
                match hour {
                    18..=21 => 0.9,
                    17 => 0.7,
                    12..=13 => 0.6,
                    _ => 0.3,
                }
            }
        }
        TaskCategory::Personal => match hour {
            17..=20 => 0.8,
            8..=16 => 0.6,
            21 => 0.5,
            _ => 0.3,
        },
        TaskCategory::Other => match hour {
            8..=20 => 0.6,
            _ => 0.3,
        },
    }
}

/// Task/user time-preference fit.
///
/// Explicit task preferences dominate: inside a declared window scores
/// 1.0, outside 0.3, a declared `AnyTime` 0.7, best match wins. Without
/// task preferences, the user's per-category part-of-day preference
/// applies (0.9 inside, 0.3 outside), and failing that plain
/// working-hours membership (0.8 inside, 0.4 outside).
pub fn preference_fit_score(
    hour: u32,
    task: &FlexibleTask,
    prefs: &SchedulePreferences,
) -> f64 {
    if !task.preferences.is_empty() {
        return task
            .preferences
            .iter()
            .map(|p| match p {
                crate::schedule::TimePreference::AnyTime => 0.7,
                _ if p.matches_hour(hour) => 1.0,
                _ => 0.3,
            })
            .fold(0.0, f64::max);
    }

    let daypart = prefs.daypart_for(task.category);
    if daypart != PartOfDay::Any {
        return if daypart.contains_hour(hour) { 0.9 } else { 0.3 };
    }

    if prefs.in_working_hours(hour) {
        0.8
    } else {
        0.4
    }
}

/// Buffer adequacy.
///
/// Starts at 1.0 and, independently for the nearest same-day neighbor
/// before and after the candidate, subtracts 0.3 when the gap falls below
/// the configured buffer and 0.1 when it falls below twice the buffer.
/// Floored at 0.0.
pub fn buffer_score(candidate: &CandidateSlot, events: &[FixedEvent], buffer_minutes: u32) -> f64 {
    let buffer = buffer_minutes as i64;
    let mut score: f64 = 1.0;

    let gap_before = events
        .iter()
        .filter(|e| clock::same_day(e.start, candidate.start) && e.end() <= candidate.start)
        .map(|e| clock::gap_minutes(e.end(), candidate.start))
        .min();
    let gap_after = events
        .iter()
        .filter(|e| clock::same_day(e.start, candidate.start) && e.start >= candidate.end)
        .map(|e| clock::gap_minutes(candidate.end, e.start))
        .min();

    for gap in [gap_before, gap_after].into_iter().flatten() {
        if gap < buffer {
            score -= 0.3;
        } else if gap < buffer * 2 {
            score -= 0.1;
        }
    }

    score.max(0.0)
}

/// Fixed energy-level curve over the hour of day.
///
/// Peaks mid-morning, dips after lunch, tapers through the evening.
/// Independent of category.
pub fn energy_score(hour: u32) -> f64 {
    match hour {
        9..=10 => 1.0,
        11 => 0.9,
        8 | 16 => 0.8,
        12 | 15 | 17 => 0.7,
        7 | 13..=14 | 18..=19 => 0.6,
        6 | 20 => 0.5,
        5 | 21 => 0.4,
        22 => 0.3,
        _ => 0.2,
    }
}

/// Time-of-day diversity bonus.
///
/// A second fixed curve that nudges suggestions away from pure-morning or
/// pure-evening clusters by favoring the middle of the day.
pub fn diversity_score(hour: u32) -> f64 {
    match hour {
        13..=16 => 1.0,
        10..=12 => 0.8,
        17..=19 => 0.8,
        6..=9 | 20..=22 => 0.5,
        _ => 0.2,
    }
}

/// Weighted multi-factor scoring engine for candidate slots.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    weights: FactorWeights,
}

impl ScoringEngine {
    /// Create a new engine with balanced weights.
    pub fn new() -> Self {
        Self {
            weights: FactorWeights::default(),
        }
    }

    /// Create with custom weights.
    pub fn with_weights(weights: FactorWeights) -> Self {
        Self { weights }
    }

    /// Current weights.
    pub fn weights(&self) -> &FactorWeights {
        &self.weights
    }

    /// Score one candidate against the task, preferences, and the day's
    /// fixed events.
    pub fn score_candidate(
        &self,
        candidate: &CandidateSlot,
        task: &FlexibleTask,
        prefs: &SchedulePreferences,
        events: &[FixedEvent],
    ) -> ScoreBreakdown {
        let hour = hour_of(candidate.start);
        let weekday = candidate.start.weekday();

        ScoreBreakdown::from_terms(vec![
            ScoreTerm::new(
                "category_fit",
                self.weights.category_fit,
                category_fit_score(task.category, hour, weekday),
            ),
            ScoreTerm::new(
                "preference_fit",
                self.weights.preference_fit,
                preference_fit_score(hour, task, prefs),
            ),
            ScoreTerm::new(
                "buffer",
                self.weights.buffer,
                buffer_score(candidate, events, prefs.buffer_minutes),
            ),
            ScoreTerm::new("energy", self.weights.energy, energy_score(hour)),
            ScoreTerm::new("diversity", self.weights.diversity, diversity_score(hour)),
        ])
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::HourOfDay;
    use crate::schedule::TimePreference;
    use chrono::{DateTime, TimeZone, Utc};

    // 2025-03-10 is a Monday
    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, h, m, 0).unwrap()
    }

    fn candidate(h: u32, m: u32, minutes: i64, category: TaskCategory) -> CandidateSlot {
        CandidateSlot {
            start: at(h, m),
            end: at(h, m) + chrono::Duration::minutes(minutes),
            category,
        }
    }

    #[test]
    fn category_curves_respect_stated_peaks() {
        // Work peaks mid-day
        assert_eq!(category_fit_score(TaskCategory::Work, 10, Weekday::Mon), 1.0);
        assert!(category_fit_score(TaskCategory::Work, 21, Weekday::Mon) < 0.5);

        // Fitness peaks early morning, secondary lunch and evening
        let early = category_fit_score(TaskCategory::Fitness, 7, Weekday::Mon);
        let lunch = category_fit_score(TaskCategory::Fitness, 12, Weekday::Mon);
        let evening = category_fit_score(TaskCategory::Fitness, 18, Weekday::Mon);
        assert_eq!(early, 0.9);
        assert!(early > evening && evening > lunch.min(evening));
        assert!((0.7..=0.8).contains(&lunch));
        assert!((0.7..=0.8).contains(&evening));

        // Social prefers weekends over weekday afternoons
        assert!(
            category_fit_score(TaskCategory::Social, 14, Weekday::Sat)
                > category_fit_score(TaskCategory::Social, 14, Weekday::Mon)
        );
        // Weekday evenings are still good for social
        assert_eq!(category_fit_score(TaskCategory::Social, 19, Weekday::Wed), 0.9);
    }

    #[test]
    fn curves_stay_inside_unit_interval() {
        for category in TaskCategory::ALL {
            for hour in 0..24 {
                for weekday in [Weekday::Mon, Weekday::Sat] {
                    let v = category_fit_score(category, hour, weekday);
                    assert!((0.0..=1.0).contains(&v), "{category:?} h{hour}: {v}");
                }
                assert!((0.0..=1.0).contains(&energy_score(hour)));
                assert!((0.0..=1.0).contains(&diversity_score(hour)));
            }
        }
    }

    #[test]
    fn energy_curve_shape() {
        // Mid-morning peak
        assert_eq!(energy_score(9), 1.0);
        // Post-lunch dip
        assert!(energy_score(13) <= 0.6);
        // Late-evening taper
        assert!(energy_score(22) < energy_score(19));
    }

    #[test]
    fn explicit_preference_beats_fallbacks() {
        let task = FlexibleTask::new("Gym", 60, TaskCategory::Fitness).with_preference(
            TimePreference::Morning {
                before: HourOfDay::literal(9),
            },
        );
        let prefs = SchedulePreferences::default();

        assert_eq!(preference_fit_score(7, &task, &prefs), 1.0);
        assert_eq!(preference_fit_score(14, &task, &prefs), 0.3);
    }

    #[test]
    fn any_time_preference_is_neutral() {
        let task =
            FlexibleTask::new("Errand", 30, TaskCategory::Personal).with_preference(TimePreference::AnyTime);
        let prefs = SchedulePreferences::default();
        assert_eq!(preference_fit_score(7, &task, &prefs), 0.7);
        assert_eq!(preference_fit_score(14, &task, &prefs), 0.7);
    }

    #[test]
    fn daypart_fallback_applies_without_task_preferences() {
        let task = FlexibleTask::new("Gym", 60, TaskCategory::Fitness);
        let mut prefs = SchedulePreferences::default();
        prefs
            .category_dayparts
            .insert(TaskCategory::Fitness, PartOfDay::Evening);

        assert_eq!(preference_fit_score(18, &task, &prefs), 0.9);
        assert_eq!(preference_fit_score(8, &task, &prefs), 0.3);
    }

    #[test]
    fn working_hours_are_the_last_resort() {
        let task = FlexibleTask::new("Chore", 30, TaskCategory::Other);
        let prefs = SchedulePreferences::default();
        assert_eq!(preference_fit_score(10, &task, &prefs), 0.8);
        assert_eq!(preference_fit_score(20, &task, &prefs), 0.4);
    }

    #[test]
    fn tight_gaps_lose_buffer_score() {
        let event = FixedEvent::new("Meeting", at(9, 0), 60).unwrap();
        let prefs = SchedulePreferences::default(); // 30-minute buffer

        // 10-minute gap after the meeting
        let tight = candidate(10, 10, 60, TaskCategory::Work);
        // 45-minute gap after the meeting
        let relaxed = candidate(10, 45, 60, TaskCategory::Work);
        // Miles away
        let free = candidate(14, 0, 60, TaskCategory::Work);

        let tight_score = buffer_score(&tight, std::slice::from_ref(&event), prefs.buffer_minutes);
        let relaxed_score =
            buffer_score(&relaxed, std::slice::from_ref(&event), prefs.buffer_minutes);
        let free_score = buffer_score(&free, std::slice::from_ref(&event), prefs.buffer_minutes);

        assert!(tight_score < relaxed_score);
        assert!(relaxed_score < free_score);
        assert_eq!(tight_score, 0.7);
        assert_eq!(relaxed_score, 0.9);
        assert_eq!(free_score, 1.0);
    }

    #[test]
    fn buffer_checks_both_sides_independently() {
        let before = FixedEvent::new("Standup", at(9, 0), 30).unwrap();
        let after = FixedEvent::new("Review", at(10, 45), 30).unwrap();
        // 15-minute gap on both sides with a 30-minute buffer
        let squeezed = candidate(9, 45, 45, TaskCategory::Work);

        let score = buffer_score(&squeezed, &[before, after], 30);
        assert_eq!(score, 1.0 - 0.3 - 0.3);
    }

    #[test]
    fn composite_score_is_clamped() {
        let engine = ScoringEngine::new();
        let task = FlexibleTask::new("Deep work", 60, TaskCategory::Work);
        let prefs = SchedulePreferences::default();
        let best = candidate(10, 0, 60, TaskCategory::Work);

        let breakdown = engine.score_candidate(&best, &task, &prefs, &[]);
        assert!(breakdown.total_score <= 1.0);
        assert!(breakdown.total_score >= 0.0);
        // Open mid-morning work slot should be an excellent fit
        assert!(breakdown.total_score >= 0.8);
        assert_eq!(breakdown.terms.len(), 5);
        assert_eq!(breakdown.factor("buffer"), Some(1.0));
    }
}
