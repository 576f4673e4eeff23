//! Schedule optimization engine.
//!
//! The entry point is [`SlotOptimizer::find_optimal_times`]: given a
//! flexible task, a date range, the fixed events to avoid, and the user's
//! preferences, it generates category-biased candidate windows day by day,
//! drops anything that conflicts with an existing commitment, scores the
//! survivors with a weighted multi-factor model, attaches a human-readable
//! explanation, and returns a diverse, chronologically ordered selection.
//!
//! The whole pipeline is a pure function of its inputs: no I/O, no clock
//! reads, no shared state. Identical inputs always produce identical
//! output, and an empty result is a valid outcome, not an error.

pub mod candidates;
pub mod reasoning;
pub mod scoring;
pub mod selection;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock;
use crate::error::{Result, ValidationError};
use crate::schedule::{DateRange, FixedEvent, FlexibleTask, SchedulePreferences};

pub use candidates::CandidateSlot;
pub use scoring::{FactorWeights, ScoreBreakdown, ScoreTerm, ScoringEngine};
pub use selection::DEFAULT_MAX_SUGGESTIONS;

/// A ranked, conflict-free suggestion for the task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Composite score in [0.0, 1.0]
    pub score: f64,
    /// Informational explanation; never parsed back by the engine
    pub reasoning: String,
}

impl ScoredSlot {
    /// Duration in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// The schedule optimization orchestrator.
#[derive(Debug, Clone, Default)]
pub struct SlotOptimizer {
    scoring: ScoringEngine,
}

impl SlotOptimizer {
    /// Create an optimizer with balanced factor weights.
    pub fn new() -> Self {
        Self {
            scoring: ScoringEngine::new(),
        }
    }

    /// Create an optimizer with custom factor weights.
    pub fn with_weights(weights: FactorWeights) -> Self {
        Self {
            scoring: ScoringEngine::with_weights(weights),
        }
    }

    /// Find ranked, conflict-free time slots for a task.
    ///
    /// Iterates every calendar day of the half-open `range`, proposing
    /// candidates only between `range.start` and `range.end`. Returns an
    /// empty list when the schedule leaves no room; that is the expected
    /// "fully booked" outcome and not an error.
    ///
    /// # Errors
    /// Fails fast on programmer errors from the integration layer: a
    /// zero-duration task, an inverted date range, or inverted working
    /// hours.
    pub fn find_optimal_times(
        &self,
        task: &FlexibleTask,
        range: &DateRange,
        fixed_events: &[FixedEvent],
        prefs: &SchedulePreferences,
    ) -> Result<Vec<ScoredSlot>> {
        if task.duration_minutes == 0 {
            return Err(ValidationError::invalid_value(
                "duration_minutes",
                "task duration must be positive",
            )
            .into());
        }
        if range.start >= range.end {
            return Err(ValidationError::InvalidTimeRange {
                start: range.start,
                end: range.end,
            }
            .into());
        }
        prefs.validate()?;

        let mut scored = Vec::new();
        for day in range.days() {
            let events_on_day: Vec<FixedEvent> = fixed_events
                .iter()
                .filter(|e| clock::same_day(e.start, day))
                .cloned()
                .collect();

            for candidate in candidates::generate_for_day(day, task, prefs, &events_on_day) {
                // Partial first and last days: keep suggestions inside the
                // requested interval.
                if candidate.start < range.start || candidate.end > range.end {
                    continue;
                }

                let breakdown =
                    self.scoring
                        .score_candidate(&candidate, task, prefs, &events_on_day);
                let reasoning = reasoning::explain(&candidate, task, breakdown.total_score);
                scored.push(ScoredSlot {
                    start: candidate.start,
                    end: candidate.end,
                    score: breakdown.total_score,
                    reasoning,
                });
            }
        }

        let max_count = task.suggestion_count.unwrap_or(DEFAULT_MAX_SUGGESTIONS);
        Ok(selection::select_diverse(&scored, max_count))
    }
}
