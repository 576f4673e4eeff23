//! Human-readable explanations for scored slots.
//!
//! The explanation is a deterministic function of the same signals the
//! scorer uses: the hour bucket the slot starts in, the task category,
//! and the overall score tier. The engine never parses these strings
//! back; they exist purely for presentation.

use chrono::{Datelike, Weekday};

use crate::clock::hour_of;
use crate::optimizer::candidates::CandidateSlot;
use crate::schedule::{FlexibleTask, TaskCategory};

/// Phrase for the time-of-day bucket the slot starts in.
fn hour_bucket_phrase(hour: u32) -> &'static str {
    match hour {
        0..=4 => "Overnight hours",
        5..=8 => "Early morning, before the day fills up",
        9..=11 => "Prime morning productivity hours",
        12..=13 => "Around midday",
        14..=16 => "Mid-afternoon",
        17..=19 => "After-work availability",
        _ => "Evening wind-down",
    }
}

/// Category-specific phrase for combinations worth calling out.
fn category_phrase(category: TaskCategory, hour: u32, weekday: Weekday) -> Option<&'static str> {
    let weekend = matches!(weekday, Weekday::Sat | Weekday::Sun);
    match category {
        TaskCategory::Fitness if (5..=8).contains(&hour) => Some("ideal for a morning workout"),
        TaskCategory::Fitness if (17..=19).contains(&hour) => {
            Some("a good time to train after work")
        }
        TaskCategory::Study if (9..=11).contains(&hour) => {
            Some("a strong focus window for studying")
        }
        TaskCategory::Study if (19..=21).contains(&hour) => Some("quiet evening review time"),
        TaskCategory::Work if (9..=11).contains(&hour) => Some("well suited to deep work"),
        TaskCategory::Social if weekend => Some("relaxed weekend timing"),
        TaskCategory::Social if (18..=21).contains(&hour) => Some("a natural evening social window"),
        TaskCategory::Health if (9..=16).contains(&hour) => {
            Some("within typical appointment hours")
        }
        _ => None,
    }
}

/// Phrase for the overall score tier.
fn tier_phrase(score: f64) -> &'static str {
    if score >= 0.8 {
        "Excellent fit."
    } else if score >= 0.6 {
        "A good option."
    } else {
        "Available but not ideal."
    }
}

/// Build the reasoning string for a scored candidate.
pub fn explain(candidate: &CandidateSlot, task: &FlexibleTask, score: f64) -> String {
    let hour = hour_of(candidate.start);
    let weekday = candidate.start.weekday();
    let bucket = hour_bucket_phrase(hour);

    match category_phrase(task.category, hour, weekday) {
        Some(extra) => format!("{}; {}. {}", bucket, extra, tier_phrase(score)),
        None => format!("{}. {}", bucket, tier_phrase(score)),
    }
}
