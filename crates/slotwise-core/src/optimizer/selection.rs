//! Diverse top-N selection over scored slots.
//!
//! Picks at most one top-scoring slot per calendar day first so the
//! suggestions spread across the range, then backfills from the next-best
//! remaining candidates, and finally re-sorts the pick chronologically.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::ScoredSlot;

/// Default number of suggestions when the task does not ask for a count.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 4;

/// Select up to `max_count` slots, preferring day diversity.
///
/// Ties in score keep their input order (the sort is stable), so the
/// result is fully determined by the input.
pub fn select_diverse(slots: &[ScoredSlot], max_count: usize) -> Vec<ScoredSlot> {
    let mut by_score: Vec<&ScoredSlot> = slots.iter().collect();
    by_score.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let mut selected: Vec<ScoredSlot> = Vec::new();
    let mut picked = vec![false; by_score.len()];
    let mut used_days = HashSet::new();

    // First pass: one slot per calendar day.
    for (idx, slot) in by_score.iter().enumerate() {
        if selected.len() >= max_count {
            break;
        }
        if used_days.insert(slot.start.date_naive()) {
            selected.push((*slot).clone());
            picked[idx] = true;
        }
    }

    // Second pass: backfill with the globally best remaining slots.
    if selected.len() < max_count {
        for (idx, slot) in by_score.iter().enumerate() {
            if selected.len() >= max_count {
                break;
            }
            if !picked[idx] {
                selected.push((*slot).clone());
                picked[idx] = true;
            }
        }
    }

    selected.sort_by_key(|s| s.start);
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn slot(day: u32, hour: u32, score: f64) -> ScoredSlot {
        let start: DateTime<Utc> = Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap();
        ScoredSlot {
            start,
            end: start + Duration::minutes(60),
            score,
            reasoning: String::new(),
        }
    }

    #[test]
    fn one_slot_per_day_when_days_suffice() {
        let slots = vec![
            slot(10, 9, 0.9),
            slot(10, 14, 0.85),
            slot(11, 9, 0.8),
            slot(12, 9, 0.7),
            slot(13, 9, 0.6),
        ];

        let selected = select_diverse(&slots, 4);
        assert_eq!(selected.len(), 4);
        let days: HashSet<_> = selected.iter().map(|s| s.start.date_naive()).collect();
        assert_eq!(days.len(), 4);
        // The weaker same-day slot lost to day diversity
        assert!(!selected.iter().any(|s| s.start == slot(10, 14, 0.0).start));
    }

    #[test]
    fn backfills_when_days_run_out() {
        let slots = vec![
            slot(10, 9, 0.9),
            slot(10, 14, 0.8),
            slot(10, 17, 0.7),
            slot(11, 9, 0.85),
        ];

        let selected = select_diverse(&slots, 3);
        assert_eq!(selected.len(), 3);
        // Two from day 10 after backfill, the best two of that day
        let day10: Vec<_> = selected
            .iter()
            .filter(|s| s.start.date_naive() == slot(10, 0, 0.0).start.date_naive())
            .collect();
        assert_eq!(day10.len(), 2);
        assert!(day10.iter().any(|s| s.score == 0.9));
        assert!(day10.iter().any(|s| s.score == 0.8));
    }

    #[test]
    fn output_is_chronological() {
        let slots = vec![slot(12, 9, 0.9), slot(10, 18, 0.5), slot(11, 7, 0.7)];
        let selected = select_diverse(&slots, 3);
        for pair in selected.windows(2) {
            assert!(pair[0].start <= pair[1].start);
        }
    }

    #[test]
    fn score_ties_keep_input_order() {
        let a = slot(10, 9, 0.8);
        let b = slot(11, 9, 0.8);
        let selected = select_diverse(&[a.clone(), b.clone()], 1);
        assert_eq!(selected, vec![a]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(select_diverse(&[], 4).is_empty());
    }
}
