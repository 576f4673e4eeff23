//! Suggestion command: feed the optimizer from files and flags, print
//! ranked slots.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::Args;
use slotwise_core::{
    DateRange, FixedEvent, FlexibleTask, HourOfDay, SchedulePreferences, ScoredSlot,
    SlotOptimizer, TaskCategory, TimePreference,
};

type CliResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

#[derive(Args)]
pub struct SuggestArgs {
    /// Task title
    pub title: String,
    /// Task duration in minutes
    #[arg(long)]
    pub duration: u32,
    /// Task category: work, fitness, personal, study, health, social, other
    #[arg(long, default_value = "other")]
    pub category: String,
    /// Number of suggestions to return
    #[arg(long)]
    pub count: Option<usize>,
    /// Time preference, repeatable: any, morning[:BEFORE],
    /// afternoon[:START-END], evening[:AFTER]
    #[arg(long = "prefer")]
    pub prefer: Vec<String>,
    /// Hard deadline (RFC 3339); clamps the end of the search range
    #[arg(long)]
    pub deadline: Option<DateTime<Utc>>,
    /// JSON file with the fixed events to avoid
    #[arg(long)]
    pub events: Option<PathBuf>,
    /// Start of the search range (RFC 3339)
    #[arg(long)]
    pub from: DateTime<Utc>,
    /// End of the search range (RFC 3339, exclusive)
    #[arg(long)]
    pub to: DateTime<Utc>,
    /// TOML preference file; defaults apply when absent
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: SuggestArgs) -> CliResult {
    let slots = compute_suggestions(&args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&slots)?);
        return Ok(());
    }

    if slots.is_empty() {
        println!("No available times in the requested range.");
        return Ok(());
    }

    for (idx, slot) in slots.iter().enumerate() {
        println!(
            "{}. {} - {}  score {:.2}  {}",
            idx + 1,
            slot.start.format("%a %Y-%m-%d %H:%M"),
            slot.end.format("%H:%M"),
            slot.score,
            slot.reasoning
        );
    }
    Ok(())
}

/// Build the optimizer inputs from the CLI arguments and run it.
///
/// Shared with the `book` command so both present the identical ranking.
pub fn compute_suggestions(args: &SuggestArgs) -> CliResult<Vec<ScoredSlot>> {
    let mut task = FlexibleTask::new(&args.title, args.duration, parse_category(&args.category)?);
    if let Some(count) = args.count {
        task = task.with_suggestion_count(count);
    }
    for raw in &args.prefer {
        task = task.with_preference(parse_preference(raw)?);
    }
    if let Some(deadline) = args.deadline {
        task = task.with_deadline(deadline);
    }

    // The deadline belongs to the automation layer, not the scorer: it
    // simply trims how far ahead we search.
    let end = match task.deadline {
        Some(deadline) => args.to.min(deadline),
        None => args.to,
    };
    let range = DateRange::new(args.from, end)?;

    let events = match &args.events {
        Some(path) => load_events(path)?,
        None => Vec::new(),
    };
    let prefs = load_prefs(args.config.as_deref())?;

    let optimizer = SlotOptimizer::new();
    Ok(optimizer.find_optimal_times(&task, &range, &events, &prefs)?)
}

pub fn parse_category(raw: &str) -> CliResult<TaskCategory> {
    TaskCategory::ALL
        .into_iter()
        .find(|c| c.as_str() == raw)
        .ok_or_else(|| format!("unknown category '{raw}'").into())
}

/// Parse a `--prefer` flag value.
///
/// Accepted forms: `any`, `morning`, `morning:9`, `afternoon`,
/// `afternoon:13-16`, `evening`, `evening:18`.
pub fn parse_preference(raw: &str) -> CliResult<TimePreference> {
    let (kind, detail) = match raw.split_once(':') {
        Some((kind, detail)) => (kind, Some(detail)),
        None => (raw, None),
    };

    let hour = |s: &str| -> CliResult<HourOfDay> {
        let value: u8 = s.parse()?;
        Ok(HourOfDay::new(value)?)
    };

    match kind {
        "any" => Ok(TimePreference::AnyTime),
        "morning" => {
            let before = match detail {
                Some(d) => hour(d)?,
                None => HourOfDay::literal(12),
            };
            Ok(TimePreference::Morning { before })
        }
        "afternoon" => {
            let (start, end) = match detail {
                Some(d) => {
                    let (s, e) = d
                        .split_once('-')
                        .ok_or("afternoon range must look like 13-16")?;
                    (hour(s)?, hour(e)?)
                }
                None => (
                    HourOfDay::literal(12),
                    HourOfDay::literal(17),
                ),
            };
            Ok(TimePreference::Afternoon { start, end })
        }
        "evening" => {
            let after = match detail {
                Some(d) => hour(d)?,
                None => HourOfDay::literal(17),
            };
            Ok(TimePreference::Evening { after })
        }
        _ => Err(format!("unknown preference '{raw}'").into()),
    }
}

fn load_events(path: &Path) -> CliResult<Vec<FixedEvent>> {
    let raw = fs::read_to_string(path)?;
    let events: Vec<FixedEvent> = serde_json::from_str(&raw)?;
    for event in &events {
        if event.duration_minutes == 0 {
            return Err(format!("event '{}' has zero duration", event.title).into());
        }
    }
    Ok(events)
}

pub fn load_prefs(path: Option<&Path>) -> CliResult<SchedulePreferences> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            Ok(toml::from_str(&raw)?)
        }
        None => Ok(SchedulePreferences::default()),
    }
}
