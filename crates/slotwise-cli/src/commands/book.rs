//! Book command: turn one suggestion into a calendar-event document.
//!
//! The engine never persists anything; this is the consumer-side step
//! that converts a chosen slot into the event record a storage layer
//! would save.

use chrono::{DateTime, Utc};
use clap::Args;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::suggest::{self, SuggestArgs};

#[derive(Args)]
pub struct BookArgs {
    #[command(flatten)]
    pub request: SuggestArgs,
    /// Which suggestion to book (1-based rank in chronological order)
    #[arg(long, default_value = "1")]
    pub pick: usize,
}

/// The calendar-event record emitted for the chosen slot.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookedEvent {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub duration_minutes: i64,
    pub reasoning: String,
}

pub fn run(args: BookArgs) -> Result<(), Box<dyn std::error::Error>> {
    let slots = suggest::compute_suggestions(&args.request)?;

    if slots.is_empty() {
        return Err("no available times in the requested range".into());
    }
    if args.pick == 0 || args.pick > slots.len() {
        return Err(format!(
            "pick {} is out of range, {} suggestion(s) available",
            args.pick,
            slots.len()
        )
        .into());
    }

    let slot = &slots[args.pick - 1];
    let event = BookedEvent {
        id: Uuid::new_v4().to_string(),
        title: args.request.title.clone(),
        start: slot.start,
        duration_minutes: slot.duration_minutes(),
        reasoning: slot.reasoning.clone(),
    };

    println!("{}", serde_json::to_string_pretty(&event)?);
    Ok(())
}
