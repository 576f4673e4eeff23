//! # Slotwise Core Library
//!
//! This library provides the schedule optimization and conflict-resolution
//! engine for Slotwise: given a user's fixed calendar commitments and a
//! flexible activity to place ("three 90-minute gym sessions this week"),
//! it proposes concrete, conflict-free time slots ranked by category
//! time-of-day heuristics, user preferences, and buffer constraints.
//!
//! ## Architecture
//!
//! - **Clock helpers**: validated hour/minute value types and day-boundary
//!   and interval-overlap primitives
//! - **Schedule types**: fixed events, flexible tasks, user preferences
//! - **Optimizer**: candidate generation, weighted multi-factor scoring,
//!   reasoning strings, and diverse top-N selection
//!
//! The engine is a pure function of its inputs: it performs no I/O, reads
//! no clock, and holds no shared state, so a call per request is safe from
//! any concurrency model the host application uses. Natural-language
//! parsing, AI plumbing, persistence, and presentation all live with the
//! caller.
//!
//! ## Key Components
//!
//! - [`SlotOptimizer`]: the optimization entry point
//! - [`FlexibleTask`] / [`FixedEvent`] / [`SchedulePreferences`]: inputs
//! - [`ScoredSlot`]: the ranked output unit

pub mod clock;
pub mod error;
pub mod optimizer;
pub mod schedule;

pub use clock::{HourOfDay, MinuteOfHour};
pub use error::{CoreError, Result, ValidationError};
pub use optimizer::{
    FactorWeights, ScoreBreakdown, ScoredSlot, ScoringEngine, SlotOptimizer,
    DEFAULT_MAX_SUGGESTIONS,
};
pub use schedule::{
    DateRange, FixedEvent, FlexibleTask, Frequency, PartOfDay, SchedulePreferences, TaskCategory,
    TimePreference,
};
