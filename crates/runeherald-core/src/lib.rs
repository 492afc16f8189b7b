//! # Runeherald Core Library
//!
//! Core logic for the Runeherald match companion: given a once-per-second
//! elapsed-time counter, decide which in-game events (rune spawns, the
//! Roshan respawn, day/night flips) are about to happen and must fire an
//! alert. The CLI binary drives the clock; a GUI would be a thin layer
//! over the same library.
//!
//! ## Architecture
//!
//! - **Schedules**: per-category cadences (repeating or fixed literal
//!   lists) with lazy occurrence iterators over a bounded horizon
//! - **Alert Evaluator**: a pure function of elapsed time using O(1)
//!   modular arithmetic, proven equivalent to table lookup by tests
//! - **Game Clock**: a caller-driven Idle/Running/Paused state machine;
//!   the driver calls `tick()` once per real second
//! - **Boundaries**: [`NotificationSink`] (sound/overlay) and
//!   [`GameFocus`] (window raising) are injected capabilities
//!
//! ## Key Components
//!
//! - [`GameClock`]: the match clock state machine
//! - [`AlertEvaluator`]: due-event computation per tick
//! - [`GameConfig`]: the single static table of all timing constants

pub mod category;
pub mod clock;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod events;
pub mod focus;
pub mod schedule;
pub mod sink;

pub use category::{Cadence, DayNightCycle, EventCategory, EventId};
pub use clock::{format_game_time, ClockState, GameClock};
pub use config::{GameConfig, MatchMode};
pub use error::{ConfigError, CoreError, Result};
pub use evaluator::AlertEvaluator;
pub use events::ClockEvent;
pub use focus::{GameFocus, NoopFocus};
pub use schedule::{Occurrence, HORIZON_SECS};
pub use sink::{NotificationSink, NullSink};
