//! Match clock implementation.
//!
//! The clock is a caller-driven state machine. It has no internal thread
//! and never sleeps - the driver calls `tick()` once per real second
//! while running. Drift between wall-clock seconds and game seconds is
//! tolerated, not corrected.
//!
//! ## State transitions
//!
//! ```text
//! Idle -> Running -> (Paused -> Running | Idle)
//! ```
//!
//! `reset()` is the only operation that reverts elapsed time; `pause()`
//! freezes it. Illegal transitions are logged and ignored so a UI
//! double-click cannot crash the session.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::category::EventId;
use crate::config::MatchMode;
use crate::evaluator::AlertEvaluator;
use crate::events::ClockEvent;
use crate::focus::GameFocus;
use crate::sink::NotificationSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockState {
    Idle,
    Running,
    Paused,
}

/// The match clock: owns elapsed time and alert bookkeeping, dispatches
/// due alerts to the injected sink.
pub struct GameClock<S, F> {
    evaluator: AlertEvaluator,
    sink: S,
    focus: F,
    mode: MatchMode,
    state: ClockState,
    /// Signed seconds since match start; negative while counting down.
    elapsed_secs: i64,
    /// Highest tick already evaluated. Replaying a seen tick (pause and
    /// resume, a driver hiccup) must not refire its alerts.
    last_evaluated: Option<i64>,
}

impl<S: NotificationSink, F: GameFocus> GameClock<S, F> {
    /// Starts `Idle` in Normal mode with the countdown set.
    pub fn new(evaluator: AlertEvaluator, sink: S, focus: F) -> Self {
        let mode = MatchMode::Normal;
        Self {
            evaluator,
            sink,
            focus,
            mode,
            state: ClockState::Idle,
            elapsed_secs: mode.start_secs(),
            last_evaluated: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn elapsed_secs(&self) -> i64 {
        self.elapsed_secs
    }

    /// Signed mm:ss rendering of the current elapsed time.
    pub fn clock_text(&self) -> String {
        format_game_time(self.elapsed_secs)
    }

    pub fn snapshot(&self) -> ClockEvent {
        ClockEvent::StateSnapshot {
            state: self.state,
            mode: self.mode,
            elapsed_secs: self.elapsed_secs,
            clock: self.clock_text(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Select the match mode and reset the countdown to it. Legal only
    /// while `Idle`; otherwise a logged no-op.
    pub fn select_mode(&mut self, mode: MatchMode) -> Option<ClockEvent> {
        if self.state != ClockState::Idle {
            warn!(?mode, state = ?self.state, "ignoring mode change while clock is active");
            return None;
        }
        self.mode = mode;
        self.elapsed_secs = mode.start_secs();
        self.last_evaluated = None;
        Some(ClockEvent::ModeSelected {
            mode,
            elapsed_secs: self.elapsed_secs,
            at: Utc::now(),
        })
    }

    /// `Idle -> Running`. Raises the game window once on this transition.
    pub fn start(&mut self) -> Option<ClockEvent> {
        match self.state {
            ClockState::Idle => {
                self.state = ClockState::Running;
                self.focus.bring_game_to_front();
                Some(ClockEvent::ClockStarted {
                    mode: self.mode,
                    elapsed_secs: self.elapsed_secs,
                    at: Utc::now(),
                })
            }
            ClockState::Running | ClockState::Paused => {
                warn!(state = ?self.state, "ignoring start");
                None
            }
        }
    }

    /// `Running -> Paused`, preserving elapsed time.
    pub fn pause(&mut self) -> Option<ClockEvent> {
        if self.state != ClockState::Running {
            warn!(state = ?self.state, "ignoring pause");
            return None;
        }
        self.state = ClockState::Paused;
        Some(ClockEvent::ClockPaused {
            elapsed_secs: self.elapsed_secs,
            at: Utc::now(),
        })
    }

    /// `Paused -> Running`. Already-evaluated ticks are not replayed.
    pub fn resume(&mut self) -> Option<ClockEvent> {
        if self.state != ClockState::Paused {
            warn!(state = ?self.state, "ignoring resume");
            return None;
        }
        self.state = ClockState::Running;
        Some(ClockEvent::ClockResumed {
            elapsed_secs: self.elapsed_secs,
            at: Utc::now(),
        })
    }

    /// Back to `Idle` at the selected mode's start value. Clears alert
    /// bookkeeping; an overlay mid-way through its auto-hide is the
    /// sink's concern and is unaffected.
    pub fn reset(&mut self) -> Option<ClockEvent> {
        self.state = ClockState::Idle;
        self.elapsed_secs = self.mode.start_secs();
        self.last_evaluated = None;
        Some(ClockEvent::ClockReset {
            mode: self.mode,
            elapsed_secs: self.elapsed_secs,
            at: Utc::now(),
        })
    }

    /// Advance one game second and dispatch any due alerts to the sink.
    ///
    /// Returns `Some(AlertsFired)` when the tick produced alerts, `None`
    /// otherwise. A no-op unless `Running`.
    pub fn tick(&mut self) -> Option<ClockEvent> {
        if self.state != ClockState::Running {
            return None;
        }
        self.elapsed_secs += 1;
        let t = self.elapsed_secs;
        if self.last_evaluated.is_some_and(|seen| t <= seen) {
            return None;
        }
        self.last_evaluated = Some(t);

        let due = self.evaluator.due_events(t);
        if due.is_empty() {
            return None;
        }
        let alerts: Vec<EventId> = due.into_iter().collect();
        debug!(elapsed = t, ?alerts, "dispatching alerts");
        self.sink.notify(t, &alerts);
        Some(ClockEvent::AlertsFired {
            elapsed_secs: t,
            alerts,
            at: Utc::now(),
        })
    }
}

/// Format seconds as signed mm:ss, e.g. "-01:30" and "07:00".
pub fn format_game_time(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.abs();
    format!("{sign}{:02}:{:02}", s / 60, s % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::NoopFocus;

    /// Records every dispatch for assertions.
    #[derive(Default)]
    struct RecordingSink {
        fired: Vec<(i64, Vec<EventId>)>,
    }

    impl NotificationSink for RecordingSink {
        fn notify(&mut self, elapsed_secs: i64, alerts: &[EventId]) {
            self.fired.push((elapsed_secs, alerts.to_vec()));
        }
    }

    /// Counts focus calls.
    #[derive(Default)]
    struct CountingFocus(std::cell::Cell<u32>);

    impl GameFocus for CountingFocus {
        fn bring_game_to_front(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn clock() -> GameClock<RecordingSink, NoopFocus> {
        GameClock::new(
            AlertEvaluator::standard().unwrap(),
            RecordingSink::default(),
            NoopFocus,
        )
    }

    #[test]
    fn starts_idle_in_normal_mode() {
        let c = clock();
        assert_eq!(c.state(), ClockState::Idle);
        assert_eq!(c.mode(), MatchMode::Normal);
        assert_eq!(c.elapsed_secs(), -90);
    }

    #[test]
    fn select_mode_resets_countdown_and_is_idle_only() {
        let mut c = clock();
        assert!(c.select_mode(MatchMode::Turbo).is_some());
        assert_eq!(c.elapsed_secs(), -60);

        c.start();
        assert!(c.select_mode(MatchMode::Bots).is_none());
        assert_eq!(c.mode(), MatchMode::Turbo);
    }

    #[test]
    fn start_is_a_noop_when_already_running() {
        let mut c = clock();
        assert!(c.start().is_some());
        assert!(c.start().is_none());
        assert_eq!(c.state(), ClockState::Running);
    }

    #[test]
    fn start_raises_the_game_window_once() {
        let focus = CountingFocus::default();
        let mut c = GameClock::new(
            AlertEvaluator::standard().unwrap(),
            crate::sink::NullSink,
            focus,
        );
        c.start();
        c.start();
        c.pause();
        c.resume();
        assert_eq!(c.focus.0.get(), 1);
    }

    #[test]
    fn pause_preserves_elapsed_time_and_reset_reverts_it() {
        let mut c = clock();
        c.select_mode(MatchMode::Turbo);
        c.start();
        for _ in 0..10 {
            c.tick();
        }
        assert_eq!(c.elapsed_secs(), -50);

        c.pause();
        assert_eq!(c.state(), ClockState::Paused);
        assert_eq!(c.elapsed_secs(), -50);
        assert!(c.tick().is_none());
        assert_eq!(c.elapsed_secs(), -50);

        c.reset();
        assert_eq!(c.state(), ClockState::Idle);
        assert_eq!(c.elapsed_secs(), -60);
    }

    #[test]
    fn ticking_to_match_start_fires_day() {
        let mut c = clock();
        c.select_mode(MatchMode::Turbo);
        c.start();
        let mut fired = None;
        for _ in 0..60 {
            if let Some(ClockEvent::AlertsFired { elapsed_secs, alerts, .. }) = c.tick() {
                fired = Some((elapsed_secs, alerts));
            }
        }
        assert_eq!(fired, Some((0, vec![EventId::Day])));
    }

    #[test]
    fn normal_mode_end_to_end_through_early_game() {
        // From -90, ticking to t=110: day fires at 0, water at 106
        // (first spawn 120, lead 14), and bounty stays silent before its
        // first eligible tick (232).
        let mut c = clock();
        c.start();
        for _ in 0..200 {
            c.tick();
        }
        assert_eq!(c.elapsed_secs(), 110);
        assert_eq!(
            c.sink.fired,
            vec![(0, vec![EventId::Day]), (106, vec![EventId::Water])]
        );
    }

    #[test]
    fn reset_cancels_pending_evaluation() {
        let mut c = clock();
        c.start();
        for _ in 0..50 {
            c.tick();
        }
        c.reset();
        assert_eq!(c.elapsed_secs(), -90);
        assert!(c.tick().is_none(), "stopped clock must not evaluate");
        assert_eq!(c.state(), ClockState::Idle);
    }

    #[test]
    fn seen_ticks_are_not_replayed() {
        let mut c = clock();
        c.select_mode(MatchMode::Turbo);
        c.start();
        for _ in 0..61 {
            c.tick(); // Reaches t=1, firing day at t=0.
        }
        let fired_before = c.sink.fired.len();

        // Rewind elapsed time as a misbehaving driver would, then replay.
        c.elapsed_secs = -1;
        c.tick();
        assert_eq!(c.sink.fired.len(), fired_before, "t=0 refired on replay");
    }

    #[test]
    fn format_game_time_is_signed_mmss() {
        assert_eq!(format_game_time(-90), "-01:30");
        assert_eq!(format_game_time(0), "00:00");
        assert_eq!(format_game_time(106), "01:46");
        assert_eq!(format_game_time(420), "07:00");
    }
}
