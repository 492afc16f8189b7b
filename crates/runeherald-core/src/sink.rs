//! Notification boundary: the clock pushes due alerts here.
//!
//! The sink owns sound playback and overlay rendering, including its own
//! auto-hide timing. From the clock's perspective dispatch is
//! fire-and-forget: a sink must never let a failed render or playback
//! reach the tick path.

use crate::category::EventId;

/// Receives fired alerts, in identifier order, de-duplicated.
pub trait NotificationSink {
    /// Infallible by contract; implementations swallow and log their own
    /// failures.
    fn notify(&mut self, elapsed_secs: i64, alerts: &[EventId]);
}

/// Discards every alert. For tests and headless runs.
#[derive(Debug, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&mut self, _elapsed_secs: i64, _alerts: &[EventId]) {}
}

impl EventId {
    /// Sound asset played when this alert fires.
    pub fn sound_asset(self) -> &'static str {
        match self {
            EventId::Bounty => "bounty_rune.wav",
            EventId::Day => "day.wav",
            EventId::Night => "night.wav",
            EventId::Power => "power_rune.wav",
            EventId::Roshan => "roshan_rune.wav",
            EventId::Water => "water_rune.wav",
            EventId::Wisdom => "wisdom_rune.wav",
        }
    }

    /// Overlay image shown when this alert fires. Roshan and the
    /// day/night transitions are sound-only.
    pub fn image_asset(self) -> Option<&'static str> {
        match self {
            EventId::Bounty => Some("bounty_soon.png"),
            EventId::Power => Some("power_soon.png"),
            EventId::Water => Some("water_soon.png"),
            EventId::Wisdom => Some("wisdom_soon.png"),
            EventId::Day | EventId::Night | EventId::Roshan => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_has_a_sound() {
        for id in [
            EventId::Bounty,
            EventId::Day,
            EventId::Night,
            EventId::Power,
            EventId::Roshan,
            EventId::Water,
            EventId::Wisdom,
        ] {
            assert!(id.sound_asset().ends_with(".wav"));
        }
    }

    #[test]
    fn roshan_is_sound_only() {
        assert_eq!(EventId::Roshan.image_asset(), None);
        assert_eq!(EventId::Bounty.image_asset(), Some("bounty_soon.png"));
    }
}
