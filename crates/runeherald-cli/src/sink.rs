//! Console notification sink.
//!
//! Prints each fired alert with its sound and overlay asset names. The
//! actual audio playback and overlay rendering belong to the desktop
//! layer; here the contract that matters is fail-soft delivery -- a
//! write error must never reach the clock.

use std::io::Write;

use runeherald_core::{format_game_time, EventId, NotificationSink};

#[derive(Debug, Default)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&mut self, elapsed_secs: i64, alerts: &[EventId]) {
        let mut out = std::io::stdout().lock();
        for id in alerts {
            let line = match id.image_asset() {
                Some(img) => format!(
                    "\r[{}] {} soon  (sound: {}, overlay: {})",
                    format_game_time(elapsed_secs),
                    id,
                    id.sound_asset(),
                    img,
                ),
                None => format!(
                    "\r[{}] {} soon  (sound: {})",
                    format_game_time(elapsed_secs),
                    id,
                    id.sound_asset(),
                ),
            };
            let _ = writeln!(out, "{line}");
        }
        let _ = out.flush();
    }
}
