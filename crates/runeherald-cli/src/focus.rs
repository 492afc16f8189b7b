//! Best-effort game-window focus.
//!
//! Searches for the game window with xdotool by exact title, falling
//! back to a pgrep PID hunt limited to the game binary name. Every
//! failure path is silent apart from a debug log: a missing tool or a
//! closed game must never disturb the clock.

use std::process::Command;

use runeherald_core::GameFocus;
use tracing::debug;

const WINDOW_NAME: &str = "^Dota 2$";
const PROCESS_NAME: &str = "dota2";

pub struct DesktopFocus {
    enabled: bool,
}

impl DesktopFocus {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl GameFocus for DesktopFocus {
    fn bring_game_to_front(&self) {
        if !self.enabled {
            return;
        }
        if let Err(e) = try_focus() {
            debug!("window focus failed: {e}");
        }
    }
}

fn try_focus() -> std::io::Result<()> {
    // Direct window-name search first.
    let search = Command::new("xdotool")
        .args(["search", "--name", WINDOW_NAME])
        .output()?;
    if let Some(win) = last_word(&search.stdout) {
        Command::new("xdotool")
            .args(["windowactivate", &win])
            .status()?;
        return Ok(());
    }

    // PID fallback. `-x` matches the exact binary name, not wrapper
    // scripts, which keeps the search bounded.
    let pids = Command::new("pgrep").args(["-x", PROCESS_NAME]).output()?;
    for pid in String::from_utf8_lossy(&pids.stdout).split_whitespace() {
        let wins = Command::new("xdotool")
            .args(["search", "--pid", pid])
            .output()?;
        if let Some(win) = last_word(&wins.stdout) {
            Command::new("xdotool")
                .args(["windowactivate", &win])
                .status()?;
            return Ok(());
        }
    }
    debug!("no game window found");
    Ok(())
}

fn last_word(bytes: &[u8]) -> Option<String> {
    String::from_utf8_lossy(bytes)
        .split_whitespace()
        .last()
        .map(str::to_owned)
}
