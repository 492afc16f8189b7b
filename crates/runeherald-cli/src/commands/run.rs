use std::time::Duration;

use clap::Args;
use runeherald_core::{AlertEvaluator, ClockEvent, GameClock, MatchMode, HORIZON_SECS};
use tokio::time::MissedTickBehavior;
use tracing::info;

use crate::focus::DesktopFocus;
use crate::sink::ConsoleSink;

#[derive(Args)]
pub struct RunArgs {
    /// Match mode: normal, bots, or turbo
    #[arg(long, default_value = "normal", value_parser = super::parse_mode)]
    pub mode: MatchMode,
    /// Stop once elapsed game time reaches this many seconds
    #[arg(long, default_value_t = HORIZON_SECS, allow_hyphen_values = true)]
    pub until: i64,
    /// Don't try to raise the game window on start
    #[arg(long)]
    pub no_focus: bool,
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let evaluator = AlertEvaluator::standard()?;
    let mut clock = GameClock::new(
        evaluator,
        ConsoleSink::default(),
        DesktopFocus::new(!args.no_focus),
    );

    clock.select_mode(args.mode);
    if let Some(ClockEvent::ClockStarted { mode, elapsed_secs, .. }) = clock.start() {
        info!(%mode, elapsed_secs, "clock started");
    }

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    rt.block_on(async {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        // Drift is tolerated, never corrected by bunching ticks together.
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval.tick().await; // First tick completes immediately.
        while clock.elapsed_secs() < args.until {
            interval.tick().await;
            clock.tick();
            print_clock_line(&clock);
        }
    });

    println!();
    Ok(())
}

fn print_clock_line(clock: &GameClock<ConsoleSink, DesktopFocus>) {
    use std::io::Write;
    let mut out = std::io::stdout().lock();
    let _ = write!(out, "\r  {}  ", clock.clock_text());
    let _ = out.flush();
}
