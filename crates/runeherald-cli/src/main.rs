use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod focus;
mod sink;

#[derive(Parser)]
#[command(name = "runeherald", version, about = "Match-event alert timer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drive the match clock live, one tick per real second
    Run(commands::run::RunArgs),
    /// Evaluate which alerts fire at a tick or over a tick range
    Check(commands::check::CheckArgs),
    /// Print the spawn schedule up to the horizon
    Schedule(commands::schedule::ScheduleArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run(args) => commands::run::run(args),
        Commands::Check(args) => commands::check::run(args),
        Commands::Schedule(args) => commands::schedule::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
