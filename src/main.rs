//! Wordle Assistant - CLI
//!
//! Interactive assistant for the daily Wordle, backed by a remote solver
//! service. TUI by default, plain line-based mode with `simple`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::time::Duration;
use wordle_assistant::{
    commands::run_simple,
    interactive::{App, run_tui},
    solver::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, HttpSolver},
};

#[derive(Parser)]
#[command(
    name = "wordle_assistant",
    about = "Interactive Wordle assistant backed by a remote solver service",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Solver API endpoint
    #[arg(long, global = true, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, without TUI)
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let client = HttpSolver::new(cli.api_url, Duration::from_secs(cli.timeout));

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_tui(App::new(client)),
        Commands::Simple => run_simple(&client).map_err(|e| anyhow::anyhow!(e)),
    }
}
