//! # hearth-cli
//!
//! Command-line front-end for the Hearth family goal tracker.
//!
//! Renders the app's views over the seeded demo household (state is
//! in-memory only — there is no persistence layer):
//! - `hearth tasks` — today / this week / this month buckets
//! - `hearth calendar` — goals due on a specific date
//! - `hearth stats` — completion stats, 7-day histogram, categories
//! - `hearth demo` — scripted walkthrough of the goal lifecycle

mod commands;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use hearth_goal::AssigneeFilter;
use tracing_subscriber::EnvFilter;

/// Hearth CLI — family goals, grouped and measured.
#[derive(Parser)]
#[command(name = "hearth", version, about)]
struct Cli {
    /// Assignee filter: "everyone", "family", or a member name.
    #[arg(long, global = true, default_value = "everyone")]
    assignee: AssigneeFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the Tasks view: today, this week, and this month.
    Tasks,
    /// Show goals due on a date (defaults to today).
    Calendar {
        /// Date to inspect, YYYY-MM-DD.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show completion statistics and breakdowns.
    Stats,
    /// Walk the goal lifecycle end to end: create, complete, revert, delete.
    Demo,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Tasks => commands::tasks::execute(cli.assignee),
        Commands::Calendar { date } => commands::calendar::execute(cli.assignee, *date),
        Commands::Stats => commands::stats::execute(cli.assignee),
        Commands::Demo => commands::demo::execute(),
    }
}
