mod commands;
mod config;
mod parse;
mod render;
mod store;

use std::path::PathBuf;

use anyhow::Result;
use caldesk_core::{CalendarView, Direction, EventColor, Scope};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::edit::EditArgs;
use commands::new::NewArgs;
use config::Settings;

#[derive(Parser)]
#[command(name = "caldesk")]
#[command(about = "Keep a local calendar: agendas, conflict-checked events, bulk clearing and reports")]
struct Cli {
    /// JSON file holding the saved events (overrides store_path in config.toml)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// IANA time zone for reading and showing dates (e.g. "Europe/Zurich")
    #[arg(long, global = true)]
    timezone: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show events for a month, week or day
    List {
        /// month, week or day (defaults to default_view from config)
        #[arg(short, long)]
        view: Option<CalendarView>,

        /// Any date inside the period to show (defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Show the period after the given one
        #[arg(long, conflicts_with = "prev")]
        next: bool,

        /// Show the period before the given one
        #[arg(long)]
        prev: bool,
    },
    /// Create a new event
    New {
        /// Event title
        title: String,

        /// Start date/time (e.g., "2025-03-20T15:00" or "tomorrow 3pm")
        #[arg(short, long)]
        start: String,

        /// End date/time
        #[arg(short, long, conflicts_with = "duration")]
        end: Option<String>,

        /// Duration (e.g., "30m", "1h", "2h30m")
        #[arg(short, long, conflicts_with = "end")]
        duration: Option<String>,

        /// Event description
        #[arg(long)]
        description: Option<String>,

        /// Color by name ("green") or tag ("bg-green-500")
        #[arg(short, long)]
        color: Option<EventColor>,
    },
    /// Change an existing event
    Edit {
        /// Event id (shown in brackets by `caldesk list`)
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New start date/time; keeps the length unless --end or --duration is given
        #[arg(short, long)]
        start: Option<String>,

        /// New end date/time
        #[arg(short, long, conflicts_with = "duration")]
        end: Option<String>,

        /// New duration from the (new) start
        #[arg(short, long, conflicts_with = "end")]
        duration: Option<String>,

        /// New description (empty to remove it)
        #[arg(long)]
        description: Option<String>,

        /// New color
        #[arg(short, long)]
        color: Option<EventColor>,
    },
    /// Delete one event
    Delete {
        /// Event id
        id: String,
    },
    /// Delete every event in a day, week, month or year (or all of them)
    Clear {
        /// day, week, month, year or all
        #[arg(long)]
        scope: Scope,

        /// Reference date for the scope (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Actually delete; without it only the count is shown
        #[arg(short, long)]
        yes: bool,
    },
    /// List events starting between two dates
    Report {
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        from: String,

        /// Last day, included in full (YYYY-MM-DD)
        #[arg(long)]
        to: String,

        /// Write CSV to this file instead of printing a table
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the effective configuration
    Config {
        /// Write a commented default config file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cfg = config::load_config()?;
    let settings = Settings::resolve(cfg, cli.store, cli.timezone)?;

    match cli.command {
        Commands::List {
            view,
            date,
            next,
            prev,
        } => {
            let direction = match (next, prev) {
                (true, _) => Some(Direction::Next),
                (_, true) => Some(Direction::Previous),
                _ => None,
            };
            commands::list::run(&settings, view, date, direction)
        }
        Commands::New {
            title,
            start,
            end,
            duration,
            description,
            color,
        } => commands::new::run(
            &settings,
            NewArgs {
                title,
                start,
                end,
                duration,
                description,
                color,
            },
        ),
        Commands::Edit {
            id,
            title,
            start,
            end,
            duration,
            description,
            color,
        } => commands::edit::run(
            &settings,
            &id,
            EditArgs {
                title,
                start,
                end,
                duration,
                description,
                color,
            },
        ),
        Commands::Delete { id } => commands::delete::run(&settings, &id),
        Commands::Clear { scope, date, yes } => commands::clear::run(&settings, scope, date, yes),
        Commands::Report { from, to, output } => {
            commands::report::run(&settings, &from, &to, output.as_deref())
        }
        Commands::Config { init } => commands::config::run(&settings, init),
    }
}
