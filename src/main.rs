mod commands;
mod render;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use eventboard_core::EventStatus;
use eventboard_core::board::Board;
use eventboard_core::views::{CalendarCursor, EventFilter, WindowSize};
use tracing_subscriber::EnvFilter;

use crate::commands::{add::AddArgs, config::ConfigChanges, parse_date_arg, parse_organizer_arg};

#[derive(Parser)]
#[command(name = "eventboard")]
#[command(about = "Track events, confirm pending ones, and see who is hosting what")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upcoming and pending events
    Home,

    /// List events, optionally filtered
    List {
        /// Only events starting on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Only events ending on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Only events by this organizer (see `eventboard organizers`)
        #[arg(short, long)]
        organizer: Option<String>,
    },

    /// Add a new event (pending until accepted)
    Add {
        #[arg(short, long)]
        name: Option<String>,

        /// Start date (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD), defaults to the start date
        #[arg(short, long)]
        end: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        #[arg(short, long)]
        organizer: Option<String>,

        #[arg(long)]
        link: Option<String>,
    },

    /// Show one event
    Show { id: String },

    /// Mark an event as accepted
    Accept { id: String },

    /// Mark an event as rejected
    Reject { id: String },

    /// Move an event back to pending
    Reset { id: String },

    /// Delete an event
    Remove {
        id: String,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Calendar grid of events by organizer
    Calendar {
        /// Any day in the first week shown (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Weeks to show: 1, 4, 8 or 52
        #[arg(short, long)]
        weeks: Option<u32>,

        /// Periods to move forward (negative moves back)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,
    },

    /// List organizer codes
    Organizers,

    /// Show or change settings
    Config {
        #[arg(long)]
        data_file: Option<String>,

        #[arg(long)]
        upcoming_days: Option<i64>,

        #[arg(long)]
        calendar_weeks: Option<u32>,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let mut board = Board::load()?;
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Home => commands::home::run(&board.store(), board.config(), today),
        Commands::List {
            from,
            to,
            organizer,
        } => {
            let filter = EventFilter {
                start_date: parse_date_arg(from.as_deref())?,
                end_date: parse_date_arg(to.as_deref())?,
                organizer: parse_organizer_arg(organizer.as_deref())?,
            };
            commands::list::run(&board.store(), &filter)
        }
        Commands::Add {
            name,
            start,
            end,
            location,
            organizer,
            link,
        } => {
            let args = AddArgs {
                name,
                start,
                end,
                location,
                organizer,
                link,
            };
            commands::add::run(&mut board.store(), args)
        }
        Commands::Show { id } => commands::show::run(&board.store(), &id),
        Commands::Accept { id } => {
            commands::status::run(&mut board.store(), &id, EventStatus::Accepted)
        }
        Commands::Reject { id } => {
            commands::status::run(&mut board.store(), &id, EventStatus::Rejected)
        }
        Commands::Reset { id } => {
            commands::status::run(&mut board.store(), &id, EventStatus::Pending)
        }
        Commands::Remove { id, force } => commands::remove::run(&mut board.store(), &id, force),
        Commands::Calendar {
            date,
            weeks,
            offset,
        } => {
            let reference = parse_date_arg(date.as_deref())?.unwrap_or(today);
            let window = match weeks {
                Some(w) => WindowSize::try_from(w)?,
                None => board.config().calendar_window()?,
            };
            let cursor = CalendarCursor::new(reference, window).shift(offset);
            commands::calendar::run(&board.store(), cursor)
        }
        Commands::Organizers => commands::organizers::run(),
        Commands::Config {
            data_file,
            upcoming_days,
            calendar_weeks,
        } => {
            let changes = ConfigChanges {
                data_file,
                upcoming_days,
                calendar_weeks,
            };
            commands::config::run(&mut board, changes)
        }
    }
}

/// Log to stderr, filtered by EVENTBOARD_LOG (e.g. "debug"), warnings by default.
fn init_logging() {
    let filter = EnvFilter::try_from_env("EVENTBOARD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
