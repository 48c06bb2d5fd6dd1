use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::{Input, Select};
use eventboard_core::date::parse_date;
use eventboard_core::store::{EventSlot, EventStore};
use eventboard_core::{NewEvent, Organizer};
use owo_colors::OwoColorize;

use super::{parse_date_arg, parse_organizer_arg};
use crate::render::format_event_dates;

/// Event fields as given on the command line.
#[derive(Default)]
pub struct AddArgs {
    pub name: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub location: Option<String>,
    pub organizer: Option<String>,
    pub link: Option<String>,
}

pub fn run<S: EventSlot>(store: &mut EventStore<S>, args: AddArgs) -> Result<()> {
    let interactive = args.name.is_none() || args.start.is_none();

    // --- Name ---
    let name = match args.name {
        Some(n) => n,
        None => Input::<String>::new()
            .with_prompt("  Name")
            .allow_empty(true)
            .interact_text()?,
    };

    // --- Dates ---
    let start_date = match args.start.as_deref() {
        Some(s) => Some(parse_date(s)?),
        None => Some(prompt_date("  Start date (YYYY-MM-DD)")?),
    };

    let end_date = match parse_date_arg(args.end.as_deref())? {
        Some(end) => Some(end),
        None if interactive => prompt_optional_date("  End date (same day)")?.or(start_date),
        None => start_date,
    };

    // --- Location ---
    let location = match args.location {
        Some(loc) => loc,
        None if interactive => Input::new()
            .with_prompt("  Where? (skip)")
            .default(String::new())
            .show_default(false)
            .interact_text()?,
        None => String::new(),
    };

    // --- Organizer ---
    let organizer = match parse_organizer_arg(args.organizer.as_deref())? {
        Some(o) => o,
        None if interactive => prompt_organizer()?,
        None => Organizer::Unset,
    };

    // --- Link ---
    let link = match args.link {
        Some(l) => l,
        None if interactive => Input::new()
            .with_prompt("  Link (skip)")
            .default(String::new())
            .show_default(false)
            .interact_text()?,
        None => String::new(),
    };

    let event = store.add(NewEvent {
        name,
        start_date,
        end_date,
        location,
        organizer,
        link,
    });

    if interactive {
        println!();
    }
    println!(
        "{} {}",
        format!("  Added: {}", event).green(),
        format!("({}, pending)", format_event_dates(&event)).dimmed()
    );

    Ok(())
}

/// Prompt for a date until it parses.
fn prompt_date(prompt: &str) -> Result<NaiveDate> {
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse_date(&input) {
            Ok(date) => return Ok(date),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}

/// Prompt for a date that may be skipped with an empty answer.
fn prompt_optional_date(prompt: &str) -> Result<Option<NaiveDate>> {
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .default(String::new())
            .show_default(false)
            .interact_text()?;
        if input.trim().is_empty() {
            return Ok(None);
        }
        match parse_date(&input) {
            Ok(date) => return Ok(Some(date)),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}

fn prompt_organizer() -> Result<Organizer> {
    let mut options = vec![Organizer::Unset];
    options.extend(Organizer::ALL);

    let labels: Vec<&str> = options
        .iter()
        .map(|o| if o.is_set() { o.code() } else { "(none)" })
        .collect();

    let selection = Select::new()
        .with_prompt("  Organizer")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options.swap_remove(selection))
}
