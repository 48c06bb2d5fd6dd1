//! Terminal rendering for eventboard types.
//!
//! Extension traits adding colored output to eventboard-core types using
//! owo_colors.

use chrono::NaiveDate;
use eventboard_core::views::CalendarGrid;
use eventboard_core::{Event, EventStatus, Organizer};
use owo_colors::OwoColorize;

/// Width of one day column in the calendar grid
const CELL_WIDTH: usize = 12;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventStatus {
    fn render(&self) -> String {
        let label = self.to_string();
        match self {
            EventStatus::Accepted => label.green().to_string(),
            EventStatus::Rejected => label.red().to_string(),
            EventStatus::Pending => label.yellow().to_string(),
        }
    }
}

impl Render for Organizer {
    fn render(&self) -> String {
        if self.is_set() {
            self.code().to_string()
        } else {
            "(none)".dimmed().to_string()
        }
    }
}

/// How much of an event a card shows.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    /// Dashboard card: no id or link
    Summary,
    /// List and detail card: id and link included
    Full,
}

/// Render an event as an indented block of labelled lines.
pub fn render_card(event: &Event, style: CardStyle) -> String {
    let mut lines = Vec::new();

    let title = event.to_string();
    if style == CardStyle::Full {
        lines.push(format!("{} {}", title.bold(), format!("[{}]", short_id(&event.id)).dimmed()));
    } else {
        lines.push(title.bold().to_string());
    }

    lines.push(format!("  {} {}", "Date:     ".dimmed(), format_event_dates(event)));
    lines.push(format!("  {} {}", "Location: ".dimmed(), event.location));
    lines.push(format!("  {} {}", "Organizer:".dimmed(), event.organizer.render()));
    if style == CardStyle::Full {
        lines.push(format!("  {} {}", "Link:     ".dimmed(), event.link.underline()));
    }
    lines.push(format!("  {} {}", "Status:   ".dimmed(), event.status.render()));

    lines.join("\n")
}

/// First eight characters of an id, enough to address an event on the CLI.
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

/// "10 January 2024", or "10 January" without the year
pub fn format_date(date: NaiveDate, include_year: bool) -> String {
    if include_year {
        date.format("%-d %B %Y").to_string()
    } else {
        date.format("%-d %B").to_string()
    }
}

/// "10 January 2024" for single-day events, "10 January to 12 January 2024"
/// for ranges.
pub fn format_event_dates(event: &Event) -> String {
    match (event.start_date, event.end_date) {
        (Some(start), Some(end)) if !event.is_single_day() => {
            format!("{} to {}", format_date(start, false), format_date(end, true))
        }
        (Some(start), _) => format_date(start, true),
        (None, Some(end)) => format!("? to {}", format_date(end, true)),
        (None, None) => "(no date)".to_string(),
    }
}

/// Cut `text` to `width` characters, marking the cut with "…".
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Plain text of a calendar cell, before padding and color.
fn cell_text(name: &str, hidden: usize) -> String {
    if hidden == 0 {
        return truncate(name, CELL_WIDTH);
    }
    let marker = format!(" +{}", hidden);
    let room = CELL_WIDTH.saturating_sub(marker.chars().count());
    format!("{}{}", truncate(name, room), marker)
}

fn colorize_by_status(status: EventStatus, text: &str) -> String {
    match status {
        EventStatus::Accepted => text.green().to_string(),
        EventStatus::Rejected => text.red().to_string(),
        EventStatus::Pending => text.yellow().to_string(),
    }
}

impl Render for CalendarGrid<'_> {
    fn render(&self) -> String {
        let label_width = self
            .organizers()
            .iter()
            .map(|o| o.code().len())
            .chain(std::iter::once("Organizer".len()))
            .max()
            .unwrap_or(0);

        let mut lines = Vec::new();
        lines.push(self.period_label().bold().to_string());

        let mut header = format!("{:<label_width$}", "Organizer");
        for date in self.dates() {
            header.push_str(&format!(" {:<CELL_WIDTH$}", self.column_label(*date)));
        }
        lines.push(header.dimmed().to_string());

        if self.organizers().is_empty() {
            lines.push("No events in this period".dimmed().to_string());
        }

        for organizer in self.organizers() {
            let code = if organizer.is_set() { organizer.code() } else { "-" };
            let mut row = format!("{:<label_width$}", code);

            for date in self.dates() {
                row.push(' ');
                match self.cell(*date, organizer) {
                    Some(event) => {
                        let text = cell_text(&event.to_string(), self.hidden_count(*date, organizer));
                        let padded = format!("{:<CELL_WIDTH$}", text);
                        row.push_str(&colorize_by_status(event.status, &padded));
                    }
                    None => row.push_str(&" ".repeat(CELL_WIDTH)),
                }
            }

            lines.push(row.trim_end().to_string());
        }

        lines.join("\n")
    }
}
