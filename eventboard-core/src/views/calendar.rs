//! Multi-week calendar grid keyed by organizer.
//!
//! The grid covers whole Monday-to-Sunday weeks. Each row is an organizer with
//! at least one event starting inside the window; each cell holds the first
//! event (in collection order) starting on that day for that organizer.
//! Multi-day events only show on their start day.

use std::collections::{HashMap, HashSet};
use std::fmt;

use chrono::{Datelike, Days, NaiveDate};

use crate::error::BoardError;
use crate::event::Event;
use crate::organizer::Organizer;

/// Number of weeks the calendar shows at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindowSize {
    #[default]
    OneWeek,
    FourWeeks,
    EightWeeks,
    Year,
}

impl WindowSize {
    pub const ALL: [WindowSize; 4] = [
        WindowSize::OneWeek,
        WindowSize::FourWeeks,
        WindowSize::EightWeeks,
        WindowSize::Year,
    ];

    pub fn weeks(&self) -> u32 {
        match self {
            WindowSize::OneWeek => 1,
            WindowSize::FourWeeks => 4,
            WindowSize::EightWeeks => 8,
            WindowSize::Year => 52,
        }
    }

    pub fn days(&self) -> u64 {
        u64::from(self.weeks()) * 7
    }
}

impl TryFrom<u32> for WindowSize {
    type Error = BoardError;

    fn try_from(weeks: u32) -> Result<Self, Self::Error> {
        WindowSize::ALL
            .into_iter()
            .find(|w| w.weeks() == weeks)
            .ok_or(BoardError::InvalidWindow(weeks))
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.weeks() {
            1 => write!(f, "1 Week"),
            n => write!(f, "{} Weeks", n),
        }
    }
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(NaiveDate::MIN)
}

/// Pull `reference` far enough in from the ends of the date range that every
/// day of its window is representable.
fn clamp_reference(reference: NaiveDate, window: WindowSize) -> NaiveDate {
    let earliest = NaiveDate::MIN
        .checked_add_days(Days::new(7))
        .unwrap_or(NaiveDate::MIN);
    let latest = NaiveDate::MAX
        .checked_sub_days(Days::new(window.days() + 7))
        .unwrap_or(NaiveDate::MAX);
    reference.clamp(earliest, latest)
}

/// Where the calendar is looking: a reference date and a window size.
///
/// Moving to the previous or next period shifts the reference date by the
/// window length. Changing the window size keeps the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    reference: NaiveDate,
    window: WindowSize,
}

impl CalendarCursor {
    pub fn new(reference: NaiveDate, window: WindowSize) -> Self {
        CalendarCursor { reference, window }
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    pub fn window(&self) -> WindowSize {
        self.window
    }

    pub fn previous(self) -> Self {
        self.shift(-1)
    }

    pub fn next(self) -> Self {
        self.shift(1)
    }

    /// Move by `periods` windows; negative moves back. Stops at the first or
    /// last window that fits in the representable date range.
    pub fn shift(self, periods: i64) -> Self {
        let days = Days::new(self.window.days().saturating_mul(periods.unsigned_abs()));
        let moved = if periods >= 0 {
            self.reference.checked_add_days(days).unwrap_or(NaiveDate::MAX)
        } else {
            self.reference.checked_sub_days(days).unwrap_or(NaiveDate::MIN)
        };

        CalendarCursor {
            reference: clamp_reference(moved, self.window),
            ..self
        }
    }

    pub fn with_window(self, window: WindowSize) -> Self {
        CalendarCursor { window, ..self }
    }

    pub fn grid<'a>(&self, events: &'a [Event]) -> CalendarGrid<'a> {
        CalendarGrid::build(events, self.reference, self.window)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct GridCell<'a> {
    event: &'a Event,
    /// Further events sharing this day and organizer
    hidden: usize,
}

/// A sparse (date, organizer) table over one calendar window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid<'a> {
    window: WindowSize,
    dates: Vec<NaiveDate>,
    organizers: Vec<Organizer>,
    cells: HashMap<(NaiveDate, Organizer), GridCell<'a>>,
}

impl<'a> CalendarGrid<'a> {
    pub fn build(events: &'a [Event], reference: NaiveDate, window: WindowSize) -> Self {
        let start = week_start(clamp_reference(reference, window));
        let dates: Vec<NaiveDate> = start.iter_days().take(window.days() as usize).collect();
        let in_window = |d: NaiveDate| {
            dates.first().is_some_and(|first| d >= *first)
                && dates.last().is_some_and(|last| d <= *last)
        };

        let mut seen = HashSet::new();
        let mut all_organizers = Vec::new();
        let mut cells: HashMap<(NaiveDate, Organizer), GridCell<'a>> = HashMap::new();

        for event in events {
            if seen.insert(&event.organizer) {
                all_organizers.push(&event.organizer);
            }

            let Some(day) = event.start_date.filter(|d| in_window(*d)) else {
                continue;
            };

            cells
                .entry((day, event.organizer.clone()))
                .and_modify(|cell| cell.hidden += 1)
                .or_insert(GridCell { event, hidden: 0 });
        }

        let active: HashSet<&Organizer> = cells.keys().map(|(_, organizer)| organizer).collect();
        let organizers: Vec<Organizer> = all_organizers
            .into_iter()
            .filter(|o| active.contains(o))
            .cloned()
            .collect();

        tracing::debug!(
            %start,
            weeks = window.weeks(),
            rows = organizers.len(),
            cells = cells.len(),
            "Built calendar grid"
        );

        CalendarGrid {
            window,
            dates,
            organizers,
            cells,
        }
    }

    pub fn window(&self) -> WindowSize {
        self.window
    }

    /// Every date in the window, Monday first.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Organizer rows, in first-seen collection order.
    pub fn organizers(&self) -> &[Organizer] {
        &self.organizers
    }

    pub fn cell(&self, date: NaiveDate, organizer: &Organizer) -> Option<&'a Event> {
        self.cells
            .get(&(date, organizer.clone()))
            .map(|cell| cell.event)
    }

    /// How many events on this day and organizer are not shown in the cell.
    pub fn hidden_count(&self, date: NaiveDate, organizer: &Organizer) -> usize {
        self.cells
            .get(&(date, organizer.clone()))
            .map(|cell| cell.hidden)
            .unwrap_or(0)
    }

    /// e.g. "11 Mar - 17 Mar 2024"
    pub fn period_label(&self) -> String {
        match (self.dates.first(), self.dates.last()) {
            (Some(first), Some(last)) => {
                format!("{} - {}", first.format("%d %b"), last.format("%d %b %Y"))
            }
            _ => String::new(),
        }
    }

    /// Column header for `date`: "Mon 11" for short windows, "11 Mar" for a year.
    pub fn column_label(&self, date: NaiveDate) -> String {
        if self.window == WindowSize::Year {
            date.format("%d %b").to_string()
        } else {
            date.format("%a %d").to_string()
        }
    }
}
