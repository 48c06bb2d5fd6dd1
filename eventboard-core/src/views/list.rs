//! Filtered, date-sorted event list.

use chrono::NaiveDate;

use crate::event::Event;
use crate::organizer::Organizer;
use crate::views::sort_by_start_date;

/// Constraints for the event list. `None` means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Keep events starting on or after this date
    pub start_date: Option<NaiveDate>,
    /// Keep events ending on or before this date
    pub end_date: Option<NaiveDate>,
    pub organizer: Option<Organizer>,
}

impl EventFilter {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none() && self.organizer.is_none()
    }

    /// An event missing the date a constraint compares against never matches it.
    pub fn matches(&self, event: &Event) -> bool {
        let after_start = match self.start_date {
            Some(from) => event.start_date.is_some_and(|d| d >= from),
            None => true,
        };

        let before_end = match self.end_date {
            Some(to) => event.end_date.is_some_and(|d| d <= to),
            None => true,
        };

        let same_organizer = self.organizer.as_ref().is_none_or(|o| event.organizer == *o);

        after_start && before_end && same_organizer
    }

    /// Matching events sorted by start date.
    pub fn apply<'a>(&self, events: &'a [Event]) -> Vec<&'a Event> {
        let mut matched: Vec<&Event> = events.iter().filter(|e| self.matches(e)).collect();
        sort_by_start_date(&mut matched);

        tracing::debug!(total = events.len(), matched = matched.len(), "Filtered events");
        matched
    }
}
