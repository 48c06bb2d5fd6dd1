//! Derived views over an event snapshot.
//!
//! Everything here is a pure function of the snapshot and its parameters:
//! - `dashboard` splits events into upcoming and pending buckets
//! - `list` filters and sorts events for the list view
//! - `calendar` lays events out on a week grid keyed by organizer

pub mod calendar;
pub mod dashboard;
pub mod list;

pub use calendar::{CalendarCursor, CalendarGrid, WindowSize};
pub use dashboard::DashboardBuckets;
pub use list::EventFilter;

use std::cmp::Ordering;

use crate::event::Event;

/// Stable sort by start date, events without a start date last.
pub(crate) fn sort_by_start_date(events: &mut [&Event]) {
    events.sort_by(|a, b| match (a.start_date, b.start_date) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::event::EventStatus;
    use crate::organizer::Organizer;

    #[test]
    fn test_sort_is_stable_and_puts_undated_last() {
        let events = [
            event("undated", "", Organizer::Sbf, EventStatus::Pending),
            event("late", "2024-05-02", Organizer::Sbf, EventStatus::Pending),
            event("early-a", "2024-05-01", Organizer::Sbf, EventStatus::Pending),
            event("early-b", "2024-05-01", Organizer::Scs, EventStatus::Pending),
        ];

        let mut refs: Vec<&Event> = events.iter().collect();
        sort_by_start_date(&mut refs);

        assert_eq!(ids(&refs), vec!["early-a", "early-b", "late", "undated"]);
    }
}
