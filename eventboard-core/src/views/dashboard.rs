//! Home dashboard buckets.

use chrono::{Duration, NaiveDate};

use crate::event::{Event, EventStatus};
use crate::views::sort_by_start_date;

/// How far ahead the upcoming bucket looks by default.
pub const DEFAULT_UPCOMING_DAYS: i64 = 14;

/// Events split for the home dashboard.
///
/// `upcoming` holds decided (non-pending) events starting on or before the
/// horizon. There is no lower bound, so decided events in the past stay in
/// it. `pending` holds every pending event regardless of date. No event is
/// in both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardBuckets<'a> {
    pub upcoming: Vec<&'a Event>,
    pub pending: Vec<&'a Event>,
}

impl<'a> DashboardBuckets<'a> {
    pub fn build(events: &'a [Event], today: NaiveDate, horizon_days: i64) -> Self {
        let horizon = today
            .checked_add_signed(Duration::days(horizon_days))
            .unwrap_or(NaiveDate::MAX);

        let mut upcoming: Vec<&Event> = events
            .iter()
            .filter(|e| e.status != EventStatus::Pending)
            .filter(|e| e.start_date.is_some_and(|d| d <= horizon))
            .collect();
        sort_by_start_date(&mut upcoming);

        let mut pending: Vec<&Event> = events
            .iter()
            .filter(|e| e.status == EventStatus::Pending)
            .collect();
        sort_by_start_date(&mut pending);

        tracing::debug!(
            upcoming = upcoming.len(),
            pending = pending.len(),
            %horizon,
            "Built dashboard"
        );

        DashboardBuckets { upcoming, pending }
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::organizer::Organizer;
    use crate::views::fixtures::*;

    #[test]
    fn test_accepted_event_inside_horizon_is_upcoming() {
        let events = [event("1", "2024-01-10", Organizer::Sbf, EventStatus::Accepted)];
        let buckets = DashboardBuckets::build(&events, ymd(2024, 1, 5), DEFAULT_UPCOMING_DAYS);

        assert_eq!(ids(&buckets.upcoming), vec!["1"]);
        assert!(buckets.pending.is_empty());
    }

    #[test]
    fn test_pending_event_is_pending_whatever_the_date() {
        let events = [event("2", "2024-06-01", Organizer::Unset, EventStatus::Pending)];

        for today in [ymd(2020, 1, 1), ymd(2024, 6, 1), ymd(2030, 1, 1)] {
            let buckets = DashboardBuckets::build(&events, today, DEFAULT_UPCOMING_DAYS);
            assert!(buckets.upcoming.is_empty());
            assert_eq!(ids(&buckets.pending), vec!["2"]);
        }
    }

    #[test]
    fn test_horizon_is_inclusive() {
        let events = [
            event("edge", "2024-01-15", Organizer::Sbf, EventStatus::Rejected),
            event("beyond", "2024-01-16", Organizer::Sbf, EventStatus::Accepted),
        ];
        let buckets = DashboardBuckets::build(&events, ymd(2024, 1, 1), DEFAULT_UPCOMING_DAYS);

        assert_eq!(ids(&buckets.upcoming), vec!["edge"]);
    }

    #[test]
    fn test_past_decided_events_stay_upcoming() {
        let events = [event("old", "2019-03-01", Organizer::Scs, EventStatus::Accepted)];
        let buckets = DashboardBuckets::build(&events, ymd(2024, 1, 1), DEFAULT_UPCOMING_DAYS);

        assert_eq!(ids(&buckets.upcoming), vec!["old"]);
    }

    #[test]
    fn test_buckets_are_sorted_by_start_date() {
        let events = [
            event("c", "2024-01-09", Organizer::Sbf, EventStatus::Accepted),
            event("p2", "2024-02-01", Organizer::Sbf, EventStatus::Pending),
            event("a", "2024-01-02", Organizer::Scs, EventStatus::Rejected),
            event("p1", "2024-01-20", Organizer::Scs, EventStatus::Pending),
            event("b", "2024-01-05", Organizer::Smf, EventStatus::Accepted),
        ];
        let buckets = DashboardBuckets::build(&events, ymd(2024, 1, 1), DEFAULT_UPCOMING_DAYS);

        assert_eq!(ids(&buckets.upcoming), vec!["a", "b", "c"]);
        assert_eq!(ids(&buckets.pending), vec!["p1", "p2"]);
    }

    #[test]
    fn test_undated_events() {
        let events = [
            event("decided", "", Organizer::Sbf, EventStatus::Accepted),
            event("waiting", "nope", Organizer::Sbf, EventStatus::Pending),
            event("dated", "2024-01-03", Organizer::Sbf, EventStatus::Pending),
        ];
        let buckets = DashboardBuckets::build(&events, ymd(2024, 1, 1), DEFAULT_UPCOMING_DAYS);

        assert!(buckets.upcoming.is_empty());
        assert_eq!(ids(&buckets.pending), vec!["dated", "waiting"]);
    }

    #[test]
    fn test_no_event_lands_in_both_buckets() {
        let events = [
            event("1", "2024-01-02", Organizer::Sbf, EventStatus::Accepted),
            event("2", "2024-01-03", Organizer::Sbf, EventStatus::Pending),
            event("3", "2024-03-03", Organizer::Scs, EventStatus::Rejected),
            event("4", "", Organizer::Scs, EventStatus::Pending),
        ];
        let buckets = DashboardBuckets::build(&events, ymd(2024, 1, 1), DEFAULT_UPCOMING_DAYS);

        for e in &events {
            let in_upcoming = buckets.upcoming.iter().any(|u| u.id == e.id);
            let in_pending = buckets.pending.iter().any(|p| p.id == e.id);
            assert!(!(in_upcoming && in_pending), "{} is in both buckets", e.id);
        }
    }

    #[test]
    fn test_empty_and_idempotent() {
        let buckets = DashboardBuckets::build(&[], ymd(2024, 1, 1), DEFAULT_UPCOMING_DAYS);
        assert!(buckets.is_empty());

        let events = [
            event("1", "2024-01-02", Organizer::Sbf, EventStatus::Accepted),
            event("2", "2024-01-03", Organizer::Sbf, EventStatus::Pending),
        ];
        let first = DashboardBuckets::build(&events, ymd(2024, 1, 1), DEFAULT_UPCOMING_DAYS);
        let second = DashboardBuckets::build(&events, ymd(2024, 1, 1), DEFAULT_UPCOMING_DAYS);
        assert_eq!(first, second);
    }
}
