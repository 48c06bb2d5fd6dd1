//! The event record and its approval status.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::date;
use crate::error::BoardError;
use crate::organizer::Organizer;

/// A tracked event.
///
/// Serialized with camelCase keys; dates are `YYYY-MM-DD` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default = "fresh_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, with = "date::lenient")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "date::lenient")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub organizer: Organizer,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub status: EventStatus,
}

/// The user-supplied fields of an event, before it has an id.
#[derive(Debug, Clone, Default)]
pub struct NewEvent {
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub location: String,
    pub organizer: Organizer,
    pub link: String,
}

fn fresh_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl Event {
    /// Create a pending event with a fresh id.
    pub fn new(fields: NewEvent) -> Self {
        Event {
            id: fresh_id(),
            name: fields.name,
            start_date: fields.start_date,
            end_date: fields.end_date,
            location: fields.location,
            organizer: fields.organizer,
            link: fields.link,
            status: EventStatus::Pending,
        }
    }

    /// True when start and end fall on the same day.
    pub fn is_single_day(&self) -> bool {
        self.start_date == self.end_date
    }

    /// A copy of this event with a different status.
    pub fn with_status(&self, status: EventStatus) -> Self {
        Event {
            status,
            ..self.clone()
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "(untitled)")
        } else {
            write!(f, "{}", self.name)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl EventStatus {
    pub const ALL: [EventStatus; 3] = [
        EventStatus::Pending,
        EventStatus::Accepted,
        EventStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Pending => "pending",
            EventStatus::Accepted => "accepted",
            EventStatus::Rejected => "rejected",
        }
    }

    /// Statuses an event can be moved to from this one.
    pub fn transitions(self) -> impl Iterator<Item = EventStatus> {
        EventStatus::ALL.into_iter().filter(move |s| *s != self)
    }
}

impl fmt::Display for EventStatus {
    /// Capitalized label, e.g. "Accepted"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EventStatus::Pending => "Pending",
            EventStatus::Accepted => "Accepted",
            EventStatus::Rejected => "Rejected",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for EventStatus {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| BoardError::Serialization(format!("Unknown status '{}'", s)))
    }
}

impl<'de> Deserialize<'de> for EventStatus {
    /// Case-insensitive. Missing or unknown values read as `Pending`, so the
    /// event stays awaiting a decision.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default())
    }
}
