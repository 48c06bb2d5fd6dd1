//! Calendar-date parsing shared by the store format and user input.

use chrono::{DateTime, NaiveDate};

use crate::error::{BoardError, BoardResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse YYYY-MM-DD, rejecting anything else.
pub fn parse_date(s: &str) -> BoardResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| BoardError::InvalidDate(s.to_string()))
}

/// Parse a stored date, returning `None` for empty or unreadable values.
///
/// Full RFC 3339 timestamps are accepted too and reduced to their date.
pub fn parse_date_lenient(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// Serde adapter for `Option<NaiveDate>` fields stored as date strings.
///
/// A missing date is written as `""`. Reading never fails on the value itself:
/// anything unparseable becomes `None`.
pub mod lenient {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{DATE_FORMAT, parse_date_lenient};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.collect_str(&d.format(DATE_FORMAT)),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse_date_lenient))
    }
}
