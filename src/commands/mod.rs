pub mod add;
pub mod calendar;
pub mod config;
pub mod home;
pub mod list;
pub mod organizers;
pub mod remove;
pub mod show;
pub mod status;

use anyhow::Result;
use chrono::NaiveDate;
use eventboard_core::store::{EventSlot, EventStore};
use eventboard_core::{Event, Organizer};

/// Find an event by full id or by an unambiguous id prefix.
pub fn resolve_id<S: EventSlot>(store: &EventStore<S>, id: &str) -> Result<String> {
    if let Some(event) = store.get(id) {
        return Ok(event.id.clone());
    }

    let matches: Vec<&Event> = store
        .snapshot()
        .iter()
        .filter(|e| !id.is_empty() && e.id.starts_with(id))
        .collect();

    match matches.as_slice() {
        [event] => Ok(event.id.clone()),
        [] => anyhow::bail!("No event with id '{}'", id),
        _ => anyhow::bail!(
            "Id '{}' matches {} events. Use more characters.",
            id,
            matches.len()
        ),
    }
}

/// Parse an optional YYYY-MM-DD argument.
pub fn parse_date_arg(value: Option<&str>) -> Result<Option<NaiveDate>> {
    value
        .map(|s| eventboard_core::date::parse_date(s).map_err(anyhow::Error::from))
        .transpose()
}

/// Parse an optional organizer code, listing the valid codes on failure.
pub fn parse_organizer_arg(value: Option<&str>) -> Result<Option<Organizer>> {
    let Some(code) = value else {
        return Ok(None);
    };

    code.parse::<Organizer>().map(Some).map_err(|e| {
        let codes: Vec<String> = Organizer::ALL.iter().map(|o| o.code().to_string()).collect();
        anyhow::anyhow!("{}. Available: {}", e, codes.join(", "))
    })
}
