use anyhow::Result;
use eventboard_core::EventStatus;
use eventboard_core::store::{EventSlot, EventStore};
use owo_colors::OwoColorize;

use super::resolve_id;
use crate::render::Render;

/// The subcommand that moves an event to `status`.
pub fn command_for(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Accepted => "accept",
        EventStatus::Rejected => "reject",
        EventStatus::Pending => "reset",
    }
}

pub fn run<S: EventSlot>(store: &mut EventStore<S>, id: &str, status: EventStatus) -> Result<()> {
    let id = resolve_id(store, id)?;

    if store.get(&id).is_some_and(|e| e.status == status) {
        println!("{}", format!("Already {}", status.as_str()).dimmed());
        return Ok(());
    }

    let event = store.set_status(&id, status)?;
    println!("{} {}", event.to_string().bold(), event.status.render());

    Ok(())
}
