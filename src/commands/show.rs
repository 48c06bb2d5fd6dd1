use anyhow::Result;
use eventboard_core::store::{EventSlot, EventStore};
use owo_colors::OwoColorize;

use super::resolve_id;
use super::status::command_for;
use crate::render::{CardStyle, render_card, short_id};

pub fn run<S: EventSlot>(store: &EventStore<S>, id: &str) -> Result<()> {
    let id = resolve_id(store, id)?;
    let Some(event) = store.get(&id) else {
        anyhow::bail!("No event with id '{}'", id);
    };

    println!("{}", render_card(event, CardStyle::Full));
    println!("  {} {}", "Id:       ".dimmed(), event.id);

    println!();
    println!("{}", "Actions:".dimmed());
    for status in event.status.transitions() {
        println!("  eventboard {} {}", command_for(status), short_id(&event.id));
    }
    println!("  eventboard remove {}", short_id(&event.id));

    Ok(())
}
