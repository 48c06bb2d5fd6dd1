use anyhow::Result;
use eventboard_core::store::{EventSlot, EventStore};
use eventboard_core::views::EventFilter;
use owo_colors::OwoColorize;

use crate::render::{CardStyle, render_card};

pub fn run<S: EventSlot>(store: &EventStore<S>, filter: &EventFilter) -> Result<()> {
    let events = filter.apply(store.snapshot());

    if events.is_empty() {
        let message = if filter.is_empty() {
            "No events yet. Add one with: eventboard add"
        } else {
            "No events match these filters"
        };
        println!("{}", message.dimmed());
        return Ok(());
    }

    for (i, event) in events.iter().enumerate() {
        println!("{}", render_card(event, CardStyle::Full));

        if i < events.len() - 1 {
            println!();
        }
    }

    let total = store.snapshot().len();
    if events.len() < total {
        println!("\n{}", format!("Showing {} of {} events", events.len(), total).dimmed());
    }

    Ok(())
}
