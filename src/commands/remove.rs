use anyhow::Result;
use dialoguer::Confirm;
use eventboard_core::store::{EventSlot, EventStore};
use owo_colors::OwoColorize;

use super::resolve_id;
use crate::render::{CardStyle, render_card};

pub fn run<S: EventSlot>(store: &mut EventStore<S>, id: &str, force: bool) -> Result<()> {
    let id = resolve_id(store, id)?;

    if !force {
        if let Some(event) = store.get(&id) {
            println!("{}", render_card(event, CardStyle::Full));
            println!();
        }

        let confirmed = Confirm::new()
            .with_prompt("Remove this event?")
            .default(false)
            .interact()?;

        if !confirmed {
            return Ok(());
        }
    }

    let removed = store.remove(&id)?;
    println!("{}", format!("Removed: {}", removed).red());

    Ok(())
}
