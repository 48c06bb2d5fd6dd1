use anyhow::Result;
use eventboard_core::store::{EventSlot, EventStore};
use eventboard_core::views::CalendarCursor;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run<S: EventSlot>(store: &EventStore<S>, cursor: CalendarCursor) -> Result<()> {
    let grid = cursor.grid(store.snapshot());

    println!("{}", grid.render());
    println!();
    println!(
        "{}",
        format!(
            "{} view. Use --offset -1 / --offset 1 for the previous / next period.",
            cursor.window()
        )
        .dimmed()
    );

    Ok(())
}
