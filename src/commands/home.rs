use anyhow::Result;
use chrono::NaiveDate;
use eventboard_core::Event;
use eventboard_core::board_config::BoardConfig;
use eventboard_core::store::{EventSlot, EventStore};
use eventboard_core::views::DashboardBuckets;
use owo_colors::OwoColorize;

use crate::render::{CardStyle, render_card};

pub fn run<S: EventSlot>(store: &EventStore<S>, config: &BoardConfig, today: NaiveDate) -> Result<()> {
    let buckets = DashboardBuckets::build(store.snapshot(), today, config.upcoming_days);

    let heading = format!("Upcoming Events (Next {} days)", config.upcoming_days);
    print_section(&heading, &buckets.upcoming, "No upcoming events");

    println!();
    print_section("Pending Confirmation", &buckets.pending, "Nothing waiting for confirmation");

    Ok(())
}

fn print_section(heading: &str, events: &[&Event], empty_message: &str) {
    println!("{}", heading.bold().underline());

    if events.is_empty() {
        println!("{}", empty_message.dimmed());
        return;
    }

    for event in events {
        println!();
        println!("{}", render_card(event, CardStyle::Summary));
    }
}
