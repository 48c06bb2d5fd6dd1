//! Core types for eventboard.
//!
//! - `event` and `organizer`: the event record and its closed organizer set
//! - `store`: the in-memory collection, mirrored to a persistent slot
//! - `views`: pure derivations for the dashboard, list and calendar
//! - `board`: loading the config file and opening the configured store

pub mod board;
pub mod board_config;
pub mod date;
pub mod error;
pub mod event;
pub mod organizer;
pub mod store;
pub mod views;

pub use event::{Event, EventStatus, NewEvent};
pub use organizer::Organizer;
