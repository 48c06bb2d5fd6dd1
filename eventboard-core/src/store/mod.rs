//! The in-memory event collection and its write-through persistence.

mod slot;

pub use slot::{EventSlot, JsonFileSlot, MemorySlot};

use crate::error::{BoardError, BoardResult};
use crate::event::{Event, EventStatus, NewEvent};

/// Owns the current event collection.
///
/// Every mutation builds a new collection, swaps it in whole, and writes it to
/// the slot. Views borrow the collection through [`EventStore::snapshot`].
pub struct EventStore<S: EventSlot> {
    slot: S,
    events: Vec<Event>,
}

impl<S: EventSlot> EventStore<S> {
    /// Load the collection from `slot`. Unreadable content yields an empty store.
    pub fn load(slot: S) -> Self {
        let events = match slot.load() {
            Ok(events) => events,
            Err(e) => {
                tracing::warn!("Could not read stored events, starting empty: {e}");
                Vec::new()
            }
        };

        tracing::debug!(count = events.len(), "Loaded events");
        EventStore { slot, events }
    }

    pub fn snapshot(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Replace the whole collection and persist it.
    ///
    /// A failed save is logged; the in-memory collection keeps the new value.
    pub fn replace(&mut self, events: Vec<Event>) {
        self.events = events;

        if let Err(e) = self.slot.save(&self.events) {
            tracing::warn!("Could not save events: {e}");
        } else {
            tracing::debug!(count = self.events.len(), "Saved events");
        }
    }

    /// Append a new pending event and return it.
    pub fn add(&mut self, fields: NewEvent) -> Event {
        let event = Event::new(fields);

        let mut events = self.events.clone();
        events.push(event.clone());
        self.replace(events);

        tracing::info!(id = %event.id, "Added event");
        event
    }

    /// Remove the event with `id` and return it.
    pub fn remove(&mut self, id: &str) -> BoardResult<Event> {
        let removed = self
            .get(id)
            .cloned()
            .ok_or_else(|| BoardError::EventNotFound(id.to_string()))?;

        let events = self.events.iter().filter(|e| e.id != id).cloned().collect();
        self.replace(events);

        tracing::info!(id, "Removed event");
        Ok(removed)
    }

    /// Change the status of the event with `id` and return the updated event.
    pub fn set_status(&mut self, id: &str, status: EventStatus) -> BoardResult<Event> {
        if self.get(id).is_none() {
            return Err(BoardError::EventNotFound(id.to_string()));
        }

        let events: Vec<Event> = self
            .events
            .iter()
            .map(|e| if e.id == id { e.with_status(status) } else { e.clone() })
            .collect();
        self.replace(events);

        tracing::info!(id, status = status.as_str(), "Changed event status");
        self.get(id)
            .cloned()
            .ok_or_else(|| BoardError::EventNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::organizer::Organizer;

    fn fields(name: &str) -> NewEvent {
        NewEvent {
            name: name.to_string(),
            organizer: Organizer::Sbf,
            ..Default::default()
        }
    }

    #[test]
    fn test_load_empty_slot() {
        let slot = MemorySlot::new();
        let store = EventStore::load(&slot);
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_load_corrupt_slot_degrades_to_empty() {
        let slot = MemorySlot::with_content("[{\"id\": 1");
        let store = EventStore::load(&slot);
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_unlisted_organizer_codes_survive_load_and_save() {
        let slot = MemorySlot::with_content(
            r#"[
                {"id":"a","name":"Known","organizer":"SBF","status":"accepted"},
                {"id":"b","name":"Unlisted","organizer":"ACME","status":"pending"}
            ]"#,
        );
        let mut store = EventStore::load(&slot);
        assert_eq!(store.snapshot().len(), 2);

        store.add(fields("New"));

        let saved = slot.content().unwrap();
        let reloaded: Vec<Event> = serde_json::from_str(&saved).unwrap();
        assert_eq!(reloaded.len(), 3);
        assert_eq!(reloaded[1].organizer, Organizer::Other("ACME".to_string()));
        assert!(saved.contains("\"ACME\""));
    }

    #[test]
    fn test_corrupt_file_is_kept_when_store_saves() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, "[{\"id\": 1").unwrap();

        let mut store = EventStore::load(JsonFileSlot::new(&path));
        assert!(store.snapshot().is_empty());
        let added = store.add(fields("After"));

        let backup = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .find(|p| p.to_string_lossy().contains(".corrupt"))
            .expect("unreadable file should be set aside");
        assert_eq!(std::fs::read_to_string(backup).unwrap(), "[{\"id\": 1");

        let reloaded = EventStore::load(JsonFileSlot::new(&path));
        assert_eq!(reloaded.snapshot(), &[added]);
    }

    #[test]
    fn test_every_mutation_saves() {
        let slot = MemorySlot::new();
        let mut store = EventStore::load(&slot);

        let event = store.add(fields("Gala"));
        assert_eq!(slot.save_count(), 1);

        store.set_status(&event.id, EventStatus::Accepted).unwrap();
        assert_eq!(slot.save_count(), 2);

        store.remove(&event.id).unwrap();
        assert_eq!(slot.save_count(), 3);
        assert_eq!(slot.content().as_deref(), Some("[]"));
    }

    #[test]
    fn test_add_then_reload() {
        let slot = MemorySlot::new();
        let mut store = EventStore::load(&slot);
        let added = store.add(fields("Forum"));
        assert_eq!(added.status, EventStatus::Pending);

        let reloaded = EventStore::load(&slot);
        assert_eq!(reloaded.snapshot(), &[added]);
    }

    #[test]
    fn test_set_status_only_touches_target() {
        let slot = MemorySlot::new();
        let mut store = EventStore::load(&slot);
        let a = store.add(fields("A"));
        let b = store.add(fields("B"));

        let updated = store.set_status(&b.id, EventStatus::Rejected).unwrap();
        assert_eq!(updated.status, EventStatus::Rejected);
        assert_eq!(store.get(&a.id).unwrap().status, EventStatus::Pending);

        let order: Vec<_> = store.snapshot().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(order, vec!["A", "B"]);
    }

    #[test]
    fn test_unknown_id() {
        let slot = MemorySlot::new();
        let mut store = EventStore::load(&slot);
        store.add(fields("A"));

        assert!(matches!(store.remove("missing"), Err(BoardError::EventNotFound(_))));
        assert!(matches!(
            store.set_status("missing", EventStatus::Accepted),
            Err(BoardError::EventNotFound(_))
        ));
        assert_eq!(store.snapshot().len(), 1);
        assert_eq!(slot.save_count(), 1);
    }

    #[test]
    fn test_failed_save_keeps_new_collection() {
        let slot = MemorySlot::new();
        let mut store = EventStore::load(&slot);
        slot.fail_saves(true);

        store.add(fields("Offline"));
        assert_eq!(store.snapshot().len(), 1);
        assert_eq!(slot.content(), None);
    }
}
