//! Durable slots the event store is mirrored to.

#[cfg(test)]
use std::cell::Cell;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::{BoardError, BoardResult};
use crate::event::Event;

/// A single key-value slot holding the whole event collection.
pub trait EventSlot {
    /// Read the stored collection. An empty slot yields an empty collection.
    fn load(&self) -> BoardResult<Vec<Event>>;

    /// Overwrite the stored collection.
    fn save(&self, events: &[Event]) -> BoardResult<()>;
}

/// Slot backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSlot {
    path: PathBuf,
}

impl JsonFileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileSlot { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Move an unreadable file out of the way so the next save cannot
    /// overwrite it. Returns where it went.
    fn set_aside(&self) -> std::io::Result<PathBuf> {
        let mut backup = self.path.clone().into_os_string();
        backup.push(format!(".corrupt-{}", Utc::now().format("%Y%m%dT%H%M%S")));
        let backup = PathBuf::from(backup);

        std::fs::rename(&self.path, &backup)?;
        Ok(backup)
    }
}

impl EventSlot for JsonFileSlot {
    fn load(&self) -> BoardResult<Vec<Event>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            match self.set_aside() {
                Ok(backup) => tracing::warn!(
                    "Unreadable events file moved to {}",
                    backup.display()
                ),
                Err(io) => tracing::warn!(
                    "Could not move unreadable events file {}: {io}",
                    self.path.display()
                ),
            }
            BoardError::from(e)
        })
    }

    fn save(&self, events: &[Event]) -> BoardResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut temp = self.path.clone().into_os_string();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);

        let content = serde_json::to_string_pretty(events)?;

        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

/// Slot that lives only as long as the process, for callers that do not want
/// anything on disk. Holds the serialized form so loads go through the same
/// decoding as the file slot.
#[derive(Debug, Default)]
pub struct MemorySlot {
    content: RefCell<Option<String>>,
    #[cfg(test)]
    fail_saves: Cell<bool>,
    #[cfg(test)]
    saves: Cell<usize>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with raw stored content.
    pub fn with_content(content: impl Into<String>) -> Self {
        MemorySlot {
            content: RefCell::new(Some(content.into())),
            ..Self::default()
        }
    }

    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }

    /// Make every following save fail.
    #[cfg(test)]
    pub(crate) fn fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// Number of successful saves so far.
    #[cfg(test)]
    pub(crate) fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl EventSlot for MemorySlot {
    fn load(&self) -> BoardResult<Vec<Event>> {
        match self.content.borrow().as_deref() {
            Some(content) => Ok(serde_json::from_str(content)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, events: &[Event]) -> BoardResult<()> {
        #[cfg(test)]
        if self.fail_saves.get() {
            return Err(BoardError::Io(std::io::Error::other("slot is read-only")));
        }

        *self.content.borrow_mut() = Some(serde_json::to_string(events)?);
        #[cfg(test)]
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

impl<S: EventSlot + ?Sized> EventSlot for &S {
    fn load(&self) -> BoardResult<Vec<Event>> {
        (**self).load()
    }

    fn save(&self, events: &[Event]) -> BoardResult<()> {
        (**self).save(events)
    }
}
