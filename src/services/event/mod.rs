//! In-memory event collection.
//!
//! Owns every event of the session and applies the save/delete intents
//! coming back from the edit surface. Nothing is persisted.

mod samples;

use crate::models::event::{Event, EventDraft};
use chrono::NaiveDate;

pub use samples::sample_events;

/// Reasons a save intent is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("Event end time must be after start time")]
    InvalidRange,
    #[error("Event with id {0} not found")]
    NotFound(i64),
}

/// Event collection with monotonically increasing ids.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
    next_id: i64,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Store pre-populated with existing events.
    ///
    /// The id counter starts past the largest id present, so ids handed out
    /// later never collide with these.
    pub fn from_events(events: Vec<Event>) -> Self {
        let next_id = events.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self { events, next_id }
    }

    /// Store seeded with the example schedule on `day`.
    pub fn with_sample_events(day: NaiveDate) -> Self {
        Self::from_events(sample_events(day))
    }

    /// Events in insertion order
    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: i64) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Apply a save intent: create when the draft has no id, update otherwise.
    ///
    /// Blank titles are replaced with the default label. A range whose end
    /// does not come after its start is refused.
    pub fn save(&mut self, draft: EventDraft) -> Result<Event, ScheduleError> {
        if draft.end <= draft.start {
            log::warn!(
                "Rejecting save for {:?}: end {} is not after start {}",
                draft.id,
                draft.end,
                draft.start
            );
            return Err(ScheduleError::InvalidRange);
        }

        match draft.id {
            Some(id) => {
                let slot = self
                    .events
                    .iter_mut()
                    .find(|event| event.id == id)
                    .ok_or(ScheduleError::NotFound(id))?;
                *slot = draft.into_event(id);
                log::info!("Updated event {} '{}'", id, slot.title);
                Ok(slot.clone())
            }
            None => {
                let id = self.allocate_id();
                let event = draft.into_event(id);
                log::info!("Created event {} '{}'", id, event.title);
                self.events.push(event.clone());
                Ok(event)
            }
        }
    }

    /// Remove an event. Returns whether anything was removed.
    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);
        let removed = self.events.len() != before;
        if removed {
            log::info!("Deleted event {}", id);
        } else {
            log::debug!("Delete ignored, no event with id {}", id);
        }
        removed
    }

    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        id
    }
}
