//! Single owner of the planner's mutable state.
//!
//! Holds the event collection, the viewed day and the drag state machine,
//! and exposes the operations a host UI needs. The layout is recomputed on
//! demand from the current events and day, never cached.

use chrono::{Duration, NaiveDate};

use crate::models::event::{Event, EventDraft};
use crate::services::event::{EventStore, ScheduleError};
use crate::services::interaction::{DragMachine, Interaction, SelectionRect};
use crate::services::layout::{self, PositionedEvent};

pub struct ScheduleController {
    store: EventStore,
    selected_day: NaiveDate,
    drag: DragMachine,
}

impl ScheduleController {
    pub fn new(store: EventStore, selected_day: NaiveDate) -> Self {
        Self {
            store,
            selected_day,
            drag: DragMachine::new(),
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn selected_day(&self) -> NaiveDate {
        self.selected_day
    }

    pub fn event(&self, id: i64) -> Option<&Event> {
        self.store.get(id)
    }

    /// Layout of the viewed day
    pub fn positioned_events(&self) -> Vec<PositionedEvent> {
        layout::layout_day(self.store.all(), self.selected_day)
    }

    /// Widest overlap on the viewed day, at least one
    pub fn max_columns(&self) -> usize {
        layout::max_columns(&self.positioned_events())
    }

    pub fn pointer_down(&mut self, offset: f32) {
        self.drag.pointer_down(offset);
    }

    pub fn pointer_move(&mut self, offset: f32) {
        self.drag.pointer_move(offset);
    }

    pub fn pointer_up(&mut self) -> Interaction {
        self.drag.pointer_up(self.selected_day)
    }

    pub fn pointer_leave(&mut self) -> Interaction {
        self.drag.pointer_leave(self.selected_day)
    }

    pub fn click_event(&mut self, event_id: i64) -> Interaction {
        self.drag.click_event(event_id)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Abandon the current drag without publishing anything.
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    pub fn selection_rect(&self) -> Option<SelectionRect> {
        self.drag.selection_rect()
    }

    pub fn save(&mut self, draft: EventDraft) -> Result<Event, ScheduleError> {
        self.store.save(draft)
    }

    pub fn delete(&mut self, id: i64) -> bool {
        self.store.delete(id)
    }

    pub fn previous_day(&mut self) {
        self.go_to(self.selected_day - Duration::days(1));
    }

    pub fn next_day(&mut self) {
        self.go_to(self.selected_day + Duration::days(1));
    }

    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.go_to(today);
    }

    /// Switch the viewed day. Any drag in progress belongs to the old day and is dropped.
    pub fn go_to(&mut self, day: NaiveDate) {
        if day != self.selected_day {
            self.drag.cancel();
            self.selected_day = day;
            log::debug!("Viewing {}", day);
        }
    }
}
