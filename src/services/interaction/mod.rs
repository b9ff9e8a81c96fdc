// Drag-to-create interaction
//
// Turns pointer activity on the timeline into one of three outcomes:
// - a candidate time range for a new event (drag on empty space)
// - an edit request for an existing event (click on its block)
// - nothing (pointer released with no session, or a session already consumed)

use chrono::NaiveDate;
use std::mem;

use crate::models::time_range::TimeRange;

/// Pointer state recorded between press and release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Offset in pixels from the timeline top where the press happened
    pub anchor_offset: f32,
    /// Latest offset reported while dragging
    pub current_offset: f32,
    /// Set when the press landed on an existing event; release then skips the range
    pub suppressed_by_click: bool,
    /// The event that was clicked, published on release
    pub clicked_event: Option<i64>,
}

impl DragSession {
    pub fn new(offset: f32) -> Self {
        Self {
            anchor_offset: offset,
            current_offset: offset,
            suppressed_by_click: false,
            clicked_event: None,
        }
    }

    /// Live selection rectangle for the session.
    pub fn selection_rect(&self) -> SelectionRect {
        SelectionRect {
            top: self.anchor_offset.min(self.current_offset),
            height: (self.current_offset - self.anchor_offset).abs(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// What the host should do after a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    Nothing,
    /// Open the edit surface for a new event covering this range
    CreateRange(TimeRange),
    /// Open the edit surface for the event with this id
    EditEvent(i64),
}

/// Vertical extent of the drag highlight, in timeline pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionRect {
    pub top: f32,
    pub height: f32,
}

/// State machine driven by one pointer over one timeline.
#[derive(Clone, Debug, Default)]
pub struct DragMachine {
    state: InteractionState,
}

impl DragMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            InteractionState::Dragging(session) => Some(session),
            InteractionState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, InteractionState::Dragging(_))
    }

    /// Start a session at `offset`.
    ///
    /// A press while already dragging re-anchors: with a single pointer the
    /// previous release must have been missed.
    pub fn pointer_down(&mut self, offset: f32) {
        if self.is_dragging() {
            log::debug!("Pointer down while dragging, re-anchoring at {offset}");
        } else {
            log::debug!("Drag started at {offset}");
        }
        self.state = InteractionState::Dragging(DragSession::new(offset));
    }

    /// Track the pointer. Ignored unless a session is active.
    pub fn pointer_move(&mut self, offset: f32) {
        if let InteractionState::Dragging(session) = &mut self.state {
            session.current_offset = offset;
        }
    }

    /// Report a click on an existing event.
    ///
    /// During a session the click only marks it as suppressed, and the edit
    /// request comes out of the release. Without a session (a tap the
    /// timeline never saw pressed) the edit request is returned right away.
    pub fn click_event(&mut self, event_id: i64) -> Interaction {
        match &mut self.state {
            InteractionState::Dragging(session) => {
                log::debug!("Click on event {event_id} suppresses drag commit");
                session.suppressed_by_click = true;
                session.clicked_event = Some(event_id);
                Interaction::Nothing
            }
            InteractionState::Idle => Interaction::EditEvent(event_id),
        }
    }

    pub fn pointer_up(&mut self, day: NaiveDate) -> Interaction {
        self.release(day)
    }

    /// Leaving the timeline ends the session exactly like a release.
    pub fn pointer_leave(&mut self, day: NaiveDate) -> Interaction {
        self.release(day)
    }

    /// Drop the session without publishing anything.
    pub fn cancel(&mut self) {
        self.state = InteractionState::Idle;
    }

    pub fn selection_rect(&self) -> Option<SelectionRect> {
        self.session().map(DragSession::selection_rect)
    }

    fn release(&mut self, day: NaiveDate) -> Interaction {
        let InteractionState::Dragging(session) = mem::take(&mut self.state) else {
            return Interaction::Nothing;
        };

        if session.suppressed_by_click {
            return session
                .clicked_event
                .map_or(Interaction::Nothing, Interaction::EditEvent);
        }

        let range = TimeRange::from_offsets(day, session.anchor_offset, session.current_offset);
        log::debug!("Drag committed: {} - {}", range.start, range.end);
        Interaction::CreateRange(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 20).unwrap()
    }

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        day().and_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_starts_idle() {
        let machine = DragMachine::new();
        assert_eq!(machine.state(), &InteractionState::Idle);
        assert!(machine.selection_rect().is_none());
    }

    #[test]
    fn test_drag_publishes_range() {
        let mut machine = DragMachine::new();
        machine.pointer_down(540.0);
        machine.pointer_move(550.0);
        machine.pointer_move(560.0);

        let outcome = machine.pointer_up(day());
        assert_eq!(
            outcome,
            Interaction::CreateRange(TimeRange::new(at(9, 0), at(9, 20)))
        );
        assert!(!machine.is_dragging());
    }

    #[test]
    fn test_zero_height_drag_gets_minimum() {
        let mut machine = DragMachine::new();
        machine.pointer_down(600.0);
        assert_eq!(
            machine.pointer_up(day()),
            Interaction::CreateRange(TimeRange::new(at(10, 0), at(10, 15)))
        );
    }

    #[test]
    fn test_leave_commits_like_release() {
        let mut machine = DragMachine::new();
        machine.pointer_down(720.0);
        machine.pointer_move(780.0);
        assert_eq!(
            machine.pointer_leave(day()),
            Interaction::CreateRange(TimeRange::new(at(12, 0), at(13, 0)))
        );
        assert_eq!(machine.pointer_up(day()), Interaction::Nothing);
    }

    #[test]
    fn test_click_suppresses_create() {
        let mut machine = DragMachine::new();
        machine.pointer_down(545.0);
        assert_eq!(machine.click_event(3), Interaction::Nothing);
        machine.pointer_move(548.0);

        assert_eq!(machine.pointer_up(day()), Interaction::EditEvent(3));
        assert_eq!(machine.state(), &InteractionState::Idle);
    }

    #[test]
    fn test_click_without_session_edits_immediately() {
        let mut machine = DragMachine::new();
        assert_eq!(machine.click_event(8), Interaction::EditEvent(8));
        assert_eq!(machine.pointer_up(day()), Interaction::Nothing);
    }

    #[test]
    fn test_idle_events_are_ignored() {
        let mut machine = DragMachine::new();
        machine.pointer_move(100.0);
        assert_eq!(machine.pointer_leave(day()), Interaction::Nothing);
        assert_eq!(machine.pointer_up(day()), Interaction::Nothing);
        assert!(!machine.is_dragging());
    }

    #[test]
    fn test_selection_rect_follows_pointer() {
        let mut machine = DragMachine::new();
        machine.pointer_down(300.0);
        machine.pointer_move(250.0);

        assert_eq!(
            machine.selection_rect(),
            Some(SelectionRect {
                top: 250.0,
                height: 50.0
            })
        );
    }

    #[test]
    fn test_second_press_reanchors() {
        let mut machine = DragMachine::new();
        machine.pointer_down(100.0);
        machine.click_event(1);
        machine.pointer_down(200.0);

        let session = machine.session().unwrap();
        assert_eq!(session.anchor_offset, 200.0);
        assert!(!session.suppressed_by_click);
    }

    #[test]
    fn test_cancel_publishes_nothing() {
        let mut machine = DragMachine::new();
        machine.pointer_down(100.0);
        machine.cancel();
        assert_eq!(machine.pointer_up(day()), Interaction::Nothing);
    }
}
