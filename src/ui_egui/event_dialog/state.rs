use crate::models::color::EventColor;
use crate::models::event::{Event, EventDraft};
use crate::models::time_range::{forward_correct, with_time_of_day, TimeRange};
use chrono::{NaiveDateTime, NaiveTime};

/// State for the event editing dialog
#[derive(Debug, Clone, PartialEq)]
pub struct EventDialogState {
    pub event_id: Option<i64>,
    pub title: String,
    pub color: EventColor,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub error_message: Option<String>,
}

impl EventDialogState {
    /// Dialog for a new event pre-filled with a drag candidate.
    pub fn new_event(range: TimeRange) -> Self {
        Self {
            event_id: None,
            title: String::new(),
            color: EventColor::default(),
            start: range.start,
            end: range.end,
            error_message: None,
        }
    }

    pub fn from_event(event: &Event) -> Self {
        Self {
            event_id: Some(event.id),
            title: event.title.clone(),
            color: event.color,
            start: event.start,
            end: event.end,
            error_message: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.event_id.is_some()
    }

    pub fn heading(&self) -> &'static str {
        if self.is_editing() {
            "Edit Event"
        } else {
            "New Event"
        }
    }

    /// Change the start; an end left behind is pulled forward to match.
    pub fn set_start(&mut self, start: NaiveDateTime) {
        let range = forward_correct(start, self.end);
        self.start = range.start;
        self.end = range.end;
        self.error_message = None;
    }

    /// Change the end. The start is left alone even if the end moves before it.
    pub fn set_end(&mut self, end: NaiveDateTime) {
        self.end = end;
        self.error_message = None;
    }

    pub fn set_start_time(&mut self, hour: u32, minute: u32) {
        if let Some(start) = with_time_of_day(self.start, hour, minute) {
            self.set_start(start);
        }
    }

    pub fn set_end_time(&mut self, hour: u32, minute: u32) {
        if let Some(end) = with_time_of_day(self.end, hour, minute) {
            self.set_end(end);
        }
    }

    /// Earliest time offered by the end-time picker
    pub fn end_floor(&self) -> NaiveTime {
        self.start.time()
    }

    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            id: self.event_id,
            title: self.title.clone(),
            color: self.color,
            start: self.start,
            end: self.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 9, 9)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn new_dialog() -> EventDialogState {
        EventDialogState::new_event(TimeRange::new(at(9, 0), at(9, 20)))
    }

    #[test]
    fn test_new_event_defaults() {
        let state = new_dialog();
        assert!(!state.is_editing());
        assert_eq!(state.heading(), "New Event");
        assert!(state.title.is_empty());
        assert_eq!(state.color, EventColor::Blue);
        assert_eq!((state.start, state.end), (at(9, 0), at(9, 20)));
    }

    #[test]
    fn test_from_event_copies_fields() {
        let event = Event::new(4, "Review", at(16, 0), at(17, 0), EventColor::Red);
        let state = EventDialogState::from_event(&event);
        assert!(state.is_editing());
        assert_eq!(state.heading(), "Edit Event");
        assert_eq!(state.to_draft(), EventDraft::from(&event));
    }

    #[test]
    fn test_start_after_end_pulls_end_forward() {
        let mut state = new_dialog();
        state.set_start_time(10, 30);
        assert_eq!(state.start, at(10, 30));
        assert_eq!(state.end, at(10, 30));
    }

    #[test]
    fn test_start_before_end_keeps_end() {
        let mut state = new_dialog();
        state.set_start_time(8, 45);
        assert_eq!((state.start, state.end), (at(8, 45), at(9, 20)));
    }

    #[test]
    fn test_end_change_never_moves_start() {
        let mut state = new_dialog();
        state.set_end_time(8, 0);
        assert_eq!(state.start, at(9, 0));
        assert_eq!(state.end, at(8, 0));
    }

    #[test]
    fn test_edits_clear_error() {
        let mut state = new_dialog();
        state.error_message = Some("boom".to_string());
        state.set_end_time(9, 30);
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_end_floor_tracks_start() {
        let mut state = new_dialog();
        state.set_start_time(13, 5);
        assert_eq!(state.end_floor(), NaiveTime::from_hms_opt(13, 5, 0).unwrap());
    }
}
