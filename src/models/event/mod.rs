// Event module
// Time-blocked event model for the single-day timeline

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::color::EventColor;
use crate::models::time_range::MINUTES_PER_DAY;

/// Title stored when the user saves an event without naming it.
pub const DEFAULT_TITLE: &str = "Untitled event";

/// A scheduled block on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub color: EventColor,
}

impl Event {
    /// Create an event with an already-assigned id.
    ///
    /// No validation happens here: the layout engine has to cope with
    /// whatever reaches it, and the save boundary is where ranges get checked.
    ///
    /// # Examples
    /// ```
    /// use day_planner::models::color::EventColor;
    /// use day_planner::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
    /// let start = day.and_hms_opt(9, 0, 0).unwrap();
    /// let end = day.and_hms_opt(10, 0, 0).unwrap();
    /// let event = Event::new(1, "Standup", start, end, EventColor::Blue);
    /// assert_eq!(event.duration().num_minutes(), 60);
    /// ```
    pub fn new(
        id: i64,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        color: EventColor,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            start,
            end,
            color,
        }
    }

    /// Validate the time range
    pub fn validate(&self) -> Result<(), String> {
        if self.end <= self.start {
            return Err("Event end time must be after start time".to_string());
        }
        Ok(())
    }

    /// Get the duration of the event
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// True when the start instant falls on `day` by calendar date.
    pub fn starts_on(&self, day: NaiveDate) -> bool {
        self.start.date() == day
    }

    /// Minutes from midnight of `day` at which the block's top and bottom edges sit.
    ///
    /// Both edges are clipped to the visible day, so an event running past
    /// midnight stops at the bottom of the timeline. Degenerate events come
    /// back with `bottom == top`.
    pub fn minute_span_on(&self, day: NaiveDate) -> (i64, i64) {
        let midnight = day.and_time(chrono::NaiveTime::MIN);
        let clip = |value: NaiveDateTime| (value - midnight).num_minutes().clamp(0, MINUTES_PER_DAY);

        let top = clip(self.start);
        let bottom = clip(self.end).max(top);
        (top, bottom)
    }
}

/// Save intent coming back from the edit surface.
///
/// `id == None` asks for a new event; `Some(id)` replaces the fields of an
/// existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub id: Option<i64>,
    pub title: String,
    pub color: EventColor,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl EventDraft {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: None,
            title: String::new(),
            color: EventColor::default(),
            start,
            end,
        }
    }

    /// Title to store, with blank input replaced by [`DEFAULT_TITLE`].
    pub fn normalized_title(&self) -> String {
        let trimmed = self.title.trim();
        if trimmed.is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Build the stored event under the given id.
    pub fn into_event(self, id: i64) -> Event {
        let title = self.normalized_title();
        Event {
            id,
            title,
            start: self.start,
            end: self.end,
            color: self.color,
        }
    }
}

impl From<&Event> for EventDraft {
    fn from(event: &Event) -> Self {
        Self {
            id: Some(event.id),
            title: event.title.clone(),
            color: event.color,
            start: event.start,
            end: event.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        day().and_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_validate_success() {
        let event = Event::new(1, "Meeting", at(9, 0), at(10, 0), EventColor::Blue);
        assert!(event.validate().is_ok());
    }

    #[test]
    fn test_validate_equal_times() {
        let event = Event::new(1, "Meeting", at(9, 0), at(9, 0), EventColor::Blue);
        assert_eq!(
            event.validate().unwrap_err(),
            "Event end time must be after start time"
        );
    }

    #[test]
    fn test_duration() {
        let event = Event::new(1, "Meeting", at(9, 0), at(11, 30), EventColor::Green);
        assert_eq!(event.duration(), Duration::minutes(150));
    }

    #[test]
    fn test_starts_on_uses_calendar_date() {
        let late = Event::new(1, "Late", at(23, 30), at(23, 59), EventColor::Red);
        assert!(late.starts_on(day()));
        assert!(!late.starts_on(day().succ_opt().unwrap()));
    }

    #[test]
    fn test_minute_span_inside_day() {
        let event = Event::new(1, "Lunch", at(12, 30), at(13, 30), EventColor::Yellow);
        assert_eq!(event.minute_span_on(day()), (750, 810));
    }

    #[test]
    fn test_minute_span_clipped_at_midnight() {
        let next_morning = day().succ_opt().unwrap().and_hms_opt(2, 0, 0).unwrap();
        let event = Event::new(1, "Overnight", at(23, 0), next_morning, EventColor::Indigo);
        assert_eq!(event.minute_span_on(day()), (1380, 1440));
    }

    #[test]
    fn test_minute_span_degenerate_event() {
        let event = Event::new(1, "Backwards", at(10, 0), at(9, 0), EventColor::Pink);
        assert_eq!(event.minute_span_on(day()), (600, 600));
    }

    #[test]
    fn test_blank_title_normalized() {
        let mut draft = EventDraft::new(at(9, 0), at(10, 0));
        assert_eq!(draft.normalized_title(), DEFAULT_TITLE);

        draft.title = "   ".to_string();
        assert_eq!(draft.normalized_title(), DEFAULT_TITLE);

        draft.title = "  Review  ".to_string();
        assert_eq!(draft.normalized_title(), "Review");
    }

    #[test]
    fn test_draft_round_trips_existing_event() {
        let event = Event::new(7, "Call", at(14, 0), at(15, 0), EventColor::Purple);
        let draft = EventDraft::from(&event);
        assert_eq!(draft.id, Some(7));
        assert_eq!(draft.into_event(7), event);
    }
}
