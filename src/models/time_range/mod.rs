//! Time ranges produced by the timeline and adjusted by the edit surface.
//!
//! The timeline uses a fixed scale of one pixel per minute measured from
//! midnight of the viewed day, so a full day is 1440 pixels tall.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Minutes in a day, and therefore the pixel height of the timeline.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Shortest range a drag can produce.
pub const MIN_DURATION_MINUTES: i64 = 15;

/// A `{start, end}` pair, either a drag candidate or an edited event's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Convert a drag between two pixel offsets into a candidate range on `day`.
    ///
    /// The order of the offsets does not matter. Offsets are floored to whole
    /// minutes and clamped to the timeline; the start never leaves `day`,
    /// while the end may sit on the following midnight. The result always
    /// satisfies the minimum duration.
    pub fn from_offsets(day: NaiveDate, anchor: f32, current: f32) -> Self {
        let top = anchor.min(current);
        let bottom = anchor.max(current);

        let start_minutes = offset_to_minutes(top).min(MINUTES_PER_DAY - 1);
        let end_minutes = offset_to_minutes(bottom);

        let midnight = day.and_time(NaiveTime::MIN);
        Self {
            start: midnight + Duration::minutes(start_minutes),
            end: midnight + Duration::minutes(end_minutes),
        }
        .with_minimum_duration()
    }

    /// Extend the end so the range lasts at least [`MIN_DURATION_MINUTES`].
    ///
    /// The start is never moved, and ranges that are already long enough
    /// come back unchanged.
    pub fn with_minimum_duration(self) -> Self {
        let floor = Duration::minutes(MIN_DURATION_MINUTES);
        if self.duration() < floor {
            Self {
                start: self.start,
                end: self.start + floor,
            }
        } else {
            self
        }
    }
}

/// Whole minutes since midnight for a pixel offset on the timeline.
pub fn offset_to_minutes(offset: f32) -> i64 {
    if !offset.is_finite() {
        return 0;
    }
    (offset.floor() as i64).clamp(0, MINUTES_PER_DAY)
}

/// Apply a new start time, dragging the end forward when it would precede it.
///
/// Moving the end never touches the start; that direction is checked when
/// the event is saved.
pub fn forward_correct(new_start: NaiveDateTime, current_end: NaiveDateTime) -> TimeRange {
    let end = if new_start > current_end {
        new_start
    } else {
        current_end
    };
    TimeRange::new(new_start, end)
}

/// Whether an hour/minute choice falls before `floor` in a time picker.
///
/// Advisory only: the picker greys these entries out, nothing else enforces it.
pub fn is_time_disabled(hour: u32, minute: u32, floor: Option<NaiveTime>) -> bool {
    let Some(floor) = floor else {
        return false;
    };
    if hour < floor.hour() {
        return true;
    }
    hour == floor.hour() && minute < floor.minute()
}

/// Replace the hour and minute of `timestamp`, keeping its date.
pub fn with_time_of_day(timestamp: NaiveDateTime, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    timestamp.date().and_hms_opt(hour, minute, 0)
}
