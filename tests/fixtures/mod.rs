// Test fixtures - reusable test data
// Provides consistent days and events across the integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use day_planner::models::color::EventColor;
use day_planner::models::event::Event;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, Mar 3 2025
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    pub fn at(day: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
        day.and_hms_opt(hour, minute, 0).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn on(id: i64, title: &str, day: NaiveDate, start: (u32, u32), end: (u32, u32)) -> Event {
        Event::new(
            id,
            title,
            dates::at(day, start.0, start.1),
            dates::at(day, end.0, end.1),
            EventColor::Blue,
        )
    }

    /// Three events where the third reuses the first column: 9:00-10:00, 9:30-10:30, 10:00-11:00
    pub fn staircase(day: NaiveDate) -> Vec<Event> {
        vec![
            on(1, "Standup", day, (9, 0), (10, 0)),
            on(2, "Review", day, (9, 30), (10, 30)),
            on(3, "Planning", day, (10, 0), (11, 0)),
        ]
    }
}
