use crate::models::color::EventColor;
use crate::models::event::Event;
use chrono::{NaiveDate, NaiveTime};

/// Example schedule shown on first launch.
const SAMPLES: [(&str, (u32, u32), (u32, u32), EventColor); 5] = [
    ("Morning meeting", (9, 0), (10, 0), EventColor::Blue),
    ("Project planning", (11, 0), (12, 30), EventColor::Green),
    ("Lunch", (12, 30), (13, 30), EventColor::Yellow),
    ("Client meeting", (14, 0), (15, 30), EventColor::Purple),
    ("Weekly review", (16, 0), (17, 0), EventColor::Red),
];

/// Build the example events on `day`, numbered from 1.
pub fn sample_events(day: NaiveDate) -> Vec<Event> {
    SAMPLES
        .iter()
        .zip(1..)
        .filter_map(|(&(title, (sh, sm), (eh, em), color), id)| {
            let start = NaiveTime::from_hms_opt(sh, sm, 0)?;
            let end = NaiveTime::from_hms_opt(eh, em, 0)?;
            Some(Event::new(id, title, day.and_time(start), day.and_time(end), color))
        })
        .collect()
}
