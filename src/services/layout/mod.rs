//! Column layout for a single day's events.
//!
//! Events whose times overlap are spread across side-by-side columns so that
//! no two blocks sharing a column ever overlap. Assignment is greedy: events
//! are visited in start order and each one lands in the leftmost column whose
//! last event has already ended. This does not search for the narrowest
//! possible arrangement; the scan order is the contract.

use crate::models::event::Event;
use chrono::NaiveDate;

/// An event together with its horizontal lane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedEvent {
    pub event: Event,
    /// Zero-based lane index
    pub column: usize,
    /// Lane count shared by every event in the same layout pass
    pub total_columns: usize,
}

impl PositionedEvent {
    /// Left offset and width of the block inside a container `container_width` wide.
    ///
    /// Columns split the container evenly; the drawn width is widened to
    /// `min_width` when the share gets too narrow to read, while the left
    /// offset keeps following the even split.
    pub fn horizontal_span(&self, container_width: f32, min_width: f32) -> (f32, f32) {
        let share = container_width / self.total_columns.max(1) as f32;
        let left = self.column as f32 * share;
        (left, share.max(min_width))
    }
}

/// Lay out the events whose start falls on `day`.
///
/// Events on other days are dropped. The input is not modified and a fresh
/// vector is returned on every call, grouped by column (all of column 0 in
/// start order, then column 1, and so on).
pub fn layout_day(events: &[Event], day: NaiveDate) -> Vec<PositionedEvent> {
    let on_day: Vec<&Event> = events.iter().filter(|event| event.starts_on(day)).collect();
    assign_columns(&on_day)
}

/// Greedy column assignment over an arbitrary set of events.
///
/// Ties on start keep their input order. An event may share a column with
/// one that ends exactly when it begins. Events with `end <= start` still get
/// a column; they just compare like any other pair of timestamps.
pub fn assign_columns(events: &[&Event]) -> Vec<PositionedEvent> {
    let mut sorted: Vec<&Event> = events.to_vec();
    // `sort_by_key` is stable, which is what keeps equal starts in input order.
    sorted.sort_by_key(|event| event.start);

    let mut columns: Vec<Vec<&Event>> = Vec::new();
    for event in sorted {
        let free = columns.iter_mut().find(|column| {
            column
                .last()
                .is_some_and(|last| last.end <= event.start)
        });

        match free {
            Some(column) => column.push(event),
            None => columns.push(vec![event]),
        }
    }

    let total_columns = columns.len();
    columns
        .into_iter()
        .enumerate()
        .flat_map(|(column, members)| {
            members.into_iter().map(move |event| PositionedEvent {
                event: event.clone(),
                column,
                total_columns,
            })
        })
        .collect()
}

/// Widest column count in a layout, never less than one.
pub fn max_columns(positioned: &[PositionedEvent]) -> usize {
    positioned
        .iter()
        .map(|p| p.total_columns)
        .max()
        .unwrap_or(0)
        .max(1)
}
