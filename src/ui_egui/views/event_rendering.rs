//! Painting of positioned event blocks on the day timeline.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use egui::{Pos2, Rect, Stroke, Vec2};

use super::palette::rgb;
use crate::services::layout::PositionedEvent;

/// Block rectangle for `positioned` inside the timeline rectangle.
///
/// Vertical placement follows the one-pixel-per-minute scale; horizontal
/// placement follows the event's column with `min_width` as a floor.
pub fn event_rect(
    timeline: Rect,
    positioned: &PositionedEvent,
    day: NaiveDate,
    min_width: f32,
) -> Rect {
    let (top, bottom) = positioned.event.minute_span_on(day);
    let (left, width) = positioned.horizontal_span(timeline.width(), min_width);

    Rect::from_min_size(
        Pos2::new(timeline.left() + left, timeline.top() + top as f32),
        Vec2::new(width, (bottom - top).max(1) as f32),
    )
    .shrink2(Vec2::new(1.0, 0.0))
}

/// Label like "9:00 - 10:30"
pub fn time_label(start: NaiveDateTime, end: NaiveDateTime) -> String {
    format!(
        "{}:{:02} - {}:{:02}",
        start.hour(),
        start.minute(),
        end.hour(),
        end.minute()
    )
}

/// Draw one event block.
pub fn render_event_block(ui: &egui::Ui, rect: Rect, positioned: &PositionedEvent) {
    let event = &positioned.event;
    let fill = rgb(event.color.background_rgb());
    let border = rgb(event.color.border_rgb());
    let text_color = rgb(event.color.text_rgb());

    let painter = ui.painter().with_clip_rect(rect.intersect(ui.clip_rect()));
    painter.rect_filled(rect, 6.0, fill);
    painter.rect_stroke(rect, 6.0, Stroke::new(1.0, border));

    let text_left = rect.left() + 8.0;
    painter.text(
        Pos2::new(text_left, rect.top() + 4.0),
        egui::Align2::LEFT_TOP,
        &event.title,
        egui::FontId::proportional(13.0),
        text_color,
    );

    if rect.height() >= 36.0 {
        painter.text(
            Pos2::new(text_left, rect.top() + 21.0),
            egui::Align2::LEFT_TOP,
            time_label(event.start, event.end),
            egui::FontId::proportional(11.0),
            text_color,
        );
    }
}
