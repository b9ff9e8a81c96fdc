use chrono::{Local, NaiveDate, Timelike};
use egui::{Margin, Pos2, Rect, Sense, Stroke, Vec2};

use super::event_rendering::{event_rect, render_event_block};
use super::palette::TimelinePalette;
use crate::models::settings::Settings;
use crate::models::time_range::MINUTES_PER_DAY;
use crate::services::interaction::Interaction;
use crate::services::layout;
use crate::services::schedule::ScheduleController;
use crate::ui_egui::drag::{drive_pointer, EventHitbox, PointerSample};

const TIME_LABEL_WIDTH: f32 = 56.0;
const TIMELINE_HEIGHT: f32 = MINUTES_PER_DAY as f32;

pub struct DayView;

impl DayView {
    /// Draw the header and the timeline for the controller's selected day.
    ///
    /// `interactive` is false while a dialog is open, so the timeline neither
    /// starts nor continues drags underneath it.
    pub fn show(
        ui: &mut egui::Ui,
        controller: &mut ScheduleController,
        settings: &Settings,
        interactive: bool,
        scroll_to_hour: &mut Option<u32>,
    ) -> Interaction {
        Self::render_header(ui, controller);
        ui.add_space(8.0);

        let mut scroll = egui::ScrollArea::vertical()
            .id_source("day_timeline_vertical")
            .auto_shrink([false, false]);
        if let Some(hour) = scroll_to_hour.take() {
            scroll = scroll.vertical_scroll_offset(hour.min(23) as f32 * 60.0);
        }

        let mut outcome = Interaction::Nothing;
        scroll.show(ui, |ui| {
            ui.horizontal_top(|ui| {
                Self::render_time_labels(ui);
                egui::ScrollArea::horizontal()
                    .id_source("day_timeline_horizontal")
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        outcome = Self::render_timeline(ui, controller, settings, interactive);
                    });
            });
        });

        outcome
    }

    fn render_header(ui: &mut egui::Ui, controller: &mut ScheduleController) {
        let today = Local::now().date_naive();
        let selected = controller.selected_day();

        egui::Frame::none()
            .inner_margin(Margin::symmetric(8.0, 6.0))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("◀").on_hover_text("Previous day").clicked() {
                        controller.previous_day();
                    }
                    if ui.button("▶").on_hover_text("Next day").clicked() {
                        controller.next_day();
                    }

                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(format_day_heading(selected))
                            .size(20.0)
                            .strong(),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let today_button = ui.add_enabled(selected != today, egui::Button::new("Today"));
                        if today_button.clicked() {
                            controller.go_to_today(today);
                        }

                        let mut picked = selected;
                        let picker = ui.add(
                            egui_extras::DatePickerButton::new(&mut picked)
                                .id_source("day_view_date_picker"),
                        );
                        if picker.changed() && picked != selected {
                            controller.go_to(picked);
                        }
                    });
                });
            });
        ui.separator();
    }

    fn render_time_labels(ui: &mut egui::Ui) {
        let palette = TimelinePalette::from_ui(ui);
        let (rect, _) = ui.allocate_exact_size(Vec2::new(TIME_LABEL_WIDTH, TIMELINE_HEIGHT), Sense::hover());

        for hour in 0..24 {
            ui.painter().text(
                Pos2::new(rect.right() - 8.0, rect.top() + hour as f32 * 60.0 + 2.0),
                egui::Align2::RIGHT_TOP,
                format!("{:02}:00", hour),
                egui::FontId::proportional(12.0),
                palette.gutter_text,
            );
        }
    }

    fn render_timeline(
        ui: &mut egui::Ui,
        controller: &mut ScheduleController,
        settings: &Settings,
        interactive: bool,
    ) -> Interaction {
        let palette = TimelinePalette::from_ui(ui);
        let day = controller.selected_day();
        let positioned = controller.positioned_events();
        let max_columns = layout::max_columns(&positioned);

        let width = ui
            .available_width()
            .max(max_columns as f32 * settings.column_min_width);
        let (rect, response) =
            ui.allocate_exact_size(Vec2::new(width, TIMELINE_HEIGHT), Sense::click_and_drag());

        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, palette.background);
        for hour in 0..24 {
            let y = rect.top() + hour as f32 * 60.0;
            painter.hline(rect.x_range(), y, Stroke::new(1.0, palette.hour_line));
            painter.hline(rect.x_range(), y + 30.0, Stroke::new(1.0, palette.half_hour_line));
        }

        let mut hitboxes = Vec::with_capacity(positioned.len());
        for item in &positioned {
            let block = event_rect(rect, item, day, settings.event_min_width);
            render_event_block(ui, block, item);
            hitboxes.push(EventHitbox {
                rect: block,
                event_id: item.event.id,
            });
        }

        if day == Local::now().date_naive() {
            Self::draw_current_time_indicator(ui, rect, &palette);
        }

        let outcome = if interactive {
            let visible = rect.intersect(ui.clip_rect());
            let hovered = response.hovered() || controller.is_dragging();
            drive_pointer(
                controller,
                PointerSample::from_ui(ui),
                rect,
                visible,
                hovered,
                &hitboxes,
            )
        } else {
            Interaction::Nothing
        };

        if let Some(selection) = controller.selection_rect() {
            let highlight = Rect::from_min_size(
                Pos2::new(rect.left() + 4.0, rect.top() + selection.top),
                Vec2::new(rect.width() - 8.0, selection.height),
            );
            ui.painter().rect_filled(highlight, 6.0, palette.selection_fill);
            ui.painter()
                .rect_stroke(highlight, 6.0, Stroke::new(1.0, palette.selection_border));
            ui.ctx().request_repaint();
        }

        outcome
    }

    fn draw_current_time_indicator(ui: &egui::Ui, rect: Rect, palette: &TimelinePalette) {
        let now = Local::now().time();
        let y = rect.top() + (now.hour() * 60 + now.minute()) as f32;

        ui.painter()
            .circle_filled(Pos2::new(rect.left() + 3.0, y), 3.0, palette.now_line);
        ui.painter()
            .hline(rect.x_range(), y, Stroke::new(2.0, palette.now_line));
    }
}

/// Heading such as "Friday, March 14, 2025"
pub fn format_day_heading(day: NaiveDate) -> String {
    day.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_day_heading() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(format_day_heading(day), "Tuesday, March 4, 2025");
    }
}
