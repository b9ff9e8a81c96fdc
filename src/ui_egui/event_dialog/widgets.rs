use chrono::{NaiveTime, Timelike};
use egui::Stroke;

use crate::models::color::EventColor;
use crate::models::time_range::is_time_disabled;
use crate::ui_egui::views::palette::rgb;

/// Hour and minute combo boxes. Entries before `floor` are greyed out.
///
/// Returns the newly picked `(hour, minute)` when the user changed either.
pub fn render_time_picker(
    ui: &mut egui::Ui,
    id_source: &str,
    time: NaiveTime,
    floor: Option<NaiveTime>,
) -> Option<(u32, u32)> {
    let hour = time.hour();
    let minute = time.minute();
    let mut picked = None;

    ui.horizontal(|ui| {
        egui::ComboBox::from_id_source(format!("{id_source}_hour"))
            .width(60.0)
            .selected_text(format!("{:02}", hour))
            .show_ui(ui, |ui| {
                for h in 0..24 {
                    let enabled = !is_time_disabled(h, minute, floor);
                    let item = egui::SelectableLabel::new(h == hour, format!("{:02}", h));
                    if ui.add_enabled(enabled, item).clicked() {
                        picked = Some((h, minute));
                    }
                }
            });

        ui.label(":");

        egui::ComboBox::from_id_source(format!("{id_source}_minute"))
            .width(60.0)
            .selected_text(format!("{:02}", minute))
            .show_ui(ui, |ui| {
                for m in 0..60 {
                    let enabled = !is_time_disabled(hour, m, floor);
                    let item = egui::SelectableLabel::new(m == minute, format!("{:02}", m));
                    if ui.add_enabled(enabled, item).clicked() {
                        picked = Some((hour, m));
                    }
                }
            });
    });

    picked.filter(|&(h, m)| (h, m) != (hour, minute))
}

/// Row of round colour swatches; the selected one gets a ring.
pub fn render_color_swatches(ui: &mut egui::Ui, selected: &mut EventColor) {
    ui.horizontal_wrapped(|ui| {
        for color in EventColor::ALL {
            let size = egui::vec2(24.0, 24.0);
            let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
            let center = rect.center();

            if *selected == color {
                ui.painter().circle_stroke(
                    center,
                    12.0,
                    Stroke::new(2.0, ui.visuals().selection.stroke.color),
                );
            }
            ui.painter()
                .circle_filled(center, 9.0, rgb(color.background_rgb()));
            ui.painter()
                .circle_stroke(center, 9.0, Stroke::new(2.0, rgb(color.border_rgb())));

            let response = response.on_hover_text(color.label());
            if response.clicked() {
                *selected = color;
            }
        }
    });
}
