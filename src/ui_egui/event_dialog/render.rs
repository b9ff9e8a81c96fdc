use egui::{Color32, RichText};

use crate::models::event::{EventDraft, DEFAULT_TITLE};

use super::state::EventDialogState;
use super::widgets::{render_color_swatches, render_time_picker};

/// What the user asked for when leaving the dialog
#[derive(Debug, Clone, PartialEq)]
pub enum EventDialogResult {
    Save(EventDraft),
    Delete(i64),
    Cancel,
}

const FORM_LABEL_WIDTH: f32 = 90.0;

/// Draw the dialog. Returns `Some` once the user saved, deleted or closed it.
pub fn render_event_dialog(
    ctx: &egui::Context,
    state: &mut EventDialogState,
) -> Option<EventDialogResult> {
    let mut result = None;
    let mut dialog_open = true;

    egui::Window::new(state.heading())
        .open(&mut dialog_open)
        .collapsible(false)
        .resizable(false)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            render_error_banner(ui, state);

            labeled_row(ui, RichText::new("Title:").strong(), |ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.title)
                        .hint_text(DEFAULT_TITLE)
                        .desired_width(220.0),
                );
                if response.changed() {
                    state.error_message = None;
                }
            });

            labeled_row(ui, "Start:", |ui| {
                if let Some((hour, minute)) =
                    render_time_picker(ui, "event_start", state.start.time(), None)
                {
                    state.set_start_time(hour, minute);
                }
            });

            labeled_row(ui, "End:", |ui| {
                let floor = Some(state.end_floor());
                if let Some((hour, minute)) =
                    render_time_picker(ui, "event_end", state.end.time(), floor)
                {
                    state.set_end_time(hour, minute);
                }
            });

            labeled_row(ui, "Color:", |ui| {
                render_color_swatches(ui, &mut state.color);
            });

            ui.add_space(8.0);
            ui.separator();
            result = render_action_buttons(ui, state);
        });

    if !dialog_open && result.is_none() {
        result = Some(EventDialogResult::Cancel);
    }

    result
}

fn render_error_banner(ui: &mut egui::Ui, state: &EventDialogState) {
    if let Some(ref error) = state.error_message {
        ui.colored_label(Color32::RED, RichText::new(error).strong());
        ui.add_space(8.0);
    }
}

fn render_action_buttons(
    ui: &mut egui::Ui,
    state: &EventDialogState,
) -> Option<EventDialogResult> {
    let mut result = None;

    ui.horizontal(|ui| {
        if let Some(id) = state.event_id {
            if ui
                .button(RichText::new("Delete").color(Color32::RED))
                .clicked()
            {
                result = Some(EventDialogResult::Delete(id));
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let save_label = if state.is_editing() { "Update" } else { "Save" };
            let save_button =
                egui::Button::new(RichText::new(save_label).color(Color32::WHITE))
                    .fill(Color32::from_rgb(70, 120, 200));
            let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.add(save_button).clicked() || enter_pressed {
                result = Some(EventDialogResult::Save(state.to_draft()));
            }

            let escape_pressed = ui.input(|i| i.key_pressed(egui::Key::Escape));
            if ui.button("Cancel").clicked() || escape_pressed {
                result = Some(EventDialogResult::Cancel);
            }
        });
    });

    result
}

fn labeled_row<F>(ui: &mut egui::Ui, label: impl Into<egui::WidgetText>, add_contents: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.horizontal(|ui| {
        let text = label.into();
        ui.allocate_ui_with_layout(
            egui::Vec2::new(FORM_LABEL_WIDTH, 24.0),
            egui::Layout::right_to_left(egui::Align::Center),
            move |ui| {
                ui.label(text);
            },
        );
        add_contents(ui);
    });
}
