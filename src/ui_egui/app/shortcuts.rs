use super::DayPlannerApp;
use chrono::Local;

impl DayPlannerApp {
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        // The dialog owns Enter/Escape and text input while it is open.
        if self.event_dialog_state.is_some() || ctx.wants_keyboard_input() {
            return;
        }

        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowLeft) {
                self.controller.previous_day();
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                self.controller.next_day();
            }
            if i.key_pressed(egui::Key::T) && !i.modifiers.ctrl {
                self.controller.go_to_today(Local::now().date_naive());
            }
            if i.key_pressed(egui::Key::Escape) && self.controller.is_dragging() {
                self.controller.cancel_drag();
            }
        });
    }
}
