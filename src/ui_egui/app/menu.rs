use super::DayPlannerApp;
use chrono::Local;
use egui::Context;

impl DayPlannerApp {
    pub(super) fn render_menu_bar(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                self.render_view_menu(ui, ctx);
            });
        });
    }

    fn render_view_menu(&mut self, ui: &mut egui::Ui, ctx: &Context) {
        ui.menu_button("View", |ui| {
            if ui.button("Today    T").clicked() {
                self.controller.go_to_today(Local::now().date_naive());
                ui.close_menu();
            }

            ui.separator();

            let dark = self.settings.is_dark();
            let label = if dark { "☀ Light Theme" } else { "🌙 Dark Theme" };
            if ui.button(label).clicked() {
                self.set_theme(ctx, if dark { "light" } else { "dark" });
                ui.close_menu();
            }
        });
    }

    fn set_theme(&mut self, ctx: &Context, theme: &str) {
        self.settings.theme = theme.to_string();
        self.apply_theme(ctx);

        if let Err(e) = self.settings_service.update(&self.settings) {
            log::error!("Failed to save theme preference: {:#}", e);
        } else {
            log::info!("Theme set to '{}'", theme);
        }
    }
}
