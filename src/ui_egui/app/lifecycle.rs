use super::DayPlannerApp;
use crate::models::settings::Settings;
use crate::services::event::EventStore;
use crate::services::schedule::ScheduleController;
use crate::services::settings::SettingsService;
use chrono::Local;

impl DayPlannerApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        settings_service: SettingsService,
    ) -> Self {
        let today = Local::now().date_naive();
        let store = if settings.seed_sample_events {
            EventStore::with_sample_events(today)
        } else {
            EventStore::new()
        };
        log::info!(
            "Starting with {} events, theme '{}'",
            store.len(),
            settings.theme
        );

        let app = Self {
            controller: ScheduleController::new(store, today),
            scroll_to_hour: Some(settings.initial_scroll_hour),
            settings,
            settings_service,
            event_dialog_state: None,
        };

        app.apply_theme(&cc.egui_ctx);
        app
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_shortcuts(ctx);
        self.render_menu_bar(ctx);
        self.render_main_panel(ctx);
        self.render_event_dialog(ctx);
    }
}
