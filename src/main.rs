// Day Planner Application
// Main entry point

use day_planner::services::settings::SettingsService;
use day_planner::ui_egui::DayPlannerApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Day Planner");

    let settings_service = SettingsService::from_project_dirs();
    let settings = settings_service.load_or_default();
    log::info!("Settings file: {}", settings_service.path().display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Day Planner")
            .with_inner_size([900.0, 760.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Day Planner",
        options,
        Box::new(|cc| Ok(Box::new(DayPlannerApp::new(cc, settings, settings_service)))),
    )
}
