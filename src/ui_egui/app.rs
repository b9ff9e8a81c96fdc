mod lifecycle;
mod menu;
mod shortcuts;

use crate::models::settings::Settings;
use crate::services::interaction::Interaction;
use crate::services::schedule::ScheduleController;
use crate::services::settings::SettingsService;
use crate::ui_egui::event_dialog::{render_event_dialog, EventDialogResult, EventDialogState};
use crate::ui_egui::theme::ScheduleTheme;
use crate::ui_egui::views::day_view::DayView;

pub struct DayPlannerApp {
    controller: ScheduleController,
    settings: Settings,
    settings_service: SettingsService,
    /// Open create/edit dialog, if any
    event_dialog_state: Option<EventDialogState>,
    /// Hour to scroll the timeline to on the next frame
    scroll_to_hour: Option<u32>,
}

impl eframe::App for DayPlannerApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}

impl DayPlannerApp {
    fn render_main_panel(&mut self, ctx: &egui::Context) {
        let interactive = self.event_dialog_state.is_none();
        let mut interaction = Interaction::Nothing;

        egui::CentralPanel::default().show(ctx, |ui| {
            interaction = DayView::show(
                ui,
                &mut self.controller,
                &self.settings,
                interactive,
                &mut self.scroll_to_hour,
            );
        });

        self.handle_interaction(interaction);
    }

    pub(crate) fn handle_interaction(&mut self, interaction: Interaction) {
        match interaction {
            Interaction::Nothing => {}
            Interaction::CreateRange(range) => {
                log::debug!("Opening new event dialog for {} - {}", range.start, range.end);
                self.event_dialog_state = Some(EventDialogState::new_event(range));
            }
            Interaction::EditEvent(id) => match self.controller.event(id) {
                Some(event) => {
                    self.event_dialog_state = Some(EventDialogState::from_event(event));
                }
                None => log::warn!("Edit requested for unknown event {}", id),
            },
        }
    }

    fn render_event_dialog(&mut self, ctx: &egui::Context) {
        let Some(state) = self.event_dialog_state.as_mut() else {
            return;
        };

        match render_event_dialog(ctx, state) {
            Some(EventDialogResult::Save(draft)) => match self.controller.save(draft) {
                Ok(_) => self.event_dialog_state = None,
                Err(err) => state.error_message = Some(err.to_string()),
            },
            Some(EventDialogResult::Delete(id)) => {
                self.controller.delete(id);
                self.event_dialog_state = None;
            }
            Some(EventDialogResult::Cancel) => self.event_dialog_state = None,
            None => {}
        }
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        ScheduleTheme::from_settings(&self.settings).apply_to_context(ctx);
    }
}
