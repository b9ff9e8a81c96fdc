//! Application theme
//!
//! Maps the persisted theme name onto egui visuals.

use egui::Color32;

use crate::models::settings::Settings;

/// Colours applied on top of egui's stock light or dark visuals
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Window and panel background
    pub app_background: Color32,

    /// Background of inactive widgets
    pub widget_background: Color32,

    /// Hovered or pressed widget background
    pub widget_highlight: Color32,

    /// Primary text color
    pub text_primary: Color32,
}

impl ScheduleTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            widget_background: Color32::from_rgb(255, 255, 255),
            widget_highlight: Color32::from_rgb(230, 240, 255),
            text_primary: Color32::from_rgb(40, 40, 40),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            widget_background: Color32::from_rgb(40, 40, 40),
            widget_highlight: Color32::from_rgb(50, 60, 80),
            text_primary: Color32::from_rgb(240, 240, 240),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        if settings.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;

        visuals.widgets.inactive.bg_fill = self.widget_background;
        visuals.widgets.hovered.bg_fill = self.widget_highlight;
        visuals.widgets.active.bg_fill = self.widget_highlight;

        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}
