// Settings module
// User preferences for the day planner window

use serde::{Deserialize, Serialize};

pub const THEMES: [&str; 2] = ["light", "dark"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    /// Pixels reserved per overlap column when sizing the timeline width
    pub column_min_width: f32,
    /// Narrowest an event block is drawn, regardless of column count
    pub event_min_width: f32,
    /// Hour the timeline scrolls to on startup
    pub initial_scroll_hour: u32,
    /// Populate today's timeline with a handful of example events
    pub seed_sample_events: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            column_min_width: 180.0,
            event_min_width: 120.0,
            initial_scroll_hour: 8,
            seed_sample_events: true,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if !THEMES.contains(&self.theme.as_str()) {
            return Err(format!("Unknown theme '{}'", self.theme));
        }
        if !(self.column_min_width > 0.0) {
            return Err("Column width must be positive".to_string());
        }
        if !(self.event_min_width > 0.0) {
            return Err("Event width must be positive".to_string());
        }
        if self.initial_scroll_hour >= 24 {
            return Err("Initial scroll hour must be between 0 and 23".to_string());
        }
        Ok(())
    }

    pub fn is_dark(&self) -> bool {
        self.theme == "dark"
    }
}
