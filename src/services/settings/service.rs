use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service backed by the platform config directory, falling back to the
    /// working directory when no home directory can be resolved.
    pub fn from_project_dirs() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("com", "DayPlanner", "DayPlanner") {
            Self::new(proj_dirs.config_dir().join(SETTINGS_FILE))
        } else {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            Self::new(SETTINGS_FILE)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings
    ///
    /// A missing file is not an error: first launch simply uses defaults.
    pub fn get(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&content).context("Failed to parse settings")?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).context("Failed to create settings directory")?;
            }
        }

        let content = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        std::fs::write(&self.path, content).context("Failed to write settings")?;

        Ok(())
    }

    /// Load settings, logging and falling back to defaults on any failure.
    pub fn load_or_default(&self) -> Settings {
        match self.get() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {:#}, using defaults", e);
                Settings::default()
            }
        }
    }
}
