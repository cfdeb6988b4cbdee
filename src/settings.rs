use crate::radial_menu::{OverlayMetrics, RadialMenuConfig};
use crate::reminders::ReminderSettings;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file that receives a copy of the log output.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    #[serde(default)]
    pub radial_menu: RadialMenuConfig,
    #[serde(default)]
    pub overlay: OverlayMetrics,
    #[serde(default)]
    pub reminders: ReminderSettings,
    /// Screen size used by the replay tool when a trace does not carry one.
    #[serde(default = "default_screen_size")]
    pub screen_size: (f32, f32),
}

fn default_screen_size() -> (f32, f32) {
    (1080.0, 2400.0)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            radial_menu: RadialMenuConfig::default(),
            overlay: OverlayMetrics::default(),
            reminders: ReminderSettings::default(),
            screen_size: default_screen_size(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
