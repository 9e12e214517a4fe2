use config::{builder::DefaultState, Config, ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

pub mod validator;

use crate::error::{FormError, Result};
use crate::scroll::ScrollOptions;

/// Base name of the settings file looked up under a root directory
pub const SETTINGS_FILE: &str = "antform";

/// Tunables of the form layer
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct FormSettings {
    /// Delay before an emptied error list is hidden, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default)]
    pub motion: MotionSettings,
    #[serde(default)]
    pub scroll: ScrollOptions,
}

/// Explain panel animation
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MotionSettings {
    /// Motion class stem, e.g. `show-help` gives `show-help-leave`
    #[serde(default = "default_motion_name")]
    pub name: String,
    /// Unmount the panel after this long even if no animation end event arrives
    #[serde(default = "default_leave_timeout_ms")]
    pub leave_timeout_ms: u64,
}

fn default_debounce_ms() -> u64 {
    10
}

fn default_motion_name() -> String {
    "show-help".to_string()
}

fn default_leave_timeout_ms() -> u64 {
    300
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            name: default_motion_name(),
            leave_timeout_ms: default_leave_timeout_ms(),
        }
    }
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            motion: MotionSettings::default(),
            scroll: ScrollOptions::default(),
        }
    }
}

impl FormSettings {
    /// Load `antform.*` from the working directory, defaults if absent
    pub fn new() -> Result<Self> {
        Self::from_root(".")
    }

    /// Load `antform.*` (toml, json, yaml, ...) from `root`
    pub fn from_root(root: impl AsRef<Path>) -> Result<Self> {
        let config_path = root.as_ref().join(SETTINGS_FILE);
        let s = Self::builder()?
            .add_source(File::from(config_path).required(false))
            .build()?;

        Self::finish(s)
    }

    /// Load from an inline TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let s = Self::builder()?
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;

        Self::finish(s)
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("debounce_ms", 10)?
            .set_default("motion.name", "show-help")?
            .set_default("motion.leave_timeout_ms", 300)?
            .set_default("scroll.only_scroll_if_needed", true)?
            .set_default("scroll.allow_horizontal_scroll", true)?)
    }

    fn finish(config: Config) -> Result<Self> {
        let settings: FormSettings = config.try_deserialize()?;

        validator::SettingsValidator::validate(&settings).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            FormError::InvalidSettings(error_messages.join("\n"))
        })?;

        debug!(
            "Loaded form settings: debounce {}ms, motion '{}'",
            settings.debounce_ms, settings.motion.name
        );
        Ok(settings)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn leave_timeout(&self) -> Duration {
        Duration::from_millis(self.motion.leave_timeout_ms)
    }
}
