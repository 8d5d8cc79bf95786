//! Configuration settings for focusdesk.
//!
//! Settings are loaded from `~/.focusdesk/config.yaml`.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::DeskError;
use crate::features::timer::{TimerConfiguration, DEFAULT_BREAK_MINUTES, DEFAULT_FOCUS_MINUTES};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Interval timer settings.
    pub timer: TimerConfig,
    /// Planner settings.
    pub planner: PlannerConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to the `colored` crate's global override.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Interval timer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Focus period in minutes.
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
    /// Break period in minutes.
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
    /// Play a tone when a period ends.
    #[serde(default = "default_true")]
    pub sound: bool,
}

/// Planner settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Ask before deleting a task.
    #[serde(default = "default_true")]
    pub confirm_delete: bool,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_focus_minutes() -> u32 {
    DEFAULT_FOCUS_MINUTES
}

const fn default_break_minutes() -> u32 {
    DEFAULT_BREAK_MINUTES
}

const fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            break_minutes: default_break_minutes(),
            sound: default_true(),
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            confirm_delete: default_true(),
        }
    }
}

impl TimerConfig {
    /// The configured durations, or the defaults if they are invalid.
    #[must_use]
    pub fn durations(&self) -> TimerConfiguration {
        TimerConfiguration::new(self.focus_minutes, self.break_minutes).unwrap_or_else(|e| {
            warn!("{e}; using defaults");
            TimerConfiguration::default()
        })
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, DeskError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, DeskError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            DeskError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            DeskError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), DeskError> {
        std::fs::write(path, self.to_yaml()?).map_err(|e| {
            DeskError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Render the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, DeskError> {
        serde_yaml::to_string(self)
            .map_err(|e| DeskError::Config(format!("Failed to serialize config: {e}")))
    }
}
