//! Configuration for fatewatch.
//!
//! Maps directly to `fatewatch.toml`. Every field has a default, so an empty
//! file is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::{FateError, Result};
use crate::types::SoundEffect;

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FateWatchConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Progress milestone reports.
    #[serde(default)]
    pub progress: ProgressConfig,
    /// Pop notifications for normal FATEs.
    #[serde(default)]
    pub pop: PopConfig,
    /// Pop notifications for filtered-category FATEs.
    #[serde(default)]
    pub filtered: FilteredConfig,
    /// Clickable link attached to pop messages.
    #[serde(default)]
    pub link: LinkConfig,
    /// Shared tracker automation.
    #[serde(default)]
    pub tracker: TrackerConfig,
}

impl FateWatchConfig {
    /// Load and validate configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `FateError::Config` if the TOML is invalid or a value is out
    /// of range.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| FateError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    /// Returns `FateError::Config` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        for (field, sound) in [
            ("pop.sound_effect", self.pop.sound_effect),
            ("filtered.sound_effect", self.filtered.sound_effect),
        ] {
            if !sound.is_valid() {
                return Err(FateError::Config(format!(
                    "{field} must be between {} and {}, got {}",
                    SoundEffect::MIN,
                    SoundEffect::MAX,
                    sound.0
                )));
            }
        }

        let radius = self.link.randomize_radius;
        if !radius.is_finite() || radius < 0.0 {
            return Err(FateError::Config(format!(
                "link.randomize_radius must be a non-negative number, got {radius}"
            )));
        }

        if self.general.log_level.trim().is_empty() {
            return Err(FateError::Config("general.log_level must not be empty".to_string()));
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log filter directive: trace, debug, info, warn, error, or a full
    /// `tracing` filter such as `fatewatch_host=debug`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Text,
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Progress milestone reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// Print a message each time a FATE crosses a 25% boundary.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Pop notifications for normal FATEs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopConfig {
    /// Print a chat message with a map link.
    #[serde(default = "default_true")]
    pub chat: bool,
    /// Show a quest toast.
    #[serde(default = "default_true")]
    pub toast: bool,
    /// Play `sound_effect`.
    #[serde(default = "default_true")]
    pub sound: bool,
    /// Sound played on pop.
    #[serde(default = "default_pop_sound")]
    pub sound_effect: SoundEffect,
}

impl Default for PopConfig {
    fn default() -> Self {
        Self {
            chat: true,
            toast: true,
            sound: true,
            sound_effect: default_pop_sound(),
        }
    }
}

/// Pop notifications for filtered-category FATEs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilteredConfig {
    /// Announce filtered FATEs at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Sound played when a filtered FATE pops.
    #[serde(default = "default_filtered_sound")]
    pub sound_effect: SoundEffect,
}

impl Default for FilteredConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sound_effect: default_filtered_sound(),
        }
    }
}

/// What clicking a pop message does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkAction {
    /// Send the coordinates to chat.
    #[default]
    Shout,
    /// Copy the coordinates to the clipboard.
    Copy,
    /// No clickable link.
    Nothing,
}

impl LinkAction {
    /// Verb shown in the `[Click to ...]` label, `None` when no link is attached.
    #[must_use]
    pub fn verb(self) -> Option<&'static str> {
        match self {
            Self::Shout => Some("shout"),
            Self::Copy => Some("copy"),
            Self::Nothing => None,
        }
    }
}

/// Clickable link settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Action performed on click.
    #[serde(default)]
    pub action: LinkAction,
    /// Jitter the flagged and shared coordinates.
    #[serde(default = "default_true")]
    pub randomize_coords: bool,
    /// Maximum jitter per axis, in map units.
    #[serde(default = "default_randomize_radius")]
    pub randomize_radius: f32,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            action: LinkAction::Shout,
            randomize_coords: true,
            randomize_radius: default_randomize_radius(),
        }
    }
}

/// Shared tracker automation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Create a tracker on zone entry when none is connected.
    #[serde(default)]
    pub auto_create: bool,
    /// Write the pop time to the tracker when a tracked FATE pops.
    #[serde(default = "default_true")]
    pub auto_pop: bool,
    /// Also overwrite a popped record when its respawn is less than five
    /// minutes away.
    #[serde(default)]
    pub auto_pop_within_respawn: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            auto_create: false,
            auto_pop: true,
            auto_pop_within_respawn: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_pop_sound() -> SoundEffect {
    SoundEffect(6)
}

fn default_filtered_sound() -> SoundEffect {
    SoundEffect(1)
}

fn default_randomize_radius() -> f32 {
    0.5
}
