//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use wt_core::{ClockTime, PauseMinutes, WorkdayRules};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Daily target in hours.
    pub hours_per_day: i64,
    /// Start time assumed when none is entered, as `H:MM`.
    pub default_start: ClockTime,
    /// Pause assumed when none is entered.
    pub default_pause_minutes: i64,
}

impl Default for Config {
    fn default() -> Self {
        let rules = WorkdayRules::default();
        Self {
            hours_per_day: rules.hours_per_day,
            default_start: rules.default_start,
            default_pause_minutes: rules.default_pause.minutes(),
        }
    }
}

impl Config {
    /// Loads configuration from default locations and, optionally, a specific file.
    ///
    /// An unreadable or invalid configuration falls back to the built-in
    /// defaults instead of failing.
    pub fn load_or_default(config_path: Option<&Path>) -> Self {
        Self::extract_or_default(&Self::figment(dirs_config_path().as_deref(), config_path))
    }

    fn extract_or_default(figment: &Figment) -> Self {
        figment.extract().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "invalid configuration, using defaults");
            Self::default()
        })
    }

    /// Layers defaults, `config.toml` in `config_dir`, the given file and
    /// `WT_*` environment variables, later sources winning.
    fn figment(config_dir: Option<&Path>, config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = config_dir {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed("WT_"))
    }

    /// The calculation constants this configuration describes.
    pub const fn rules(&self) -> WorkdayRules {
        WorkdayRules {
            hours_per_day: self.hours_per_day,
            default_start: self.default_start,
            default_pause: PauseMinutes::new(self.default_pause_minutes),
        }
    }
}

/// Returns the platform-specific config directory for wt.
///
/// On Linux: `~/.config/wt`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("wt"))
}
