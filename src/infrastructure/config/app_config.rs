//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::args::CliArgs;

pub(crate) const APP_NAME: &str = "bahamas-stack";
pub(crate) const APP_QUALIFIER: &str = "bs";
pub(crate) const APP_ORGANIZATION: &str = "bahamas-stack";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Simulated delays.
    #[serde(default)]
    pub timing: TimingConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Play the animated splash screen on start.
    #[serde(default = "default_true")]
    pub enable_animations: bool,

    /// Skip the login screen and start as a guest.
    #[serde(default)]
    pub start_as_guest: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_animations: true,
            start_as_guest: false,
        }
    }
}

/// Fixed delays of the simulated flows, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// How long a confirmation stays before the form resets.
    #[serde(default = "default_confirmation_reset_ms")]
    pub confirmation_reset_ms: u64,

    /// Delay between biometric stages.
    #[serde(default = "default_biometric_step_ms")]
    pub biometric_step_ms: u64,
}

impl TimingConfig {
    /// Confirmation display duration.
    #[must_use]
    pub const fn confirmation_reset(&self) -> Duration {
        Duration::from_millis(self.confirmation_reset_ms)
    }

    /// Biometric stage duration.
    #[must_use]
    pub const fn biometric_step(&self) -> Duration {
        Duration::from_millis(self.biometric_step_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            confirmation_reset_ms: default_confirmation_reset_ms(),
            biometric_step_ms: default_biometric_step_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_confirmation_reset_ms() -> u64 {
    3000
}

fn default_biometric_step_ms() -> u64 {
    2000
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(enable_animations) = args.enable_animations {
            self.ui.enable_animations = enable_animations;
        }
        if args.guest {
            self.ui.start_as_guest = true;
        }
        if let Some(ms) = args.confirmation_reset_ms {
            self.timing.confirmation_reset_ms = ms;
        }
        if let Some(ms) = args.biometric_step_ms {
            self.timing.biometric_step_ms = ms;
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("bahamas-stack.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            ui: UiConfig::default(),
            timing: TimingConfig::default(),
        }
    }
}
