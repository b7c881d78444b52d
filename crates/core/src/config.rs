use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::error::{Error, Result};

/// Root configuration structure for askara.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base URL of the prediction service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Paper code sent with question-generation requests
    #[serde(default = "default_paper_code")]
    pub paper_code: String,

    /// Display tunables
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging section
    #[serde(default)]
    pub logging: LoggingSection,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_paper_code() -> String {
    "MATH101".to_string()
}

/// Display tunables.
///
/// The clarification cap and history window are display limits only; the
/// transcript itself is unbounded within a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Maximum clarification entries shown in the sidebar feed
    #[serde(default = "default_clarification_cap")]
    pub clarification_cap: usize,

    /// Trailing question/answer entries excluded from history as "current"
    #[serde(default = "default_history_window")]
    pub history_window: usize,

    /// Auto-scroll behavior
    #[serde(default)]
    pub scroll: ScrollConfig,
}

fn default_clarification_cap() -> usize {
    8
}

fn default_history_window() -> usize {
    2
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            clarification_cap: default_clarification_cap(),
            history_window: default_history_window(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Auto-scroll tunables (rows and milliseconds)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScrollConfig {
    /// Viewport counts as "near bottom" within this many rows of the end
    #[serde(default = "default_bottom_threshold")]
    pub bottom_threshold: usize,

    /// User counts as scrolling for this long after their last scroll event
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,

    /// Delay before a scheduled auto-scroll fires
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_bottom_threshold() -> usize {
    50
}

fn default_settle_ms() -> u64 {
    1000
}

fn default_delay_ms() -> u64 {
    300
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            bottom_threshold: default_bottom_threshold(),
            settle_ms: default_settle_ms(),
            delay_ms: default_delay_ms(),
        }
    }
}

/// `[logging]` section of askara.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    /// Default log level for stderr output
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: pretty, json, compact
    #[serde(default = "default_log_format")]
    pub format: String,

    /// File logging configuration
    #[serde(default)]
    pub file: FileLoggingConfig,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self { level: default_log_level(), format: default_log_format(), file: FileLoggingConfig::default() }
    }
}

/// `[logging.file]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileLoggingConfig {
    /// Enable daily-rotated file logging under ~/.askara/logs
    #[serde(default)]
    pub enabled: bool,

    /// File log level (independent of stderr)
    #[serde(default = "default_file_log_level")]
    pub level: String,
}

fn default_file_log_level() -> String {
    "debug".to_string()
}

impl Config {
    /// Load configuration from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(toml_str).map_err(|e| Error::Config(format!("invalid TOML: {}", e)))?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file path
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Environment overrides: ASKARA_API_URL, ASKARA_PAPER_CODE
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = env::var("ASKARA_API_URL")
            && !url.trim().is_empty()
        {
            self.base_url = url;
        }
        if let Ok(code) = env::var("ASKARA_PAPER_CODE")
            && !code.trim().is_empty()
        {
            self.paper_code = code;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::Config("base_url must not be empty".to_string()));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(Error::Config(format!("base_url must be an http(s) URL: {}", self.base_url)));
        }
        if self.paper_code.trim().is_empty() {
            return Err(Error::Config("paper_code must not be empty".to_string()));
        }
        Ok(())
    }

    /// Example config written on first run
    pub fn example() -> &'static str {
        r#"# askara configuration

# Base URL of the prediction service
base_url = "http://localhost:8000"

# Paper code sent with question-generation requests
paper_code = "MATH101"

[display]
# Clarification entries shown in the sidebar feed
clarification_cap = 8
# Trailing Q/A entries treated as the current exchange
history_window = 2

[display.scroll]
bottom_threshold = 50
settle_ms = 1000
delay_ms = 300

[logging]
level = "warn"
format = "pretty"

[logging.file]
enabled = false
level = "debug"
"#
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            paper_code: default_paper_code(),
            display: DisplayConfig::default(),
            logging: LoggingSection::default(),
        }
    }
}
