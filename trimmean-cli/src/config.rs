//! Configuration loading from trimmean.toml
//!
//! Trimmean configuration can be specified in a `trimmean.toml` file in the project root.
//! The configuration is automatically discovered by walking up from the current directory.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use trimmean_input::DigitsPolicy;
use trimmean_report::OutputFormat;
use trimmean_stats::{DEFAULT_DIGITS, MAX_DIGITS, MAX_PERCENT};

/// File name looked up during discovery
pub const CONFIG_FILE_NAME: &str = "trimmean.toml";

/// Semantic problems in an otherwise well-formed configuration file
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// `input.default_digits` exceeds the digits limit
    #[error("input.default_digits must be between 0 and {max}, got {value}")]
    DefaultDigitsOutOfRange {
        /// Configured value
        value: u32,
        /// Largest accepted value
        max: u32,
    },

    /// `defaults.digits` exceeds the digits limit
    #[error("defaults.digits must be between 0 and {max}, got {value}")]
    DigitsOutOfRange {
        /// Configured value
        value: u32,
        /// Largest accepted value
        max: u32,
    },

    /// `defaults.percent` lies outside 0 to 100
    #[error("defaults.percent must be between 0 and {max}, got {value}")]
    PercentOutOfRange {
        /// Configured value
        value: f64,
        /// Largest accepted value
        max: f64,
    },

    /// `output.format` names no known format
    #[error("output.format: {0}")]
    UnknownFormat(String),
}

/// Trimmean configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrimmeanConfig {
    /// Input handling
    #[serde(default)]
    pub input: InputConfig,
    /// Fallback field values used when the command line omits them
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Input handling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Reject an empty digits field instead of falling back to `default_digits`
    #[serde(default = "default_require_digits")]
    pub require_digits: bool,
    /// Digits used for an empty field when `require_digits` is false
    #[serde(default = "default_digits")]
    pub default_digits: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            require_digits: default_require_digits(),
            default_digits: default_digits(),
        }
    }
}

fn default_require_digits() -> bool {
    true
}
fn default_digits() -> u32 {
    DEFAULT_DIGITS
}

/// Values substituted for omitted command-line fields
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    /// Trim percentage
    #[serde(default)]
    pub percent: Option<f64>,
    /// Rounding digits
    #[serde(default)]
    pub digits: Option<u32>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human" or "json"
    #[serde(default = "default_format")]
    pub format: String,
    /// List the surviving elements in human output
    #[serde(default = "default_show_trimmed")]
    pub show_trimmed: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            show_trimmed: default_show_trimmed(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}
fn default_show_trimmed() -> bool {
    true
}

impl TrimmeanConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        Self::discover_from(&dir)
    }

    /// Walk up from `start` looking for `trimmean.toml`
    pub fn discover_from(start: &Path) -> Option<Self> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                tracing::debug!(path = %config_path.display(), "loading configuration");
                return match Self::load(&config_path) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        tracing::warn!(path = %config_path.display(), error = %e, "ignoring unreadable configuration");
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Check value ranges that TOML typing alone cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.default_digits > MAX_DIGITS {
            return Err(ConfigError::DefaultDigitsOutOfRange {
                value: self.input.default_digits,
                max: MAX_DIGITS,
            });
        }
        if let Some(digits) = self.defaults.digits {
            if digits > MAX_DIGITS {
                return Err(ConfigError::DigitsOutOfRange {
                    value: digits,
                    max: MAX_DIGITS,
                });
            }
        }
        if let Some(percent) = self.defaults.percent {
            if !(0.0..=MAX_PERCENT).contains(&percent) {
                return Err(ConfigError::PercentOutOfRange {
                    value: percent,
                    max: MAX_PERCENT,
                });
            }
        }
        self.output_format()?;
        Ok(())
    }

    /// Digits policy implied by the `[input]` section
    pub fn digits_policy(&self) -> DigitsPolicy {
        if self.input.require_digits {
            DigitsPolicy::Required
        } else {
            DigitsPolicy::Default(self.input.default_digits)
        }
    }

    /// Parsed `output.format`
    pub fn output_format(&self) -> Result<OutputFormat, ConfigError> {
        self.output.format.parse().map_err(ConfigError::UnknownFormat)
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# Trimmean Configuration

[input]
# Reject an empty digits field; set to false to fall back to default_digits
require_digits = true
# Digits used for an empty field when require_digits = false (0 to 8)
default_digits = 2

[defaults]
# Trim percentage used when --percent is not given (uncomment to enable)
# percent = 20
# Rounding digits used when --digits is not given (uncomment to enable)
# digits = 2

[output]
# Default output format: human, json
format = "human"
# List the elements that survived trimming
show_trimmed = true
"#
        .to_string()
    }
}
