use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::ConfigProvider;
use crate::utils::error::{BoxingError, Result};
use crate::utils::validation::{validate_one_of, validate_path, Validate, LOG_LEVELS};

pub const DEFAULT_ROSTER_PATH: &str = "boxers.json";

/// File-based settings, e.g.
///
/// ```toml
/// [roster]
/// path = "data/boxers.json"
///
/// [random]
/// seed = 42
///
/// [logging]
/// level = "debug"
/// json = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingConfig {
    pub roster: RosterConfig,
    pub random: Option<RandomConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomConfig {
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            roster: RosterConfig {
                path: DEFAULT_ROSTER_PATH.to_string(),
            },
            random: None,
            logging: None,
        }
    }
}

impl RingConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BoxingError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| BoxingError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.json)
            .unwrap_or(false)
    }
}

impl Validate for RingConfig {
    fn validate(&self) -> Result<()> {
        validate_path("roster.path", &self.roster.path)?;
        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, LOG_LEVELS)?;
        }
        Ok(())
    }
}

impl ConfigProvider for RingConfig {
    fn roster_path(&self) -> &str {
        &self.roster.path
    }

    fn seed(&self) -> Option<u64> {
        self.random.as_ref().and_then(|r| r.seed)
    }

    fn verbose(&self) -> bool {
        matches!(self.log_level(), Some("debug") | Some("trace"))
    }
}
