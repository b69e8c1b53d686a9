//! Component configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display time for notifications without their own timeout
    pub snackbar_timeout_ms: u64,
    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Config {
    pub fn snackbar_timeout(&self) -> Duration {
        Duration::from_millis(self.snackbar_timeout_ms)
    }

    /// Parse a JSON document; absent fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.snackbar_timeout_ms == 0 {
            return Err(CoreError::Config(
                "snackbar_timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snackbar_timeout_ms: mdl_snackbar::DEFAULT_TIMEOUT.as_millis() as u64,
            log_filter: "info".to_string(),
        }
    }
}
