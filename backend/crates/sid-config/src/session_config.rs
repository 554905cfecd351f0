use crate::{ConfigError, ConfigErrorResult, DEFAULT_SIGN_IN_DELAY_MS, MAX_SIGN_IN_DELAY_MS};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Simulated processing time of sign-in and sign-up
    pub sign_in_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sign_in_delay_ms: DEFAULT_SIGN_IN_DELAY_MS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.sign_in_delay_ms > MAX_SIGN_IN_DELAY_MS {
            return Err(ConfigError::session(format!(
                "sign_in_delay_ms must be at most {}, got {}",
                MAX_SIGN_IN_DELAY_MS, self.sign_in_delay_ms
            )));
        }
        Ok(())
    }

    pub fn sign_in_delay(&self) -> Duration {
        Duration::from_millis(self.sign_in_delay_ms)
    }
}
