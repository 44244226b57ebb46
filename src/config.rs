//! Session configuration.
//!
//! Expected JSON shape (every field optional):
//!
//! ```json
//! { "reset_delay_ms": 100, "rng_seed": 42 }
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ProblemError;

/// Delay between a reset and the new problem becoming visible, in milliseconds.
pub const DEFAULT_RESET_DELAY_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Cosmetic pause that lets a transition effect play before the new
    /// problem lands. Zero lands every reset immediately.
    pub reset_delay_ms: u64,
    /// Seed for reproducible sessions; entropy when absent.
    pub rng_seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            reset_delay_ms: DEFAULT_RESET_DELAY_MS,
            rng_seed: None,
        }
    }
}

impl SessionConfig {
    /// No transition delay; handy for tests and command-line drivers.
    pub fn immediate() -> Self {
        SessionConfig { reset_delay_ms: 0, ..Self::default() }
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    pub fn from_json(raw: &str) -> Result<Self, ProblemError> {
        serde_json::from_str(raw).map_err(|e| ProblemError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_takes_defaults() {
        let cfg = SessionConfig::from_json("{}").unwrap();
        assert_eq!(cfg, SessionConfig::default());
        assert_eq!(cfg.reset_delay(), Duration::from_millis(100));
    }

    #[test]
    fn fields_override_defaults() {
        let cfg = SessionConfig::from_json(r#"{ "reset_delay_ms": 0, "rng_seed": 42 }"#).unwrap();
        assert_eq!(cfg.reset_delay_ms, 0);
        assert_eq!(cfg.rng_seed, Some(42));
    }

    #[test]
    fn malformed_json_is_invalid_config() {
        let err = SessionConfig::from_json("{ reset_delay_ms: ").unwrap_err();
        assert!(matches!(err, ProblemError::InvalidConfig(_)));
    }
}
