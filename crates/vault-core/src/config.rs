//! Configuration types for the vault list engine

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default search debounce in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// Default session storage key for persisted filters
pub const DEFAULT_STORAGE_KEY: &str = "vault-list-filters";

/// Vault list engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Quiet period before a typed query is applied
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Key under which filter state is stored for the session
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            storage_key: default_storage_key(),
        }
    }
}

impl EngineConfig {
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Parse a config document, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        if config.storage_key.is_empty() {
            return Err(Error::Config("storageKey must not be empty".to_string()));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.debounce_ms, 200);
        assert_eq!(config.storage_key, "vault-list-filters");
        assert_eq!(config.debounce_delay(), Duration::from_millis(200));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = EngineConfig::from_json(r#"{"debounceMs": 350}"#).unwrap();
        assert_eq!(config.debounce_ms, 350);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(
            EngineConfig::from_json("not json"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            EngineConfig::from_json(r#"{"storageKey": ""}"#),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_config_serialization() {
        let config = EngineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
