//! Parsing for the JSON rule configuration file
//!
//! The file is an object with a `rules` key mapping flag names to booleans:
//!
//! ```json
//! { "rules": { "validateQueryType": true, "alphabeticalOrderFields": false } }
//! ```

use crate::error::ConfigError;
use crate::types::RuleName;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Main configuration struct for the rule configuration file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Rule toggles
    pub rules: RulesConfig,
}

/// Shape of the file before flag values are checked
#[derive(Deserialize)]
struct RawConfig {
    rules: Map<String, Value>,
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a JSON string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(s)?;
        Ok(Config {
            rules: RulesConfig::from_map(&raw.rules)?,
        })
    }
}

/// The set of enabled rule flags
///
/// Flags that are absent from the file are disabled.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RulesConfig {
    enabled: BTreeSet<RuleName>,
}

impl RulesConfig {
    /// Creates a configuration with exactly the given flags enabled
    pub fn with_enabled(rules: impl IntoIterator<Item = RuleName>) -> Self {
        Self {
            enabled: rules.into_iter().collect(),
        }
    }

    /// Creates a configuration with every flag enabled
    pub fn all() -> Self {
        Self::with_enabled(RuleName::ALL)
    }

    /// Builds the flag set from the `rules` object
    ///
    /// Unrecognized keys are ignored whatever their value. Recognized keys
    /// must hold a boolean.
    fn from_map(map: &Map<String, Value>) -> Result<Self, ConfigError> {
        let mut enabled = BTreeSet::new();

        for (key, value) in map {
            let Some(rule) = RuleName::from_key(key) else {
                tracing::warn!(key = %key, "ignoring unrecognized rule in configuration");
                continue;
            };

            match value {
                Value::Bool(true) => {
                    enabled.insert(rule);
                }
                Value::Bool(false) => {}
                other => {
                    return Err(ConfigError::InvalidValue {
                        field: key.clone(),
                        message: format!("expected a boolean, found {}", other),
                    });
                }
            }
        }

        Ok(Self { enabled })
    }

    /// Returns whether the given flag is on
    pub fn is_enabled(&self, rule: RuleName) -> bool {
        self.enabled.contains(&rule)
    }

    /// Returns true if no flag is enabled
    pub fn is_empty(&self) -> bool {
        self.enabled.is_empty()
    }
}
