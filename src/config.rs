//! Tunables for the narrow phase and the resolution layer.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),
}

/// Iteration budgets and step sizes used by collision queries.
///
/// Missing keys in a TOML source fall back to the defaults below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Upper bound on GJK refinement iterations before giving up.
    pub gjk_max_iterations: usize,
    /// EPA stops once a new support point improves the closest edge by less than this.
    pub epa_tolerance: f64,
    /// Upper bound on EPA expansions; the best edge so far is returned after it.
    pub epa_max_iterations: usize,
    /// Distance each body moves per depenetration nudge.
    pub depenetration_step: f64,
    /// Upper bound on nudges for a single `resolve_collision` call.
    pub max_depenetration_steps: usize,
}

impl CollisionConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serializes the configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Loads a configuration from a TOML file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Writes the configuration to a TOML file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            gjk_max_iterations: 1000,
            epa_tolerance: 1e-4,
            epa_max_iterations: 128,
            depenetration_step: 0.1,
            max_depenetration_steps: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = CollisionConfig::from_toml_str("depenetration_step = 0.5\n").unwrap();
        assert_eq!(config.depenetration_step, 0.5);
        assert_eq!(config.gjk_max_iterations, 1000);
        assert_eq!(config.epa_max_iterations, 128);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = CollisionConfig::from_toml_str("gjk_max_iterations = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("collision.toml");

        let config = CollisionConfig {
            gjk_max_iterations: 64,
            epa_tolerance: 1e-3,
            ..CollisionConfig::default()
        };
        config.save_to_file(&path).unwrap();

        let loaded = CollisionConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CollisionConfig::load_from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
