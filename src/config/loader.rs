//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the employer
//! leave policy from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::LeavePolicy;

/// Loads and provides access to the leave policy.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── policy.yaml   # Company limit parameters
/// ```
///
/// # Example
///
/// ```no_run
/// use paid_leave_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Loaded policy: {}", loader.policy().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: LeavePolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `policy.yaml` is missing
    /// - the file contains invalid YAML
    /// - a parameter is out of range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join("policy.yaml");
        let policy = Self::load_yaml::<LeavePolicy>(&policy_path)?;
        policy.validate()?;

        debug!(
            path = %policy_path.display(),
            policy = %policy.name,
            "Loaded leave policy"
        );

        Ok(Self { policy })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }

    /// Consumes the loader, returning the policy.
    pub fn into_policy(self) -> LeavePolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn config_path() -> &'static str {
        "./config/default"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.policy().name, "aide-a-domicile");
    }

    #[test]
    fn test_shipped_policy_matches_defaults() {
        let policy = ConfigLoader::load(config_path()).unwrap().into_policy();
        let defaults = LeavePolicy::default();

        assert_eq!(policy.seniority_bonus_cap_years, defaults.seniority_bonus_cap_years);
        assert_eq!(policy.consumption_tolerance, defaults.consumption_tolerance);
        assert_eq!(policy.horizon_margin_rate, defaults.horizon_margin_rate);
        assert_eq!(policy.horizon_margin_rate, Decimal::new(1, 1));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = std::env::temp_dir().join(format!("leave-policy-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("policy.yaml"), "seniority_bonus_cap_years: [oops\n").unwrap();

        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).unwrap();

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_policy_is_rejected() {
        let dir = std::env::temp_dir().join(format!("leave-policy-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("policy.yaml"), "horizon_margin_rate: \"-0.5\"\n").unwrap();

        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).unwrap();

        assert!(matches!(result, Err(EngineError::InvalidPolicy { .. })));
    }
}
