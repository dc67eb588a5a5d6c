//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! statutory rate configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::StatutoryRates;

/// Loads and provides access to the statutory rate configuration.
///
/// # Directory Structure
///
/// The configuration directory holds a single file:
/// ```text
/// config/statutory/
/// └── statutory.yaml   # PF, ESI, and overtime rates
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/statutory")?;
/// let rates = loader.rates();
/// println!("ESI exemption threshold: {}", rates.esi.exemption_threshold);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rates: StatutoryRates,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when `statutory.yaml` is
    /// missing and [`EngineError::ConfigParseError`] when it contains
    /// invalid YAML or fields of the wrong shape.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let file_path = path.as_ref().join("statutory.yaml");
        let path_str = file_path.display().to_string();

        let content = fs::read_to_string(&file_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let rates = serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })?;

        Ok(Self { rates })
    }

    /// A loader carrying the default statutory rates, for embedders that
    /// do not ship a configuration file.
    pub fn with_defaults() -> Self {
        Self {
            rates: StatutoryRates::default(),
        }
    }

    /// Returns the loaded rates.
    pub fn rates(&self) -> &StatutoryRates {
        &self.rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_shipped_config_matches_defaults() {
        let loader = ConfigLoader::load("./config/statutory").unwrap();
        let rates = loader.rates();

        assert_eq!(rates.pf.employee_rate, dec("0.12"));
        assert_eq!(rates.pf.employee_cap, dec("1800"));
        assert_eq!(rates.esi.exemption_threshold, dec("21000"));
        assert_eq!(rates.overtime.hourly_rate, dec("60"));
    }

    #[test]
    fn test_missing_directory_is_config_not_found() {
        let result = ConfigLoader::load("./config/does-not-exist");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.ends_with("statutory.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let dir = std::env::temp_dir().join("payroll-engine-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("statutory.yaml"), "pf: [not, a, map]").unwrap();

        let result = ConfigLoader::load(&dir);
        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.ends_with("statutory.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_with_defaults() {
        let loader = ConfigLoader::with_defaults();
        assert_eq!(loader.rates().pf.employee_cap, dec("1800"));
    }
}
