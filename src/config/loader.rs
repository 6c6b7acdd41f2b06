//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading fiscal tax
//! schedules from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{BracketTableConfig, InsuranceConfig, ScheduleMetadata, TaxSchedule};

/// Loads and provides access to a fiscal tax schedule.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and validates them into a [`TaxSchedule`].
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/jp2024/
/// ├── schedule.yaml   # Schedule metadata
/// ├── brackets.yaml   # Progressive income-tax bracket table
/// └── insurance.yaml  # Insurance premium and resident tax rates
/// ```
///
/// # Example
///
/// ```no_run
/// use perdiem_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/jp2024").unwrap();
/// println!("Loaded schedule: {}", loader.metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    schedule: TaxSchedule,
}

impl ConfigLoader {
    /// Loads a schedule from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the schedule directory (e.g., "./config/jp2024")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - The bracket table or rates are structurally invalid (`InvalidSchedule`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use perdiem_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/jp2024")?;
    /// # Ok::<(), perdiem_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<ScheduleMetadata>(&path.join("schedule.yaml"))?;
        let bracket_table = Self::load_yaml::<BracketTableConfig>(&path.join("brackets.yaml"))?;
        let insurance_config = Self::load_yaml::<InsuranceConfig>(&path.join("insurance.yaml"))?;

        let schedule = TaxSchedule::new(
            metadata,
            bracket_table.brackets,
            insurance_config.insurance,
            insurance_config.resident_tax.rate,
        )?;

        Ok(Self { schedule })
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

    /// Returns the validated tax schedule.
    pub fn schedule(&self) -> &TaxSchedule {
        &self.schedule
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        self.schedule.metadata()
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
    fn test_load_shipped_jp2024_schedule() {
        let loader = ConfigLoader::load("./config/jp2024").unwrap();
        let schedule = loader.schedule();

        assert_eq!(loader.metadata().jurisdiction, "JP");
        assert_eq!(loader.metadata().fiscal_year, 2024);
        assert_eq!(schedule.brackets().len(), 7);
        assert_eq!(schedule.insurance().health_rate, dec("0.0494"));
        assert_eq!(schedule.insurance().pension_rate, dec("0.0915"));
        assert_eq!(schedule.insurance().employment_rate, dec("0.003"));
        assert_eq!(schedule.insurance().care_rate, dec("0.0159"));
        assert_eq!(schedule.resident_tax_rate(), dec("0.1"));
    }

    #[test]
    fn test_shipped_brackets_match_statutory_table() {
        let loader = ConfigLoader::load("./config/jp2024").unwrap();
        let brackets = loader.schedule().brackets();

        assert_eq!(brackets[0].upper_bound, Some(dec("1950000")));
        assert_eq!(brackets[0].marginal_rate, dec("0.05"));
        assert_eq!(brackets[3].upper_bound, Some(dec("9000000")));
        assert_eq!(brackets[3].base_tax, dec("962500"));
        assert_eq!(brackets[6].upper_bound, None);
        assert_eq!(brackets[6].base_tax, dec("13204000"));
        assert_eq!(brackets[6].marginal_rate, dec("0.45"));
    }

    #[test]
    fn test_missing_directory_returns_config_not_found() {
        let result = ConfigLoader::load("./config/does_not_exist");
        match result.unwrap_err() {
            EngineError::ConfigNotFound { path } => {
                assert!(path.contains("schedule.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }
}
