use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Overlap cutoff applied when none is specified, in angstroms.
pub const DEFAULT_OVERLAP_CUTOFF: f64 = 0.8;
/// Bond-length cutoff applied when none is specified, in angstroms.
pub const DEFAULT_BOND_CUTOFF: f64 = 2.5;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("invalid {name} cutoff {value}; cutoffs must be positive and finite")]
    InvalidCutoff { name: &'static str, value: f64 },

    #[error("failed to read configuration file: {0}")]
    Io(String),

    #[error("malformed configuration: {0}")]
    Malformed(String),
}

/// Thresholds for a structure defect scan.
///
/// Each cutoff is optional: `None` disables that check entirely, which is
/// distinct from a check that ran and found nothing (both surface as a `None`
/// field on the per-frame record, see
/// [`BadFrame`](crate::analysis::checks::structure::BadFrame)).
///
/// In TOML form a missing key disables the corresponding check:
///
/// ```toml
/// overlap_cutoff = 0.8
/// bond_cutoff = 2.5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Steric overlap cutoff in angstroms; pairs at or below this distance
    /// are flagged. `None` disables overlap checking.
    pub overlap_cutoff: Option<f64>,
    /// Bond-length cutoff in angstroms; bonds strictly longer than this are
    /// flagged. `None` disables bond checking.
    pub bond_cutoff: Option<f64>,
}

impl Default for CheckConfig {
    /// Both checks enabled at the conventional cutoffs (0.8 Å overlap,
    /// 2.5 Å bond).
    fn default() -> Self {
        Self {
            overlap_cutoff: Some(DEFAULT_OVERLAP_CUTOFF),
            bond_cutoff: Some(DEFAULT_BOND_CUTOFF),
        }
    }
}

impl CheckConfig {
    pub fn builder() -> CheckConfigBuilder {
        CheckConfigBuilder::new()
    }

    /// Parses a configuration from TOML text and validates it.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(text).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a TOML file and validates it.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&text)
    }

    /// Checks that every enabled cutoff is positive and finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_cutoff("overlap", self.overlap_cutoff)?;
        validate_cutoff("bond", self.bond_cutoff)?;
        Ok(())
    }
}

fn validate_cutoff(name: &'static str, cutoff: Option<f64>) -> Result<(), ConfigError> {
    match cutoff {
        Some(value) if !(value > 0.0 && value.is_finite()) => {
            Err(ConfigError::InvalidCutoff { name, value })
        }
        _ => Ok(()),
    }
}

/// Builds a [`CheckConfig`] with both checks initially disabled; each setter
/// enables its check at the given cutoff.
#[derive(Debug, Default)]
pub struct CheckConfigBuilder {
    overlap_cutoff: Option<f64>,
    bond_cutoff: Option<f64>,
}

impl CheckConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overlap_cutoff(mut self, cutoff: f64) -> Self {
        self.overlap_cutoff = Some(cutoff);
        self
    }

    pub fn bond_cutoff(mut self, cutoff: f64) -> Self {
        self.bond_cutoff = Some(cutoff);
        self
    }

    pub fn build(self) -> Result<CheckConfig, ConfigError> {
        let config = CheckConfig {
            overlap_cutoff: self.overlap_cutoff,
            bond_cutoff: self.bond_cutoff,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_enables_both_checks() {
        let config = CheckConfig::default();
        assert_eq!(config.overlap_cutoff, Some(0.8));
        assert_eq!(config.bond_cutoff, Some(2.5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_starts_with_both_checks_disabled() {
        let config = CheckConfig::builder().build().unwrap();
        assert_eq!(config.overlap_cutoff, None);
        assert_eq!(config.bond_cutoff, None);
    }

    #[test]
    fn builder_sets_cutoffs() {
        let config = CheckConfig::builder()
            .overlap_cutoff(1.0)
            .bond_cutoff(3.0)
            .build()
            .unwrap();
        assert_eq!(config.overlap_cutoff, Some(1.0));
        assert_eq!(config.bond_cutoff, Some(3.0));
    }

    #[test]
    fn builder_rejects_non_positive_cutoffs() {
        let result = CheckConfig::builder().overlap_cutoff(0.0).build();
        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidCutoff {
                name: "overlap",
                value: 0.0
            }
        );

        let result = CheckConfig::builder().bond_cutoff(-2.5).build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidCutoff { name: "bond", .. }
        ));
    }

    #[test]
    fn builder_rejects_non_finite_cutoffs() {
        let result = CheckConfig::builder().overlap_cutoff(f64::NAN).build();
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidCutoff { name: "overlap", .. }
        ));
    }

    #[test]
    fn toml_missing_key_disables_that_check() {
        let config = CheckConfig::from_toml_str("overlap_cutoff = 0.7\n").unwrap();
        assert_eq!(config.overlap_cutoff, Some(0.7));
        assert_eq!(config.bond_cutoff, None);
    }

    #[test]
    fn toml_with_both_keys_parses() {
        let config =
            CheckConfig::from_toml_str("overlap_cutoff = 0.8\nbond_cutoff = 2.5\n").unwrap();
        assert_eq!(config, CheckConfig::default());
    }

    #[test]
    fn toml_rejects_unknown_keys() {
        let result = CheckConfig::from_toml_str("overlap_cutof = 0.8\n");
        assert!(matches!(result.unwrap_err(), ConfigError::Malformed(_)));
    }

    #[test]
    fn toml_rejects_invalid_cutoff_values() {
        let result = CheckConfig::from_toml_str("bond_cutoff = -1.0\n");
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidCutoff { name: "bond", .. }
        ));
    }

    #[test]
    fn from_file_round_trips_through_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "overlap_cutoff = 0.9").unwrap();
        writeln!(file, "bond_cutoff = 2.0").unwrap();

        let config = CheckConfig::from_file(file.path()).unwrap();
        assert_eq!(config.overlap_cutoff, Some(0.9));
        assert_eq!(config.bond_cutoff, Some(2.0));
    }

    #[test]
    fn from_file_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = CheckConfig::from_file(dir.path().join("absent.toml"));
        assert!(matches!(result.unwrap_err(), ConfigError::Io(_)));
    }
}
