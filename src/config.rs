//! Conversion settings
//!
//! Defaults match the workbook layout produced by the test-definition
//! template. Any field can be overridden from a YAML file:
//!
//! ```yaml
//! master_sheet: TestData
//! row_marker: XMLWebServiceTest
//! sentinel: DONOTINCLUDE
//! validation_first_row: 2
//! pairing: strict
//! feature_title: SpectrumAPI
//! ```

use crate::error::{SpecflowError, SpecflowResult};
use crate::excel::DO_NOT_INCLUDE;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// How inputs and outputs of one case are paired when their counts differ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PairingPolicy {
    /// Unequal counts fail the case
    #[default]
    Strict,
    /// Pair up to the shorter sequence and drop the rest
    Truncate,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpecflowConfig {
    /// Sheet listing one row per test case
    pub master_sheet: String,
    /// Description-column value that selects a master row
    pub row_marker: String,
    /// Cell value meaning "leave this out"
    pub sentinel: String,
    /// First validation-sheet row read as an assertion (1-based)
    pub validation_first_row: u32,
    pub pairing: PairingPolicy,
    /// Emits a `Feature:` header at the top of each file when set
    pub feature_title: Option<String>,
    pub smoke_prefix: String,
    pub regression_prefix: String,
}

impl Default for SpecflowConfig {
    fn default() -> Self {
        Self {
            master_sheet: "TestData".to_string(),
            row_marker: "XMLWebServiceTest".to_string(),
            sentinel: DO_NOT_INCLUDE.to_string(),
            validation_first_row: 2,
            pairing: PairingPolicy::Strict,
            feature_title: None,
            smoke_prefix: "S_".to_string(),
            regression_prefix: "R_".to_string(),
        }
    }
}

impl SpecflowConfig {
    /// Load settings from a YAML file; missing keys keep their defaults
    pub fn load(path: &Path) -> SpecflowResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> SpecflowResult<Self> {
        let config: Self = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make every workbook unparseable
    pub fn validate(&self) -> SpecflowResult<()> {
        if self.master_sheet.trim().is_empty() {
            return Err(SpecflowError::Config(
                "master_sheet must not be empty".to_string(),
            ));
        }
        if self.sentinel.is_empty() {
            return Err(SpecflowError::Config("sentinel must not be empty".to_string()));
        }
        if self.validation_first_row < 2 {
            return Err(SpecflowError::Config(format!(
                "validation_first_row must be at least 2 (row 1 holds scenario names), got {}",
                self.validation_first_row
            )));
        }
        if self.smoke_prefix.is_empty() || self.regression_prefix.is_empty() {
            return Err(SpecflowError::Config(
                "smoke_prefix and regression_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
