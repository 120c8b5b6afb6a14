use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::requirement::{ParameterFamily, TolerancePolicy};
use crate::matching::Classification;

/// Historical acceptance rate for one (parameter, classification) pair,
/// i.e. how often buyers accepted a proposal deviating on that parameter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AcceptanceRate {
    pub parameter: String,
    pub classification: Classification,
    pub likelihood: f64,
}

/// Injected configuration for the whole pipeline: synonym table for
/// categorical values, tolerance defaults, historical acceptance rates and
/// pricing currency. Tests substitute fixtures; production loads a TOML file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Alias → canonical label, e.g. "Cu" → "Copper". Compared casefolded.
    pub synonyms: HashMap<String, String>,
    /// Fallback tolerance when neither the parameter nor its family carries one.
    pub default_tolerance: TolerancePolicy,
    /// Per-family tolerance defaults.
    pub family_tolerances: HashMap<ParameterFamily, TolerancePolicy>,
    pub acceptance_rates: Vec<AcceptanceRate>,
    /// Conservative likelihood for (parameter, classification) pairs with no
    /// recorded history.
    pub likelihood_floor: f64,
    pub currency: String,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            synonyms: HashMap::new(),
            default_tolerance: TolerancePolicy::default(),
            family_tolerances: HashMap::new(),
            acceptance_rates: Vec::new(),
            likelihood_floor: 0.5,
            currency: "USD".to_owned(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl MatchingConfig {
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)
            .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;
        let config: Self = toml::from_str(&contents)
            .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_tolerance("default_tolerance", &self.default_tolerance)?;
        for (family, tolerance) in &self.family_tolerances {
            validate_tolerance(&format!("family_tolerances.{family:?}"), tolerance)?;
        }
        if !(0.0..=1.0).contains(&self.likelihood_floor) {
            return Err(ConfigError::Validation(format!(
                "likelihood_floor must be within [0, 1], got {}",
                self.likelihood_floor
            )));
        }
        for rate in &self.acceptance_rates {
            if !(0.0..=1.0).contains(&rate.likelihood) {
                return Err(ConfigError::Validation(format!(
                    "acceptance likelihood for `{}` must be within [0, 1], got {}",
                    rate.parameter, rate.likelihood
                )));
            }
        }
        Ok(())
    }
}

fn validate_tolerance(context: &str, tolerance: &TolerancePolicy) -> Result<(), ConfigError> {
    if tolerance.match_band < 0.0 || tolerance.deviation_band < 0.0 {
        return Err(ConfigError::Validation(format!("{context}: tolerance bands must be >= 0")));
    }
    if tolerance.match_band > tolerance.deviation_band {
        return Err(ConfigError::Validation(format!(
            "{context}: match_band {} exceeds deviation_band {}",
            tolerance.match_band, tolerance.deviation_band
        )));
    }
    Ok(())
}
