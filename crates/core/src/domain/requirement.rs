use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenderId(pub String);

/// An attribute value as it arrives from extraction or catalog ingestion,
/// before any unit/synonym normalization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawValue {
    pub value: String,
    pub unit: Option<String>,
}

impl RawValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into(), unit: None }
    }

    pub fn with_unit(value: impl Into<String>, unit: impl Into<String>) -> Self {
        Self { value: value.into(), unit: Some(unit.into()) }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.unit {
            Some(unit) => write!(f, "{} {}", self.value, unit),
            None => write!(f, "{}", self.value),
        }
    }
}

/// Unit family a parameter belongs to. Numeric families carry a canonical
/// unit every raw value is converted into before comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterFamily {
    Voltage,
    CrossSection,
    Length,
    Temperature,
    Categorical,
}

impl ParameterFamily {
    pub fn canonical_unit(&self) -> Option<&'static str> {
        match self {
            Self::Voltage => Some("V"),
            Self::CrossSection => Some("mm²"),
            Self::Length => Some("m"),
            Self::Temperature => Some("°C"),
            Self::Categorical => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Categorical)
    }
}

/// Relative tolerance bands, expressed as fractions (0.05 = ±5%).
///
/// A delta within `match_band` classifies as a full match, within
/// `deviation_band` (inclusive) as a minor deviation, beyond it as a
/// critical gap.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TolerancePolicy {
    pub match_band: f64,
    pub deviation_band: f64,
}

impl TolerancePolicy {
    pub fn new(match_band: f64, deviation_band: f64) -> Self {
        Self { match_band, deviation_band }
    }

    /// Exact-match-or-gap: no deviation band at all.
    pub fn exact() -> Self {
        Self { match_band: 0.0, deviation_band: 0.0 }
    }
}

impl Default for TolerancePolicy {
    fn default() -> Self {
        Self { match_band: 0.0, deviation_band: 0.05 }
    }
}

/// One technical parameter the tender demands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RequiredParameter {
    pub name: String,
    pub raw: RawValue,
    pub family: ParameterFamily,
    /// Overrides the configured tolerance for this parameter only.
    #[serde(default)]
    pub tolerance: Option<TolerancePolicy>,
    /// Importance weight; parameters without one weigh 1.0.
    #[serde(default)]
    pub weight: Option<f64>,
    /// Categorical values the buyer historically accepts in place of the
    /// required one.
    #[serde(default)]
    pub substitutes: Vec<String>,
}

impl RequiredParameter {
    pub fn numeric(
        name: impl Into<String>,
        value: impl Into<String>,
        unit: impl Into<String>,
        family: ParameterFamily,
    ) -> Self {
        Self {
            name: name.into(),
            raw: RawValue::with_unit(value, unit),
            family,
            tolerance: None,
            weight: None,
            substitutes: Vec::new(),
        }
    }

    pub fn categorical(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw: RawValue::new(value),
            family: ParameterFamily::Categorical,
            tolerance: None,
            weight: None,
            substitutes: Vec::new(),
        }
    }

    pub fn with_tolerance(mut self, tolerance: TolerancePolicy) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_substitutes(mut self, substitutes: Vec<String>) -> Self {
        self.substitutes = substitutes;
        self
    }
}

/// The structured requirement set extracted from one tender. Immutable once
/// constructed; parameter order is preserved through every downstream report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub id: TenderId,
    pub parameters: Vec<RequiredParameter>,
}

impl Requirement {
    pub fn new(id: TenderId, parameters: Vec<RequiredParameter>) -> Self {
        Self { id, parameters }
    }
}
