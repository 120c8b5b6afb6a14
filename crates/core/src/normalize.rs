//! Parameter normalization: unit conversion and synonym folding.

use std::collections::HashMap;
use std::fmt;

use rust_decimal::Decimal;

use crate::config::MatchingConfig;
use crate::domain::requirement::{ParameterFamily, RawValue};
use crate::errors::NormalizationError;

/// A value after normalization. Numeric magnitudes are exact decimals in
/// the family's canonical unit (so "1.1 kV" and "1100 V" compare equal);
/// categorical values are casefolded canonical labels.
#[derive(Clone, Debug, PartialEq)]
pub enum CanonicalValue {
    Numeric { magnitude: Decimal, unit: &'static str },
    Categorical(String),
}

impl fmt::Display for CanonicalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric { magnitude, unit } => {
                write!(f, "{} {unit}", magnitude.normalize())
            }
            Self::Categorical(label) => write!(f, "{label}"),
        }
    }
}

/// Canonicalizes raw values from both the requirement and catalog sides so
/// comparison is meaningful. The synonym table is injected configuration.
#[derive(Clone, Debug, Default)]
pub struct Normalizer {
    synonyms: HashMap<String, String>,
}

impl Normalizer {
    pub fn new(synonyms: HashMap<String, String>) -> Self {
        let synonyms = synonyms
            .into_iter()
            .map(|(alias, canonical)| (fold_label(&alias), fold_label(&canonical)))
            .collect();
        Self { synonyms }
    }

    pub fn from_config(config: &MatchingConfig) -> Self {
        Self::new(config.synonyms.clone())
    }

    pub fn normalize(
        &self,
        raw: &RawValue,
        family: ParameterFamily,
    ) -> Result<CanonicalValue, NormalizationError> {
        if family.is_numeric() {
            self.normalize_numeric(raw, family)
        } else {
            Ok(CanonicalValue::Categorical(self.canonical_label(&raw.value)))
        }
    }

    /// Trim, collapse whitespace, casefold and fold through the synonym
    /// table. Infallible: an unknown label is simply its own canonical form.
    pub fn canonical_label(&self, value: &str) -> String {
        let folded = fold_label(value);
        self.synonyms.get(&folded).cloned().unwrap_or(folded)
    }

    fn normalize_numeric(
        &self,
        raw: &RawValue,
        family: ParameterFamily,
    ) -> Result<CanonicalValue, NormalizationError> {
        let magnitude: Decimal = raw.value.trim().replace(',', "").parse().map_err(|_| {
            NormalizationError::UnparseableNumber { value: raw.value.clone() }
        })?;
        // A missing unit means the value is already in the canonical unit.
        let factor = match &raw.unit {
            None => Decimal::ONE,
            Some(unit) => unit_factor(family, unit).ok_or_else(|| {
                NormalizationError::UnknownUnit { unit: unit.clone(), family }
            })?,
        };
        Ok(CanonicalValue::Numeric {
            magnitude: magnitude * factor,
            unit: family.canonical_unit().unwrap_or(""),
        })
    }
}

fn fold_label(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

fn unit_factor(family: ParameterFamily, unit: &str) -> Option<Decimal> {
    let token: String = unit
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect::<String>()
        .to_lowercase();

    let factor = match family {
        ParameterFamily::Voltage => match token.as_str() {
            "v" | "volt" | "volts" => Decimal::ONE,
            "kv" | "kilovolt" | "kilovolts" => Decimal::from(1000),
            "mv" | "millivolt" | "millivolts" => Decimal::new(1, 3),
            _ => return None,
        },
        ParameterFamily::CrossSection => match token.as_str() {
            "mm2" | "mm²" | "sqmm" => Decimal::ONE,
            "cm2" | "cm²" | "sqcm" => Decimal::ONE_HUNDRED,
            _ => return None,
        },
        ParameterFamily::Length => match token.as_str() {
            "m" | "metre" | "metres" | "meter" | "meters" => Decimal::ONE,
            "km" | "kilometre" | "kilometres" | "kilometer" | "kilometers" => Decimal::from(1000),
            "cm" => Decimal::new(1, 2),
            "mm" => Decimal::new(1, 3),
            _ => return None,
        },
        ParameterFamily::Temperature => match token.as_str() {
            "c" | "°c" | "degc" | "celsius" => Decimal::ONE,
            _ => return None,
        },
        ParameterFamily::Categorical => return None,
    };
    Some(factor)
}
