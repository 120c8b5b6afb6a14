//! Attribute matcher: one requirement value against one candidate value.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::domain::requirement::TolerancePolicy;
use crate::matching::{Classification, ParameterVerdict};
use crate::normalize::CanonicalValue;

/// Compares one normalized requirement value against one normalized
/// candidate value. Pure function of its inputs and the resolved
/// tolerance/substitute tables.
///
/// Numeric values classify on the relative delta against the tolerance
/// bands (deviation boundary inclusive); closeness is `1 - delta/band`
/// clamped to [0, 1]. Categorical values classify on canonical equality,
/// with configured substitutes scoring a fixed 0.5.
pub fn compare(
    parameter: &str,
    required: &CanonicalValue,
    offered: &CanonicalValue,
    tolerance: &TolerancePolicy,
    substitutes: &[String],
) -> ParameterVerdict {
    let (classification, closeness) = match (required, offered) {
        (
            CanonicalValue::Numeric { magnitude: required, .. },
            CanonicalValue::Numeric { magnitude: offered, .. },
        ) => compare_numeric(*required, *offered, tolerance),
        (CanonicalValue::Categorical(required), CanonicalValue::Categorical(offered)) => {
            compare_categorical(required, offered, substitutes)
        }
        // A numeric requirement answered with a label (or vice versa) can
        // never satisfy the tender.
        _ => (Classification::CriticalGap, 0.0),
    };

    ParameterVerdict {
        parameter: parameter.to_owned(),
        required: required.to_string(),
        offered: offered.to_string(),
        classification,
        closeness,
    }
}

fn compare_numeric(
    required: Decimal,
    offered: Decimal,
    tolerance: &TolerancePolicy,
) -> (Classification, f64) {
    // Relative delta; absolute when the requirement is zero.
    let delta = if required.is_zero() {
        (offered - required).abs()
    } else {
        ((offered - required) / required).abs()
    };
    let delta = delta.to_f64().unwrap_or(f64::INFINITY);

    if delta <= tolerance.match_band {
        let closeness = if tolerance.deviation_band > 0.0 {
            (1.0 - delta / tolerance.deviation_band).clamp(0.0, 1.0)
        } else {
            1.0
        };
        (Classification::Match, closeness)
    } else if delta <= tolerance.deviation_band {
        (Classification::MinorDeviation, (1.0 - delta / tolerance.deviation_band).clamp(0.0, 1.0))
    } else {
        (Classification::CriticalGap, 0.0)
    }
}

fn compare_categorical(
    required: &str,
    offered: &str,
    substitutes: &[String],
) -> (Classification, f64) {
    if required == offered {
        (Classification::Match, 1.0)
    } else if substitutes.iter().any(|substitute| substitute == offered) {
        (Classification::MinorDeviation, 0.5)
    } else {
        (Classification::CriticalGap, 0.0)
    }
}
