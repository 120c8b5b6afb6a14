//! Catalog scorer: every required parameter against one catalog entry.

use crate::config::MatchingConfig;
use crate::domain::catalog::CatalogEntry;
use crate::domain::requirement::{RequiredParameter, Requirement, TolerancePolicy};
use crate::matching::matcher::compare;
use crate::matching::{Classification, MatchReport, ParameterVerdict};
use crate::normalize::Normalizer;

/// Marker shown as the offered value when the candidate has no attribute
/// for a required parameter.
pub const MISSING_VALUE: &str = "—";

/// Produces one verdict per required parameter for a single catalog entry.
///
/// A missing candidate attribute or a normalization failure on either side
/// degrades to a critical-gap verdict; it never aborts the report. Every SKU
/// therefore always yields a comparable report.
pub fn score_entry(
    requirement: &Requirement,
    entry: &CatalogEntry,
    normalizer: &Normalizer,
    config: &MatchingConfig,
) -> MatchReport {
    let mut verdicts = Vec::with_capacity(requirement.parameters.len());
    let mut weighted_closeness = 0.0;
    let mut total_weight = 0.0;

    for parameter in &requirement.parameters {
        let verdict = score_parameter(parameter, entry, normalizer, config);
        let weight = parameter.weight.unwrap_or(1.0).max(0.0);
        weighted_closeness += verdict.closeness * weight;
        total_weight += weight;
        verdicts.push(verdict);
    }

    let overall_score =
        if total_weight > 0.0 { weighted_closeness / total_weight } else { 0.0 };

    MatchReport::new(entry.sku.clone(), verdicts, overall_score)
}

fn score_parameter(
    parameter: &RequiredParameter,
    entry: &CatalogEntry,
    normalizer: &Normalizer,
    config: &MatchingConfig,
) -> ParameterVerdict {
    let required = match normalizer.normalize(&parameter.raw, parameter.family) {
        Ok(value) => value,
        Err(error) => {
            tracing::debug!(parameter = %parameter.name, %error, "requirement value unresolvable");
            let offered = entry
                .attribute(&parameter.name)
                .map(ToString::to_string)
                .unwrap_or_else(|| MISSING_VALUE.to_owned());
            return critical_gap(&parameter.name, parameter.raw.to_string(), offered);
        }
    };

    let Some(raw_offered) = entry.attribute(&parameter.name) else {
        return critical_gap(&parameter.name, required.to_string(), MISSING_VALUE.to_owned());
    };

    let offered = match normalizer.normalize(raw_offered, parameter.family) {
        Ok(value) => value,
        Err(error) => {
            tracing::debug!(
                parameter = %parameter.name,
                sku = %entry.sku.0,
                %error,
                "candidate value unresolvable"
            );
            return critical_gap(&parameter.name, required.to_string(), raw_offered.to_string());
        }
    };

    let tolerance = resolve_tolerance(parameter, config);
    let substitutes: Vec<String> =
        parameter.substitutes.iter().map(|s| normalizer.canonical_label(s)).collect();

    compare(&parameter.name, &required, &offered, &tolerance, &substitutes)
}

fn resolve_tolerance(parameter: &RequiredParameter, config: &MatchingConfig) -> TolerancePolicy {
    parameter
        .tolerance
        .or_else(|| config.family_tolerances.get(&parameter.family).copied())
        .unwrap_or(config.default_tolerance)
}

fn critical_gap(parameter: &str, required: String, offered: String) -> ParameterVerdict {
    ParameterVerdict {
        parameter: parameter.to_owned(),
        required,
        offered,
        classification: Classification::CriticalGap,
        closeness: 0.0,
    }
}
