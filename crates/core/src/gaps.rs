//! Gap analysis: deviations with rationale and acceptance likelihood.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::MatchingConfig;
use crate::domain::catalog::SkuId;
use crate::matching::{Classification, MatchReport};

/// One non-Match verdict, explained.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GapEntry {
    pub parameter: String,
    pub classification: Classification,
    pub rationale: String,
    /// Historical likelihood the buyer accepts this deviation.
    pub acceptance_likelihood: f64,
}

/// Derived strictly from one match report; entry order follows the report's
/// parameter order, preserving traceability to the original requirement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub sku: SkuId,
    pub entries: Vec<GapEntry>,
}

impl GapAnalysis {
    pub fn is_clean(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Converts a match report into categorized deviations. Acceptance
/// likelihoods come from a configured historical-rate table keyed by
/// (parameter, classification); unknown pairs fall back to a conservative
/// floor.
#[derive(Clone, Debug)]
pub struct GapAnalyzer {
    rates: HashMap<(String, Classification), f64>,
    floor: f64,
}

impl GapAnalyzer {
    pub fn new(rates: HashMap<(String, Classification), f64>, floor: f64) -> Self {
        let rates = rates
            .into_iter()
            .map(|((parameter, classification), likelihood)| {
                ((normalize_key(&parameter), classification), likelihood)
            })
            .collect();
        Self { rates, floor }
    }

    pub fn from_config(config: &MatchingConfig) -> Self {
        let rates = config
            .acceptance_rates
            .iter()
            .map(|rate| ((rate.parameter.clone(), rate.classification), rate.likelihood))
            .collect();
        Self::new(rates, config.likelihood_floor)
    }

    pub fn analyze(&self, report: &MatchReport) -> GapAnalysis {
        let entries = report
            .verdicts
            .iter()
            .filter(|verdict| verdict.classification != Classification::Match)
            .map(|verdict| GapEntry {
                parameter: verdict.parameter.clone(),
                classification: verdict.classification,
                rationale: format!(
                    "{} requirement is {}; selected SKU offers {}",
                    verdict.parameter, verdict.required, verdict.offered
                ),
                acceptance_likelihood: self
                    .rates
                    .get(&(normalize_key(&verdict.parameter), verdict.classification))
                    .copied()
                    .unwrap_or(self.floor),
            })
            .collect();

        GapAnalysis { sku: report.sku.clone(), entries }
    }
}

fn normalize_key(input: &str) -> String {
    input.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::GapAnalyzer;
    use crate::domain::catalog::SkuId;
    use crate::matching::{Classification, MatchReport, ParameterVerdict};

    fn verdict(
        parameter: &str,
        required: &str,
        offered: &str,
        classification: Classification,
        closeness: f64,
    ) -> ParameterVerdict {
        ParameterVerdict {
            parameter: parameter.to_owned(),
            required: required.to_owned(),
            offered: offered.to_owned(),
            classification,
            closeness,
        }
    }

    fn report() -> MatchReport {
        MatchReport::new(
            SkuId("SKU-A".to_owned()),
            vec![
                verdict("Voltage", "1100 V", "1100 V", Classification::Match, 1.0),
                verdict(
                    "Armour",
                    "strip",
                    "galvanized steel",
                    Classification::MinorDeviation,
                    0.5,
                ),
                verdict("Sheath Type", "frls pvc", "—", Classification::CriticalGap, 0.0),
            ],
            0.5,
        )
    }

    #[test]
    fn only_non_match_verdicts_become_gap_entries_in_report_order() {
        let analyzer = GapAnalyzer::new(HashMap::new(), 0.5);
        let analysis = analyzer.analyze(&report());

        assert_eq!(analysis.entries.len(), 2);
        assert_eq!(analysis.entries[0].parameter, "Armour");
        assert_eq!(analysis.entries[1].parameter, "Sheath Type");
        assert!(!analysis.is_clean());
    }

    #[test]
    fn rationale_names_both_sides_of_the_deviation() {
        let analyzer = GapAnalyzer::new(HashMap::new(), 0.5);
        let analysis = analyzer.analyze(&report());

        assert_eq!(
            analysis.entries[0].rationale,
            "Armour requirement is strip; selected SKU offers galvanized steel"
        );
    }

    #[test]
    fn configured_rate_overrides_the_floor_case_insensitively() {
        let analyzer = GapAnalyzer::new(
            HashMap::from([(("ARMOUR".to_owned(), Classification::MinorDeviation), 0.95)]),
            0.5,
        );
        let analysis = analyzer.analyze(&report());

        assert_eq!(analysis.entries[0].acceptance_likelihood, 0.95);
        // Unknown (parameter, classification) pair falls back to the floor.
        assert_eq!(analysis.entries[1].acceptance_likelihood, 0.5);
    }

    fn report_with_counts() -> MatchReport {
        MatchReport::new(
            SkuId("SKU-A".to_owned()),
            vec![verdict("Voltage", "1100 V", "1100 V", Classification::Match, 1.0)],
            1.0,
        )
    }

    #[test]
    fn fully_matched_report_yields_a_clean_analysis() {
        let analyzer = GapAnalyzer::new(HashMap::new(), 0.5);
        let analysis = analyzer.analyze(&report_with_counts());
        assert!(analysis.is_clean());
    }
}
