//! Multi-attribute comparison of tender requirements against catalog entries.

pub mod matcher;
pub mod ranker;
pub mod scorer;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::SkuId;

/// Outcome of comparing one required parameter against one candidate value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Match,
    MinorDeviation,
    CriticalGap,
}

/// Display hint for the excluded presentation layer. Pure mapping; the core
/// carries no rendering concerns beyond this enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusHint {
    Ok,
    Warn,
    Fail,
}

impl Classification {
    pub fn display_hint(&self) -> StatusHint {
        match self {
            Self::Match => StatusHint::Ok,
            Self::MinorDeviation => StatusHint::Warn,
            Self::CriticalGap => StatusHint::Fail,
        }
    }
}

/// Verdict for one parameter: the two compared values in display form, the
/// classification and a closeness score in [0, 1]. Read-only once produced;
/// a pure function of the two values and the tolerance policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterVerdict {
    pub parameter: String,
    pub required: String,
    pub offered: String,
    pub classification: Classification,
    pub closeness: f64,
}

/// Per-SKU match report: one verdict per required parameter, in requirement
/// order, plus the weighted overall score and cached verdict counts used by
/// the ranker's tie-breaking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub sku: SkuId,
    pub verdicts: Vec<ParameterVerdict>,
    pub overall_score: f64,
    pub match_count: usize,
    pub minor_deviation_count: usize,
    pub critical_gap_count: usize,
}

impl MatchReport {
    pub fn new(sku: SkuId, verdicts: Vec<ParameterVerdict>, overall_score: f64) -> Self {
        let count = |classification: Classification| {
            verdicts.iter().filter(|v| v.classification == classification).count()
        };
        let match_count = count(Classification::Match);
        let minor_deviation_count = count(Classification::MinorDeviation);
        let critical_gap_count = count(Classification::CriticalGap);
        Self {
            sku,
            verdicts,
            overall_score,
            match_count,
            minor_deviation_count,
            critical_gap_count,
        }
    }
}
