//! Roll-up figures for the executive view: win confidence and margin.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::CatalogEntry;
use crate::gaps::GapAnalysis;
use crate::matching::MatchReport;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProposalSummary {
    /// Overall score discounted by the mean acceptance likelihood of the
    /// open gaps; 1.0 mean when the report is fully matched.
    pub win_confidence: f64,
    /// `(unit_price - unit_cost) / unit_price × 100`, when the winning entry
    /// carries a cost basis.
    pub margin_pct: Option<Decimal>,
}

pub fn summarize(
    report: &MatchReport,
    gaps: &GapAnalysis,
    entry: &CatalogEntry,
) -> ProposalSummary {
    let acceptance_mean = if gaps.entries.is_empty() {
        1.0
    } else {
        gaps.entries.iter().map(|entry| entry.acceptance_likelihood).sum::<f64>()
            / gaps.entries.len() as f64
    };

    let margin_pct = entry.unit_cost.and_then(|unit_cost| {
        if entry.unit_price.is_zero() {
            None
        } else {
            Some((entry.unit_price - unit_cost) / entry.unit_price * Decimal::ONE_HUNDRED)
        }
    });

    ProposalSummary { win_confidence: report.overall_score * acceptance_mean, margin_pct }
}
