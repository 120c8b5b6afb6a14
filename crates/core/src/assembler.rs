//! Proposal assembler: pure aggregation with a completeness check.

use chrono::Utc;
use uuid::Uuid;

use crate::domain::proposal::Proposal;
use crate::domain::requirement::TenderId;
use crate::errors::IncompleteProposalError;
use crate::gaps::GapAnalysis;
use crate::matching::MatchReport;
use crate::pricing::PricingBreakdown;
use crate::summary::ProposalSummary;

/// Builds one immutable proposal from the four pipeline outputs. No
/// computation of its own; it only refuses partially-formed input so
/// presentation/export never sees an incomplete proposal.
pub fn assemble(
    tender_id: TenderId,
    report: MatchReport,
    gaps: GapAnalysis,
    pricing: PricingBreakdown,
    summary: ProposalSummary,
) -> Result<Proposal, IncompleteProposalError> {
    if report.verdicts.is_empty() {
        return Err(IncompleteProposalError::NoVerdicts { sku: report.sku });
    }
    if gaps.sku != report.sku {
        return Err(IncompleteProposalError::SkuMismatch {
            report_sku: report.sku,
            gaps_sku: gaps.sku,
        });
    }
    if pricing.lines.is_empty() {
        return Err(IncompleteProposalError::EmptyPricing);
    }

    Ok(Proposal {
        run_id: Uuid::new_v4(),
        tender_id,
        report,
        gaps,
        pricing,
        summary,
        created_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::assemble;
    use crate::domain::catalog::SkuId;
    use crate::domain::requirement::TenderId;
    use crate::errors::IncompleteProposalError;
    use crate::gaps::GapAnalysis;
    use crate::matching::{Classification, MatchReport, ParameterVerdict};
    use crate::pricing::{PricingBreakdown, PricingLine};
    use crate::summary::ProposalSummary;

    fn report(sku: &str) -> MatchReport {
        MatchReport::new(
            SkuId(sku.to_owned()),
            vec![ParameterVerdict {
                parameter: "Voltage".to_owned(),
                required: "1100 V".to_owned(),
                offered: "1100 V".to_owned(),
                classification: Classification::Match,
                closeness: 1.0,
            }],
            1.0,
        )
    }

    fn gaps(sku: &str) -> GapAnalysis {
        GapAnalysis { sku: SkuId(sku.to_owned()), entries: Vec::new() }
    }

    fn pricing() -> PricingBreakdown {
        PricingBreakdown {
            lines: vec![PricingLine {
                item: "Supply of SKU-A".to_owned(),
                unit_cost: Decimal::from(450),
                quantity: 5000,
                subtotal: Decimal::from(2_250_000),
            }],
            total: Decimal::from(2_250_000),
            currency: "USD".to_owned(),
        }
    }

    fn summary() -> ProposalSummary {
        ProposalSummary { win_confidence: 1.0, margin_pct: None }
    }

    #[test]
    fn assembles_a_complete_proposal() {
        let proposal = assemble(
            TenderId("GOV-PWR-2025-09".to_owned()),
            report("SKU-A"),
            gaps("SKU-A"),
            pricing(),
            summary(),
        )
        .expect("complete inputs");
        assert_eq!(proposal.tender_id, TenderId("GOV-PWR-2025-09".to_owned()));
        assert_eq!(proposal.report.sku, SkuId("SKU-A".to_owned()));
    }

    #[test]
    fn rejects_a_report_without_verdicts() {
        let mut empty = report("SKU-A");
        empty.verdicts.clear();
        let error = assemble(
            TenderId("T-1".to_owned()),
            empty,
            gaps("SKU-A"),
            pricing(),
            summary(),
        )
        .expect_err("no verdicts");
        assert!(matches!(error, IncompleteProposalError::NoVerdicts { .. }));
    }

    #[test]
    fn rejects_a_gap_analysis_for_a_different_sku() {
        let error = assemble(
            TenderId("T-1".to_owned()),
            report("SKU-A"),
            gaps("SKU-B"),
            pricing(),
            summary(),
        )
        .expect_err("mismatched skus");
        assert!(matches!(error, IncompleteProposalError::SkuMismatch { .. }));
    }

    #[test]
    fn rejects_an_empty_pricing_breakdown() {
        let mut breakdown = pricing();
        breakdown.lines.clear();
        let error = assemble(
            TenderId("T-1".to_owned()),
            report("SKU-A"),
            gaps("SKU-A"),
            breakdown,
            summary(),
        )
        .expect_err("no pricing lines");
        assert!(matches!(error, IncompleteProposalError::EmptyPricing));
    }
}
