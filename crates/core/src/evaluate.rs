//! The single entry point composing the whole pipeline.

use crate::assembler::assemble;
use crate::config::MatchingConfig;
use crate::domain::catalog::CatalogEntry;
use crate::domain::proposal::Proposal;
use crate::domain::requirement::Requirement;
use crate::errors::EvaluationError;
use crate::gaps::GapAnalyzer;
use crate::matching::ranker::rank_catalog;
use crate::normalize::Normalizer;
use crate::pricing::{price, Surcharge};
use crate::summary::summarize;

/// Evaluates one requirement against the full catalog and returns a priced,
/// scored proposal for the best-matching SKU.
///
/// Per-parameter normalization failures are absorbed as critical-gap
/// verdicts; pricing and assembly failures propagate unrecovered.
pub fn evaluate(
    requirement: &Requirement,
    catalog: &[CatalogEntry],
    quantity: u32,
    surcharges: &[Surcharge],
    config: &MatchingConfig,
) -> Result<Proposal, EvaluationError> {
    let normalizer = Normalizer::from_config(config);
    let ranked = rank_catalog(requirement, catalog, &normalizer, config);

    let winner = match ranked.into_iter().next() {
        Some(report) => report,
        None => return Err(EvaluationError::EmptyCatalog),
    };
    // rank_catalog derives its reports from `catalog`, so the winning SKU is
    // always present there.
    let entry = match catalog.iter().find(|entry| entry.sku == winner.sku) {
        Some(entry) => entry,
        None => return Err(EvaluationError::EmptyCatalog),
    };

    tracing::debug!(
        tender = %requirement.id.0,
        sku = %winner.sku.0,
        score = winner.overall_score,
        critical_gaps = winner.critical_gap_count,
        "selected candidate"
    );

    let gaps = GapAnalyzer::from_config(config).analyze(&winner);
    let pricing = price(entry, quantity, surcharges, &config.currency)?;
    let summary = summarize(&winner, &gaps, entry);

    let proposal = assemble(requirement.id.clone(), winner, gaps, pricing, summary)?;
    tracing::info!(
        tender = %proposal.tender_id.0,
        run = %proposal.run_id,
        total = %proposal.pricing.total,
        win_confidence = proposal.summary.win_confidence,
        "proposal assembled"
    );
    Ok(proposal)
}
