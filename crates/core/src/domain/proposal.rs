use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::requirement::TenderId;
use crate::gaps::GapAnalysis;
use crate::matching::MatchReport;
use crate::pricing::PricingBreakdown;
use crate::summary::ProposalSummary;

/// The single unit handed to presentation/export: winning match report,
/// gap analysis, pricing and roll-up figures for one evaluation run.
/// Constructed once by the assembler and never mutated; a new run produces
/// a new `Proposal` with a fresh `run_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    pub run_id: Uuid,
    pub tender_id: TenderId,
    pub report: MatchReport,
    pub gaps: GapAnalysis,
    pub pricing: PricingBreakdown,
    pub summary: ProposalSummary,
    pub created_at: DateTime<Utc>,
}
