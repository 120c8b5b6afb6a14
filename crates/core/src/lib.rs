pub mod assembler;
pub mod config;
pub mod domain;
pub mod errors;
pub mod evaluate;
pub mod gaps;
pub mod matching;
pub mod normalize;
pub mod pricing;
pub mod summary;

pub use assembler::assemble;
pub use config::{AcceptanceRate, ConfigError, MatchingConfig};
pub use domain::catalog::{CatalogEntry, SkuId};
pub use domain::proposal::Proposal;
pub use domain::requirement::{
    ParameterFamily, RawValue, RequiredParameter, Requirement, TenderId, TolerancePolicy,
};
pub use errors::{EvaluationError, IncompleteProposalError, NormalizationError, PricingError};
pub use evaluate::evaluate;
pub use gaps::{GapAnalysis, GapAnalyzer, GapEntry};
pub use matching::matcher::compare;
pub use matching::ranker::{rank, rank_catalog};
pub use matching::scorer::{score_entry, MISSING_VALUE};
pub use matching::{Classification, MatchReport, ParameterVerdict, StatusHint};
pub use normalize::{CanonicalValue, Normalizer};
pub use pricing::{price, PricingBreakdown, PricingLine, Surcharge};
pub use summary::{summarize, ProposalSummary};
