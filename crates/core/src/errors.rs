use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::catalog::SkuId;
use crate::domain::requirement::ParameterFamily;

/// A raw value could not be brought into canonical form. Absorbed at the
/// scorer level: the affected parameter becomes a critical-gap verdict and
/// the rest of the SKU is still scored.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum NormalizationError {
    #[error("unit `{unit}` is not recognized for the {family:?} family")]
    UnknownUnit { unit: String, family: ParameterFamily },
    #[error("`{value}` is not a parseable number")]
    UnparseableNumber { value: String },
}

/// Invalid pricing inputs are caller-programming errors: surfaced to the
/// caller, never clamped, and no partial proposal is produced.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PricingError {
    #[error("quantity must be positive, got {quantity}")]
    InvalidQuantity { quantity: u32 },
    #[error("negative cost {cost} for line `{item}`")]
    NegativeCost { item: String, cost: Decimal },
}

/// The assembler's completeness invariant was violated. Always fatal.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum IncompleteProposalError {
    #[error("match report for `{}` contains no verdicts", sku.0)]
    NoVerdicts { sku: SkuId },
    #[error("gap analysis is for `{}` but the match report is for `{}`", gaps_sku.0, report_sku.0)]
    SkuMismatch { report_sku: SkuId, gaps_sku: SkuId },
    #[error("pricing breakdown has no line items")]
    EmptyPricing,
}

/// Failure surface of the `evaluate` entry point. Per-parameter
/// normalization failures never appear here.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EvaluationError {
    #[error("catalog contains no candidate entries")]
    EmptyCatalog,
    #[error(transparent)]
    Pricing(#[from] PricingError),
    #[error(transparent)]
    IncompleteProposal(#[from] IncompleteProposalError),
}
