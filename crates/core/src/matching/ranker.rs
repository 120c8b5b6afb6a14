//! Candidate ranker with deterministic tie-breaking.

use std::cmp::Ordering;

use crate::config::MatchingConfig;
use crate::domain::catalog::CatalogEntry;
use crate::domain::requirement::Requirement;
use crate::matching::scorer::score_entry;
use crate::matching::MatchReport;
use crate::normalize::Normalizer;

/// Scores every catalog entry against the requirement and returns the
/// reports ranked best-first. All reports are collected before sorting;
/// tie-breaking needs the full set.
pub fn rank_catalog(
    requirement: &Requirement,
    catalog: &[CatalogEntry],
    normalizer: &Normalizer,
    config: &MatchingConfig,
) -> Vec<MatchReport> {
    let reports = catalog
        .iter()
        .map(|entry| score_entry(requirement, entry, normalizer, config))
        .collect();
    rank(reports)
}

/// Sorts by overall score descending. Ties break on (1) fewer critical
/// gaps, (2) more matches, (3) lexicographically smallest SKU, so ranking
/// is reproducible for identical inputs.
pub fn rank(mut reports: Vec<MatchReport>) -> Vec<MatchReport> {
    reports.sort_by(|a, b| {
        b.overall_score
            .partial_cmp(&a.overall_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.critical_gap_count.cmp(&b.critical_gap_count))
            .then_with(|| b.match_count.cmp(&a.match_count))
            .then_with(|| a.sku.cmp(&b.sku))
    });
    reports
}
