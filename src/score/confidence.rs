use crate::score::tables;
use crate::types::report::ConfidenceBreakdown;

/// Data-quality signal attached alongside the ranking: how much the other
/// scores can be trusted. Never enters the composite formula.
pub fn confidence_score(verification_level: f64, coverage_level: f64) -> ConfidenceBreakdown {
    let verification =
        verification_level.clamp(0.0, 100.0) * tables::CONFIDENCE_VERIFICATION_WEIGHT;
    let coverage = coverage_level.clamp(0.0, 100.0) * tables::CONFIDENCE_COVERAGE_WEIGHT;

    ConfidenceBreakdown {
        verification,
        coverage,
        total: (verification + coverage).clamp(0.0, 100.0),
    }
}
