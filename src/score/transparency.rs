use crate::score::tables;
use crate::types::report::TransparencyBreakdown;

/// Aggregates pre-scored disclosure signals; judging what is complete or
/// consistent is the upstream evaluator's job. Each input is clamped to
/// [0,100] before weighting.
pub fn transparency_score(
    declaration_completeness: f64,
    declaration_consistency: f64,
    assets_quality: f64,
) -> TransparencyBreakdown {
    let completeness = clamp_signal(declaration_completeness) * tables::TRANSPARENCY_COMPLETENESS_WEIGHT;
    let consistency = clamp_signal(declaration_consistency) * tables::TRANSPARENCY_CONSISTENCY_WEIGHT;
    let assets = clamp_signal(assets_quality) * tables::TRANSPARENCY_ASSETS_WEIGHT;
    let total = (completeness + consistency + assets).clamp(0.0, 100.0);

    TransparencyBreakdown {
        completeness,
        consistency,
        assets,
        total,
    }
}

fn clamp_signal(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}
