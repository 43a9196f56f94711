use crate::error::{Result, ScoreError};
use crate::types::config::{WeightSpec, WeightVector};
use crate::types::report::CompositeScore;
use std::collections::BTreeMap;

/// Applies each requested weight vector to the three ranked sub-scores.
/// Named specs resolve against the supplied preset table; custom vectors are
/// validated here and rejected rather than clamped.
pub fn composite_scores(
    competence: f64,
    integrity: f64,
    transparency: f64,
    requested: &[WeightSpec],
    presets: &BTreeMap<String, WeightVector>,
) -> Result<Vec<CompositeScore>> {
    let mut composites = Vec::with_capacity(requested.len());
    for spec in requested {
        let (name, weights) = match spec {
            WeightSpec::Named(name) => {
                let weights = presets
                    .get(name)
                    .copied()
                    .ok_or_else(|| ScoreError::UnknownPreset(name.clone()))?;
                (name.clone(), weights)
            }
            WeightSpec::Custom(weights) => {
                weights.validate("custom")?;
                ("custom".to_string(), *weights)
            }
        };
        composites.push(CompositeScore {
            name,
            score: apply(weights, competence, integrity, transparency),
            weights,
        });
    }
    Ok(composites)
}

fn apply(weights: WeightVector, competence: f64, integrity: f64, transparency: f64) -> f64 {
    weights.competence * competence
        + weights.integrity * integrity
        + weights.transparency * transparency
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::builtin_presets;

    fn named(name: &str) -> WeightSpec {
        WeightSpec::Named(name.to_string())
    }

    #[test]
    fn balanced_preset_weighs_competence_and_integrity_equally() {
        let composites = composite_scores(80.0, 40.0, 60.0, &[named("balanced")], &builtin_presets())
            .expect("preset should resolve");
        assert_eq!(composites.len(), 1);
        // 0.45*80 + 0.45*40 + 0.10*60 = 60.
        assert!((composites[0].score - 60.0).abs() < 1e-9);
    }

    #[test]
    fn presets_differ_only_in_which_score_dominates() {
        let presets = builtin_presets();
        let specs = [
            named("balanced"),
            named("merit-first"),
            named("integrity-first"),
        ];
        // High competence, low integrity.
        let composites =
            composite_scores(90.0, 20.0, 50.0, &specs, &presets).expect("all presets resolve");
        let by_name = |name: &str| {
            composites
                .iter()
                .find(|c| c.name == name)
                .map(|c| c.score)
                .expect("composite should exist")
        };
        assert!(by_name("merit-first") > by_name("balanced"));
        assert!(by_name("balanced") > by_name("integrity-first"));
    }

    #[test]
    fn unknown_preset_is_rejected() {
        let err = composite_scores(50.0, 50.0, 50.0, &[named("meritocracy")], &builtin_presets())
            .expect_err("preset does not exist");
        assert!(matches!(err, ScoreError::UnknownPreset(_)));
    }

    #[test]
    fn custom_vector_is_validated_before_use() {
        let bad = WeightSpec::Custom(WeightVector::new(0.80, 0.10, 0.10));
        let err = composite_scores(50.0, 50.0, 50.0, &[bad], &builtin_presets())
            .expect_err("competence weight above bound");
        assert!(matches!(err, ScoreError::InvalidWeights(_)));
    }

    #[test]
    fn valid_custom_vector_computes() {
        let spec = WeightSpec::Custom(WeightVector::new(0.40, 0.40, 0.20));
        let composites = composite_scores(100.0, 50.0, 0.0, &[spec], &builtin_presets())
            .expect("custom vector in bounds");
        assert_eq!(composites[0].name, "custom");
        assert!((composites[0].score - 60.0).abs() < 1e-9);
    }

    #[test]
    fn multiple_composites_compute_in_one_call() {
        let specs = [
            named("balanced"),
            WeightSpec::Custom(WeightVector::new(0.45, 0.45, 0.10)),
        ];
        let composites = composite_scores(70.0, 70.0, 70.0, &specs, &builtin_presets())
            .expect("both should compute");
        assert_eq!(composites.len(), 2);
        assert!((composites[0].score - composites[1].score).abs() < 1e-9);
    }

    #[test]
    fn alternate_preset_table_is_honored() {
        let mut presets = BTreeMap::new();
        presets.insert("house".to_string(), WeightVector::new(0.20, 0.60, 0.20));
        let composites = composite_scores(100.0, 0.0, 0.0, &[named("house")], &presets)
            .expect("table entry should resolve");
        assert!((composites[0].score - 20.0).abs() < 1e-9);
    }
}
