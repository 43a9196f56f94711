pub mod composite;
pub mod confidence;
pub mod education;
pub mod experience;
pub mod integrity;
pub mod leadership;
pub mod tables;
pub mod transparency;

use crate::error::Result;
use crate::types::config::{WeightSpec, WeightVector};
use crate::types::record::{CandidateRecord, TargetOffice};
use crate::types::report::{CompetenceBreakdown, ScoreReport};
use std::collections::BTreeMap;

/// Everything the engine needs besides the record itself. Presets travel as
/// explicit data so alternate tables need no global state, and the reference
/// year is resolved once at the boundary, keeping `compute` a pure function.
#[derive(Debug, Clone)]
pub struct ScoreOptions {
    pub presets: BTreeMap<String, WeightVector>,
    pub requested: Vec<WeightSpec>,
    pub reference_year: i32,
}

impl ScoreOptions {
    /// All presets in the table, requested in name order.
    pub fn all_presets(presets: BTreeMap<String, WeightVector>, reference_year: i32) -> Self {
        let requested = presets
            .keys()
            .cloned()
            .map(WeightSpec::Named)
            .collect();
        Self {
            presets,
            requested,
            reference_year,
        }
    }
}

/// Scores one candidate record for one target office. Stateless: the record
/// fully determines the output for a given option set.
pub fn compute(
    record: &CandidateRecord,
    office: TargetOffice,
    options: &ScoreOptions,
) -> Result<ScoreReport> {
    let education = education::education_score(&record.education);
    let experience =
        experience::experience_score(&record.experience, office, options.reference_year);
    let leadership = leadership::leadership_score(&record.experience, options.reference_year);

    let competence_total = (education.total + experience.total + experience.relevant
        + leadership.total)
        .clamp(0.0, 100.0);

    let integrity = integrity::integrity_score(
        &record.penal_sentences,
        &record.civil_sentences,
        record.party_resignation_count,
    );
    let transparency = transparency::transparency_score(
        record.declaration_completeness,
        record.declaration_consistency,
        record.assets_quality,
    );
    let confidence =
        confidence::confidence_score(record.verification_level, record.coverage_level);

    let composites = composite::composite_scores(
        competence_total,
        integrity.total,
        transparency.total,
        &options.requested,
        &options.presets,
    )?;

    Ok(ScoreReport {
        candidate: record.name.clone(),
        office: office.label().to_string(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        record_sha256: None,
        competence: CompetenceBreakdown {
            education,
            experience,
            leadership,
            total: competence_total,
        },
        integrity,
        transparency,
        confidence,
        composites,
    })
}
