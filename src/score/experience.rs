use crate::score::tables;
use crate::types::record::{ExperienceEntry, TargetOffice};
use crate::types::report::ExperienceBreakdown;
use std::collections::BTreeSet;

/// Total tenure (banded) plus relevance-weighted tenure under the office
/// table, each capped at 25. Overlapping roles count once per calendar year
/// toward total tenure; relevance is per-entry, so two concurrent relevant
/// roles both earn their rate.
pub fn experience_score(
    experience: &[ExperienceEntry],
    office: TargetOffice,
    reference_year: i32,
) -> ExperienceBreakdown {
    let mut covered_years: BTreeSet<i32> = BTreeSet::new();
    let table = tables::relevance_table(office);
    let mut relevant_tenths: u64 = 0;

    for entry in experience {
        let (start, span) = entry_span(entry, reference_year);
        for year in start..start + i32::try_from(span).unwrap_or(0) {
            covered_years.insert(year);
        }
        relevant_tenths += span * table.tenths_per_year(entry.role_type);
    }

    let tenure_years = u32::try_from(covered_years.len()).unwrap_or(u32::MAX);
    let total = tables::tenure_points(tenure_years);

    let raw_relevant = relevant_tenths as f64 / 10.0;
    let relevant = relevant_tenths.min(tables::RELEVANT_CAP_TENTHS) as f64 / 10.0;

    ExperienceBreakdown {
        tenure_years,
        total,
        raw_relevant,
        relevant,
    }
}

/// Start year and non-negative span in whole years. Missing years resolve to
/// the reference year; spans are clamped to a plausible career length.
fn entry_span(entry: &ExperienceEntry, reference_year: i32) -> (i32, u64) {
    let start = entry.start_year.unwrap_or(reference_year);
    let end = entry.end_year.unwrap_or(reference_year);
    let span = (i64::from(end) - i64::from(start)).clamp(0, tables::MAX_CAREER_YEARS);
    (start, span as u64)
}
