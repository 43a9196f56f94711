use crate::score::tables;
use crate::types::record::{ExperienceEntry, SeniorityLevel};
use crate::types::report::LeadershipBreakdown;
use std::collections::BTreeSet;

/// Seniority ceiling (highest level ever reached) plus a stability bonus for
/// cumulative years in leadership-flagged roles.
pub fn leadership_score(
    experience: &[ExperienceEntry],
    reference_year: i32,
) -> LeadershipBreakdown {
    let top = experience
        .iter()
        .map(|entry| entry.seniority_level)
        .max()
        .unwrap_or(SeniorityLevel::IndividualContributor);
    let seniority = tables::seniority_points(top);

    let mut covered_years: BTreeSet<i32> = BTreeSet::new();
    for entry in experience.iter().filter(|entry| entry.is_leadership) {
        let start = entry.start_year.unwrap_or(reference_year);
        let end = entry.end_year.unwrap_or(reference_year);
        let span = (i64::from(end) - i64::from(start)).clamp(0, tables::MAX_CAREER_YEARS);
        for year in start..start + span as i32 {
            covered_years.insert(year);
        }
    }
    let leadership_years = u32::try_from(covered_years.len()).unwrap_or(u32::MAX);
    let stability = tables::stability_points(leadership_years);

    LeadershipBreakdown {
        seniority,
        leadership_years,
        stability,
        total: seniority + stability,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::record::RoleType;

    const YEAR: i32 = 2025;

    fn entry(
        seniority: SeniorityLevel,
        leadership: bool,
        start: i32,
        end: Option<i32>,
    ) -> ExperienceEntry {
        ExperienceEntry {
            role: "role".to_string(),
            role_type: RoleType::TechnicalProfessional,
            organization: "org".to_string(),
            start_year: Some(start),
            end_year: end,
            is_leadership: leadership,
            seniority_level: seniority,
        }
    }

    #[test]
    fn empty_experience_scores_zero() {
        let breakdown = leadership_score(&[], YEAR);
        assert_eq!(breakdown.seniority, 0.0);
        assert_eq!(breakdown.stability, 0.0);
        assert_eq!(breakdown.total, 0.0);
    }

    #[test]
    fn seniority_uses_the_highest_level_ever_reached() {
        let entries = [
            entry(SeniorityLevel::Direction, false, 2000, Some(2004)),
            entry(SeniorityLevel::Coordinator, false, 2004, Some(2020)),
        ];
        let breakdown = leadership_score(&entries, YEAR);
        assert_eq!(breakdown.seniority, 14.0);
    }

    #[test]
    fn short_leadership_stint_scores_near_the_floor() {
        let entries = [entry(SeniorityLevel::Supervisor, true, 2020, Some(2021))];
        let breakdown = leadership_score(&entries, YEAR);
        assert_eq!(breakdown.leadership_years, 1);
        assert_eq!(breakdown.stability, 1.0);
    }

    #[test]
    fn long_leadership_tenure_reaches_the_stability_cap() {
        let entries = [entry(SeniorityLevel::Direction, true, 2005, Some(2017))];
        let breakdown = leadership_score(&entries, YEAR);
        assert_eq!(breakdown.leadership_years, 12);
        assert_eq!(breakdown.stability, tables::STABILITY_CAP);
        assert_eq!(breakdown.total, 20.0);
    }

    #[test]
    fn non_leadership_years_earn_no_stability() {
        let entries = [entry(SeniorityLevel::Management, false, 2000, Some(2020))];
        let breakdown = leadership_score(&entries, YEAR);
        assert_eq!(breakdown.seniority, 10.0);
        assert_eq!(breakdown.stability, 0.0);
    }

    #[test]
    fn overlapping_leadership_roles_count_once_per_year() {
        let entries = [
            entry(SeniorityLevel::Management, true, 2010, Some(2015)),
            entry(SeniorityLevel::Supervisor, true, 2012, Some(2017)),
        ];
        let breakdown = leadership_score(&entries, YEAR);
        assert_eq!(breakdown.leadership_years, 7);
    }
}
