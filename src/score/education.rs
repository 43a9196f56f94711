use crate::score::tables;
use crate::types::record::{EducationDetail, EducationLevel};
use crate::types::report::EducationBreakdown;

/// Scores the highest attained level plus a bounded depth bonus for
/// additional credentials. Verified extras weigh three times an unverified
/// self-report, and unverified extras alone cannot reach the depth cap.
pub fn education_score(education: &[EducationDetail]) -> EducationBreakdown {
    let top = education
        .iter()
        .map(|detail| detail.level)
        .max()
        .unwrap_or(EducationLevel::NoInformation);
    let level = tables::education_points(top);

    // One credential carries the level; the rest count toward depth. When
    // several entries tie at the top level, a verified one is the carrier.
    let mut level_carried = false;
    let mut verified_extras = 0u32;
    let mut unverified_extras = 0u32;
    for detail in education {
        if detail.level == EducationLevel::NoInformation {
            continue;
        }
        if detail.level == top && !level_carried && detail.is_verified {
            level_carried = true;
            continue;
        }
        if detail.is_verified {
            verified_extras += 1;
        } else {
            unverified_extras += 1;
        }
    }
    if !level_carried && top != EducationLevel::NoInformation {
        // No verified entry at the top level; the carrier is unverified.
        unverified_extras = unverified_extras.saturating_sub(1);
    }

    let unverified_bonus = (f64::from(unverified_extras) * tables::DEPTH_UNVERIFIED_STEP)
        .min(tables::DEPTH_UNVERIFIED_CAP);
    let depth = (f64::from(verified_extras) * tables::DEPTH_VERIFIED_STEP + unverified_bonus)
        .min(tables::DEPTH_CAP);

    let total = (level + depth).min(tables::EDUCATION_CAP);
    EducationBreakdown {
        level,
        depth,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential(level: EducationLevel, verified: bool) -> EducationDetail {
        EducationDetail {
            level,
            field: "law".to_string(),
            institution: "u".to_string(),
            year: Some(2000),
            is_verified: verified,
        }
    }

    #[test]
    fn empty_education_scores_zero() {
        let breakdown = education_score(&[]);
        assert_eq!(breakdown.level, 0.0);
        assert_eq!(breakdown.depth, 0.0);
        assert_eq!(breakdown.total, 0.0);
    }

    #[test]
    fn single_doctorate_scores_level_only() {
        let breakdown = education_score(&[credential(EducationLevel::Doctorate, true)]);
        assert_eq!(breakdown.level, 22.0);
        assert_eq!(breakdown.depth, 0.0);
        assert_eq!(breakdown.total, 22.0);
    }

    #[test]
    fn highest_level_wins_regardless_of_order() {
        let forward = education_score(&[
            credential(EducationLevel::Masters, true),
            credential(EducationLevel::Doctorate, true),
        ]);
        let backward = education_score(&[
            credential(EducationLevel::Doctorate, true),
            credential(EducationLevel::Masters, true),
        ]);
        assert_eq!(forward.level, 22.0);
        assert_eq!(forward.total, backward.total);
    }

    #[test]
    fn verified_extra_credentials_earn_depth() {
        let breakdown = education_score(&[
            credential(EducationLevel::Doctorate, true),
            credential(EducationLevel::Masters, true),
            credential(EducationLevel::ProfessionalDegree, true),
        ]);
        assert_eq!(breakdown.level, 22.0);
        assert_eq!(breakdown.depth, 6.0);
        assert_eq!(breakdown.total, 28.0);
    }

    #[test]
    fn depth_caps_at_eight() {
        let entries = vec![credential(EducationLevel::Masters, true); 5];
        let breakdown = education_score(&entries);
        // Four verified extras would earn 12; the cap holds it at 8.
        assert_eq!(breakdown.depth, 8.0);
        assert_eq!(breakdown.total, 26.0);
    }

    #[test]
    fn unverified_extras_cannot_reach_the_cap() {
        let entries = vec![credential(EducationLevel::Masters, false); 12];
        let breakdown = education_score(&entries);
        assert_eq!(breakdown.depth, tables::DEPTH_UNVERIFIED_CAP);
        assert!(breakdown.depth < tables::DEPTH_CAP);
    }

    #[test]
    fn total_caps_at_thirty() {
        let mut entries = vec![credential(EducationLevel::Doctorate, true)];
        entries.extend(vec![credential(EducationLevel::Masters, true); 3]);
        let breakdown = education_score(&entries);
        // 22 + 8 lands exactly on the cap.
        assert_eq!(breakdown.total, 30.0);
    }

    #[test]
    fn no_information_entries_add_no_depth() {
        let breakdown = education_score(&[
            credential(EducationLevel::CompletedUniversity, true),
            credential(EducationLevel::NoInformation, true),
            credential(EducationLevel::NoInformation, false),
        ]);
        assert_eq!(breakdown.depth, 0.0);
    }

    #[test]
    fn unverified_carrier_does_not_count_itself_as_depth() {
        let breakdown = education_score(&[credential(EducationLevel::Masters, false)]);
        assert_eq!(breakdown.level, 18.0);
        assert_eq!(breakdown.depth, 0.0);
    }
}
