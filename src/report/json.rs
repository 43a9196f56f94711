use crate::types::report::{RankingReport, ScoreReport};

pub fn to_json(report: &ScoreReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn ranking_to_json(report: &RankingReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::{self, ScoreOptions};
    use crate::types::config::builtin_presets;
    use crate::types::record::{CandidateRecord, TargetOffice};

    fn sample_report() -> ScoreReport {
        let record: CandidateRecord =
            serde_json::from_str(r#"{"name": "Json Case"}"#).expect("record should parse");
        let options = ScoreOptions::all_presets(builtin_presets(), 2025);
        score::compute(&record, TargetOffice::Generic, &options).expect("record should score")
    }

    #[test]
    fn json_report_exposes_breakdown_and_composites() {
        let rendered = to_json(&sample_report()).expect("json should serialize");
        assert!(rendered.contains("\"competence\""));
        assert!(rendered.contains("\"integrity\""));
        assert!(rendered.contains("\"composites\""));
        assert!(rendered.contains("\"balanced\""));
    }

    #[test]
    fn json_ranking_serializes_entries() {
        let ranking = RankingReport {
            office: "senator".to_string(),
            ranked_by: "balanced".to_string(),
            entries: vec![],
        };
        let rendered = ranking_to_json(&ranking).expect("json should serialize");
        assert!(rendered.contains("\"ranked_by\": \"balanced\""));
    }
}
