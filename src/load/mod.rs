use crate::error::{Result, ScoreError};
use crate::types::record::CandidateRecord;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A record read from disk, with the fingerprint of the exact bytes that
/// were scored. The fingerprint lands in the report and ties a published
/// score back to its source file.
#[derive(Debug, Clone)]
pub struct LoadedRecord {
    #[allow(dead_code)]
    pub path: PathBuf,
    pub record: CandidateRecord,
    pub sha256: String,
}

pub fn load_record(path: &Path) -> Result<LoadedRecord> {
    let bytes = std::fs::read(path).map_err(|error| {
        if error.kind() == std::io::ErrorKind::NotFound {
            ScoreError::RecordNotFound(path.display().to_string())
        } else {
            ScoreError::Io(error)
        }
    })?;
    let record: CandidateRecord = serde_json::from_slice(&bytes)
        .map_err(|error| ScoreError::RecordParse(format!("{}: {}", path.display(), error)))?;
    tracing::debug!(path = %path.display(), candidate = %record.name, "record loaded");

    Ok(LoadedRecord {
        path: path.to_path_buf(),
        record,
        sha256: sha256_hex(&bytes),
    })
}

/// All `*.json` files under `root`, sorted so a batch run visits records in
/// a stable order on every machine.
pub fn discover_records(root: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false)
        })
        .collect();
    paths.sort();
    paths
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_record_parses_and_fingerprints() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("candidate.json");
        fs::write(&path, r#"{"name": "Test Candidate"}"#).expect("record should write");

        let loaded = load_record(&path).expect("record should load");
        assert_eq!(loaded.record.name, "Test Candidate");
        assert_eq!(loaded.sha256.len(), 64);
    }

    #[test]
    fn identical_bytes_produce_identical_fingerprints() {
        let dir = TempDir::new().expect("temp dir should be created");
        let first = dir.path().join("a.json");
        let second = dir.path().join("b.json");
        fs::write(&first, r#"{"name": "Twin"}"#).expect("first should write");
        fs::write(&second, r#"{"name": "Twin"}"#).expect("second should write");

        let a = load_record(&first).expect("first should load");
        let b = load_record(&second).expect("second should load");
        assert_eq!(a.sha256, b.sha256);
    }

    #[test]
    fn missing_file_reports_record_not_found() {
        let err = load_record(Path::new("/nonexistent/record.json"))
            .expect_err("path does not exist");
        assert!(matches!(err, ScoreError::RecordNotFound(_)));
    }

    #[test]
    fn malformed_json_reports_parse_error_with_path() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").expect("file should write");

        let err = load_record(&path).expect_err("json is malformed");
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn discover_finds_only_json_sorted() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::create_dir_all(dir.path().join("nested")).expect("nested dir should create");
        fs::write(dir.path().join("b.json"), "{}").expect("b should write");
        fs::write(dir.path().join("a.json"), "{}").expect("a should write");
        fs::write(dir.path().join("notes.txt"), "skip").expect("txt should write");
        fs::write(dir.path().join("nested/c.json"), "{}").expect("c should write");

        let found = discover_records(dir.path());
        let names: Vec<String> = found
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
            .collect();
        assert_eq!(names, vec!["a.json", "b.json", "c.json"]);
    }
}
