use crate::error::{Result, ScoreError};
use crate::types::config::CiviscoreConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "civiscore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".civiscore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/civiscore/config.toml";

/// Loads the layered configuration rooted at `root`. Returns `None` when the
/// root has no `civiscore.toml`; the builtin presets apply unchanged.
pub fn load_config(root: &Path) -> Result<Option<CiviscoreConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<CiviscoreConfig>> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &repo_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: CiviscoreConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| ScoreError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ScoreError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::WeightVector;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_repo_file_missing() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[scoring]
reference_year = 2020

[presets.house]
competence = 0.50
integrity = 0.40
transparency = 0.10
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[scoring]
reference_year = 2024
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".civiscore"))
            .expect("local civiscore dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[presets.house]
competence = 0.40
integrity = 0.40
transparency = 0.20
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        assert_eq!(
            cfg.scoring.as_ref().and_then(|s| s.reference_year),
            Some(2024)
        );
        assert_eq!(
            cfg.preset_table().get("house"),
            Some(&WeightVector::new(0.40, 0.40, 0.20))
        );
    }

    #[test]
    fn load_config_rejects_invalid_preset() {
        let root = TempDir::new().expect("temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[presets.broken]
competence = 0.90
integrity = 0.05
transparency = 0.05
"#,
        )
        .expect("config should write");

        let err = load_config_with_global(root.path(), None).expect_err("preset out of bounds");
        assert!(err.to_string().contains("presets.broken"));
    }

    #[test]
    fn load_config_reports_malformed_toml_with_path() {
        let root = TempDir::new().expect("temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[presets\n")
            .expect("config should write");

        let err = load_config_with_global(root.path(), None).expect_err("toml is malformed");
        assert!(err.to_string().contains(DEFAULT_CONFIG_FILE));
    }
}
