use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("record file not found: {0}")]
    RecordNotFound(String),

    #[error("record parse error: {0}")]
    RecordParse(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    #[error("invalid weight vector: {0}")]
    InvalidWeights(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScoreError>;
