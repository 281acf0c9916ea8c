use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SxlError {
    #[error("Invalid layout: {0}")]
    Validation(#[from] siloxane_core::ValidationError),

    #[error("Output does not match the wire schema: {0}")]
    Shape(#[from] siloxane_core::ShapeError),

    #[error("Failed to parse {path}: {source}")]
    Document {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown button style: {0}")]
    UnknownButtonStyle(String),

    #[error("{kind} is missing required field `{field}`")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },

    #[error("{kind} must not set `{field}`")]
    ConflictingField {
        kind: &'static str,
        field: &'static str,
    },

    #[error("Unknown sample: {0} (try {names})", names = crate::samples::SAMPLE_NAMES.join(", "))]
    UnknownSample(String),
}
