use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BoxScoreError {
    #[error("unreadable document: {0}")]
    Document(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("no box-score table found (no table carries a stat header such as 'Min' or 'PTS')")]
    NoStatTable,

    #[error("box-score tables were found but no valid player rows were parsed")]
    NoPlayersParsed,

    #[error("failed to load options from {path}: {reason}")]
    ConfigLoad { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
