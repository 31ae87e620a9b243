// ABOUTME: Error types for sheet fragment generation
// ABOUTME: Covers template substitution failures, alert validation, and fragment lookups

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Level must be among 'info', 'warning' (got '{0}')")]
    InvalidAlertLevel(String),

    #[error("Missing substitution key '{key}' in template")]
    MissingKey { key: String },

    #[error("Row has {found} values but {expected} keys were given")]
    ArityMismatch { expected: usize, found: usize },

    #[error("Unknown fragment: {0}")]
    UnknownFragment(String),

    #[error("Pattern error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SheetError>;
