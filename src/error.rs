use std::path::PathBuf;

use thiserror::Error;

/// Fatal analysis failures. Stages surface these through `anyhow`, so callers
/// can recover the variant with `downcast_ref::<TrialError>()`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrialError {
    #[error("input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("{}: unexpected columns (expected [{}], found [{}])", path.display(), expected.join(", "), found.join(", "))]
    SchemaMismatch {
        path: PathBuf,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("{}:{} column '{}': {}", path.display(), line, column, message)]
    Parse {
        path: PathBuf,
        line: u64,
        column: String,
        message: String,
    },

    #[error("duplicate pivot key: treatment '{treatment}' at timepoint {timepoint}")]
    DuplicateKey { treatment: String, timepoint: u32 },

    #[error("treatment column '{0}' missing from pivot input")]
    MissingColumn(String),

    #[error("treatment column '{0}' has no values")]
    EmptyColumn(String),

    #[error("division by zero computing {what} for '{treatment}'")]
    DivisionByZero { what: &'static str, treatment: String },
}
