//! Project-specific error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed project.json: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type ProjectResult<T> = Result<T, ProjectError>;
