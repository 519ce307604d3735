//! Error types for the project model

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid project file: {0}")]
    Json(#[from] serde_json::Error),
}
