//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bimaudit operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Unknown project: {0}")]
    UnknownProject(String),

    #[error("Unknown criterion '{criterion_id}' in project '{project_id}'")]
    UnknownCriterion {
        project_id: String,
        criterion_id: String,
    },

    #[error("Unknown model '{model_id}' in project '{project_id}'")]
    UnknownModel { project_id: String, model_id: String },

    #[error("Unknown anomaly '{anomaly_id}' in project '{project_id}'")]
    UnknownAnomaly {
        project_id: String,
        anomaly_id: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Document rendering failed; the partial output is abandoned
    #[error("Render error: {0}")]
    Render(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// True for lookups of ids that do not exist in the store.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UnknownProject(_)
                | Self::UnknownCriterion { .. }
                | Self::UnknownModel { .. }
                | Self::UnknownAnomaly { .. }
        )
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
