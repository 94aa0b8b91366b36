use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("Manifest not found: {}", path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("Failed to parse manifest {}: {source}", path.display())]
    ManifestParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to write result to {target}: {source}")]
    SinkError {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl MatrixError {
    /// One-line message suitable for stderr.
    pub fn user_friendly_message(&self) -> String {
        match self {
            MatrixError::ManifestNotFound { path } => {
                format!("Could not find manifest '{}'", path.display())
            }
            MatrixError::ManifestParseError { path, .. } => {
                format!("Manifest '{}' is not valid TOML", path.display())
            }
            MatrixError::TomlError(_) => "Manifest is not valid TOML".to_string(),
            MatrixError::IoError(e) => format!("File system error: {}", e),
            MatrixError::SerializationError(_) => {
                "Failed to encode the feature matrix as JSON".to_string()
            }
            MatrixError::SinkError { target, .. } => {
                format!("Could not write the feature matrix to {}", target)
            }
            MatrixError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MatrixError::ManifestNotFound { .. } => {
                "Run from the package root or pass --manifest-path"
            }
            MatrixError::ManifestParseError { .. } | MatrixError::TomlError(_) => {
                "Check the manifest syntax, e.g. with `cargo metadata`"
            }
            MatrixError::IoError(_) => "Check file permissions and available disk space",
            MatrixError::SerializationError(_) => "Report this as a bug",
            MatrixError::SinkError { .. } => {
                "Check that GITHUB_OUTPUT points to a writable file"
            }
            MatrixError::InvalidConfigValueError { .. } => "Fix the flagged option and retry",
        }
    }
}

pub type Result<T> = std::result::Result<T, MatrixError>;
