//! Error types for scaffolding steps

use std::path::PathBuf;
use thiserror::Error;

/// Errors a pipeline step can surface
///
/// The executor never inspects these; the first one raised is reported
/// to the caller as-is.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("\"{name}\" is already taken on npm.")]
    NameTaken { name: String },

    #[error("Network error: {0}")]
    Network(String),

    /// Non-success response or transport failure against the hosting API;
    /// `status` is `None` when no response arrived
    #[error("Remote API error{}: {body}", .status.map(|s| format!(" ({})", s)).unwrap_or_default())]
    RemoteApi { status: Option<u16>, body: String },

    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} failed: {message}")]
    ToolExecution { tool: String, message: String },

    #[error("Failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Remote repository has not been created yet")]
    MissingRepository,

    #[error("Remote repository was already recorded as {0}")]
    RepositoryAlreadySet(String),
}

impl ScaffoldError {
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::Filesystem {
            path: path.into(),
            source,
        }
    }

    pub fn tool(tool: impl Into<String>, message: impl Into<String>) -> Self {
        ScaffoldError::ToolExecution {
            tool: tool.into(),
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ScaffoldError {
    fn from(err: reqwest::Error) -> Self {
        ScaffoldError::RemoteApi {
            status: err.status().map(|s| s.as_u16()),
            body: err.to_string(),
        }
    }
}
