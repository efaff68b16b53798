//! Pipeline context - shared state threaded through every step

use crate::core::error::ScaffoldError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tokio::sync::Mutex;

/// Options supplied by the caller, read-only for the whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateOptions {
    /// Check the package registry before touching anything
    pub check: bool,
}

/// Identifying data for the freshly created remote repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDescriptor {
    pub full_name: String,
    pub clone_url: String,
}

/// Name/description record kept in sync with the remote repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryMetadata {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Execution context for a single scaffolding run
///
/// Steps receive it by shared reference. The repository descriptor is
/// write-once and the metadata record sits behind a lock, so members of a
/// concurrent group can hold the context at the same time while each only
/// writes the slice it owns.
pub struct PipelineContext {
    /// Package / repository name
    pub name: String,

    /// Target directory (`cwd/name`)
    pub directory: PathBuf,

    /// Value of the `Authorization` header sent to the hosting API
    auth_header: String,

    /// Set once by the repository creation step
    repository: OnceLock<RepositoryDescriptor>,

    /// Synced to the remote after the manifest is written
    metadata: Mutex<RepositoryMetadata>,

    pub options: CreateOptions,
}

impl PipelineContext {
    /// Create a context targeting `cwd/name`
    pub fn new(name: &str, token: &str, cwd: &Path, options: CreateOptions) -> Self {
        Self {
            name: name.to_string(),
            directory: cwd.join(name),
            auth_header: format!("token {}", token),
            repository: OnceLock::new(),
            metadata: Mutex::new(RepositoryMetadata {
                name: name.to_string(),
                description: None,
            }),
            options,
        }
    }

    pub fn auth_header(&self) -> &str {
        &self.auth_header
    }

    /// The remote repository, if it has been created
    pub fn repository(&self) -> Option<&RepositoryDescriptor> {
        self.repository.get()
    }

    /// The remote repository, failing if creation has not happened yet
    pub fn require_repository(&self) -> Result<&RepositoryDescriptor, ScaffoldError> {
        self.repository.get().ok_or(ScaffoldError::MissingRepository)
    }

    /// Record the created repository. Only the first call succeeds.
    pub fn set_repository(&self, repository: RepositoryDescriptor) -> Result<(), ScaffoldError> {
        self.repository
            .set(repository)
            .map_err(|rejected| ScaffoldError::RepositoryAlreadySet(rejected.full_name))
    }

    pub async fn metadata(&self) -> RepositoryMetadata {
        self.metadata.lock().await.clone()
    }

    pub async fn set_description(&self, description: Option<String>) {
        self.metadata.lock().await.description = description;
    }

    /// Path of a file inside the target directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.directory.join(relative)
    }
}

impl fmt::Debug for PipelineContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineContext")
            .field("name", &self.name)
            .field("directory", &self.directory)
            .field("auth_header", &"token <redacted>")
            .field("repository", &self.repository.get())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
