//! External collaborators: the hosting API and local command-line tools

pub mod github;
pub mod subprocess;

use crate::core::{RepositoryDescriptor, RepositoryMetadata, ScaffoldConfig, ScaffoldError};
use async_trait::async_trait;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use github::GitHubClient;
pub use subprocess::SubprocessRunner;

/// Remote hosting + registry operations the pipeline needs
#[async_trait]
pub trait HostingApi: Send + Sync {
    /// Whether a package with this name is already published
    async fn package_exists(&self, name: &str) -> Result<bool, ScaffoldError>;

    /// Create a repository owned by the authenticated user
    async fn create_repository(
        &self,
        name: &str,
        auth_header: &str,
    ) -> Result<RepositoryDescriptor, ScaffoldError>;

    /// Overwrite the repository's name and description
    async fn update_repository(
        &self,
        repository: &RepositoryDescriptor,
        metadata: &RepositoryMetadata,
        auth_header: &str,
    ) -> Result<(), ScaffoldError>;
}

/// How a tool's standard streams are wired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdioMode {
    /// Output captured; stderr echoed once the tool exits
    Captured,
    /// Stdin inherited so a human can answer prompts; output forwarded live
    Interactive,
}

/// One command-line tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub stdio: StdioMode,
}

impl ToolInvocation {
    pub fn captured<I, S>(program: &str, args: I, cwd: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.to_path_buf(),
            stdio: StdioMode::Captured,
        }
    }

    pub fn interactive<I, S>(program: &str, args: I, cwd: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stdio: StdioMode::Interactive,
            ..Self::captured(program, args, cwd)
        }
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs local tools; a nonzero exit is an error
#[async_trait]
pub trait ToolRunner: Send + Sync {
    async fn run(&self, invocation: &ToolInvocation) -> Result<(), ScaffoldError>;
}

/// Everything the steps call out to, shared by all of them
#[derive(Clone)]
pub struct Toolchain {
    pub hosting: Arc<dyn HostingApi>,
    pub tools: Arc<dyn ToolRunner>,
    pub config: Arc<ScaffoldConfig>,
}

impl Toolchain {
    pub fn new(
        hosting: Arc<dyn HostingApi>,
        tools: Arc<dyn ToolRunner>,
        config: ScaffoldConfig,
    ) -> Self {
        Self {
            hosting,
            tools,
            config: Arc::new(config),
        }
    }

    /// GitHub over HTTPS and real subprocesses
    pub fn live(config: ScaffoldConfig) -> Result<Self, ScaffoldError> {
        let hosting = GitHubClient::new(&config)?;
        Ok(Self::new(Arc::new(hosting), Arc::new(SubprocessRunner::new()), config))
    }
}
