//! Scaffolder configuration from YAML

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Endpoints, tool paths and git conventions used by a run
///
/// Every field has a default, so an empty file (or no file at all) gives
/// the stock GitHub + npm setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Base URL of the hosting API
    pub api_base: String,

    /// Base URL of the package registry queried by the name check
    pub registry: String,

    /// `User-Agent` sent with every request
    pub user_agent: String,

    /// Version-control executable
    pub git_program: String,

    /// Package-manager executable
    pub npm_program: String,

    /// Branch pushed to `origin`
    pub branch: String,

    /// Message of the initial commit
    pub commit_message: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            registry: "https://registry.npmjs.org".to_string(),
            user_agent: "npm create-module".to_string(),
            git_program: "git".to_string(),
            npm_program: "npm".to_string(),
            branch: "master".to_string(),
            commit_message: "Initial commit".to_string(),
        }
    }
}

impl ScaffoldConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ScaffoldConfig = if yaml.trim().is_empty() {
            ScaffoldConfig::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, else the user config file if present,
    /// else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// `<config dir>/create-module/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("create-module").join("config.yaml"))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        for (field, url) in [("api_base", &self.api_base), ("registry", &self.registry)] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                anyhow::bail!("'{}' must be an http(s) URL, got '{}'", field, url);
            }
        }

        let required = [
            ("user_agent", &self.user_agent),
            ("git_program", &self.git_program),
            ("npm_program", &self.npm_program),
            ("branch", &self.branch),
            ("commit_message", &self.commit_message),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                anyhow::bail!("'{}' must not be empty", field);
            }
        }

        Ok(())
    }

    /// API base without a trailing slash
    pub fn api_base(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }

    /// Registry base without a trailing slash
    pub fn registry(&self) -> &str {
        self.registry.trim_end_matches('/')
    }
}
