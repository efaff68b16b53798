//! Command-line interface

pub mod output;

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Create a new npm module: GitHub repo, git remote, readme, tests, initial push
#[derive(Debug, Parser, Clone)]
#[command(name = "create-module")]
#[command(version)]
#[command(about = "Scaffold a new npm module and push it to GitHub", long_about = None)]
pub struct Cli {
    /// Module name, also used for the GitHub repository and local directory
    pub name: String,

    /// GitHub token used to create and update the repository
    #[arg(short, long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Check npm for an existing module with this name first (also marks the package private)
    #[arg(long)]
    pub check: bool,

    /// Path to a YAML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the steps that would run and exit
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }

    /// Default log filter when `RUST_LOG` is unset
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
