//! create-module - scaffold a new npm module backed by a GitHub repository

pub mod cli;
pub mod clients;
pub mod core;
pub mod execution;
pub mod steps;

// Re-export commonly used types
pub use crate::clients::{GitHubClient, HostingApi, SubprocessRunner, ToolInvocation, ToolRunner, Toolchain};
pub use crate::core::{CreateOptions, PipelineContext, RepositoryDescriptor, ScaffoldConfig, ScaffoldError};
pub use crate::execution::{create_module, CreateRequest, ExecutionEngine, ExecutionEvent, ExecutionReport};
