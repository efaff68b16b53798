//! Pipeline execution engine

pub mod engine;
pub mod group;

pub use engine::{EventHandler, ExecutionEngine, ExecutionEvent, ExecutionReport};
pub use group::join_all_settled;

use crate::clients::Toolchain;
use crate::core::{CreateOptions, PipelineContext};
use crate::steps;
use std::path::PathBuf;

/// Everything needed to scaffold one module
#[derive(Clone)]
pub struct CreateRequest {
    pub name: String,
    pub token: String,
    pub options: CreateOptions,
    /// Parent of the new module directory
    pub cwd: PathBuf,
}

impl std::fmt::Debug for CreateRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateRequest")
            .field("name", &self.name)
            .field("token", &"<redacted>")
            .field("options", &self.options)
            .field("cwd", &self.cwd)
            .finish()
    }
}

/// Assemble the steps for `request` and run them to completion or first failure
pub async fn create_module(
    request: &CreateRequest,
    toolchain: &Toolchain,
    engine: &ExecutionEngine,
) -> ExecutionReport {
    let steps = steps::assemble(&request.options, toolchain);
    let ctx = PipelineContext::new(&request.name, &request.token, &request.cwd, request.options);
    engine.execute(&steps, &ctx).await
}
