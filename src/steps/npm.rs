//! Package-manager steps

use crate::clients::{ToolInvocation, ToolRunner};
use crate::core::{PipelineContext, ScaffoldConfig, ScaffoldError, Step};
use async_trait::async_trait;
use std::sync::Arc;

/// Interactive `npm <command>` in the target directory
pub struct NpmCommand {
    pub id: &'static str,
    pub command: &'static str,
    pub tools: Arc<dyn ToolRunner>,
    pub config: Arc<ScaffoldConfig>,
}

impl NpmCommand {
    pub fn init(tools: Arc<dyn ToolRunner>, config: Arc<ScaffoldConfig>) -> Self {
        Self {
            id: super::NPM_INIT,
            command: "init",
            tools,
            config,
        }
    }

    pub fn install(tools: Arc<dyn ToolRunner>, config: Arc<ScaffoldConfig>) -> Self {
        Self {
            id: super::NPM_INSTALL,
            command: "install",
            tools,
            config,
        }
    }
}

#[async_trait]
impl Step for NpmCommand {
    fn id(&self) -> &'static str {
        self.id
    }

    fn describe(&self, _ctx: &PipelineContext) -> String {
        format!("{} {}", self.config.npm_program, self.command)
    }

    async fn run(&self, ctx: &PipelineContext) -> Result<(), ScaffoldError> {
        self.tools
            .run(&ToolInvocation::interactive(
                &self.config.npm_program,
                [self.command],
                &ctx.directory,
            ))
            .await
    }
}
