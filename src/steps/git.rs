//! Version-control steps

use crate::clients::{ToolInvocation, ToolRunner};
use crate::core::{PipelineContext, ScaffoldConfig, ScaffoldError, Step};
use async_trait::async_trait;
use std::sync::Arc;

/// `git init`
pub struct GitInit {
    pub tools: Arc<dyn ToolRunner>,
    pub config: Arc<ScaffoldConfig>,
}

#[async_trait]
impl Step for GitInit {
    fn id(&self) -> &'static str {
        super::GIT_INIT
    }

    fn describe(&self, _ctx: &PipelineContext) -> String {
        "Initialize git..".to_string()
    }

    async fn run(&self, ctx: &PipelineContext) -> Result<(), ScaffoldError> {
        self.tools
            .run(&ToolInvocation::captured(&self.config.git_program, ["init"], &ctx.directory))
            .await
    }
}

/// `git remote add origin <clone_url>`
pub struct GitRemote {
    pub tools: Arc<dyn ToolRunner>,
    pub config: Arc<ScaffoldConfig>,
}

#[async_trait]
impl Step for GitRemote {
    fn id(&self) -> &'static str {
        super::GIT_REMOTE
    }

    fn describe(&self, ctx: &PipelineContext) -> String {
        match ctx.repository() {
            Some(repo) => format!("Add remote origin {}", repo.clone_url),
            None => "Add remote origin".to_string(),
        }
    }

    async fn run(&self, ctx: &PipelineContext) -> Result<(), ScaffoldError> {
        let clone_url = ctx.require_repository()?.clone_url.as_str();
        self.tools
            .run(&ToolInvocation::captured(
                &self.config.git_program,
                ["remote", "add", "origin", clone_url],
                &ctx.directory,
            ))
            .await
    }
}

/// Stage everything, commit, push the branch to `origin`
pub struct GitPush {
    pub tools: Arc<dyn ToolRunner>,
    pub config: Arc<ScaffoldConfig>,
}

impl GitPush {
    pub fn invocations(&self, ctx: &PipelineContext) -> Vec<ToolInvocation> {
        let git = self.config.git_program.as_str();
        vec![
            ToolInvocation::captured(git, ["add", "--all"], &ctx.directory),
            ToolInvocation::captured(
                git,
                ["commit", "-m", self.config.commit_message.as_str()],
                &ctx.directory,
            ),
            ToolInvocation::captured(
                git,
                ["push", "origin", self.config.branch.as_str()],
                &ctx.directory,
            ),
        ]
    }
}

#[async_trait]
impl Step for GitPush {
    fn id(&self) -> &'static str {
        super::GIT_PUSH
    }

    fn describe(&self, _ctx: &PipelineContext) -> String {
        "Commit and push to GitHub".to_string()
    }

    async fn run(&self, ctx: &PipelineContext) -> Result<(), ScaffoldError> {
        for invocation in self.invocations(ctx) {
            self.tools.run(&invocation).await?;
        }
        Ok(())
    }
}
