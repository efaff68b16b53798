//! Local filesystem steps

use crate::core::{PipelineContext, ScaffoldError, Step};
use crate::steps::templates;
use async_trait::async_trait;
use tracing::debug;

/// Create `cwd/name`; an existing directory is an error
pub struct CreateDirectory;

#[async_trait]
impl Step for CreateDirectory {
    fn id(&self) -> &'static str {
        super::CREATE_DIRECTORY
    }

    fn describe(&self, ctx: &PipelineContext) -> String {
        format!("Creating directory {}", ctx.directory.display())
    }

    async fn run(&self, ctx: &PipelineContext) -> Result<(), ScaffoldError> {
        tokio::fs::create_dir(&ctx.directory)
            .await
            .map_err(|e| ScaffoldError::filesystem(&ctx.directory, e))
    }
}

/// Write a file rendered from the context into the target directory
pub struct WriteFile {
    pub id: &'static str,
    pub file: &'static str,
    pub render: fn(&PipelineContext) -> String,
}

impl WriteFile {
    pub fn readme() -> Self {
        Self {
            id: super::WRITE_README,
            file: "readme.md",
            render: |ctx| templates::render_readme(&ctx.name),
        }
    }

    pub fn gitignore() -> Self {
        Self {
            id: super::WRITE_GITIGNORE,
            file: ".gitignore",
            render: |_| templates::GITIGNORE.to_string(),
        }
    }
}

#[async_trait]
impl Step for WriteFile {
    fn id(&self) -> &'static str {
        self.id
    }

    fn describe(&self, _ctx: &PipelineContext) -> String {
        format!("Create {}...", self.file)
    }

    async fn run(&self, ctx: &PipelineContext) -> Result<(), ScaffoldError> {
        let path = ctx.path(self.file);
        tokio::fs::write(&path, (self.render)(ctx))
            .await
            .map_err(|e| ScaffoldError::filesystem(path, e))
    }
}

/// Write `test/index.js`
///
/// Failing to create `test/` is not reported: only the write that follows
/// can fail the step.
pub struct WriteTestStub;

#[async_trait]
impl Step for WriteTestStub {
    fn id(&self) -> &'static str {
        super::WRITE_TEST_STUB
    }

    fn describe(&self, _ctx: &PipelineContext) -> String {
        "Create test/index.js...".to_string()
    }

    async fn run(&self, ctx: &PipelineContext) -> Result<(), ScaffoldError> {
        let test_dir = ctx.path("test");
        if let Err(e) = tokio::fs::create_dir(&test_dir).await {
            debug!("Ignoring failure to create {}: {}", test_dir.display(), e);
        }

        let path = test_dir.join("index.js");
        tokio::fs::write(&path, templates::TEST_TEMPLATE)
            .await
            .map_err(|e| ScaffoldError::filesystem(path, e))
    }
}
