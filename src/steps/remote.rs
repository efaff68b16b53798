//! Steps that talk to the hosting API

use crate::clients::HostingApi;
use crate::core::{PipelineContext, ScaffoldError, Step};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Pre-flight: fail if the name is already published
pub struct CheckName {
    pub hosting: Arc<dyn HostingApi>,
}

#[async_trait]
impl Step for CheckName {
    fn id(&self) -> &'static str {
        super::CHECK_NAME
    }

    fn describe(&self, _ctx: &PipelineContext) -> String {
        "Checking npm for pre-existing module name".to_string()
    }

    async fn run(&self, ctx: &PipelineContext) -> Result<(), ScaffoldError> {
        if self.hosting.package_exists(&ctx.name).await? {
            return Err(ScaffoldError::NameTaken {
                name: ctx.name.clone(),
            });
        }
        Ok(())
    }
}

/// Create the remote repository and record its descriptor
pub struct CreateRepository {
    pub hosting: Arc<dyn HostingApi>,
}

#[async_trait]
impl Step for CreateRepository {
    fn id(&self) -> &'static str {
        super::CREATE_REPOSITORY
    }

    fn describe(&self, _ctx: &PipelineContext) -> String {
        "Creating GitHub repo..".to_string()
    }

    async fn run(&self, ctx: &PipelineContext) -> Result<(), ScaffoldError> {
        let repository = self
            .hosting
            .create_repository(&ctx.name, ctx.auth_header())
            .await?;
        info!("Created repo {}", repository.full_name);
        ctx.set_repository(repository)
    }
}

/// Push the metadata record to the remote repository
pub struct SyncDescription {
    pub hosting: Arc<dyn HostingApi>,
}

#[async_trait]
impl Step for SyncDescription {
    fn id(&self) -> &'static str {
        super::SYNC_DESCRIPTION
    }

    fn describe(&self, _ctx: &PipelineContext) -> String {
        "Update GitHub description".to_string()
    }

    async fn run(&self, ctx: &PipelineContext) -> Result<(), ScaffoldError> {
        let repository = ctx.require_repository()?;
        let metadata = ctx.metadata().await;
        self.hosting
            .update_repository(repository, &metadata, ctx.auth_header())
            .await
    }
}
