//! Steps that read or rewrite package.json

use crate::core::manifest;
use crate::core::{PipelineContext, ScaffoldError, Step};
use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

pub const MANIFEST_FILE: &str = "package.json";

async fn load(path: &Path) -> Result<Value, ScaffoldError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ScaffoldError::filesystem(path, e))?;
    serde_json::from_str(&content).map_err(|e| ScaffoldError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Add lint/test scripts, pre-commit hooks and dev dependencies
pub struct EditManifest;

#[async_trait]
impl Step for EditManifest {
    fn id(&self) -> &'static str {
        super::EDIT_MANIFEST
    }

    fn describe(&self, _ctx: &PipelineContext) -> String {
        "Edit package.json...".to_string()
    }

    async fn run(&self, ctx: &PipelineContext) -> Result<(), ScaffoldError> {
        let path = ctx.path(MANIFEST_FILE);
        let mut package = load(&path).await?;

        manifest::edit_manifest(&mut package, ctx.options.check).map_err(|e| {
            ScaffoldError::Parse {
                path: path.clone(),
                message: e.to_string(),
            }
        })?;

        tokio::fs::write(&path, manifest::to_stable_string(&package))
            .await
            .map_err(|e| ScaffoldError::filesystem(path, e))
    }
}

/// Copy the manifest description into the metadata record
pub struct ReadManifestMetadata;

#[async_trait]
impl Step for ReadManifestMetadata {
    fn id(&self) -> &'static str {
        super::READ_MANIFEST_METADATA
    }

    fn describe(&self, _ctx: &PipelineContext) -> String {
        "Read package.json description".to_string()
    }

    async fn run(&self, ctx: &PipelineContext) -> Result<(), ScaffoldError> {
        let package = load(&ctx.path(MANIFEST_FILE)).await?;
        let description = manifest::description(&package);
        debug!("Manifest description: {:?}", description);
        ctx.set_description(description).await;
        Ok(())
    }
}
