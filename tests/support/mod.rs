//! Test doubles and helpers for scaffolding scenarios

#![allow(dead_code)]

use async_trait::async_trait;
use create_module::clients::{HostingApi, ToolInvocation, ToolRunner, Toolchain};
use create_module::core::{
    CreateOptions, RepositoryDescriptor, RepositoryMetadata, ScaffoldConfig, ScaffoldError,
    StepState,
};
use create_module::execution::{self, CreateRequest, ExecutionEngine, ExecutionReport};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Manifest `npm init --yes` would write
pub fn npm_default_manifest(name: &str) -> String {
    format!(
        r#"{{
  "name": "{}",
  "version": "1.0.0",
  "description": "A module made in a test",
  "main": "index.js",
  "scripts": {{
    "test": "echo \"Error: no test specified\" && exit 1"
  }},
  "author": "",
  "license": "ISC"
}}
"#,
        name
    )
}

/// Hosting API double that records every call
#[derive(Default)]
pub struct MockHosting {
    pub taken: bool,
    pub create_failure: Option<(u16, String)>,
    pub update_failure: Option<(u16, String)>,
    pub calls: Mutex<Vec<String>>,
    pub updates: Mutex<Vec<RepositoryMetadata>>,
}

impl MockHosting {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn taken() -> Self {
        Self {
            taken: true,
            ..Self::default()
        }
    }

    pub fn failing_create(status: u16, body: &str) -> Self {
        Self {
            create_failure: Some((status, body.to_string())),
            ..Self::default()
        }
    }

    pub fn failing_update(status: u16, body: &str) -> Self {
        Self {
            update_failure: Some((status, body.to_string())),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HostingApi for MockHosting {
    async fn package_exists(&self, name: &str) -> Result<bool, ScaffoldError> {
        self.calls.lock().unwrap().push(format!("package_exists {}", name));
        Ok(self.taken)
    }

    async fn create_repository(
        &self,
        name: &str,
        auth_header: &str,
    ) -> Result<RepositoryDescriptor, ScaffoldError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("create_repository {} ({})", name, auth_header));
        if let Some((status, body)) = &self.create_failure {
            return Err(ScaffoldError::RemoteApi {
                status: Some(*status),
                body: body.clone(),
            });
        }
        Ok(RepositoryDescriptor {
            full_name: format!("octocat/{}", name),
            clone_url: format!("https://github.com/octocat/{}.git", name),
        })
    }

    async fn update_repository(
        &self,
        repository: &RepositoryDescriptor,
        metadata: &RepositoryMetadata,
        _auth_header: &str,
    ) -> Result<(), ScaffoldError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("update_repository {}", repository.full_name));
        self.updates.lock().unwrap().push(metadata.clone());
        if let Some((status, body)) = &self.update_failure {
            return Err(ScaffoldError::RemoteApi {
                status: Some(*status),
                body: body.clone(),
            });
        }
        Ok(())
    }
}

/// Tool runner double: records invocations, writes package.json on `npm init`
#[derive(Default)]
pub struct MockTools {
    /// Fail any invocation whose display form starts with this
    pub fail_on: Option<String>,
    pub invocations: Mutex<Vec<ToolInvocation>>,
}

impl MockTools {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(command: &str) -> Self {
        Self {
            fail_on: Some(command.to_string()),
            ..Self::default()
        }
    }

    /// Display form of every invocation, in call order
    pub fn commands(&self) -> Vec<String> {
        self.invocations
            .lock()
            .unwrap()
            .iter()
            .map(|i| i.to_string())
            .collect()
    }
}

#[async_trait]
impl ToolRunner for MockTools {
    async fn run(&self, invocation: &ToolInvocation) -> Result<(), ScaffoldError> {
        self.invocations.lock().unwrap().push(invocation.clone());

        let command = invocation.to_string();
        if let Some(prefix) = &self.fail_on {
            if command.starts_with(prefix.as_str()) {
                return Err(ScaffoldError::tool(command, "exited with code 1"));
            }
        }

        if command == "npm init" {
            let name = invocation
                .cwd
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            std::fs::write(invocation.cwd.join("package.json"), npm_default_manifest(&name))
                .map_err(|e| ScaffoldError::filesystem(invocation.cwd.join("package.json"), e))?;
        }
        Ok(())
    }
}

/// A scaffolding run against test doubles in a temporary directory
pub struct Harness {
    pub cwd: tempfile::TempDir,
    pub hosting: Arc<MockHosting>,
    pub tools: Arc<MockTools>,
}

impl Harness {
    pub fn new(hosting: MockHosting, tools: MockTools) -> Self {
        Self {
            cwd: tempfile::tempdir().expect("tempdir"),
            hosting: Arc::new(hosting),
            tools: Arc::new(tools),
        }
    }

    pub fn toolchain(&self) -> Toolchain {
        Toolchain::new(self.hosting.clone(), self.tools.clone(), ScaffoldConfig::default())
    }

    pub fn module_dir(&self, name: &str) -> PathBuf {
        self.cwd.path().join(name)
    }

    pub fn read(&self, name: &str, file: &str) -> String {
        std::fs::read_to_string(self.module_dir(name).join(file))
            .unwrap_or_else(|e| panic!("reading {}/{}: {}", name, file, e))
    }

    pub async fn run(&self, name: &str, options: CreateOptions) -> ExecutionReport {
        let request = CreateRequest {
            name: name.to_string(),
            token: "s3cr3t".to_string(),
            options,
            cwd: self.cwd.path().to_path_buf(),
        };
        execution::create_module(&request, &self.toolchain(), &ExecutionEngine::new()).await
    }
}

/// Number of entries in a directory (0 if it does not exist)
pub fn entry_count(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
}

pub fn assert_completed(report: &ExecutionReport, step_id: &str) {
    assert!(
        matches!(report.step_state(step_id), Some(StepState::Completed { .. })),
        "expected {} to be completed, got {:?}",
        step_id,
        report.step_state(step_id)
    );
}

pub fn assert_failed(report: &ExecutionReport, step_id: &str) {
    assert!(
        matches!(report.step_state(step_id), Some(StepState::Failed { .. })),
        "expected {} to have failed, got {:?}",
        step_id,
        report.step_state(step_id)
    );
}
