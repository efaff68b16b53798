//! Local tool runner - spawns git / npm as subprocesses

use crate::clients::{StdioMode, ToolInvocation, ToolRunner};
use crate::core::ScaffoldError;
use async_trait::async_trait;
use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncRead, AsyncWriteExt};
use tokio::process::Command;
use tracing::{debug, warn};

/// Runs tools with `tokio::process`
#[derive(Debug, Clone, Default)]
pub struct SubprocessRunner;

impl SubprocessRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(invocation: &ToolInvocation) -> Command {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args).current_dir(&invocation.cwd);
        command
    }

    /// Run to completion with output captured, then echo stderr
    async fn run_captured(&self, invocation: &ToolInvocation) -> Result<(), ScaffoldError> {
        let output = Self::command(invocation)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| spawn_error(invocation, e))?;

        let mut stderr = tokio::io::stderr();
        if !output.stderr.is_empty() {
            if let Err(e) = stderr.write_all(&output.stderr).await {
                debug!("Could not echo tool stderr: {}", e);
            }
            if let Err(e) = stderr.flush().await {
                debug!("Could not flush stderr: {}", e);
            }
        }

        check_status(invocation, output.status, &String::from_utf8_lossy(&output.stderr))
    }

    /// Inherit stdin and forward stdout/stderr as they are produced
    async fn run_interactive(&self, invocation: &ToolInvocation) -> Result<(), ScaffoldError> {
        let mut child = Self::command(invocation)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| spawn_error(invocation, e))?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let (status, _, _) = tokio::join!(
            child.wait(),
            forward(stdout, tokio::io::stdout()),
            forward(stderr, tokio::io::stderr()),
        );

        let status = status.map_err(|e| spawn_error(invocation, e))?;
        check_status(invocation, status, "")
    }
}

async fn forward<R, W>(source: Option<R>, mut sink: W)
where
    R: AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    if let Some(mut source) = source {
        if let Err(e) = tokio::io::copy(&mut source, &mut sink).await {
            debug!("Stopped forwarding tool output: {}", e);
        }
        if let Err(e) = sink.flush().await {
            debug!("Could not flush tool output: {}", e);
        }
    }
}

fn spawn_error(invocation: &ToolInvocation, err: std::io::Error) -> ScaffoldError {
    ScaffoldError::tool(invocation.to_string(), format!("failed to start: {}", err))
}

fn check_status(invocation: &ToolInvocation, status: ExitStatus, stderr: &str) -> Result<(), ScaffoldError> {
    if status.success() {
        return Ok(());
    }

    let code = status
        .code()
        .map(|c| c.to_string())
        .unwrap_or_else(|| "signal".to_string());
    warn!("`{}` exited with {}", invocation, code);

    let message = match stderr.trim() {
        "" => format!("exited with code {}", code),
        detail => format!("exited with code {}: {}", code, detail),
    };
    Err(ScaffoldError::tool(invocation.to_string(), message))
}

#[async_trait]
impl ToolRunner for SubprocessRunner {
    async fn run(&self, invocation: &ToolInvocation) -> Result<(), ScaffoldError> {
        debug!("Running `{}` in {}", invocation, invocation.cwd.display());
        match invocation.stdio {
            StdioMode::Captured => self.run_captured(invocation).await,
            StdioMode::Interactive => self.run_interactive(invocation).await,
        }
    }
}
