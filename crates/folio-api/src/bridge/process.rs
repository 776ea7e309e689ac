//! Runs the AI service as a child process.
//!
//! - The configured command line is split with `shell-words` (no shell interpretation)
//! - Action and payload are appended as two trailing arguments
//! - stdout and stderr are captured in full, per invocation
//! - An optional timeout kills the child (`kill_on_drop`)

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use super::{BridgeError, ProcessOutput, ProcessRunner};

/// [`ProcessRunner`] backed by `tokio::process::Command`.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    program: String,
    base_args: Vec<String>,
    timeout: Option<Duration>,
}

impl CommandRunner {
    pub fn new(program: impl Into<String>, base_args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            base_args,
            timeout: None,
        }
    }

    /// Parse a command line such as `python3 ai-service.py --quiet`.
    pub fn from_command_line(command_line: &str) -> Result<Self, BridgeError> {
        let tokens = shell_words::split(command_line)
            .map_err(|e| BridgeError::InvalidCommand(format!("{command_line:?}: {e}")))?;

        let mut tokens = tokens.into_iter();
        let program = tokens
            .next()
            .ok_or_else(|| BridgeError::InvalidCommand("empty command".into()))?;

        Ok(Self::new(program, tokens.collect()))
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn base_args(&self) -> &[String] {
        &self.base_args
    }
}

#[async_trait]
impl ProcessRunner for CommandRunner {
    async fn run(&self, action: &str, payload: &str) -> Result<ProcessOutput, BridgeError> {
        tracing::debug!(program = %self.program, action, "spawning AI service");

        let child = Command::new(&self.program)
            .args(&self.base_args)
            .arg(action)
            .arg(payload)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| BridgeError::Spawn(format!("{}: {e}", self.program)))?;

        // Dropping the `wait_with_output` future on timeout drops the child, which kills it.
        let waited = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| BridgeError::Timeout(limit.as_secs()))?,
            None => child.wait_with_output().await,
        };
        let output = waited.map_err(|e| BridgeError::Spawn(format!("{}: {e}", self.program)))?;

        Ok(ProcessOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
