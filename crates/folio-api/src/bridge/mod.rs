//! Bridge to the external AI service script.
//!
//! An invocation hands the action name and the JSON payload to an external
//! executable as two positional arguments, waits for it to exit, and turns
//! the exit status plus captured streams into one of two outcomes:
//! - **success**: stdout parsed as JSON, or the raw stdout text when it is not JSON;
//! - **failure**: a [`BridgeError`], carrying stderr when the process exited non-zero.
//!
//! Spawning is abstracted behind [`ProcessRunner`] so the route can be
//! exercised without a real interpreter.

pub mod mock;
pub mod process;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

pub use mock::MockRunner;
pub use process::CommandRunner;

/// Captured result of one external process run.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    /// Exit code; `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Errors from launching or running the external service.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("invalid service command: {0}")]
    InvalidCommand(String),
    #[error("failed to start service: {0}")]
    Spawn(String),
    #[error("service exited with code {code:?}")]
    Failed { code: Option<i32>, stderr: String },
    #[error("service timed out after {0}s")]
    Timeout(u64),
}

/// Something that can run the external service once.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run the service with `action` and `payload` as its trailing arguments
    /// and collect everything it writes until exit.
    async fn run(&self, action: &str, payload: &str) -> Result<ProcessOutput, BridgeError>;
}

/// Converts runner output into the two-outcome bridge result.
#[derive(Clone)]
pub struct ProcessBridge {
    runner: Arc<dyn ProcessRunner>,
}

impl ProcessBridge {
    pub fn new(runner: Arc<dyn ProcessRunner>) -> Self {
        Self { runner }
    }

    pub async fn invoke(&self, action: &str, payload: &Value) -> Result<Value, BridgeError> {
        let payload = payload.to_string();
        let output = self.runner.run(action, &payload).await?;

        if !output.success() {
            tracing::warn!(
                action,
                exit_code = ?output.exit_code,
                stderr_len = output.stderr.len(),
                "AI service failed"
            );
            return Err(BridgeError::Failed {
                code: output.exit_code,
                stderr: output.stderr,
            });
        }

        Ok(parse_stdout(output.stdout))
    }
}

/// JSON when stdout parses, raw text otherwise.
fn parse_stdout(stdout: String) -> Value {
    match serde_json::from_str(&stdout) {
        Ok(value) => value,
        Err(_) => Value::String(stdout),
    }
}
