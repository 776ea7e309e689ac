//! Canned process runner for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{BridgeError, ProcessOutput, ProcessRunner};

#[derive(Debug, Clone)]
enum Outcome {
    Output(ProcessOutput),
    SpawnError(String),
}

/// Runner that returns the same fixed outcome on every call and records
/// the arguments it was given.
pub struct MockRunner {
    outcome: Outcome,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockRunner {
    pub fn output(output: ProcessOutput) -> Self {
        Self {
            outcome: Outcome::Output(output),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A process that exits with `code` after writing `stdout` and `stderr`.
    pub fn exit(code: i32, stdout: &str, stderr: &str) -> Self {
        Self::output(ProcessOutput {
            exit_code: Some(code),
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        })
    }

    /// A service executable that cannot be started.
    pub fn spawn_error(reason: &str) -> Self {
        Self {
            outcome: Outcome::SpawnError(reason.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `(action, payload)` pairs seen so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessRunner for MockRunner {
    async fn run(&self, action: &str, payload: &str) -> Result<ProcessOutput, BridgeError> {
        self.calls
            .lock()
            .unwrap()
            .push((action.to_string(), payload.to_string()));

        match &self.outcome {
            Outcome::Output(output) => Ok(output.clone()),
            Outcome::SpawnError(reason) => Err(BridgeError::Spawn(reason.clone())),
        }
    }
}
