//! One-shot classifier process invocation.
//!
//! Each classification spawns a fresh child process, captures its stdout line
//! by line, and waits for it to exit. No pooling or reuse; cold inference is
//! expected to be short-lived.

use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::debug;

#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("failed to spawn classifier `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("classifier `{command}` exited with status {code}")]
    ExitStatus { command: String, code: i32 },
    #[error("classifier `{command}` produced no output")]
    NoOutput { command: String },
    #[error("classifier `{command}` timed out after {seconds}s")]
    Timeout { command: String, seconds: u64 },
    #[error("failed reading classifier output: {0}")]
    Io(#[from] std::io::Error),
}

/// Run a classifier command with `input` appended as the final argument and
/// capture its stdout lines in emission order.
///
/// `command` is split on whitespace: the first token is the program, the rest
/// are leading arguments (e.g. `python -u predict.py`). The caller guarantees
/// `input` is non-empty; this function only spawns.
pub async fn run_classifier(
    command: &str,
    input: &str,
    timeout: Duration,
) -> Result<Vec<String>, InvokeError> {
    let mut tokens = command.split_whitespace();
    let program = tokens.next().ok_or_else(|| InvokeError::Spawn {
        command: command.to_string(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "empty classifier command"),
    })?;

    let mut cmd = Command::new(program);
    cmd.args(tokens)
        .arg(input)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        // Reaps the child on every exit path, timeout and cancellation included
        .kill_on_drop(true);

    let mut child = cmd.spawn().map_err(|e| InvokeError::Spawn {
        command: command.to_string(),
        source: e,
    })?;

    let stdout = child.stdout.take().ok_or_else(|| InvokeError::NoOutput {
        command: command.to_string(),
    })?;

    // Drain stderr in the background so the child never blocks on a full pipe.
    // Classifier stderr is diagnostic noise, logged and otherwise ignored.
    if let Some(stderr) = child.stderr.take() {
        let command = command.to_string();
        tokio::spawn(async move {
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                debug!(command = %command, line = %line, "Classifier stderr");
            }
        });
    }

    let capture = async {
        let mut captured = Vec::new();
        let mut lines = BufReader::new(stdout).lines();
        while let Some(line) = lines.next_line().await? {
            debug!(line = %line, "Classifier output");
            captured.push(line);
        }

        let status = child.wait().await?;
        Ok::<_, InvokeError>((captured, status))
    };

    // On expiry this function returns and the child handle goes out of
    // scope, which kills the process via kill_on_drop.
    let (captured, status) = match tokio::time::timeout(timeout, capture).await {
        Ok(result) => result?,
        Err(_) => {
            return Err(InvokeError::Timeout {
                command: command.to_string(),
                seconds: timeout.as_secs(),
            });
        }
    };

    if !status.success() {
        return Err(InvokeError::ExitStatus {
            command: command.to_string(),
            code: status.code().unwrap_or(-1),
        });
    }

    if captured.is_empty() {
        return Err(InvokeError::NoOutput {
            command: command.to_string(),
        });
    }

    Ok(captured)
}
