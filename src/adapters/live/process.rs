//! Live process runner using `tokio::process`.
//!
//! Runs commands through `sh -c`, capturing both output streams. The
//! child's environment is exactly the effective map from
//! [`RunOptions`], so overrides and removals are both honored.

use std::process::Stdio;

use tokio::process::Command;

use crate::ports::process::{ProcessError, ProcessOutput, ProcessRunner, RunFuture, RunOptions};

/// Live process runner that executes commands via the system shell.
pub struct LiveProcessRunner;

impl ProcessRunner for LiveProcessRunner {
    fn run(&self, command: &str, options: &RunOptions) -> RunFuture<'_> {
        let command = command.to_owned();
        let options = options.clone();

        Box::pin(async move {
            let mut cmd = Command::new("sh");
            cmd.arg("-c")
                .arg(&command)
                .env_clear()
                .envs(&options.env)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                // Dropping the future kills the child rather than leaking it.
                .kill_on_drop(true);
            if let Some(dir) = &options.cwd {
                cmd.current_dir(dir);
            }

            let output = cmd.output().await.map_err(ProcessError::Spawn)?;
            let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

            if !output.status.success() {
                return Err(ProcessError::NonZeroExit {
                    code: output.status.code().unwrap_or(-1),
                    stderr,
                });
            }
            Ok(ProcessOutput { stdout, stderr })
        })
    }
}
