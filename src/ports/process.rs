//! Process runner port for executing rendered scripts.

use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use thiserror::Error;

/// Boxed future type alias used by [`ProcessRunner`] to keep the trait dyn-compatible.
pub type RunFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ProcessOutput, ProcessError>> + Send + 'a>>;

/// Options controlling how a command is executed.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Working directory for the child process. Inherits the current
    /// directory when `None`.
    pub cwd: Option<PathBuf>,
    /// Complete environment for the child process. The child sees
    /// exactly this map; nothing else is inherited.
    pub env: HashMap<String, String>,
}

/// The captured output of a successfully completed command.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// The captured standard output.
    pub stdout: String,
    /// The captured standard error.
    pub stderr: String,
}

/// Errors raised while executing a command.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The child process could not be spawned.
    #[error("failed to spawn command: {0}")]
    Spawn(#[source] std::io::Error),
    /// The child ran but exited with a non-zero status.
    #[error("command exited with status {code}: {stderr}")]
    NonZeroExit {
        /// Process exit code (`-1` if killed by a signal).
        code: i32,
        /// Captured standard error, kept for diagnostics.
        stderr: String,
    },
}

/// Executes rendered scripts as child processes.
///
/// Abstracting execution lets tests substitute a scripted runner and
/// observe spawns without touching the system shell.
pub trait ProcessRunner: Send + Sync {
    /// Runs `command` in the system shell with the given options and
    /// resolves with its captured output.
    ///
    /// # Errors
    ///
    /// The returned future resolves to an error if the command cannot
    /// be spawned or exits with a non-zero status.
    fn run(&self, command: &str, options: &RunOptions) -> RunFuture<'_>;
}
