//! Input sources — query execution against configured search backends.
//!
//! An input source takes a caller query, produces a command for the
//! system shell, runs it, and returns the structured results the
//! command printed. [`ScriptSource`] is the script-backed conforming
//! type; [`InputSource`] is the seam callers program against.

pub mod env;
pub mod script;

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use serde_json::Value;
use thiserror::Error;

use crate::ports::process::ProcessError;
use crate::ports::template::TemplateError;

pub use script::ScriptSource;

/// Boxed future type alias used by [`InputSource`] to keep the trait dyn-compatible.
pub type SearchFuture<'a> = Pin<Box<dyn Future<Output = Result<Value, SearchError>> + Send + 'a>>;

/// Errors raised by a search, discriminable by pipeline stage.
///
/// A failed search carries exactly one of these: a configuration
/// problem (template), an execution environment problem (process), or
/// a data contract problem (parse). None are recovered internally.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The script template could not be rendered.
    #[error("template rendering failed: {0}")]
    Template(#[from] TemplateError),
    /// The rendered script could not be spawned or exited non-zero.
    #[error("script execution failed: {0}")]
    Process(#[from] ProcessError),
    /// The script exited zero but printed output that is not valid JSON.
    #[error("script output is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
}

/// A configured search source.
///
/// One conforming type exists per source kind. Callers hold sources as
/// trait objects and dispatch each source's results using its route
/// identifier.
pub trait InputSource: Send + Sync {
    /// The route identifier callers use to dispatch this source's
    /// results. Opaque to the source itself.
    fn responds_to(&self) -> &str;

    /// Runs the source against `query`.
    ///
    /// Entries in `env_overrides` replace the process-wide environment
    /// value for this call only; absent keys inherit it. The returned
    /// future suspends only while the underlying work runs.
    fn search(&self, query: &str, env_overrides: &HashMap<String, String>) -> SearchFuture<'_>;
}
