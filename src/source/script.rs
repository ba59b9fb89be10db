//! Script-backed input source.
//!
//! Binds the query into a shell-script template, runs the rendered
//! script as a child process, and parses its standard output as JSON.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::config::SourceConfig;
use crate::context::ServiceContext;
use crate::ports::process::RunOptions;
use crate::source::env::{environment_snapshot, merge_environment};
use crate::source::{InputSource, SearchError, SearchFuture};

/// Runs a configured shell-script template as a search backend.
///
/// All collaborators are reached through the service context. The
/// source itself holds only immutable configuration, so concurrent
/// searches on one source are independent: each call renders, merges
/// its environment, and spawns in isolation.
pub struct ScriptSource<'a> {
    ctx: &'a ServiceContext,
    config: SourceConfig,
}

impl<'a> ScriptSource<'a> {
    /// Creates a source from its configuration.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, config: SourceConfig) -> Self {
        Self { ctx, config }
    }
}

impl InputSource for ScriptSource<'_> {
    fn responds_to(&self) -> &str {
        &self.config.responds_to
    }

    fn search(&self, query: &str, env_overrides: &HashMap<String, String>) -> SearchFuture<'_> {
        let query = query.to_owned();
        let overrides = env_overrides.clone();

        Box::pin(async move {
            let mut bindings = HashMap::new();
            bindings.insert("query".to_string(), query);
            let script = self.ctx.template.render(&self.config.script, &bindings)?;
            debug!(source = %self.config.name, "rendered script template");

            let options = RunOptions {
                cwd: self.config.cwd.clone(),
                env: merge_environment(&environment_snapshot(), &overrides),
            };
            let output = self.ctx.runner.run(&script, &options).await?;
            debug!(
                source = %self.config.name,
                stdout_bytes = output.stdout.len(),
                "script completed"
            );

            serde_json::from_str::<Value>(output.stdout.trim()).map_err(SearchError::Parse)
        })
    }
}
