//! `dowser search` command.

use std::collections::HashMap;
use std::path::Path;

use crate::config::SourcesFile;
use crate::context::ServiceContext;
use crate::source::{InputSource, ScriptSource};

/// Execute the `search` command.
///
/// Loads the sources file, runs the query against the selected source,
/// and prints the parsed results as pretty JSON on stdout.
///
/// # Errors
///
/// Returns an error string if the sources file is unusable, the async
/// runtime cannot start, or the search itself fails.
pub fn run(
    ctx: &ServiceContext,
    config_path: &Path,
    source_name: Option<&str>,
    query: &str,
    env: &[(String, String)],
) -> Result<(), String> {
    let file = SourcesFile::load(config_path)?;
    let config = file.select(source_name)?;
    let source = ScriptSource::new(ctx, config.clone());

    let overrides: HashMap<String, String> = env.iter().cloned().collect();
    let results = block_on_search(&source, query, &overrides)?;
    tracing::debug!(route = source.responds_to(), "search completed");

    let rendered = serde_json::to_string_pretty(&results)
        .map_err(|e| format!("Failed to format results: {e}"))?;
    println!("{rendered}");
    Ok(())
}

/// Drives one search to completion on a current-thread runtime.
fn block_on_search(
    source: &dyn InputSource,
    query: &str,
    overrides: &HashMap<String, String>,
) -> Result<serde_json::Value, String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_io()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;
    runtime.block_on(source.search(query, overrides)).map_err(|e| e.to_string())
}
