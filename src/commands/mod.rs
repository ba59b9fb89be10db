//! Command dispatch and handlers.

pub mod search;
pub mod sources;

use crate::cli::Command;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Search { query, source, config, env } => {
            let ctx = ServiceContext::live();
            search::run(&ctx, config, source.as_deref(), query, env)
        }
        Command::Sources { config } => sources::run(config),
    }
}
