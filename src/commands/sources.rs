//! `dowser sources` command.

use std::path::Path;

use crate::config::SourcesFile;

/// Execute the `sources` command, listing every configured source.
///
/// # Errors
///
/// Returns an error string if the sources file cannot be loaded.
pub fn run(config_path: &Path) -> Result<(), String> {
    let file = SourcesFile::load(config_path)?;
    if file.sources.is_empty() {
        println!("No sources configured");
        return Ok(());
    }
    for source in &file.sources {
        match &source.cwd {
            Some(cwd) => println!(
                "{}  (routes to {}, cwd {})",
                source.name,
                source.responds_to,
                cwd.display()
            ),
            None => println!("{}  (routes to {})", source.name, source.responds_to),
        }
    }
    Ok(())
}
