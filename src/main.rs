//! Binary entrypoint for the `dowser` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Load .env before the first environment snapshot is taken.
    let _ = dotenvy::dotenv();
    dowser::logging::init();

    match dowser::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
