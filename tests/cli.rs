//! Integration tests for top-level CLI behavior.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn run_dowser(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_dowser");
    Command::new(bin).args(args).output().expect("failed to run dowser binary")
}

fn write_sources(dir_name: &str, yaml: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(dir_name);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("sources.yaml");
    fs::write(&path, yaml).unwrap();
    path
}

#[test]
fn search_prints_parsed_results() {
    let path = write_sources(
        "dowser_cli_search",
        "sources:\n  - name: echo\n    script: |\n      echo '{\"hits\":[\"{{query}}\"]}'\n    responds_to: results\n",
    );
    let output = run_dowser(&["search", "cat", "--config", path.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("\"hits\""));
    assert!(stdout.contains("\"cat\""));
}

#[test]
fn search_env_override_reaches_the_script() {
    let path = write_sources(
        "dowser_cli_env",
        "sources:\n  - name: echo\n    script: |\n      echo \"{\\\"key\\\":\\\"$API_KEY\\\"}\"\n    responds_to: results\n",
    );
    let output = run_dowser(&[
        "search",
        "cat",
        "--config",
        path.to_str().unwrap(),
        "--env",
        "API_KEY=x",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("\"x\""));
}

#[test]
fn search_with_unknown_source_fails() {
    let path = write_sources(
        "dowser_cli_unknown",
        "sources:\n  - name: echo\n    script: echo '[]'\n    responds_to: results\n",
    );
    let output =
        run_dowser(&["search", "cat", "--config", path.to_str().unwrap(), "--source", "nope"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("No source named"));
}

#[test]
fn search_with_invalid_script_output_fails() {
    let path = write_sources(
        "dowser_cli_badjson",
        "sources:\n  - name: echo\n    script: echo not-json\n    responds_to: results\n",
    );
    let output = run_dowser(&["search", "cat", "--config", path.to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("not valid JSON"));
}

#[test]
fn search_with_failing_script_reports_execution_failure() {
    let path = write_sources(
        "dowser_cli_exit",
        "sources:\n  - name: echo\n    script: exit 3\n    responds_to: results\n",
    );
    let output = run_dowser(&["search", "cat", "--config", path.to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("script execution failed"));
}

#[test]
fn sources_lists_configured_sources() {
    let path = write_sources(
        "dowser_cli_sources",
        "sources:\n  - name: notes\n    script: echo '[]'\n    responds_to: results\n  - name: files\n    script: echo '[]'\n    responds_to: files\n",
    );
    let output = run_dowser(&["sources", "--config", path.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("notes"));
    assert!(stdout.contains("files"));
}

#[test]
fn search_help_shows_usage() {
    let output = run_dowser(&["search", "--help"]);
    let combined = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(combined.contains("QUERY"));
    assert!(combined.contains("--source"));
    assert!(combined.contains("--env"));
}

#[test]
fn missing_sources_file_fails_with_a_clear_message() {
    let output = run_dowser(&["sources", "--config", "/nonexistent/sources.yaml"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Failed to read sources file"));
}
