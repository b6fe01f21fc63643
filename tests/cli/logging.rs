use crate::cli::support::{digraph, write_graph, TRIANGLE};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", TRIANGLE);

    digraph()
        .arg("--graph")
        .arg(&graph)
        .args(["--log-level", "debug", "info"])
        .assert()
        .success()
        .stderr(predicate::str::contains("load_config"));
}

#[test]
fn test_default_level_hides_debug_messages() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", TRIANGLE);

    digraph()
        .arg("--graph")
        .arg(&graph)
        .arg("info")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_logs_mutations() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", TRIANGLE);

    digraph()
        .arg("--graph")
        .arg(&graph)
        .args(["--verbose", "add-edge", "2", "0", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("add_edge"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", TRIANGLE);

    let output = digraph()
        .arg("--graph")
        .arg(&graph)
        .args(["--log-level", "debug", "--log-json", "info"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    let line: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(line.get("level").is_some());
}
