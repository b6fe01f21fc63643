use crate::cli::support::{digraph, write_graph, TRIANGLE};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_missing_graph_flag_is_usage_error() {
    digraph()
        .arg("info")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no graph file given"));
}

#[test]
fn test_unreadable_graph_file() {
    let dir = tempdir().unwrap();

    digraph()
        .arg("--graph")
        .arg(dir.path().join("missing.txt"))
        .arg("info")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read graph"));
}

#[test]
fn test_malformed_edge_list_reports_line() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", "3 2\n0 1 4\n1 x 3\n");

    digraph()
        .arg("--graph")
        .arg(&graph)
        .arg("info")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("edge list line 3"));
}

#[test]
fn test_unknown_vertex_is_data_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", TRIANGLE);

    digraph()
        .arg("--graph")
        .arg(&graph)
        .args(["out-degree", "9"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vertex 9 does not exist"));
}

#[test]
fn test_failed_mutation_does_not_rewrite_file() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", TRIANGLE);

    digraph()
        .arg("--graph")
        .arg(&graph)
        .args(["add-edge", "0", "1", "5"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(std::fs::read_to_string(&graph).unwrap(), TRIANGLE);
}

#[test]
fn test_json_error_envelope() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", TRIANGLE);

    let output = digraph()
        .arg("--graph")
        .arg(&graph)
        .args(["--format", "json", "cost", "2", "0"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "edge_not_found");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_json_error_for_bad_arguments() {
    let output = digraph()
        .args(["--format", "json", "bfs", "zero", "1"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_unknown_format_rejected() {
    digraph()
        .args(["--format", "xml", "info"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn test_invalid_config_file() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", TRIANGLE);
    let config = write_graph(
        dir.path(),
        "config.toml",
        "[random]\nmin_cost = 9\nmax_cost = 1\n",
    );

    digraph()
        .arg("--graph")
        .arg(&graph)
        .arg("--config")
        .arg(&config)
        .arg("info")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid random cost range"));
}
