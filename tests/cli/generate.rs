use crate::cli::support::{digraph, stdout_json};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_random_with_seed_is_reproducible() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("a.txt");
    let second = dir.path().join("b.txt");

    for path in [&first, &second] {
        digraph()
            .arg("--graph")
            .arg(path)
            .args(["random", "8", "20", "--seed", "42"])
            .assert()
            .success();
    }

    let content = fs::read_to_string(&first).unwrap();
    assert_eq!(content, fs::read_to_string(&second).unwrap());
    assert!(content.starts_with("8 20\n"));
}

#[test]
fn test_random_cost_range_and_no_self_loops() {
    let dir = tempdir().unwrap();
    let graph = dir.path().join("g.txt");

    digraph()
        .arg("--graph")
        .arg(&graph)
        .args([
            "random",
            "5",
            "12",
            "--seed",
            "7",
            "--min-cost",
            "-3",
            "--max-cost",
            "3",
        ])
        .assert()
        .success();

    let output = digraph()
        .arg("--graph")
        .arg(&graph)
        .args(["--format", "json", "edges"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    let edges = json["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 12);
    for edge in edges {
        assert_ne!(edge["from"], edge["to"]);
        let cost = edge["cost"].as_i64().unwrap();
        assert!((-3..=3).contains(&cost));
    }
}

#[test]
fn test_random_reports_seed_in_json() {
    let dir = tempdir().unwrap();
    let graph = dir.path().join("g.txt");

    let output = digraph()
        .arg("--output")
        .arg(&graph)
        .args(["--format", "json", "random", "4", "3", "--seed", "5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["action"], "random");
    assert_eq!(json["seed"], 5);
    assert_eq!(json["edges"], 3);
}

#[test]
fn test_random_too_many_edges_is_usage_error() {
    let dir = tempdir().unwrap();
    let graph = dir.path().join("g.txt");

    digraph()
        .arg("--graph")
        .arg(&graph)
        .args(["random", "3", "7"])
        .assert()
        .code(2);
    assert!(!graph.exists());
}
