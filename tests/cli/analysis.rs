use crate::cli::support::{digraph, stdout_json, write_graph, TRIANGLE};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_bfs_direct_edge() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", TRIANGLE);

    digraph()
        .arg("--graph")
        .arg(&graph)
        .args(["bfs", "0", "2"])
        .assert()
        .success()
        .stdout("Distance: 1\nPath: [0, 2]\n");
}

#[test]
fn test_bfs_unreachable() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", TRIANGLE);

    digraph()
        .arg("--graph")
        .arg(&graph)
        .args(["bfs", "2", "0"])
        .assert()
        .success()
        .stdout("There is no path\n");

    let output = digraph()
        .arg("--graph")
        .arg(&graph)
        .args(["--format", "json", "bfs", "2", "0"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["reachable"], false);
    assert!(json["distance"].is_null());
}

#[test]
fn test_walk_lowest_cost() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", TRIANGLE);

    digraph()
        .arg("--graph")
        .arg(&graph)
        .args(["walk", "0", "2"])
        .assert()
        .success()
        .stdout("Cost: 7\nPath: [0, 1, 2]\n");
}

#[test]
fn test_walk_direct_edges_flags_mismatch() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", TRIANGLE);

    let output = digraph()
        .arg("--graph")
        .arg(&graph)
        .args([
            "--format",
            "json",
            "walk",
            "0",
            "2",
            "--reconstruction",
            "direct-edges",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["cost"], 7);
    assert_eq!(json["path_cost"], 10);
    assert_eq!(json["path_matches_cost"], false);
    assert_eq!(json["reconstruction"], "direct-edges");
}

#[test]
fn test_walk_reconstruction_from_config() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", TRIANGLE);
    let config = write_graph(
        dir.path(),
        "config.toml",
        "[walk]\npath_reconstruction = \"direct-edges\"\n",
    );

    digraph()
        .arg("--graph")
        .arg(&graph)
        .arg("--config")
        .arg(&config)
        .args(["walk", "0", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not the lowest cost 7"));
}

#[test]
fn test_walk_unreachable() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", TRIANGLE);

    digraph()
        .arg("--graph")
        .arg(&graph)
        .args(["walk", "2", "0"])
        .assert()
        .success()
        .stdout("No path\n");
}

#[test]
fn test_walk_negative_cycle_is_data_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", "2 2\n0 1 1\n1 0 -2\n");

    digraph()
        .arg("--graph")
        .arg(&graph)
        .args(["walk", "0", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("negative cost cycles"));
}

#[test]
fn test_topo_dag_and_cycle() {
    let dir = tempdir().unwrap();
    let dag = write_graph(dir.path(), "dag.txt", TRIANGLE);
    let cyclic = write_graph(dir.path(), "cyclic.txt", "2 2\n0 1 1\n1 0 1\n");

    digraph()
        .arg("--graph")
        .arg(&dag)
        .arg("topo")
        .assert()
        .success()
        .stdout("Topological order: [0, 1, 2]\n");

    digraph()
        .arg("--graph")
        .arg(&cyclic)
        .arg("topo")
        .assert()
        .success()
        .stdout("The graph is not a DAG\n");
}

#[test]
fn test_highest_cost_path() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", "3 3\n0 1 2\n0 2 5\n1 2 1\n");

    digraph()
        .arg("--graph")
        .arg(&graph)
        .args(["highest", "0", "2"])
        .assert()
        .success()
        .stdout("Highest cost: 5\nPath: [0, 2]\n");

    digraph()
        .arg("--graph")
        .arg(&graph)
        .args(["highest", "2", "0"])
        .assert()
        .success()
        .stdout("No path\n");
}

#[test]
fn test_highest_on_cycle_fails() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", "2 2\n0 1 1\n1 0 1\n");

    digraph()
        .arg("--graph")
        .arg(&graph)
        .args(["highest", "0", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not a DAG"));
}
