use crate::cli::support::{digraph, write_graph, TRIANGLE};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_new_creates_empty_graph() {
    let dir = tempdir().unwrap();
    let graph = dir.path().join("g.txt");

    digraph()
        .arg("--graph")
        .arg(&graph)
        .args(["new", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 4 vertices and 0 edges"));

    assert_eq!(fs::read_to_string(&graph).unwrap(), "4 0\n");
}

#[test]
fn test_add_edge_with_negative_cost_is_saved() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", TRIANGLE);

    digraph()
        .arg("--graph")
        .arg(&graph)
        .args(["add-edge", "2", "0", "-6"])
        .assert()
        .success()
        .stdout("Added edge (2, 0) with cost -6\n");

    assert_eq!(
        fs::read_to_string(&graph).unwrap(),
        "3 4\n0 1 4\n1 2 3\n0 2 10\n2 0 -6\n"
    );
}

#[test]
fn test_quiet_suppresses_mutation_message() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", TRIANGLE);

    digraph()
        .arg("--graph")
        .arg(&graph)
        .args(["--quiet", "set-cost", "0", "2", "1"])
        .assert()
        .success()
        .stdout("");

    digraph()
        .arg("--graph")
        .arg(&graph)
        .args(["cost", "0", "2"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_output_flag_leaves_input_untouched() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", TRIANGLE);
    let out = dir.path().join("out.txt");

    digraph()
        .arg("--graph")
        .arg(&graph)
        .arg("--output")
        .arg(&out)
        .args(["remove-edge", "0", "2"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&graph).unwrap(), TRIANGLE);
    assert_eq!(fs::read_to_string(&out).unwrap(), "3 2\n0 1 4\n1 2 3\n");
}

#[test]
fn test_remove_vertex_writes_trailer() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", TRIANGLE);

    digraph()
        .arg("--graph")
        .arg(&graph)
        .args(["remove-vertex", "1"])
        .assert()
        .success()
        .stdout("Removed vertex 1 and 2 incident edges\n");

    assert_eq!(fs::read_to_string(&graph).unwrap(), "2 1\n0 2 10\n0\n2\n");

    digraph()
        .arg("--graph")
        .arg(&graph)
        .arg("vertices")
        .assert()
        .success()
        .stdout("[0, 2]\n");
}

#[test]
fn test_add_vertex_then_edge() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", "1 0\n");

    digraph()
        .arg("--graph")
        .arg(&graph)
        .args(["add-vertex", "7"])
        .assert()
        .success();
    digraph()
        .arg("--graph")
        .arg(&graph)
        .args(["add-edge", "7", "0", "2"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&graph).unwrap(), "2 1\n7 0 2\n0\n7\n");
}

#[test]
fn test_copy_is_independent() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", TRIANGLE);
    let copy = dir.path().join("copy.txt");

    digraph()
        .arg("--graph")
        .arg(&graph)
        .arg("copy")
        .arg(&copy)
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&copy).unwrap(), TRIANGLE);

    digraph()
        .arg("--graph")
        .arg(&copy)
        .args(["remove-edge", "0", "1"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&graph).unwrap(), TRIANGLE);
}
