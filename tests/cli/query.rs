use crate::cli::support::{digraph, stdout_json, write_graph, TRIANGLE};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_no_subcommand_prints_banner() {
    digraph()
        .assert()
        .success()
        .stdout(predicate::str::contains("digraph --help"));
}

#[test]
fn test_info() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", TRIANGLE);

    digraph()
        .arg("--graph")
        .arg(&graph)
        .arg("info")
        .assert()
        .success()
        .stdout("Vertices: 3\nEdges: 3\n");
}

#[test]
fn test_graph_from_environment() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", TRIANGLE);

    digraph()
        .env("DIGRAPH_GRAPH", &graph)
        .arg("vertices")
        .assert()
        .success()
        .stdout("[0, 1, 2]\n");
}

#[test]
fn test_show_prints_edge_list() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", TRIANGLE);

    digraph()
        .arg("--graph")
        .arg(&graph)
        .arg("show")
        .assert()
        .success()
        .stdout(TRIANGLE);
}

#[test]
fn test_edges_json() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", TRIANGLE);

    let output = digraph()
        .arg("--graph")
        .arg(&graph)
        .args(["--format", "json", "edges"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let edges = json["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 3);
    assert_eq!(edges[2]["from"], 0);
    assert_eq!(edges[2]["to"], 2);
    assert_eq!(edges[2]["cost"], 10);
}

#[test]
fn test_exists_degrees_and_neighbors() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.txt", TRIANGLE);

    let run = |args: &[&str]| {
        digraph()
            .arg("--graph")
            .arg(&graph)
            .args(args)
            .assert()
            .success()
    };

    run(&["exists", "0", "1"]).stdout("Edge (0, 1) exists\n");
    run(&["exists", "1", "0"]).stdout("Edge (1, 0) does not exist\n");
    run(&["in-degree", "2"]).stdout("2\n");
    run(&["out-degree", "2"]).stdout("0\n");
    run(&["outbound", "0"]).stdout("[1, 2]\n");
    run(&["inbound", "2"]).stdout("[1, 0]\n");
    run(&["cost", "1", "2"]).stdout("3\n");
}
