use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for digraph, isolated from the caller's environment
pub fn digraph() -> Command {
    let mut cmd = cargo_bin_cmd!("digraph");
    cmd.env_remove("DIGRAPH_GRAPH")
        .env_remove("DIGRAPH_LOG")
        .env_remove("RUST_LOG")
        .env(
            "DIGRAPH_CONFIG_DIR",
            std::env::temp_dir().join("digraph-cli-tests-no-config"),
        );
    cmd
}

/// Write an edge list into `dir` and return its path
pub fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// The weighted three-vertex sample: 0->1 (4), 1->2 (3), 0->2 (10)
pub const TRIANGLE: &str = "3 3\n0 1 4\n1 2 3\n0 2 10\n";

/// Parse a command's stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
