//! Graph file resolution, reading and writing

use std::fs;
use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use digraph_core::bail_usage;
use digraph_core::edgelist;
use digraph_core::error::{DigraphError, Result};
use digraph_core::graph::DirectedGraph;
use digraph_core::trace_time;

pub(super) fn input_path(cli: &Cli) -> Result<&Path> {
    match &cli.graph {
        Some(path) => Ok(path.as_path()),
        None => bail_usage!("no graph file given (use --graph or set DIGRAPH_GRAPH)"),
    }
}

pub(super) fn output_path(cli: &Cli) -> Result<&Path> {
    match cli.output.as_ref().or(cli.graph.as_ref()) {
        Some(path) => Ok(path.as_path()),
        None => bail_usage!("no output file given (use --output or --graph)"),
    }
}

pub(super) fn read_graph(path: &Path) -> Result<DirectedGraph> {
    let start = Instant::now();
    let content = fs::read_to_string(path)
        .map_err(|e| DigraphError::io_operation("read graph", path.display(), e))?;
    let graph = edgelist::parse(&content)?;
    trace_time!(start, "read_graph", vertices = graph.vertex_count());
    Ok(graph)
}

pub(super) fn write_graph(path: &Path, graph: &DirectedGraph) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| DigraphError::io_operation("create directory", parent.display(), e))?;
    }
    fs::write(path, edgelist::to_string(graph))
        .map_err(|e| DigraphError::io_operation("write graph", path.display(), e))?;
    debug!(path = %path.display(), edges = graph.edge_count(), "write_graph");
    Ok(())
}
