//! Edge-list text encoding
//!
//! ```text
//! <vertexCount> <edgeCount>
//! <from> <to> <cost>      (edgeCount lines)
//! <vertex>                (optional trailer: exactly vertexCount lines)
//! ```
//!
//! Without a trailer the vertices are `0..vertexCount`. The trailer is only
//! written when the vertex set is not dense, so graphs that never lost a
//! vertex serialize in the plain two-section form. Blank lines are ignored.
//! This module works on strings; reading and writing files is left to the
//! caller.

use crate::bail_parse;
use crate::error::{DigraphError, Result};
use crate::graph::{Cost, DirectedGraph, VertexId};

/// Largest vertex count a header may declare
pub const MAX_VERTICES: VertexId = 1 << 24;

/// Parse an edge list into a graph
#[tracing::instrument(skip(input), fields(bytes = input.len()))]
pub fn parse(input: &str) -> Result<DirectedGraph> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let Some((header_line, header)) = lines.next() else {
        bail_parse!(1, "missing '<vertexCount> <edgeCount>' header");
    };
    let [vertex_count, edge_count] = fields::<2>(header_line, header)?;
    let vertex_count = to_vertex(header_line, vertex_count)?;
    if vertex_count > MAX_VERTICES {
        bail_parse!(
            header_line,
            "header declares {} vertices, at most {} are supported",
            vertex_count,
            MAX_VERTICES
        );
    }
    let edge_count = usize::try_from(edge_count)
        .map_err(|_| DigraphError::parse(header_line, format!("invalid edge count {}", edge_count)))?;

    let mut last_line = header_line;
    // Sized by what is read, not by what the header claims
    let mut edges: Vec<(usize, VertexId, VertexId, Cost)> = Vec::new();
    for found in 0..edge_count {
        let Some((line, text)) = lines.next() else {
            bail_parse!(
                last_line + 1,
                "header declares {} edges, found {}",
                edge_count,
                found
            );
        };
        let [from, to, cost] = fields::<3>(line, text)?;
        edges.push((line, to_vertex(line, from)?, to_vertex(line, to)?, cost));
        last_line = line;
    }

    let trailer: Vec<(usize, &str)> = lines.collect();
    let mut graph = if trailer.is_empty() {
        DirectedGraph::new(vertex_count)
    } else {
        vertex_trailer(vertex_count, &trailer)?
    };

    for (line, from, to, cost) in edges {
        graph
            .add_edge(from, to, cost)
            .map_err(|e| DigraphError::parse(line, e))?;
    }

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "parsed_edge_list"
    );
    Ok(graph)
}

/// Serialize a graph to the edge-list format
pub fn to_string(graph: &DirectedGraph) -> String {
    let mut out = format!("{} {}\n", graph.vertex_count(), graph.edge_count());
    for edge in graph.edges() {
        out.push_str(&format!("{} {} {}\n", edge.from, edge.to, edge.cost));
    }
    if !is_dense(graph) {
        for vertex in graph.vertices() {
            out.push_str(&format!("{}\n", vertex));
        }
    }
    out
}

/// Whether the vertex set is exactly `0..vertex_count`
fn is_dense(graph: &DirectedGraph) -> bool {
    let count = graph.vertex_count();
    graph.vertices().all(|v| (v as usize) < count)
}

fn vertex_trailer(vertex_count: VertexId, trailer: &[(usize, &str)]) -> Result<DirectedGraph> {
    if trailer.len() != vertex_count as usize {
        bail_parse!(
            trailer[0].0,
            "vertex trailer lists {} vertices, header declares {}",
            trailer.len(),
            vertex_count
        );
    }
    let mut graph = DirectedGraph::default();
    for &(line, text) in trailer {
        let [vertex] = fields::<1>(line, text)?;
        graph
            .add_vertex(to_vertex(line, vertex)?)
            .map_err(|e| DigraphError::parse(line, e))?;
    }
    Ok(graph)
}

fn fields<const N: usize>(line: usize, text: &str) -> Result<[i64; N]> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != N {
        bail_parse!(line, "expected {} integers, found {}", N, tokens.len());
    }
    let mut values = [0i64; N];
    for (slot, token) in values.iter_mut().zip(tokens) {
        *slot = token
            .parse()
            .map_err(|_| DigraphError::parse(line, format!("'{}' is not an integer", token)))?;
    }
    Ok(values)
}

fn to_vertex(line: usize, value: i64) -> Result<VertexId> {
    VertexId::try_from(value)
        .map_err(|_| DigraphError::parse(line, format!("{} is not a valid vertex id", value)))
}
