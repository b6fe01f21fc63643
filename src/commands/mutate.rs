//! Graph mutations; the caller persists the graph afterwards

use serde::Serialize;

use digraph_core::error::Result;
use digraph_core::graph::{Cost, DirectedGraph, VertexId};

use super::Report;

/// Outcome of a mutation together with the resulting graph size
#[derive(Debug, Serialize)]
pub struct MutationReport {
    pub action: &'static str,
    pub message: String,
    pub vertices: usize,
    pub edges: usize,
}

impl MutationReport {
    fn new(action: &'static str, message: String, graph: &DirectedGraph) -> Self {
        Self {
            action,
            message,
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
        }
    }
}

impl Report for MutationReport {
    fn human(&self) -> String {
        self.message.clone()
    }

    fn is_chatter(&self) -> bool {
        true
    }
}

pub fn add_vertex(graph: &mut DirectedGraph, vertex: VertexId) -> Result<MutationReport> {
    graph.add_vertex(vertex)?;
    Ok(MutationReport::new(
        "add_vertex",
        format!("Added vertex {}", vertex),
        graph,
    ))
}

pub fn remove_vertex(graph: &mut DirectedGraph, vertex: VertexId) -> Result<MutationReport> {
    let before = graph.edge_count();
    graph.remove_vertex(vertex)?;
    let removed = before - graph.edge_count();
    Ok(MutationReport::new(
        "remove_vertex",
        format!("Removed vertex {} and {} incident edges", vertex, removed),
        graph,
    ))
}

pub fn add_edge(
    graph: &mut DirectedGraph,
    from: VertexId,
    to: VertexId,
    cost: Cost,
) -> Result<MutationReport> {
    graph.add_edge(from, to, cost)?;
    Ok(MutationReport::new(
        "add_edge",
        format!("Added edge ({}, {}) with cost {}", from, to, cost),
        graph,
    ))
}

pub fn remove_edge(graph: &mut DirectedGraph, from: VertexId, to: VertexId) -> Result<MutationReport> {
    graph.remove_edge(from, to)?;
    Ok(MutationReport::new(
        "remove_edge",
        format!("Removed edge ({}, {})", from, to),
        graph,
    ))
}

pub fn set_cost(
    graph: &mut DirectedGraph,
    from: VertexId,
    to: VertexId,
    cost: Cost,
) -> Result<MutationReport> {
    let old = graph.cost(from, to)?;
    graph.set_cost(from, to, cost)?;
    Ok(MutationReport::new(
        "set_cost",
        format!("Changed cost of ({}, {}) from {} to {}", from, to, old, cost),
        graph,
    ))
}
