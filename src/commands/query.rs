//! Read-only queries over a loaded graph

use serde::Serialize;

use digraph_core::edgelist;
use digraph_core::error::Result;
use digraph_core::format::format_vertex_list;
use digraph_core::graph::{Cost, DirectedGraph, Edge, VertexId};

use super::Report;

/// Edge direction relative to a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
}

/// The whole graph: edge-list text for humans, structured for JSON
#[derive(Debug, Serialize)]
pub struct GraphReport {
    pub vertices: Vec<VertexId>,
    pub edges: Vec<Edge>,
    #[serde(skip)]
    text: String,
}

impl Report for GraphReport {
    fn human(&self) -> String {
        self.text.trim_end().to_string()
    }
}

pub fn show(graph: &DirectedGraph) -> GraphReport {
    GraphReport {
        vertices: graph.vertices().collect(),
        edges: graph.edges().collect(),
        text: edgelist::to_string(graph),
    }
}

#[derive(Debug, Serialize)]
pub struct InfoReport {
    pub vertices: usize,
    pub edges: usize,
}

impl Report for InfoReport {
    fn human(&self) -> String {
        format!("Vertices: {}\nEdges: {}", self.vertices, self.edges)
    }
}

pub fn info(graph: &DirectedGraph) -> InfoReport {
    InfoReport {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
    }
}

#[derive(Debug, Serialize)]
pub struct VerticesReport {
    pub vertices: Vec<VertexId>,
}

impl Report for VerticesReport {
    fn human(&self) -> String {
        format_vertex_list(&self.vertices)
    }
}

pub fn vertices(graph: &DirectedGraph) -> VerticesReport {
    VerticesReport {
        vertices: graph.vertices().collect(),
    }
}

#[derive(Debug, Serialize)]
pub struct EdgesReport {
    pub edges: Vec<Edge>,
}

impl Report for EdgesReport {
    fn human(&self) -> String {
        self.edges
            .iter()
            .map(|e| format!("{} -> {} (cost {})", e.from, e.to, e.cost))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn edges(graph: &DirectedGraph) -> EdgesReport {
    EdgesReport {
        edges: graph.edges().collect(),
    }
}

#[derive(Debug, Serialize)]
pub struct ExistsReport {
    pub from: VertexId,
    pub to: VertexId,
    pub exists: bool,
}

impl Report for ExistsReport {
    fn human(&self) -> String {
        if self.exists {
            format!("Edge ({}, {}) exists", self.from, self.to)
        } else {
            format!("Edge ({}, {}) does not exist", self.from, self.to)
        }
    }
}

pub fn exists(graph: &DirectedGraph, from: VertexId, to: VertexId) -> Result<ExistsReport> {
    Ok(ExistsReport {
        from,
        to,
        exists: graph.edge_exists(from, to)?,
    })
}

#[derive(Debug, Serialize)]
pub struct DegreeReport {
    pub vertex: VertexId,
    pub direction: Direction,
    pub degree: usize,
}

impl Report for DegreeReport {
    fn human(&self) -> String {
        self.degree.to_string()
    }
}

pub fn degree(graph: &DirectedGraph, vertex: VertexId, direction: Direction) -> Result<DegreeReport> {
    let degree = match direction {
        Direction::In => graph.in_degree(vertex)?,
        Direction::Out => graph.out_degree(vertex)?,
    };
    Ok(DegreeReport {
        vertex,
        direction,
        degree,
    })
}

#[derive(Debug, Serialize)]
pub struct NeighborsReport {
    pub vertex: VertexId,
    pub direction: Direction,
    pub neighbors: Vec<VertexId>,
}

impl Report for NeighborsReport {
    fn human(&self) -> String {
        format_vertex_list(&self.neighbors)
    }
}

pub fn neighbors(
    graph: &DirectedGraph,
    vertex: VertexId,
    direction: Direction,
) -> Result<NeighborsReport> {
    let neighbors = match direction {
        Direction::In => graph.inbound(vertex)?,
        Direction::Out => graph.outbound(vertex)?,
    };
    Ok(NeighborsReport {
        vertex,
        direction,
        neighbors: neighbors.to_vec(),
    })
}

#[derive(Debug, Serialize)]
pub struct CostReport {
    pub from: VertexId,
    pub to: VertexId,
    pub cost: Cost,
}

impl Report for CostReport {
    fn human(&self) -> String {
        self.cost.to_string()
    }
}

pub fn cost(graph: &DirectedGraph, from: VertexId, to: VertexId) -> Result<CostReport> {
    Ok(CostReport {
        from,
        to,
        cost: graph.cost(from, to)?,
    })
}
