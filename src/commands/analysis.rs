//! Path and acyclicity analyses

use serde::Serialize;

use digraph_core::error::{DigraphError, Result};
use digraph_core::format::format_vertex_list;
use digraph_core::graph::{Cost, DirectedGraph, PathReconstruction, VertexId, WalkOptions};

use super::Report;

#[derive(Debug, Serialize)]
pub struct BfsReport {
    pub source: VertexId,
    pub target: VertexId,
    pub reachable: bool,
    pub distance: Option<usize>,
    pub path: Vec<VertexId>,
}

impl Report for BfsReport {
    fn human(&self) -> String {
        match self.distance {
            Some(distance) => format!(
                "Distance: {}\nPath: {}",
                distance,
                format_vertex_list(&self.path)
            ),
            None => "There is no path".to_string(),
        }
    }
}

pub fn bfs(graph: &DirectedGraph, source: VertexId, target: VertexId) -> Result<BfsReport> {
    let result = graph.bfs(source, target)?;
    Ok(BfsReport {
        source,
        target,
        reachable: result.reachable(),
        distance: result.distance,
        path: result.path(),
    })
}

#[derive(Debug, Serialize)]
pub struct WalkReport {
    pub source: VertexId,
    pub target: VertexId,
    pub reachable: bool,
    pub cost: Option<Cost>,
    pub path: Vec<VertexId>,
    pub path_cost: Option<Cost>,
    pub path_matches_cost: bool,
    pub reconstruction: PathReconstruction,
}

impl Report for WalkReport {
    fn human(&self) -> String {
        let Some(cost) = self.cost else {
            return "No path".to_string();
        };
        let mut out = format!("Cost: {}\nPath: {}", cost, format_vertex_list(&self.path));
        if !self.path_matches_cost {
            let realized = self
                .path_cost
                .map_or_else(|| "no cost".to_string(), |c| format!("cost {}", c));
            out.push_str(&format!(
                "\nNote: path from direct-edge successors has {}, not the lowest cost {}",
                realized, cost
            ));
        }
        out
    }
}

pub fn walk(
    graph: &DirectedGraph,
    source: VertexId,
    target: VertexId,
    opts: &WalkOptions,
) -> Result<WalkReport> {
    let result = graph.lowest_cost_walk_with(source, target, opts)?;
    let path = if result.reachable() {
        result.path.clone()
    } else {
        Vec::new()
    };
    Ok(WalkReport {
        source,
        target,
        reachable: result.reachable(),
        cost: result.cost,
        path_matches_cost: !result.reachable() || result.path_matches_cost(),
        path,
        path_cost: result.path_cost,
        reconstruction: result.reconstruction,
    })
}

#[derive(Debug, Serialize)]
pub struct TopoReport {
    pub is_dag: bool,
    pub order: Vec<VertexId>,
    pub blocked: Vec<VertexId>,
}

impl Report for TopoReport {
    fn human(&self) -> String {
        if self.is_dag {
            format!("Topological order: {}", format_vertex_list(&self.order))
        } else {
            "The graph is not a DAG".to_string()
        }
    }
}

pub fn topo(graph: &DirectedGraph) -> Result<TopoReport> {
    let sort = graph.topological_sort()?;
    Ok(TopoReport {
        is_dag: sort.is_dag,
        order: sort.order,
        blocked: sort.blocked,
    })
}

#[derive(Debug, Serialize)]
pub struct HighestReport {
    pub source: VertexId,
    pub target: VertexId,
    pub reachable: bool,
    pub cost: Option<Cost>,
    pub path: Vec<VertexId>,
}

impl Report for HighestReport {
    fn human(&self) -> String {
        match self.cost {
            Some(cost) => format!(
                "Highest cost: {}\nPath: {}",
                cost,
                format_vertex_list(&self.path)
            ),
            None => "No path".to_string(),
        }
    }
}

pub fn highest(graph: &DirectedGraph, source: VertexId, target: VertexId) -> Result<HighestReport> {
    if !graph.contains_vertex(target) {
        return Err(DigraphError::vertex_not_found(target));
    }
    let paths = graph.highest_cost_path(source)?;
    let cost = paths.distance(target);
    let path = if cost.is_some() {
        paths.path_to(target)
    } else {
        Vec::new()
    };
    Ok(HighestReport {
        source,
        target,
        reachable: cost.is_some(),
        cost,
        path,
    })
}
