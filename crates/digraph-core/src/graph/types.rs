use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::path::construct_path;

/// Vertex identifier. Dense `0..n` at construction, possibly sparse after removals.
pub type VertexId = u32;

/// Integer edge cost. Negative costs are allowed.
pub type Cost = i64;

/// A directed edge with its recorded cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub cost: Cost,
}

/// How the lowest-cost walk engine maintains its successor table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathReconstruction {
    /// Update `next[i][j]` whenever a relaxation through `k` improves `(i, j)`
    #[default]
    Tracked,
    /// Build `next` from direct edges only and never update it.
    /// Reconstructed paths may not realize the reported cost.
    DirectEdges,
}

impl std::str::FromStr for PathReconstruction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tracked" => Ok(PathReconstruction::Tracked),
            "direct-edges" | "direct" => Ok(PathReconstruction::DirectEdges),
            other => Err(format!(
                "unknown path reconstruction '{}' (expected: tracked, direct-edges)",
                other
            )),
        }
    }
}

/// Options for the lowest-cost walk engine
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkOptions {
    pub reconstruction: PathReconstruction,
}

/// Breadth-first search result
#[derive(Debug, Clone, Serialize)]
pub struct BfsResult {
    pub source: VertexId,
    pub target: VertexId,
    /// Hop count from source to target; `None` when the target is unreachable
    pub distance: Option<usize>,
    /// Parent of every vertex discovered before the search stopped
    pub predecessors: BTreeMap<VertexId, VertexId>,
}

impl BfsResult {
    pub fn reachable(&self) -> bool {
        self.distance.is_some()
    }

    /// Vertex sequence from source to target, empty when unreachable
    pub fn path(&self) -> Vec<VertexId> {
        if !self.reachable() {
            return Vec::new();
        }
        construct_path(self.source, self.target, &self.predecessors)
    }
}

/// Lowest-cost walk result
#[derive(Debug, Clone, Serialize)]
pub struct WalkResult {
    pub source: VertexId,
    pub target: VertexId,
    /// Minimal walk cost; `None` means unreachable
    pub cost: Option<Cost>,
    /// Vertex sequence reconstructed from the successor table
    pub path: Vec<VertexId>,
    /// Sum of edge costs along `path`; `None` when the path is empty or broken
    pub path_cost: Option<Cost>,
    pub reconstruction: PathReconstruction,
}

impl WalkResult {
    pub fn reachable(&self) -> bool {
        self.cost.is_some()
    }

    /// Whether the reconstructed path realizes the reported minimal cost.
    ///
    /// Always true for [`PathReconstruction::Tracked`]. With
    /// [`PathReconstruction::DirectEdges`] a `false` here means the path only
    /// follows direct-edge successors and is not a lowest-cost walk.
    pub fn path_matches_cost(&self) -> bool {
        self.cost == self.path_cost
    }
}

/// Outcome of Kahn's algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopologicalSort {
    pub is_dag: bool,
    /// Full topological order for a DAG; otherwise the acyclic prefix that was released
    pub order: Vec<VertexId>,
    /// Vertices whose predecessor counter never reached zero (empty for a DAG)
    pub blocked: Vec<VertexId>,
}

impl TopologicalSort {
    /// The topological order, or `None` if the graph has a cycle
    pub fn into_order(self) -> Option<Vec<VertexId>> {
        if self.is_dag {
            Some(self.order)
        } else {
            None
        }
    }
}

/// Highest-cost paths from a single source over a DAG
#[derive(Debug, Clone, Serialize)]
pub struct HighestCostPaths {
    pub source: VertexId,
    /// Defined only for vertices reachable from the source
    pub distances: BTreeMap<VertexId, Cost>,
    pub predecessors: BTreeMap<VertexId, VertexId>,
}

impl HighestCostPaths {
    pub fn distance(&self, vertex: VertexId) -> Option<Cost> {
        self.distances.get(&vertex).copied()
    }

    /// Path from the source to `target`; the single vertex `[source]` when there is none
    pub fn path_to(&self, target: VertexId) -> Vec<VertexId> {
        construct_path(self.source, target, &self.predecessors)
    }
}
