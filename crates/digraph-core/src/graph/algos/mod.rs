//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first shortest path by hop count
//! - `walk`: All-pairs lowest-cost walks (min-plus matrix iteration)
//! - `dag`: Topological sorting and highest-cost paths over a DAG

pub mod bfs;
pub mod dag;
pub mod walk;

pub use bfs::bfs_shortest_path;
pub use dag::{highest_cost_path, topological_sort};
pub use walk::lowest_cost_walk;

use crate::error::Result;
use crate::graph::types::{
    BfsResult, HighestCostPaths, TopologicalSort, VertexId, WalkOptions, WalkResult,
};
use crate::graph::DirectedGraph;

impl DirectedGraph {
    /// Fewest-hops path from `source` to `target`
    pub fn bfs(&self, source: VertexId, target: VertexId) -> Result<BfsResult> {
        bfs_shortest_path(self, source, target)
    }

    /// Lowest-cost walk with tracked successor reconstruction
    pub fn lowest_cost_walk(&self, source: VertexId, target: VertexId) -> Result<WalkResult> {
        lowest_cost_walk(self, source, target, &WalkOptions::default())
    }

    pub fn lowest_cost_walk_with(
        &self,
        source: VertexId,
        target: VertexId,
        opts: &WalkOptions,
    ) -> Result<WalkResult> {
        lowest_cost_walk(self, source, target, opts)
    }

    pub fn topological_sort(&self) -> Result<TopologicalSort> {
        topological_sort(self)
    }

    pub fn highest_cost_path(&self, source: VertexId) -> Result<HighestCostPaths> {
        highest_cost_path(self, source)
    }
}
