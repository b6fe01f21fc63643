//! Directed weighted graph store and analyses
//!
//! Provides the graph engine:
//! - `DirectedGraph` store with triple-consistent adjacency and costs
//! - BFS shortest path, min-plus lowest-cost walks, topological sort and
//!   DAG highest-cost paths
//! - Graph provider trait for pluggable data sources

pub mod algos;
pub mod path;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::{bfs_shortest_path, highest_cost_path, lowest_cost_walk, topological_sort};
pub use path::construct_path;
pub use store::DirectedGraph;
pub use traversal::GraphProvider;
pub use types::{
    BfsResult, Cost, Edge, HighestCostPaths, PathReconstruction, TopologicalSort, VertexId,
    WalkOptions, WalkResult,
};
