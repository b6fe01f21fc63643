//! Commands that produce a whole graph: `new`, `random` and `copy`

use serde::Serialize;

use digraph_core::error::Result;
use digraph_core::generate::{random_graph, RandomGraphOptions};
use digraph_core::graph::{Cost, DirectedGraph};

use super::Report;

/// A graph that was created or written somewhere
#[derive(Debug, Serialize)]
pub struct CreatedReport {
    pub action: &'static str,
    pub path: String,
    pub vertices: usize,
    pub edges: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Report for CreatedReport {
    fn human(&self) -> String {
        format!(
            "Wrote {} vertices and {} edges to {}",
            self.vertices, self.edges, self.path
        )
    }

    fn is_chatter(&self) -> bool {
        true
    }
}

impl CreatedReport {
    pub fn new(action: &'static str, path: impl ToString, graph: &DirectedGraph) -> Self {
        Self {
            action,
            path: path.to_string(),
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

/// Overrides for the configured random-generation settings
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomOverrides {
    pub seed: Option<u64>,
    pub min_cost: Option<Cost>,
    pub max_cost: Option<Cost>,
}

impl RandomOverrides {
    pub fn apply(&self, base: RandomGraphOptions) -> RandomGraphOptions {
        RandomGraphOptions {
            min_cost: self.min_cost.unwrap_or(base.min_cost),
            max_cost: self.max_cost.unwrap_or(base.max_cost),
            seed: self.seed.or(base.seed),
        }
    }
}

pub fn new_graph(vertices: u32) -> DirectedGraph {
    DirectedGraph::new(vertices)
}

pub fn random(vertices: u32, edges: usize, options: &RandomGraphOptions) -> Result<DirectedGraph> {
    random_graph(vertices, edges, options)
}
