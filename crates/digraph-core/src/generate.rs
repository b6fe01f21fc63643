//! Random graph generation

use std::collections::HashSet;
use std::time::Instant;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::bail_invalid;
use crate::error::Result;
use crate::graph::{Cost, DirectedGraph, VertexId};
use crate::trace_time;

/// Options for [`random_graph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomGraphOptions {
    /// Smallest edge cost (inclusive)
    pub min_cost: Cost,
    /// Largest edge cost (inclusive)
    pub max_cost: Cost,
    /// Seed for reproducible output; OS entropy when `None`
    pub seed: Option<u64>,
}

impl Default for RandomGraphOptions {
    fn default() -> Self {
        Self {
            min_cost: 0,
            max_cost: 99,
            seed: None,
        }
    }
}

/// Build a graph on `0..vertices` with exactly `edges` distinct edges.
///
/// Self-loops are never generated, so at most `vertices * (vertices - 1)`
/// edges fit.
#[tracing::instrument(skip(options), fields(seed = ?options.seed))]
pub fn random_graph(
    vertices: u32,
    edges: usize,
    options: &RandomGraphOptions,
) -> Result<DirectedGraph> {
    let start = Instant::now();

    if options.min_cost > options.max_cost {
        bail_invalid!(
            "random cost range",
            format!("{}..={}", options.min_cost, options.max_cost)
        );
    }
    let n = vertices as u64;
    let capacity = n * n.saturating_sub(1);
    if edges as u64 > capacity {
        bail_invalid!(
            "edge count",
            format!(
                "{} (too many edges: at most {} fit on {} vertices)",
                edges, capacity, vertices
            )
        );
    }

    let mut rng = match options.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    // Dense requests enumerate every pair; sparse ones sample with rejection
    let pairs = if (edges as u64) * 2 > capacity {
        shuffled_pairs(vertices, edges, &mut rng)
    } else {
        sampled_pairs(vertices, edges, &mut rng)
    };

    let mut graph = DirectedGraph::new(vertices);
    for (from, to) in pairs {
        let cost = rng.gen_range(options.min_cost..=options.max_cost);
        graph.add_edge(from, to, cost)?;
    }

    trace_time!(start, "random_graph", edges = graph.edge_count());
    Ok(graph)
}

fn shuffled_pairs(
    vertices: u32,
    edges: usize,
    rng: &mut ChaCha8Rng,
) -> Vec<(VertexId, VertexId)> {
    let mut pairs: Vec<(VertexId, VertexId)> = (0..vertices)
        .flat_map(|from| (0..vertices).map(move |to| (from, to)))
        .filter(|(from, to)| from != to)
        .collect();
    pairs.shuffle(rng);
    pairs.truncate(edges);
    pairs
}

fn sampled_pairs(
    vertices: u32,
    edges: usize,
    rng: &mut ChaCha8Rng,
) -> Vec<(VertexId, VertexId)> {
    let mut seen = HashSet::with_capacity(edges);
    let mut pairs = Vec::with_capacity(edges);
    while pairs.len() < edges {
        let from = rng.gen_range(0..vertices);
        let to = rng.gen_range(0..vertices);
        if from != to && seen.insert((from, to)) {
            pairs.push((from, to));
        }
    }
    pairs
}
