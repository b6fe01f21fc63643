//! Topological sorting with predecessor counters and DAG highest-cost paths


use std::collections::{BTreeMap, HashMap, VecDeque};
use std::time::Instant;

use tracing::debug;

use crate::error::{DigraphError, Result};
use crate::graph::types::{Cost, HighestCostPaths, TopologicalSort, VertexId};
use crate::graph::GraphProvider;
use crate::trace_time;

/// Kahn's algorithm.
///
/// Every vertex starts with a counter equal to its in-degree; vertices whose
/// counter is zero are queued, and releasing a vertex decrements the counter
/// of each outbound neighbor. If fewer vertices are released than exist, the
/// graph has a cycle.
#[tracing::instrument(skip(provider))]
pub fn topological_sort(provider: &dyn GraphProvider) -> Result<TopologicalSort> {
    let start = Instant::now();
    let ids = provider.vertex_ids();

    let mut counters: HashMap<VertexId, usize> = HashMap::with_capacity(ids.len());
    let mut queue: VecDeque<VertexId> = VecDeque::new();
    for &vertex in &ids {
        let in_degree = provider.get_inbound(vertex)?.len();
        counters.insert(vertex, in_degree);
        if in_degree == 0 {
            queue.push_back(vertex);
        }
    }

    let mut order = Vec::with_capacity(ids.len());
    while let Some(vertex) = queue.pop_front() {
        order.push(vertex);
        for &neighbor in provider.get_outbound(vertex)? {
            if let Some(counter) = counters.get_mut(&neighbor) {
                *counter -= 1;
                if *counter == 0 {
                    queue.push_back(neighbor);
                }
            }
        }
    }

    let is_dag = order.len() == ids.len();
    let blocked: Vec<VertexId> = if is_dag {
        Vec::new()
    } else {
        ids.into_iter()
            .filter(|v| counters.get(v).is_some_and(|&c| c > 0))
            .collect()
    };

    debug!(is_dag, released = order.len(), blocked = blocked.len(), "topological_sort");
    trace_time!(start, "topological_sort");
    Ok(TopologicalSort {
        is_dag,
        order,
        blocked,
    })
}

/// Highest-cost paths from `source` to every vertex reachable from it.
///
/// Vertices are processed in topological order. Everything before `source`
/// stays undefined; afterwards each vertex is relaxed from its inbound
/// neighbors that already have a distance, keeping the larger total. Runs in
/// `O(V + E)` and is only meaningful because the graph has no cycles.
#[tracing::instrument(skip(provider))]
pub fn highest_cost_path(provider: &dyn GraphProvider, source: VertexId) -> Result<HighestCostPaths> {
    let start = Instant::now();
    if !provider.has_vertex(source) {
        return Err(DigraphError::VertexNotFound { vertex: source });
    }
    let order = topological_sort(provider)?
        .into_order()
        .ok_or(DigraphError::NotADag)?;

    let mut distances: BTreeMap<VertexId, Cost> = BTreeMap::new();
    let mut predecessors: BTreeMap<VertexId, VertexId> = BTreeMap::new();

    let mut reached_source = false;
    for vertex in order {
        if vertex == source {
            distances.insert(vertex, 0);
            reached_source = true;
            continue;
        }
        if !reached_source {
            continue;
        }
        for &from in provider.get_inbound(vertex)? {
            let Some(&base) = distances.get(&from) else {
                continue;
            };
            let Some(edge_cost) = provider.get_cost(from, vertex) else {
                continue;
            };
            let candidate = base.saturating_add(edge_cost);
            if distances.get(&vertex).is_none_or(|&current| candidate > current) {
                distances.insert(vertex, candidate);
                predecessors.insert(vertex, from);
            }
        }
    }

    trace_time!(start, "highest_cost_path", reached = distances.len());
    Ok(HighestCostPaths {
        source,
        distances,
        predecessors,
    })
}
