//! Breadth-first shortest path (hop count, edge costs ignored)


use std::collections::{BTreeMap, HashSet, VecDeque};
use std::time::Instant;

use crate::error::{DigraphError, Result};
use crate::graph::types::{BfsResult, VertexId};
use crate::graph::GraphProvider;
use crate::trace_time;

/// Find the fewest-hops path from `source` to `target` over outbound edges.
///
/// Each vertex is discovered at most once; its predecessor is the vertex that
/// discovered it. The search stops as soon as `target` is discovered.
#[tracing::instrument(skip(provider))]
pub fn bfs_shortest_path(
    provider: &dyn GraphProvider,
    source: VertexId,
    target: VertexId,
) -> Result<BfsResult> {
    let start = Instant::now();
    for vertex in [source, target] {
        if !provider.has_vertex(vertex) {
            return Err(DigraphError::VertexNotFound { vertex });
        }
    }

    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut predecessors: BTreeMap<VertexId, VertexId> = BTreeMap::new();
    let mut hops: BTreeMap<VertexId, usize> = BTreeMap::new();
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    visited.insert(source);
    hops.insert(source, 0);
    queue.push_back(source);

    let mut found = source == target;
    while !found {
        let Some(current) = queue.pop_front() else {
            break;
        };
        let current_hops = hops.get(&current).copied().unwrap_or_default();

        for &neighbor in provider.get_outbound(current)? {
            if !visited.insert(neighbor) {
                continue;
            }
            predecessors.insert(neighbor, current);
            hops.insert(neighbor, current_hops + 1);
            queue.push_back(neighbor);
            if neighbor == target {
                found = true;
                break;
            }
        }
    }

    let distance = if found { hops.get(&target).copied() } else { None };
    trace_time!(start, "bfs_shortest_path", visited = visited.len());

    Ok(BfsResult {
        source,
        target,
        distance,
        predecessors,
    })
}
