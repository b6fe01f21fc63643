//! Path reconstruction utilities for graph traversal

use std::collections::BTreeMap;

use super::types::VertexId;

/// Walk predecessor links back from `target` to `source` and return the
/// vertices in forward order.
///
/// When the chain does not terminate at `source` (the target was never
/// reached) the result is the degenerate single-vertex path `[source]`.
pub fn construct_path(
    source: VertexId,
    target: VertexId,
    predecessors: &BTreeMap<VertexId, VertexId>,
) -> Vec<VertexId> {
    let mut path = vec![target];
    let mut current = target;

    // A well-formed chain is at most one link per recorded predecessor
    for _ in 0..=predecessors.len() {
        if current == source {
            path.reverse();
            return path;
        }
        match predecessors.get(&current) {
            Some(&pred) => {
                current = pred;
                path.push(current);
            }
            None => break,
        }
    }

    vec![source]
}
