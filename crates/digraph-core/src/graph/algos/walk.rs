//! All-pairs lowest-cost walks by min-plus matrix iteration
//!
//! `M_1 = W` and `M_{k+1} = M_k ⊗ W`, where `(A ⊗ B)[i][j] = min_k A[i][k] + B[k][j]`
//! and the minimum found so far is retained. Iterating up to `M_{n-1}` covers
//! every simple path. `None` stands for `+∞`.


use std::collections::HashMap;
use std::time::Instant;

use tracing::debug;

use crate::error::{DigraphError, Result};
use crate::graph::types::{Cost, PathReconstruction, VertexId, WalkOptions, WalkResult};
use crate::graph::GraphProvider;
use crate::trace_time;

type Matrix = Vec<Vec<Option<Cost>>>;
type Successors = Vec<Vec<Option<usize>>>;

/// Compute the lowest-cost walk from `source` to `target`.
///
/// Fails with [`DigraphError::NegativeCycleDetected`] if the final matrix
/// shows `M[i][j] + M[j][i] < 0` for any pair; the check runs before any
/// result is produced.
#[tracing::instrument(skip(provider, opts), fields(reconstruction = ?opts.reconstruction))]
pub fn lowest_cost_walk(
    provider: &dyn GraphProvider,
    source: VertexId,
    target: VertexId,
    opts: &WalkOptions,
) -> Result<WalkResult> {
    let start = Instant::now();
    for vertex in [source, target] {
        if !provider.has_vertex(vertex) {
            return Err(DigraphError::VertexNotFound { vertex });
        }
    }

    let ids = provider.vertex_ids();
    let index: HashMap<VertexId, usize> = ids.iter().enumerate().map(|(i, &v)| (v, i)).collect();
    let n = ids.len();

    let weights = weight_matrix(provider, &ids, &index)?;
    let mut successors = successor_table(&weights);
    let mut costs = weights.clone();
    let track = opts.reconstruction == PathReconstruction::Tracked;

    for _ in 2..n {
        extend(&mut costs, &weights, &mut successors, track);
    }
    debug!(vertices = n, products = n.saturating_sub(2), "min_plus_iteration");

    check_negative_cycles(&costs)?;

    let (s, t) = (index[&source], index[&target]);
    let path: Vec<VertexId> = follow_successors(&successors, s, t)
        .into_iter()
        .map(|i| ids[i])
        .collect();
    let path_cost = path_cost(provider, &path, target);

    trace_time!(start, "lowest_cost_walk");
    Ok(WalkResult {
        source,
        target,
        cost: costs[s][t],
        path,
        path_cost,
        reconstruction: opts.reconstruction,
    })
}

/// `W[i][i] = 0`, `W[i][j] = cost(i, j)` for an edge, `+∞` otherwise
fn weight_matrix(
    provider: &dyn GraphProvider,
    ids: &[VertexId],
    index: &HashMap<VertexId, usize>,
) -> Result<Matrix> {
    let n = ids.len();
    let mut matrix = vec![vec![None; n]; n];
    for (i, &from) in ids.iter().enumerate() {
        matrix[i][i] = Some(0);
        for &to in provider.get_outbound(from)? {
            let j = index[&to];
            if i != j {
                matrix[i][j] = provider.get_cost(from, to);
            }
        }
    }
    Ok(matrix)
}

/// `next[i][j] = j` for the diagonal and every direct edge
fn successor_table(weights: &Matrix) -> Successors {
    weights
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(j, w)| w.map(|_| j))
                .collect()
        })
        .collect()
}

/// One min-plus product `costs ⊗ weights`, relaxed in place
fn extend(costs: &mut Matrix, weights: &Matrix, successors: &mut Successors, track: bool) {
    let n = costs.len();
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                let (Some(a), Some(b)) = (costs[i][k], weights[k][j]) else {
                    continue;
                };
                let candidate = a.saturating_add(b);
                if costs[i][j].is_none_or(|current| candidate < current) {
                    costs[i][j] = Some(candidate);
                    if track {
                        successors[i][j] = successors[i][k];
                    }
                }
            }
        }
    }
}

fn check_negative_cycles(costs: &Matrix) -> Result<()> {
    let n = costs.len();
    for i in 0..n {
        for j in i..n {
            if let (Some(there), Some(back)) = (costs[i][j], costs[j][i]) {
                if there.saturating_add(back) < 0 {
                    debug!(i, j, there, back, "negative_cycle");
                    return Err(DigraphError::NegativeCycleDetected);
                }
            }
        }
    }
    Ok(())
}

/// Follow `next` from `s` toward `t`. Empty when `next[s][t]` is undefined.
/// Bounded by the matrix size so an inconsistent table cannot loop.
fn follow_successors(successors: &Successors, s: usize, t: usize) -> Vec<usize> {
    if successors[s][t].is_none() {
        return Vec::new();
    }
    let mut path = vec![s];
    let mut current = s;
    while current != t && path.len() <= successors.len() {
        match successors[current][t] {
            Some(hop) => {
                current = hop;
                path.push(current);
            }
            None => break,
        }
    }
    path
}

/// Sum of edge costs along `path`; `None` if it is empty, does not end at
/// `target` or uses a missing edge
fn path_cost(provider: &dyn GraphProvider, path: &[VertexId], target: VertexId) -> Option<Cost> {
    if path.last() != Some(&target) {
        return None;
    }
    path.windows(2).try_fold(0 as Cost, |total, pair| {
        provider
            .get_cost(pair[0], pair[1])
            .map(|cost| total.saturating_add(cost))
    })
}
