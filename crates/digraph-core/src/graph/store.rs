//! Graph store: vertex set, in/out adjacency and the per-edge cost map
//!
//! The three structures are kept mutually consistent: `v` is in `u`'s
//! outbound list iff `u` is in `v`'s inbound list iff `(u, v)` has a
//! recorded cost. Every mutation validates before touching state, so a
//! failed call never leaves the store partially modified.


use indexmap::IndexMap;
use tracing::debug;

use super::types::{Cost, Edge, VertexId};
use crate::error::{DigraphError, Result};

/// Directed graph with integer edge costs and at most one edge per ordered pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph {
    outbound: IndexMap<VertexId, Vec<VertexId>>,
    inbound: IndexMap<VertexId, Vec<VertexId>>,
    costs: IndexMap<(VertexId, VertexId), Cost>,
}

impl DirectedGraph {
    /// Create a graph with vertices `0..vertices` and no edges
    pub fn new(vertices: u32) -> Self {
        let mut graph = Self::default();
        for vertex in 0..vertices {
            graph.outbound.insert(vertex, Vec::new());
            graph.inbound.insert(vertex, Vec::new());
        }
        graph
    }

    /// Vertex ids in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.outbound.keys().copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.outbound.len()
    }

    pub fn edge_count(&self) -> usize {
        self.costs.len()
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.outbound.contains_key(&vertex)
    }

    /// Whether the edge `(from, to)` exists. Fails if `from` is not a vertex.
    pub fn edge_exists(&self, from: VertexId, to: VertexId) -> Result<bool> {
        let out = self.outbound(from)?;
        Ok(out.contains(&to))
    }

    pub fn in_degree(&self, vertex: VertexId) -> Result<usize> {
        Ok(self.inbound(vertex)?.len())
    }

    pub fn out_degree(&self, vertex: VertexId) -> Result<usize> {
        Ok(self.outbound(vertex)?.len())
    }

    /// Outbound neighbors in edge insertion order
    pub fn outbound(&self, vertex: VertexId) -> Result<&[VertexId]> {
        self.outbound
            .get(&vertex)
            .map(Vec::as_slice)
            .ok_or(DigraphError::VertexNotFound { vertex })
    }

    /// Inbound neighbors in edge insertion order
    pub fn inbound(&self, vertex: VertexId) -> Result<&[VertexId]> {
        self.inbound
            .get(&vertex)
            .map(Vec::as_slice)
            .ok_or(DigraphError::VertexNotFound { vertex })
    }

    /// All edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.costs
            .iter()
            .map(|(&(from, to), &cost)| Edge { from, to, cost })
    }

    pub fn cost(&self, from: VertexId, to: VertexId) -> Result<Cost> {
        self.costs
            .get(&(from, to))
            .copied()
            .ok_or(DigraphError::EdgeNotFound { from, to })
    }

    /// Replace the cost of an existing edge
    pub fn set_cost(&mut self, from: VertexId, to: VertexId, cost: Cost) -> Result<()> {
        let slot = self
            .costs
            .get_mut(&(from, to))
            .ok_or(DigraphError::EdgeNotFound { from, to })?;
        debug!(from, to, old = *slot, new = cost, "set_cost");
        *slot = cost;
        Ok(())
    }

    /// Insert the edge `(from, to)` into both adjacency lists and the cost map
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, cost: Cost) -> Result<()> {
        if self.costs.contains_key(&(from, to)) {
            return Err(DigraphError::EdgeAlreadyExists { from, to });
        }
        for vertex in [from, to] {
            if !self.contains_vertex(vertex) {
                return Err(DigraphError::VertexNotFound { vertex });
            }
        }

        self.outbound.entry(from).or_default().push(to);
        self.inbound.entry(to).or_default().push(from);
        self.costs.insert((from, to), cost);
        debug!(from, to, cost, "add_edge");
        Ok(())
    }

    pub fn add_vertex(&mut self, vertex: VertexId) -> Result<()> {
        if self.contains_vertex(vertex) {
            return Err(DigraphError::VertexAlreadyExists { vertex });
        }
        self.outbound.insert(vertex, Vec::new());
        self.inbound.insert(vertex, Vec::new());
        debug!(vertex, "add_vertex");
        Ok(())
    }

    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        if self.costs.shift_remove(&(from, to)).is_none() {
            return Err(DigraphError::EdgeNotFound { from, to });
        }
        if let Some(out) = self.outbound.get_mut(&from) {
            remove_first(out, to);
        }
        if let Some(inb) = self.inbound.get_mut(&to) {
            remove_first(inb, from);
        }
        debug!(from, to, "remove_edge");
        Ok(())
    }

    /// Remove a vertex together with every edge incident to it
    pub fn remove_vertex(&mut self, vertex: VertexId) -> Result<()> {
        let Some(out) = self.outbound.shift_remove(&vertex) else {
            return Err(DigraphError::VertexNotFound { vertex });
        };
        let inb = self.inbound.shift_remove(&vertex).unwrap_or_default();

        for &to in &out {
            self.costs.shift_remove(&(vertex, to));
            if let Some(list) = self.inbound.get_mut(&to) {
                remove_first(list, vertex);
            }
        }
        for &from in &inb {
            self.costs.shift_remove(&(from, vertex));
            if let Some(list) = self.outbound.get_mut(&from) {
                remove_first(list, vertex);
            }
        }

        debug!(
            vertex,
            removed_out = out.len(),
            removed_in = inb.len(),
            "remove_vertex"
        );
        Ok(())
    }
}

fn remove_first(list: &mut Vec<VertexId>, vertex: VertexId) {
    if let Some(pos) = list.iter().position(|&v| v == vertex) {
        list.remove(pos);
    }
}
