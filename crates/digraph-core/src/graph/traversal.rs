use super::store::DirectedGraph;
use super::types::{Cost, VertexId};
use crate::error::Result;

/// Trait for providing graph adjacency and costs to the algorithms
pub trait GraphProvider {
    /// Vertex ids in a stable order
    fn vertex_ids(&self) -> Vec<VertexId>;
    fn has_vertex(&self, id: VertexId) -> bool;
    fn get_outbound(&self, id: VertexId) -> Result<&[VertexId]>;
    fn get_inbound(&self, id: VertexId) -> Result<&[VertexId]>;
    fn get_cost(&self, from: VertexId, to: VertexId) -> Option<Cost>;
}

impl GraphProvider for DirectedGraph {
    fn vertex_ids(&self) -> Vec<VertexId> {
        self.vertices().collect()
    }

    fn has_vertex(&self, id: VertexId) -> bool {
        self.contains_vertex(id)
    }

    fn get_outbound(&self, id: VertexId) -> Result<&[VertexId]> {
        self.outbound(id)
    }

    fn get_inbound(&self, id: VertexId) -> Result<&[VertexId]> {
        self.inbound(id)
    }

    fn get_cost(&self, from: VertexId, to: VertexId) -> Option<Cost> {
        self.cost(from, to).ok()
    }
}
