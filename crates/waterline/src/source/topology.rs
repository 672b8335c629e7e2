//! Accessors and adjacency queries for SourceMesh.

use super::types::{PolygonId, SourceVertex, VertexId};
use super::SourceMesh;

impl SourceMesh {
    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get vertex by ID
    pub fn vertex(&self, id: VertexId) -> Option<&SourceVertex> {
        self.vertices.get(id.index())
    }

    /// Get polygon corners by ID
    pub fn polygon(&self, id: PolygonId) -> Option<&[VertexId]> {
        self.polygons.get(id.index()).map(Vec::as_slice)
    }

    /// Get all vertices
    pub fn vertices(&self) -> &[SourceVertex] {
        &self.vertices
    }

    /// Get all edges
    pub fn edges(&self) -> &[[VertexId; 2]] {
        &self.edges
    }

    /// Get all polygons
    pub fn polygons(&self) -> &[Vec<VertexId>] {
        &self.polygons
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges, duplicates included
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of polygons
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    // ========================================================================
    // Topology Queries
    // ========================================================================

    /// Vertices connected to `vertex_id` by an edge.
    ///
    /// Order follows the edge list. A vertex joined by two edges is listed
    /// twice; callers are expected to tolerate repeats.
    pub fn neighbors(&self, vertex_id: VertexId) -> &[VertexId] {
        self.neighbors
            .get(vertex_id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Polygons that use `vertex_id` as a corner, each listed once
    pub fn vertex_polygons(&self, vertex_id: VertexId) -> &[PolygonId] {
        self.vertex_polygons
            .get(vertex_id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Selected vertices in source order
    pub fn selected_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| v.selected)
            .map(|(i, _)| VertexId(i as u32))
    }

    /// Number of selected vertices
    pub fn selected_count(&self) -> usize {
        self.vertices.iter().filter(|v| v.selected).count()
    }

    /// Whether a vertex has no incident edges
    pub fn is_isolated(&self, vertex_id: VertexId) -> bool {
        self.neighbors(vertex_id).is_empty()
    }
}
