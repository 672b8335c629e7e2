//! Output mesh accumulator.
//!
//! Vertices, edges and polygons are appended while the traversal and the
//! face reclosure run. Edges are undirected; an index keyed by the ordered
//! `(min, max)` pair keeps presence checks constant time.

use std::collections::HashSet;

use glam::Vec3;

/// Canonical key for an undirected edge
fn edge_key(a: u32, b: u32) -> (u32, u32) {
    if a < b { (a, b) } else { (b, a) }
}

/// Output mesh under construction
#[derive(Debug, Clone, Default)]
pub struct OutputMesh {
    pub(crate) positions: Vec<Vec3>,
    pub(crate) edges: Vec<[u32; 2]>,
    pub(crate) polygons: Vec<Vec<u32>>,
    edge_index: HashSet<(u32, u32)>,
}

impl OutputMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex, returning its output index
    pub fn push_vertex(&mut self, position: Vec3) -> u32 {
        self.positions.push(position);
        (self.positions.len() - 1) as u32
    }

    /// Add the undirected edge `{a, b}`.
    ///
    /// Returns false (and records nothing) for self-loops and for edges that
    /// are already present in either orientation.
    pub fn add_edge(&mut self, a: u32, b: u32) -> bool {
        if a == b || !self.edge_index.insert(edge_key(a, b)) {
            return false;
        }
        self.edges.push([a, b]);
        true
    }

    /// Whether the undirected edge `{a, b}` is present
    pub fn has_edge(&self, a: u32, b: u32) -> bool {
        self.edge_index.contains(&edge_key(a, b))
    }

    /// Append a polygon given in output indices
    pub fn push_polygon(&mut self, corners: Vec<u32>) {
        self.polygons.push(corners);
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    pub fn polygons(&self) -> &[Vec<u32>] {
        &self.polygons
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}
