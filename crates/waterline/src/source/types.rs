//! Type definitions for the source mesh.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Type-safe source vertex identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub u32);

/// Type-safe source polygon identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PolygonId(pub u32);

impl VertexId {
    /// Index into the vertex array
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl PolygonId {
    /// Index into the polygon array
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A vertex of the source mesh as read from the host document
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SourceVertex {
    pub position: Vec3,
    /// Vertex normal as stored by the host (not renormalized)
    pub normal: Vec3,
    /// Host-side selection flag; selected vertices seed the traversal
    #[serde(default)]
    pub selected: bool,
}

impl SourceVertex {
    /// Create an unselected vertex
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position,
            normal,
            selected: false,
        }
    }

    /// Builder-style selection flag
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Position pushed along the vertex's own normal by `distance`
    pub fn offset_position(&self, distance: f32) -> Vec3 {
        self.position + self.normal * distance
    }

    /// Whether the vertex normal points into the half-space above `up`.
    ///
    /// Level normals (dot product of exactly zero) do not count as upward.
    pub fn faces_up(&self, up: Vec3) -> bool {
        self.normal.dot(up) > 0.0
    }
}

/// Raw, unvalidated mesh data as stored by a host document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    pub vertices: Vec<SourceVertex>,
    #[serde(default)]
    pub edges: Vec<[u32; 2]>,
    #[serde(default)]
    pub polygons: Vec<Vec<u32>>,
}

impl MeshData {
    /// Number of vertices with the selected flag set
    pub fn selected_count(&self) -> usize {
        self.vertices.iter().filter(|v| v.selected).count()
    }
}
