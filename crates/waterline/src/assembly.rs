//! Final water mesh assembly and normal recomputation.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::output::OutputMesh;

/// Finished water surface mesh
///
/// Normals are recomputed from the new topology; the source normals the
/// offset vertices were pushed along no longer describe this surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaterMesh {
    pub name: String,
    pub positions: Vec<Vec3>,
    pub edges: Vec<[u32; 2]>,
    pub polygons: Vec<Vec<u32>>,
    /// One normal per polygon
    pub face_normals: Vec<Vec3>,
    /// One normal per vertex; zero for vertices without polygons
    pub vertex_normals: Vec<Vec3>,
}

impl WaterMesh {
    /// Freeze an output accumulator into a finished mesh
    pub fn assemble(name: impl Into<String>, output: OutputMesh) -> Self {
        let OutputMesh {
            positions,
            edges,
            polygons,
            ..
        } = output;

        let face_normals: Vec<Vec3> = polygons
            .iter()
            .map(|polygon| polygon_normal(&positions, polygon))
            .collect();
        let vertex_normals = vertex_normals(positions.len(), &polygons, &face_normals);

        let mesh = Self {
            name: name.into(),
            positions,
            edges,
            polygons,
            face_normals,
            vertex_normals,
        };

        debug!(
            "assembled '{}': {} vertices, {} edges, {} polygons",
            mesh.name,
            mesh.vertex_count(),
            mesh.edge_count(),
            mesh.polygon_count()
        );

        mesh
    }

    /// Recompute face and vertex normals from the current positions
    pub fn recalculate_normals(&mut self) {
        self.face_normals = self
            .polygons
            .iter()
            .map(|polygon| polygon_normal(&self.positions, polygon))
            .collect();
        self.vertex_normals =
            vertex_normals(self.positions.len(), &self.polygons, &self.face_normals);
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// True when the mesh has no vertices at all
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Polygon normal by Newell's method.
///
/// Works for non-planar polygons with any number of corners; degenerate
/// polygons get a zero normal.
pub fn polygon_normal(positions: &[Vec3], polygon: &[u32]) -> Vec3 {
    let mut normal = Vec3::ZERO;
    let count = polygon.len();

    for i in 0..count {
        let (Some(&current), Some(&next)) = (
            positions.get(polygon[i] as usize),
            positions.get(polygon[(i + 1) % count] as usize),
        ) else {
            return Vec3::ZERO;
        };
        normal.x += (current.y - next.y) * (current.z + next.z);
        normal.y += (current.z - next.z) * (current.x + next.x);
        normal.z += (current.x - next.x) * (current.y + next.y);
    }

    normal.normalize_or_zero()
}

/// Average the normals of the polygons around each vertex
fn vertex_normals(vertex_count: usize, polygons: &[Vec<u32>], face_normals: &[Vec3]) -> Vec<Vec3> {
    let mut sums = vec![Vec3::ZERO; vertex_count];
    for (polygon, &normal) in polygons.iter().zip(face_normals) {
        for &corner in polygon {
            if let Some(sum) = sums.get_mut(corner as usize) {
                *sum += normal;
            }
        }
    }
    sums.into_iter().map(Vec3::normalize_or_zero).collect()
}
