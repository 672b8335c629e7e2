//! Conversions between Bevy meshes and waterline meshes.

use std::collections::{HashMap, HashSet};

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::Mesh;
use glam::Vec3;

use crate::assembly::WaterMesh;
use crate::error::{Result, WaterMeshError};
use crate::source::{SourceMesh, SourceVertex};

impl SourceMesh {
    /// Build a source mesh from a Bevy triangle mesh
    ///
    /// The mesh must have positions, normals and triangle indices. Vertices
    /// at the same position are welded onto the first one seen, which keeps
    /// its normal and is selected when any copy is. Edges are the
    /// deduplicated triangle sides in first-seen order; `selected` flags the
    /// seed vertices and must have one entry per vertex.
    pub fn from_bevy_mesh(mesh: &Mesh, selected: &[bool]) -> Result<Self> {
        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .and_then(|attr| attr.as_float3())
            .ok_or(WaterMeshError::NoPositions)?;

        let normals = mesh
            .attribute(Mesh::ATTRIBUTE_NORMAL)
            .and_then(|attr| attr.as_float3())
            .ok_or(WaterMeshError::NoNormals)?;

        let indices: Vec<u32> = match mesh.indices() {
            Some(Indices::U16(idx)) => idx.iter().map(|&i| i as u32).collect(),
            Some(Indices::U32(idx)) => idx.to_vec(),
            None => return Err(WaterMeshError::NoIndices),
        };

        if indices.len() % 3 != 0 {
            return Err(WaterMeshError::InvalidTopology(
                "index count not divisible by 3".to_string(),
            ));
        }
        if normals.len() != positions.len() {
            return Err(WaterMeshError::InvalidTopology(format!(
                "{} normals for {} positions",
                normals.len(),
                positions.len()
            )));
        }
        if selected.len() != positions.len() {
            return Err(WaterMeshError::SelectionLength {
                expected: positions.len(),
                actual: selected.len(),
            });
        }

        // Weld vertices that share a position. Bevy splits vertices at UV
        // seams and hard edges; without welding each split copy is its own
        // graph node and the surface falls apart along the seam.
        let quantize = |p: &[f32; 3]| -> [i64; 3] {
            [
                (p[0] * 1_000_000.0) as i64,
                (p[1] * 1_000_000.0) as i64,
                (p[2] * 1_000_000.0) as i64,
            ]
        };
        let mut position_to_canonical: HashMap<[i64; 3], usize> = HashMap::new();
        let mut canonical_map: Vec<usize> = Vec::with_capacity(positions.len());
        for (i, pos) in positions.iter().enumerate() {
            let canonical = *position_to_canonical.entry(quantize(pos)).or_insert(i);
            canonical_map.push(canonical);
        }

        let welded_count = canonical_map
            .iter()
            .enumerate()
            .filter(|(i, c)| **c != *i)
            .count();
        if welded_count > 0 {
            tracing::debug!(
                "from_bevy_mesh: welded {} duplicate vertices ({} unique of {} total)",
                welded_count,
                position_to_canonical.len(),
                positions.len()
            );
        }

        // A canonical vertex is selected when any of its copies is
        let mut welded_selection = vec![false; positions.len()];
        for (i, &canonical) in canonical_map.iter().enumerate() {
            welded_selection[canonical] |= selected[i];
        }

        // Vertex ids stay aligned with the Bevy mesh; welded copies remain
        // as loose, unselected vertices.
        let vertices: Vec<SourceVertex> = positions
            .iter()
            .zip(normals)
            .zip(welded_selection)
            .map(|((position, normal), selected)| {
                SourceVertex::new(Vec3::from_array(*position), Vec3::from_array(*normal))
                    .with_selected(selected)
            })
            .collect();

        let indices: Vec<u32> = indices
            .iter()
            .map(|&i| canonical_map.get(i as usize).map_or(i, |&c| c as u32))
            .collect();

        // Remove triangles collapsed by welding
        let indices: Vec<u32> = indices
            .chunks(3)
            .filter(|tri| tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2])
            .flat_map(|tri| tri.iter().copied())
            .collect();

        let mut seen: HashSet<(u32, u32)> = HashSet::new();
        let mut edges: Vec<[u32; 2]> = Vec::new();
        for tri in indices.chunks(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let key = if a < b { (a, b) } else { (b, a) };
                if a != b && seen.insert(key) {
                    edges.push([a, b]);
                }
            }
        }

        let polygons: Vec<Vec<u32>> = indices.chunks(3).map(<[u32]>::to_vec).collect();

        Self::new(vertices, edges, polygons)
    }
}

impl WaterMesh {
    /// Convert to a Bevy triangle mesh
    ///
    /// Polygons are fan-triangulated and vertices are shared. Loose edges
    /// have no triangle-list representation and are dropped.
    pub fn to_bevy_mesh(&self) -> Mesh {
        let positions: Vec<[f32; 3]> = self.positions.iter().map(|p| p.to_array()).collect();
        let normals: Vec<[f32; 3]> = self.vertex_normals.iter().map(|n| n.to_array()).collect();

        let mut indices: Vec<u32> = Vec::new();
        for polygon in &self.polygons {
            if polygon.len() < 3 {
                continue;
            }
            // Fan triangulation
            for i in 1..(polygon.len() - 1) {
                indices.push(polygon[0]);
                indices.push(polygon[i]);
                indices.push(polygon[i + 1]);
            }
        }

        let mut mesh = Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        );
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
        mesh.insert_indices(Indices::U32(indices));
        mesh
    }
}
