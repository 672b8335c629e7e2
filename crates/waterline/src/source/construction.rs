//! Construction methods for SourceMesh.

use crate::error::{Result, WaterMeshError};

use super::types::{MeshData, PolygonId, SourceVertex, VertexId};
use super::SourceMesh;

impl SourceMesh {
    /// Build a source mesh from raw vertex, edge and polygon lists
    ///
    /// Every edge and polygon index must reference an existing vertex and
    /// every polygon needs at least three corners. Duplicate edges and
    /// self-loop edges are accepted as-is.
    pub fn new(
        vertices: Vec<SourceVertex>,
        edges: Vec<[u32; 2]>,
        polygons: Vec<Vec<u32>>,
    ) -> Result<Self> {
        let vertex_count = vertices.len();

        let edges = edges
            .into_iter()
            .enumerate()
            .map(|(edge, pair)| {
                for vertex in pair {
                    if vertex as usize >= vertex_count {
                        return Err(WaterMeshError::InvalidEdgeVertex {
                            edge,
                            vertex,
                            vertex_count,
                        });
                    }
                }
                Ok([VertexId(pair[0]), VertexId(pair[1])])
            })
            .collect::<Result<Vec<_>>>()?;

        let polygons = polygons
            .into_iter()
            .enumerate()
            .map(|(polygon, corners)| {
                if corners.len() < 3 {
                    return Err(WaterMeshError::DegeneratePolygon {
                        polygon,
                        len: corners.len(),
                    });
                }
                corners
                    .into_iter()
                    .map(|vertex| {
                        if vertex as usize >= vertex_count {
                            Err(WaterMeshError::InvalidPolygonVertex {
                                polygon,
                                vertex,
                                vertex_count,
                            })
                        } else {
                            Ok(VertexId(vertex))
                        }
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        // Edge (a, b) makes b a neighbor of a and a a neighbor of b.
        // Appending in edge order keeps each list in edge-list order.
        let mut neighbors: Vec<Vec<VertexId>> = vec![Vec::new(); vertex_count];
        for &[a, b] in &edges {
            neighbors[a.index()].push(b);
            neighbors[b.index()].push(a);
        }

        let mut vertex_polygons: Vec<Vec<PolygonId>> = vec![Vec::new(); vertex_count];
        for (polygon_idx, corners) in polygons.iter().enumerate() {
            let polygon_id = PolygonId(polygon_idx as u32);
            for vertex in corners {
                let incident = &mut vertex_polygons[vertex.index()];
                if incident.last() != Some(&polygon_id) {
                    incident.push(polygon_id);
                }
            }
        }

        tracing::debug!(
            "SourceMesh::new: {} vertices, {} edges, {} polygons",
            vertex_count,
            edges.len(),
            polygons.len()
        );

        Ok(Self {
            vertices,
            edges,
            polygons,
            neighbors,
            vertex_polygons,
        })
    }

    /// Build a source mesh from host document data, validating every index
    pub fn from_data(data: &MeshData) -> Result<Self> {
        Self::new(
            data.vertices.clone(),
            data.edges.clone(),
            data.polygons.clone(),
        )
    }

    /// Convert back to raw mesh data (selection flags included)
    pub fn to_data(&self) -> MeshData {
        MeshData {
            vertices: self.vertices.clone(),
            edges: self.edges.iter().map(|[a, b]| [a.0, b.0]).collect(),
            polygons: self
                .polygons
                .iter()
                .map(|corners| corners.iter().map(|v| v.0).collect())
                .collect(),
        }
    }
}

impl TryFrom<&MeshData> for SourceMesh {
    type Error = WaterMeshError;

    fn try_from(data: &MeshData) -> Result<Self> {
        Self::from_data(data)
    }
}
