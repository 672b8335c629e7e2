//! Source mesh read from the host document
//!
//! A validated, read-only view of the mesh the water surface is extracted
//! from. Adjacency (vertex-vertex through the edge list, vertex-polygon
//! through the polygon list) is built once at construction so the traversal
//! never scans the edge list.

mod construction;
mod topology;
mod types;

pub use types::{MeshData, PolygonId, SourceVertex, VertexId};

/// Validated source mesh with prebuilt adjacency
#[derive(Debug, Clone)]
pub struct SourceMesh {
    pub(crate) vertices: Vec<SourceVertex>,
    pub(crate) edges: Vec<[VertexId; 2]>,
    pub(crate) polygons: Vec<Vec<VertexId>>,
    /// Neighbors per vertex in edge-list order; duplicate edges appear twice
    pub(crate) neighbors: Vec<Vec<VertexId>>,
    /// Polygons incident to each vertex, in polygon order
    pub(crate) vertex_polygons: Vec<Vec<PolygonId>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WaterMeshError;
    use crate::fixtures::{down, up, vertex};

    #[test]
    fn test_adjacency_from_edges() {
        let mesh = SourceMesh::new(
            vec![up(0.0, 0.0), up(1.0, 0.0), up(0.0, 1.0)],
            vec![[0, 1], [1, 2]],
            vec![],
        )
        .unwrap();

        assert_eq!(mesh.neighbors(VertexId(0)), &[VertexId(1)]);
        assert_eq!(mesh.neighbors(VertexId(1)), &[VertexId(0), VertexId(2)]);
        assert_eq!(mesh.neighbors(VertexId(2)), &[VertexId(1)]);
    }

    #[test]
    fn test_duplicate_edges_are_kept() {
        let mesh = SourceMesh::new(
            vec![up(0.0, 0.0), up(1.0, 0.0)],
            vec![[0, 1], [1, 0]],
            vec![],
        )
        .unwrap();

        assert_eq!(mesh.edge_count(), 2);
        assert_eq!(mesh.neighbors(VertexId(0)), &[VertexId(1), VertexId(1)]);
    }

    #[test]
    fn test_vertex_polygons() {
        let mesh = SourceMesh::new(
            vec![up(0.0, 0.0), up(1.0, 0.0), up(0.0, 1.0), up(1.0, 1.0)],
            vec![],
            vec![vec![0, 1, 2], vec![1, 3, 2]],
        )
        .unwrap();

        assert_eq!(mesh.vertex_polygons(VertexId(0)), &[PolygonId(0)]);
        assert_eq!(
            mesh.vertex_polygons(VertexId(2)),
            &[PolygonId(0), PolygonId(1)]
        );
        assert_eq!(mesh.polygon(PolygonId(1)).unwrap().len(), 3);
    }

    #[test]
    fn test_invalid_polygon_vertex() {
        let result = SourceMesh::new(
            vec![up(0.0, 0.0), up(1.0, 0.0), up(0.0, 1.0)],
            vec![],
            vec![vec![0, 1, 7]],
        );

        assert!(matches!(
            result,
            Err(WaterMeshError::InvalidPolygonVertex {
                polygon: 0,
                vertex: 7,
                vertex_count: 3
            })
        ));
    }

    #[test]
    fn test_invalid_edge_vertex() {
        let result = SourceMesh::new(vec![up(0.0, 0.0)], vec![[0, 1]], vec![]);
        assert!(matches!(
            result,
            Err(WaterMeshError::InvalidEdgeVertex { edge: 0, vertex: 1, .. })
        ));
    }

    #[test]
    fn test_degenerate_polygon() {
        let result = SourceMesh::new(
            vec![up(0.0, 0.0), up(1.0, 0.0)],
            vec![],
            vec![vec![0, 1]],
        );
        assert!(matches!(
            result,
            Err(WaterMeshError::DegeneratePolygon { polygon: 0, len: 2 })
        ));
    }

    #[test]
    fn test_selected_vertices_in_source_order() {
        let mesh = SourceMesh::new(
            vec![
                vertex([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], false),
                vertex([1.0, 0.0, 0.0], [0.0, 0.0, 1.0], true),
                down(2.0, 0.0).with_selected(true),
            ],
            vec![],
            vec![],
        )
        .unwrap();

        let selected: Vec<_> = mesh.selected_vertices().collect();
        assert_eq!(selected, vec![VertexId(1), VertexId(2)]);
        assert_eq!(mesh.selected_count(), 2);
    }
}
