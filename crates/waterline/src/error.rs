//! Error types for water mesh generation.

use crate::document::ObjectId;

/// Result type alias using [`WaterMeshError`].
pub type Result<T> = std::result::Result<T, WaterMeshError>;

/// Errors that can occur while reading source meshes or driving a document.
///
/// The traversal itself cannot fail: every structural problem is caught when
/// the [`SourceMesh`](crate::SourceMesh) is built.
#[derive(Debug, thiserror::Error)]
pub enum WaterMeshError {
    #[error("edge {edge} references invalid vertex index {vertex} (mesh has {vertex_count} vertices)")]
    InvalidEdgeVertex {
        edge: usize,
        vertex: u32,
        vertex_count: usize,
    },

    #[error("polygon {polygon} references invalid vertex index {vertex} (mesh has {vertex_count} vertices)")]
    InvalidPolygonVertex {
        polygon: usize,
        vertex: u32,
        vertex_count: usize,
    },

    #[error("polygon {polygon} has {len} vertices, at least 3 are required")]
    DegeneratePolygon { polygon: usize, len: usize },

    #[error("selection has {actual} entries but the mesh has {expected} vertices")]
    SelectionLength { expected: usize, actual: usize },

    #[error("mesh has no position attribute")]
    NoPositions,

    #[error("mesh has no normal attribute")]
    NoNormals,

    #[error("mesh has no indices")]
    NoIndices,

    #[error("invalid mesh topology: {0}")]
    InvalidTopology(String),

    #[error("object {0:?} not found in document")]
    ObjectNotFound(ObjectId),

    #[error("object {0:?} does not hold source mesh data")]
    NotAMesh(ObjectId),

    #[error("failed to (de)serialize document: {0}")]
    Json(#[from] serde_json::Error),
}
