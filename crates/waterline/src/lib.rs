//! Waterline - upward-facing surface extraction
//!
//! Builds a water surface mesh that follows the upward-facing hull of an
//! existing mesh, starting from the vertices selected on it:
//! - [`source`] - Validated source mesh with vertex and polygon adjacency
//! - [`traversal`] - Seeding and orientation-gated graph traversal
//! - [`reclosure`] - Carrying fully admitted polygons over
//! - [`assembly`] - Final [`WaterMesh`] with recomputed normals
//! - [`pipeline`] - The four stages wired together
//! - [`document`] - Host document seam and an in-memory scene
//!
//! # Example
//!
//! ```rust
//! use waterline::{generate_water_mesh, SourceMesh, SourceVertex};
//! use glam::Vec3;
//!
//! let vertices = vec![
//!     SourceVertex::new(Vec3::ZERO, Vec3::Z).with_selected(true),
//!     SourceVertex::new(Vec3::X, Vec3::Z),
//!     SourceVertex::new(Vec3::Y, Vec3::Z),
//! ];
//! let source = SourceMesh::new(vertices, vec![[0, 1], [1, 2], [2, 0]], vec![vec![0, 1, 2]])?;
//!
//! let water = generate_water_mesh(&source);
//! assert_eq!(water.vertex_count(), 3);
//! assert_eq!(water.edge_count(), 3);
//! assert_eq!(water.polygon_count(), 1);
//! # Ok::<(), waterline::WaterMeshError>(())
//! ```

pub mod assembly;
#[cfg(feature = "bevy")]
mod bevy_mesh;
pub mod document;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod reclosure;
pub mod source;
pub mod traversal;

#[cfg(test)]
mod fixtures;

pub use assembly::WaterMesh;
pub use document::{generate_for_document, HostDocument, ObjectId, Placement, SceneDocument};
pub use error::{Result, WaterMeshError};
pub use pipeline::{generate_water_mesh, WaterMeshGenerator, WaterMeshOutput};
pub use source::{MeshData, PolygonId, SourceMesh, SourceVertex, VertexId};
pub use traversal::{TraversalStats, VertexMapping};

pub use waterline_config::{TraversalOrder, WaterConfig};
