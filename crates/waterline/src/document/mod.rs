//! Host document integration
//!
//! The pipeline never touches a document directly. [`HostDocument`] is the
//! seam a host implements to hand out source meshes and accept the generated
//! objects; [`SceneDocument`] is a self-contained implementation.

mod placement;
mod scene;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use waterline_config::WaterConfig;

use crate::assembly::WaterMesh;
use crate::error::Result;
use crate::pipeline::WaterMeshGenerator;
use crate::source::{SourceMesh, VertexId};

pub use placement::Placement;
pub use scene::{ObjectData, SceneDocument, SceneObject};

/// Type-safe document object identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

/// Operations the generator needs from a host document
pub trait HostDocument {
    /// Objects holding editable mesh data, in document order
    fn mesh_objects(&self) -> Vec<ObjectId>;

    /// Number of selected vertices on a mesh object
    fn selected_vertex_count(&self, id: ObjectId) -> Result<usize>;

    /// Read and validate the mesh of an object
    fn read_mesh(&self, id: ObjectId) -> Result<SourceMesh>;

    /// Placement of an object
    fn placement(&self, id: ObjectId) -> Result<Placement>;

    /// Flag vertices of a mesh object as selected (visual feedback only)
    fn mark_selected(&mut self, id: ObjectId, vertices: &[VertexId]) -> Result<()>;

    /// Create a new object from a generated water mesh
    fn insert_object(&mut self, name: &str, mesh: WaterMesh, placement: Placement) -> ObjectId;
}

/// Generate one water object for every mesh object with a selection.
///
/// Objects without selected vertices are skipped. Each water object takes
/// over the placement of its source object. Returns the ids of the inserted
/// objects in document order.
pub fn generate_for_document<D: HostDocument + ?Sized>(
    document: &mut D,
    config: &WaterConfig,
) -> Result<Vec<ObjectId>> {
    let generator = WaterMeshGenerator::new(config.clone());
    let mut inserted = Vec::new();

    for object in document.mesh_objects() {
        if document.selected_vertex_count(object)? == 0 {
            debug!("object {:?} has no selected vertices, skipping", object);
            continue;
        }

        let source = document.read_mesh(object)?;
        let placement = document.placement(object)?;
        let output = generator.generate(&source);

        if config.mark_visited {
            document.mark_selected(object, &output.touched)?;
        }

        let id = document.insert_object(&config.object_name, output.mesh, placement);
        inserted.push(id);
    }

    info!(
        "water generation finished: {} object(s) created",
        inserted.len()
    );

    Ok(inserted)
}
