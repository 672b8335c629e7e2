//! In-memory scene document.
//!
//! A minimal host: named objects holding either editable source mesh data or
//! a generated water mesh, each with a placement. The whole document can be
//! round-tripped through JSON.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assembly::WaterMesh;
use crate::error::{Result, WaterMeshError};
use crate::source::{MeshData, SourceMesh, VertexId};

use super::{HostDocument, ObjectId, Placement};

/// Data attached to a scene object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ObjectData {
    /// Editable mesh with per-vertex selection
    Mesh(MeshData),
    /// Generated water surface
    Water(WaterMesh),
    /// Object without geometry
    Empty,
}

/// A scene object with its placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    pub placement: Placement,
    pub data: ObjectData,
}

/// In-memory document of scene objects
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    objects: Vec<SceneObject>,
    /// Counter for generating unique object IDs
    next_id: u32,
}

impl SceneDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a document from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the document to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add an object, renaming it if the name is taken
    pub fn add_object(&mut self, name: &str, placement: Placement, data: ObjectData) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;

        let name = self.unique_name(name);
        self.objects.push(SceneObject {
            id,
            name,
            placement,
            data,
        });
        id
    }

    /// Add an editable mesh object
    pub fn add_mesh(&mut self, name: &str, placement: Placement, mesh: MeshData) -> ObjectId {
        self.add_object(name, placement, ObjectData::Mesh(mesh))
    }

    /// Add an editable mesh object from an already validated source mesh
    pub fn add_source_mesh(&mut self, name: &str, placement: Placement, mesh: &SourceMesh) -> ObjectId {
        self.add_mesh(name, placement, mesh.to_data())
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Find an object by exact name
    pub fn find_by_name(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Editable mesh data of an object
    pub fn mesh_data(&self, id: ObjectId) -> Result<&MeshData> {
        match &self.object(id).ok_or(WaterMeshError::ObjectNotFound(id))?.data {
            ObjectData::Mesh(data) => Ok(data),
            _ => Err(WaterMeshError::NotAMesh(id)),
        }
    }

    /// Water mesh of a generated object
    pub fn water_mesh(&self, id: ObjectId) -> Option<&WaterMesh> {
        match &self.object(id)?.data {
            ObjectData::Water(mesh) => Some(mesh),
            _ => None,
        }
    }

    /// `name`, or `name.001`, `name.002`, ... if already taken
    fn unique_name(&self, name: &str) -> String {
        if self.find_by_name(name).is_none() {
            return name.to_string();
        }
        (1..)
            .map(|n| format!("{name}.{n:03}"))
            .find(|candidate| self.find_by_name(candidate).is_none())
            .unwrap_or_else(|| name.to_string())
    }
}

impl HostDocument for SceneDocument {
    fn mesh_objects(&self) -> Vec<ObjectId> {
        self.objects
            .iter()
            .filter(|o| matches!(o.data, ObjectData::Mesh(_)))
            .map(|o| o.id)
            .collect()
    }

    fn selected_vertex_count(&self, id: ObjectId) -> Result<usize> {
        Ok(self.mesh_data(id)?.selected_count())
    }

    fn read_mesh(&self, id: ObjectId) -> Result<SourceMesh> {
        SourceMesh::from_data(self.mesh_data(id)?)
    }

    fn placement(&self, id: ObjectId) -> Result<Placement> {
        self.object(id)
            .map(|o| o.placement)
            .ok_or(WaterMeshError::ObjectNotFound(id))
    }

    fn mark_selected(&mut self, id: ObjectId, vertices: &[VertexId]) -> Result<()> {
        let object = self.object_mut(id).ok_or(WaterMeshError::ObjectNotFound(id))?;
        let ObjectData::Mesh(data) = &mut object.data else {
            return Err(WaterMeshError::NotAMesh(id));
        };
        for vertex in vertices {
            if let Some(v) = data.vertices.get_mut(vertex.index()) {
                v.selected = true;
            }
        }
        Ok(())
    }

    fn insert_object(&mut self, name: &str, mesh: WaterMesh, placement: Placement) -> ObjectId {
        let id = self.add_object(name, placement, ObjectData::Water(mesh));
        if let Some(object) = self.object(id) {
            info!(
                "Added object '{}' (id: {:?}) at {:?}",
                object.name, id, placement.translation
            );
        }
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_unique_names() {
        let mut doc = SceneDocument::new();
        let a = doc.add_object("water", Placement::default(), ObjectData::Empty);
        let b = doc.add_object("water", Placement::default(), ObjectData::Empty);
        let c = doc.add_object("water", Placement::default(), ObjectData::Empty);

        assert_eq!(doc.object(a).unwrap().name, "water");
        assert_eq!(doc.object(b).unwrap().name, "water.001");
        assert_eq!(doc.object(c).unwrap().name, "water.002");
    }

    #[test]
    fn test_mesh_objects_skips_non_meshes() {
        let mut doc = SceneDocument::new();
        doc.add_object("empty", Placement::default(), ObjectData::Empty);
        let mesh = doc.add_source_mesh("ground", Placement::default(), &fixtures::fan_mesh());
        doc.insert_object("water", WaterMesh::default(), Placement::default());

        assert_eq!(doc.mesh_objects(), vec![mesh]);
        assert_eq!(doc.selected_vertex_count(mesh).unwrap(), 1);
    }

    #[test]
    fn test_read_mesh_validates() {
        let mut doc = SceneDocument::new();
        let id = doc.add_mesh(
            "broken",
            Placement::default(),
            MeshData {
                vertices: vec![fixtures::up(0.0, 0.0)],
                edges: vec![],
                polygons: vec![vec![0, 1, 2]],
            },
        );

        assert!(matches!(
            doc.read_mesh(id),
            Err(WaterMeshError::InvalidPolygonVertex { polygon: 0, .. })
        ));
    }

    #[test]
    fn test_missing_object() {
        let doc = SceneDocument::new();
        assert!(matches!(
            doc.placement(ObjectId(3)),
            Err(WaterMeshError::ObjectNotFound(ObjectId(3)))
        ));
    }

    #[test]
    fn test_mark_selected() {
        let mut doc = SceneDocument::new();
        let id = doc.add_source_mesh("ground", Placement::default(), &fixtures::tunnel_mesh());
        doc.mark_selected(id, &[VertexId(1), VertexId(2)]).unwrap();

        assert_eq!(doc.selected_vertex_count(id).unwrap(), 3);
    }

    #[test]
    fn test_mark_selected_on_water_fails() {
        let mut doc = SceneDocument::new();
        let id = doc.insert_object("water", WaterMesh::default(), Placement::default());
        assert!(matches!(
            doc.mark_selected(id, &[VertexId(0)]),
            Err(WaterMeshError::NotAMesh(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let mut doc = SceneDocument::new();
        doc.add_source_mesh(
            "ground",
            Placement::from_translation(glam::Vec3::new(1.0, 2.0, 3.0)),
            &fixtures::fan_mesh(),
        );

        let json = doc.to_json().unwrap();
        let restored = SceneDocument::from_json(&json).unwrap();
        assert_eq!(restored, doc);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            SceneDocument::from_json("{ not json"),
            Err(WaterMeshError::Json(_))
        ));
    }
}
