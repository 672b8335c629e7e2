//! Face reclosure.
//!
//! A source polygon is carried over when all of its corners were admitted.
//! Candidates are gathered per admitted vertex, so a polygon incident to
//! several admitted vertices is seen several times; it is decided once, on
//! first sight, and remembered by polygon id.

use std::collections::HashSet;

use tracing::debug;

use crate::output::OutputMesh;
use crate::source::{PolygonId, SourceMesh};
use crate::traversal::VertexMapping;

/// Append every fully admitted source polygon to `output`, exactly once.
///
/// Polygons are emitted in the order their first admitted corner was
/// mapped. Returns the number of polygons emitted.
pub fn reclose_polygons(
    mesh: &SourceMesh,
    mapping: &VertexMapping,
    output: &mut OutputMesh,
) -> usize {
    let mut decided: HashSet<PolygonId> = HashSet::new();
    let mut emitted = 0;

    for &source in mapping.sources() {
        for &polygon_id in mesh.vertex_polygons(source) {
            if !decided.insert(polygon_id) {
                continue;
            }
            let Some(corners) = mesh.polygon(polygon_id) else {
                continue;
            };
            if let Some(translated) = mapping.translate(corners) {
                output.push_polygon(translated);
                emitted += 1;
            }
        }
    }

    debug!(
        "reclosure: {} of {} candidate polygons fully admitted",
        emitted,
        decided.len()
    );

    emitted
}
