//! Complete water mesh pipeline
//!
//! Connects the four stages for a single source mesh:
//! 1. Seeding from the host selection
//! 2. Orientation-gated traversal
//! 3. Face reclosure
//! 4. Assembly with recomputed normals
//!
//! The pipeline is pure: it reads a [`SourceMesh`] and returns a value.
//! Writing anything back to a host document is left to the caller.

use tracing::info;
use waterline_config::WaterConfig;

use crate::assembly::WaterMesh;
use crate::reclosure::reclose_polygons;
use crate::source::{SourceMesh, VertexId};
use crate::traversal::{Traversal, TraversalResult, TraversalSettings, TraversalStats, VertexMapping};

/// Result of running the pipeline on one source mesh
#[derive(Debug, Clone)]
pub struct WaterMeshOutput {
    pub mesh: WaterMesh,
    /// Source vertex to output vertex mapping
    pub mapping: VertexMapping,
    /// Source vertices the traversal inspected (for host-side highlighting)
    pub touched: Vec<VertexId>,
    pub stats: TraversalStats,
    /// Number of source polygons carried over
    pub polygons: usize,
}

/// Water mesh generator
///
/// Holds only configuration; every call to [`generate`](Self::generate)
/// allocates fresh traversal state.
#[derive(Debug, Clone, Default)]
pub struct WaterMeshGenerator {
    config: WaterConfig,
}

impl WaterMeshGenerator {
    pub fn new(config: WaterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WaterConfig {
        &self.config
    }

    /// Run seeding, traversal, reclosure and assembly on `source`
    pub fn generate(&self, source: &SourceMesh) -> WaterMeshOutput {
        let mut traversal = Traversal::new(source, TraversalSettings::from(&self.config));
        traversal.seed();
        traversal.run();

        let TraversalResult {
            mapping,
            mut output,
            touched,
            stats,
        } = traversal.finish();

        let polygons = reclose_polygons(source, &mapping, &mut output);
        let mesh = WaterMesh::assemble(self.config.mesh_name.clone(), output);

        info!(
            "generated water mesh '{}' from {} seeds: {} vertices, {} edges, {} polygons",
            mesh.name,
            stats.seeds,
            mesh.vertex_count(),
            mesh.edge_count(),
            mesh.polygon_count()
        );

        WaterMeshOutput {
            mesh,
            mapping,
            touched,
            stats,
            polygons,
        }
    }
}

/// Generate a water mesh with the default configuration
pub fn generate_water_mesh(source: &SourceMesh) -> WaterMesh {
    WaterMeshGenerator::default().generate(source).mesh
}
