//! Seeding the traversal from the host selection.

use tracing::{debug, warn};

use super::{Traversal, WorkItem};

impl Traversal<'_> {
    /// Admit every selected source vertex and queue it for expansion.
    ///
    /// Seeds are admitted in source order regardless of their orientation.
    /// No edges are created here. Returns the number of seeds.
    pub fn seed(&mut self) -> usize {
        let mesh = self.mesh;
        let mut seeds = 0;

        for source in mesh.selected_vertices() {
            let Some(vertex) = mesh.vertex(source) else {
                continue;
            };
            if self.mapping.contains(source) {
                continue;
            }

            let output = self.admit(source, vertex);
            self.push(WorkItem::anchored(source, output));
            seeds += 1;

            if mesh.is_isolated(source) {
                debug!("seed {:?} has no neighbors, it stays a lone vertex", source);
            }
        }

        if seeds == 0 {
            warn!("no selected vertices, water mesh will be empty");
        }

        self.stats.seeds += seeds;
        seeds
    }
}
