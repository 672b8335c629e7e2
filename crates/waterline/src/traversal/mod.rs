//! Orientation-gated traversal of the vertex adjacency graph
//!
//! Starting from the selected vertices, the traversal walks the edge graph
//! with an explicit frontier. Every newly discovered vertex whose normal
//! faces up is admitted: it gets an offset output vertex and an edge back to
//! the vertex it was discovered from. Vertices that face level or down are
//! still expanded so the walk can reach upward patches beyond them, but they
//! never appear in the output.
//!
//! Edges between two admitted vertices that were discovered along different
//! paths are added when the second of them is expanded, so the output edge
//! set ends up equal to the source edges whose endpoints were both admitted.

mod frontier;
mod mapping;
mod seed;

use std::collections::HashSet;

use glam::Vec3;
use tracing::{debug, trace};
use waterline_config::{TraversalOrder, WaterConfig};

use crate::output::OutputMesh;
use crate::source::{SourceMesh, SourceVertex, VertexId};

pub use frontier::{Frontier, WorkItem};
pub use mapping::VertexMapping;

/// Geometric parameters of one traversal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraversalSettings {
    pub offset_distance: f32,
    pub up: Vec3,
    pub order: TraversalOrder,
}

impl Default for TraversalSettings {
    fn default() -> Self {
        Self::from(&WaterConfig::default())
    }
}

impl From<&WaterConfig> for TraversalSettings {
    fn from(config: &WaterConfig) -> Self {
        Self {
            offset_distance: config.offset_distance,
            up: Vec3::from_array(config.up_axis),
            order: config.traversal_order,
        }
    }
}

/// Counters collected while traversing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Selected vertices admitted unconditionally
    pub seeds: usize,
    /// Vertices admitted by the upward-facing test
    pub admitted: usize,
    /// Vertices expanded only for connectivity
    pub pass_through: usize,
    /// Vertices popped and expanded
    pub visited: usize,
    /// Edges created when a vertex was admitted
    pub tree_edges: usize,
    /// Edges created between two already admitted vertices
    pub closure_edges: usize,
}

/// Everything the traversal produced
#[derive(Debug, Clone)]
pub struct TraversalResult {
    pub mapping: VertexMapping,
    pub output: OutputMesh,
    /// Every neighbor the traversal inspected, in first-touch order
    pub touched: Vec<VertexId>,
    pub stats: TraversalStats,
}

/// State of one traversal over a single source mesh
///
/// Frontier, visited and pending sets, mapping and output are owned by the
/// traversal and handed out by [`Traversal::finish`].
pub struct Traversal<'a> {
    pub(crate) mesh: &'a SourceMesh,
    pub(crate) settings: TraversalSettings,
    pub(crate) frontier: Frontier,
    pub(crate) visited: HashSet<VertexId>,
    /// Source vertices currently on the frontier
    pub(crate) pending: HashSet<VertexId>,
    pub(crate) mapping: VertexMapping,
    pub(crate) output: OutputMesh,
    touched: Vec<VertexId>,
    touched_set: HashSet<VertexId>,
    pub(crate) stats: TraversalStats,
}

impl<'a> Traversal<'a> {
    pub fn new(mesh: &'a SourceMesh, settings: TraversalSettings) -> Self {
        Self {
            mesh,
            settings,
            frontier: Frontier::new(settings.order),
            visited: HashSet::new(),
            pending: HashSet::new(),
            mapping: VertexMapping::new(),
            output: OutputMesh::new(),
            touched: Vec::new(),
            touched_set: HashSet::new(),
            stats: TraversalStats::default(),
        }
    }

    /// Expand work items until the frontier is empty
    ///
    /// Each vertex is pushed at most once (guarded by the visited and pending
    /// sets), so the loop runs at most once per source vertex.
    pub fn run(&mut self) {
        let mesh = self.mesh;

        while let Some(item) = self.frontier.pop() {
            self.pending.remove(&item.source);
            if !self.visited.insert(item.source) {
                continue;
            }
            self.stats.visited += 1;

            for &neighbor in mesh.neighbors(item.source) {
                self.touch(neighbor);

                if neighbor == item.source {
                    trace!("self-loop edge on {:?} ignored", neighbor);
                    continue;
                }

                if self.visited.contains(&neighbor) {
                    self.close_cycle(neighbor, item.anchor);
                } else if !self.pending.contains(&neighbor) {
                    let Some(vertex) = mesh.vertex(neighbor) else {
                        continue;
                    };
                    self.discover(neighbor, vertex, item.anchor);
                }
                // Pending vertices get their closure edges when expanded
            }
        }

        debug!(
            "traversal: visited {} vertices, admitted {} (+{} seeds), {} pass-through, {} tree edges, {} closure edges",
            self.stats.visited,
            self.stats.admitted,
            self.stats.seeds,
            self.stats.pass_through,
            self.stats.tree_edges,
            self.stats.closure_edges
        );
    }

    /// Hand out the accumulated mapping, output and statistics
    pub fn finish(self) -> TraversalResult {
        TraversalResult {
            mapping: self.mapping,
            output: self.output,
            touched: self.touched,
            stats: self.stats,
        }
    }

    pub fn mapping(&self) -> &VertexMapping {
        &self.mapping
    }

    pub fn output(&self) -> &OutputMesh {
        &self.output
    }

    pub fn stats(&self) -> TraversalStats {
        self.stats
    }

    /// Handle a neighbor seen for the first time
    fn discover(&mut self, neighbor: VertexId, vertex: &SourceVertex, anchor: Option<u32>) {
        if vertex.faces_up(self.settings.up) {
            let output = self.admit(neighbor, vertex);
            self.push(WorkItem::anchored(neighbor, output));
            self.stats.admitted += 1;

            if let Some(anchor) = anchor {
                if self.output.add_edge(anchor, output) {
                    self.stats.tree_edges += 1;
                }
            }
            trace!("admitted {:?} as output {}", neighbor, output);
        } else {
            self.push(WorkItem::pass_through(neighbor));
            self.stats.pass_through += 1;
            trace!("{:?} faces away from up, passing through", neighbor);
        }
    }

    /// Connect an expanded, admitted neighbor reached along another path
    fn close_cycle(&mut self, neighbor: VertexId, anchor: Option<u32>) {
        let (Some(mapped), Some(anchor)) = (self.mapping.get(neighbor), anchor) else {
            return;
        };
        if self.output.add_edge(mapped, anchor) {
            self.stats.closure_edges += 1;
            trace!("closed cycle {} - {}", mapped, anchor);
        }
    }

    /// Create the offset output vertex for `source` and map it
    pub(crate) fn admit(&mut self, source: VertexId, vertex: &SourceVertex) -> u32 {
        let output = self
            .output
            .push_vertex(vertex.offset_position(self.settings.offset_distance));
        let mapped = self.mapping.insert(source);
        debug_assert_eq!(output, mapped, "mapping must stay a prefix of the output");
        output
    }

    pub(crate) fn push(&mut self, item: WorkItem) {
        self.pending.insert(item.source);
        self.frontier.push(item);
    }

    fn touch(&mut self, vertex: VertexId) {
        if self.touched_set.insert(vertex) {
            self.touched.push(vertex);
        }
    }
}
