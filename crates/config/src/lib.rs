//! Shared configuration for waterline
//!
//! This crate provides the single source of truth for the offset distance,
//! the vertical axis used by the upward-facing test, and the naming of the
//! generated objects.

use serde::{Deserialize, Serialize};

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

/// Distance each admitted vertex is pushed along its own normal
pub const DEFAULT_OFFSET_DISTANCE: f32 = 0.3;

/// Vertical unit vector used by the upward-facing test (+Z up)
pub const DEFAULT_UP_AXIS: [f32; 3] = [0.0, 0.0, 1.0];

/// Name given to generated water objects
pub const DEFAULT_OBJECT_NAME: &str = "water";

/// Name given to generated water mesh data blocks
pub const DEFAULT_MESH_NAME: &str = "waterMesh";

/// Environment variable selecting the frontier order ("dfs" or "bfs")
pub const TRAVERSAL_ENV_VAR: &str = "WATERLINE_TRAVERSAL";

/// Order in which the traversal frontier hands out work items.
///
/// Only the order in which edges are discovered changes; the set of admitted
/// vertices, and therefore the emitted polygons, is the same for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    /// Last in, first out
    #[default]
    DepthFirst,
    /// First in, first out
    BreadthFirst,
}

impl TraversalOrder {
    /// Parse from environment variable WATERLINE_TRAVERSAL
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(TRAVERSAL_ENV_VAR).ok().as_deref())
    }

    /// Resolve an optional override; unset or unknown values fall back to
    /// depth-first
    pub fn from_env_value(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }

    /// Parse a user-facing name ("dfs", "depth_first", "bfs", "breadth_first")
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth" | "depth_first" => Some(Self::DepthFirst),
            "bfs" | "breadth" | "breadth_first" => Some(Self::BreadthFirst),
            _ => None,
        }
    }
}

/// Configuration for water mesh generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
#[serde(default)]
pub struct WaterConfig {
    /// Offset along the vertex normal, in object units
    pub offset_distance: f32,
    /// Vertical axis for the upward-facing test
    pub up_axis: [f32; 3],
    /// Frontier order for the traversal
    pub traversal_order: TraversalOrder,
    /// Mark every vertex the traversal touched as selected on the source
    pub mark_visited: bool,
    /// Name of the generated object
    pub object_name: String,
    /// Name of the generated mesh data
    pub mesh_name: String,
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            offset_distance: DEFAULT_OFFSET_DISTANCE,
            up_axis: DEFAULT_UP_AXIS,
            traversal_order: TraversalOrder::default(),
            mark_visited: true,
            object_name: DEFAULT_OBJECT_NAME.to_string(),
            mesh_name: DEFAULT_MESH_NAME.to_string(),
        }
    }
}

impl WaterConfig {
    /// Create a config with the given offset distance
    pub fn new(offset_distance: f32) -> Self {
        Self {
            offset_distance,
            ..Self::default()
        }
    }

    /// Default config with the frontier order taken from the environment
    pub fn from_env() -> Self {
        Self {
            traversal_order: TraversalOrder::from_env(),
            ..Self::default()
        }
    }

    /// Builder-style frontier order override
    pub fn with_traversal_order(mut self, order: TraversalOrder) -> Self {
        self.traversal_order = order;
        self
    }

    /// Builder-style up axis override
    pub fn with_up_axis(mut self, up_axis: [f32; 3]) -> Self {
        self.up_axis = up_axis;
        self
    }

    /// Builder-style toggle for marking touched vertices as selected
    pub fn with_mark_visited(mut self, mark_visited: bool) -> Self {
        self.mark_visited = mark_visited;
        self
    }
}
