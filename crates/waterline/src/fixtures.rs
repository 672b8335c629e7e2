//! Small hand-built meshes shared by the unit tests.

use glam::Vec3;

use crate::source::{SourceMesh, SourceVertex};

pub fn vertex(position: [f32; 3], normal: [f32; 3], selected: bool) -> SourceVertex {
    SourceVertex::new(Vec3::from_array(position), Vec3::from_array(normal)).with_selected(selected)
}

/// Unselected vertex on the ground plane facing +Z
pub fn up(x: f32, y: f32) -> SourceVertex {
    vertex([x, y, 0.0], [0.0, 0.0, 1.0], false)
}

/// Unselected vertex on the ground plane facing -Z
pub fn down(x: f32, y: f32) -> SourceVertex {
    vertex([x, y, 0.0], [0.0, 0.0, -1.0], false)
}

/// Seed with three upward neighbors; seed and two neighbors share a triangle
pub fn fan_mesh() -> SourceMesh {
    SourceMesh::new(
        vec![
            up(0.0, 0.0).with_selected(true),
            up(1.0, 0.0),
            up(0.0, 1.0),
            up(-1.0, -1.0),
        ],
        vec![[0, 1], [0, 2], [0, 3]],
        vec![vec![0, 1, 2]],
    )
    .unwrap()
}

/// Seed, a downward-facing neighbor, then an upward vertex beyond it
pub fn tunnel_mesh() -> SourceMesh {
    SourceMesh::new(
        vec![up(0.0, 0.0).with_selected(true), down(1.0, 0.0), up(2.0, 0.0)],
        vec![[0, 1], [1, 2]],
        vec![],
    )
    .unwrap()
}

/// Seed whose only neighbor has a horizontal normal
pub fn level_neighbor_mesh() -> SourceMesh {
    SourceMesh::new(
        vec![
            up(0.0, 0.0).with_selected(true),
            vertex([1.0, 0.0, 0.0], [1.0, 0.0, 0.0], false),
        ],
        vec![[0, 1]],
        vec![],
    )
    .unwrap()
}

/// Downward-facing seed next to an upward vertex
pub fn downward_seed_mesh() -> SourceMesh {
    SourceMesh::new(
        vec![down(0.0, 0.0).with_selected(true), up(1.0, 0.0)],
        vec![[0, 1]],
        vec![],
    )
    .unwrap()
}

/// Selected vertex without edges next to an unrelated edge
pub fn isolated_seed_mesh() -> SourceMesh {
    SourceMesh::new(
        vec![up(0.0, 0.0).with_selected(true), up(5.0, 0.0), up(6.0, 0.0)],
        vec![[1, 2]],
        vec![],
    )
    .unwrap()
}

/// Triangle with self-loop edges on the seed (0) and on vertex 1
pub fn self_loop_mesh() -> SourceMesh {
    SourceMesh::new(
        vec![up(0.0, 0.0).with_selected(true), up(1.0, 0.0), up(0.0, 1.0)],
        vec![[0, 0], [0, 1], [1, 1], [1, 2], [2, 0]],
        vec![vec![0, 1, 2]],
    )
    .unwrap()
}

/// Two seeds (vertices 1 and 3) on a path
pub fn multi_seed_mesh() -> SourceMesh {
    SourceMesh::new(
        vec![
            up(0.0, 0.0),
            up(1.0, 0.0).with_selected(true),
            up(2.0, 0.0),
            up(3.0, 0.0).with_selected(true),
        ],
        vec![[0, 1], [1, 2], [2, 3]],
        vec![],
    )
    .unwrap()
}

/// Path with every edge listed twice
pub fn duplicate_edge_mesh() -> SourceMesh {
    SourceMesh::new(
        vec![up(0.0, 0.0).with_selected(true), up(1.0, 0.0), up(2.0, 0.0)],
        vec![[0, 1], [1, 0], [1, 2], [1, 2]],
        vec![],
    )
    .unwrap()
}

fn grid_index(n: usize, x: usize, y: usize) -> u32 {
    (y * n + x) as u32
}

/// `n` x `n` flat grid of upward quads, optionally seeded at one vertex
pub fn grid_mesh(n: usize, seed: Option<usize>) -> SourceMesh {
    let mut vertices = Vec::new();
    for y in 0..n {
        for x in 0..n {
            let selected = seed == Some(y * n + x);
            vertices.push(up(x as f32, y as f32).with_selected(selected));
        }
    }
    let (edges, polygons) = grid_topology(n, n);
    SourceMesh::new(vertices, edges, polygons).unwrap()
}

/// 4 x 3 grid whose second column faces down, seeded at the first corner.
///
/// The first column is reached directly; the last two only by passing
/// through the downward fold.
pub fn ridge_mesh() -> SourceMesh {
    let (width, height) = (4, 3);
    let mut vertices = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let v = if x == 1 {
                down(x as f32, y as f32)
            } else {
                up(x as f32, y as f32)
            };
            vertices.push(v.with_selected(x == 0 && y == 0));
        }
    }
    let (edges, polygons) = grid_topology(width, height);
    SourceMesh::new(vertices, edges, polygons).unwrap()
}

fn grid_topology(width: usize, height: usize) -> (Vec<[u32; 2]>, Vec<Vec<u32>>) {
    let mut edges = Vec::new();
    let mut polygons = Vec::new();
    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                edges.push([grid_index(width, x, y), grid_index(width, x + 1, y)]);
            }
            if y + 1 < height {
                edges.push([grid_index(width, x, y), grid_index(width, x, y + 1)]);
            }
            if x + 1 < width && y + 1 < height {
                polygons.push(vec![
                    grid_index(width, x, y),
                    grid_index(width, x + 1, y),
                    grid_index(width, x + 1, y + 1),
                    grid_index(width, x, y + 1),
                ]);
            }
        }
    }
    (edges, polygons)
}
