use std::cmp::Ordering;

use crate::types::{Triangle, Vertex};

/// Which side of a directed edge a query point lies on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EdgeSide {
    On,
    Left,
    Right,
}

/// Classifies the point at (row, col) against the infinite line through the
/// directed edge v1 -> v2.
///
/// Computes the signed cross product of the edge vector and the vector from
/// v1 to the point. Integer arithmetic keeps the zero case exact, so
/// vertical edges and on-line points need no special handling.
pub fn edge_side(v1: Vertex, v2: Vertex, row: i32, col: i32) -> EdgeSide {
    let e = (col - v1.x) * (v2.y - v1.y) - (row - v1.y) * (v2.x - v1.x);
    match e.cmp(&0) {
        Ordering::Equal => EdgeSide::On,
        Ordering::Less => EdgeSide::Left,
        Ordering::Greater => EdgeSide::Right,
    }
}

/// Tests whether the point at (row, col) lies inside the triangle.
///
/// The point is inside when the three directed edges v0->v1, v1->v2, v2->v0
/// all classify it on the same side, so both winding orders work without
/// normalization. A collinear (zero-area) triangle contains exactly the
/// points on its shared line, where all three classifications are `On`.
///
/// The triangle's vertex indices must be in range for `vertices`; the scene
/// enforces this at insertion time.
pub fn point_in_triangle(vertices: &[Vertex], tri: &Triangle, row: i32, col: i32) -> bool {
    let v0 = vertices[tri.verts[0]];
    let v1 = vertices[tri.verts[1]];
    let v2 = vertices[tri.verts[2]];

    let e1 = edge_side(v0, v1, row, col);
    let e2 = edge_side(v1, v2, row, col);
    let e3 = edge_side(v2, v0, row, col);

    e1 == e2 && e1 == e3
}
