mod edge;

pub use edge::{edge_side, point_in_triangle, EdgeSide};
