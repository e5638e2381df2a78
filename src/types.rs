use glam::IVec2;

/// A scene vertex: a 2D point with integer coordinates.
///
/// Vertices are identified by their index in the scene's vertex sequence;
/// triangles reference them by index only.
pub type Vertex = IVec2;

/// Triangle primitive referencing scene vertices by index, drawn with a
/// single fill character.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Triangle {
    pub verts: [usize; 3],
    pub fill: char,
}

impl Triangle {
    pub const fn new(verts: [usize; 3], fill: char) -> Self {
        Self { verts, fill }
    }
}
