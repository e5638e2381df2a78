use thiserror::Error;

use crate::types::{Triangle, Vertex};

/// Triangle insertion failed because a vertex index is out of range.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("triangle references vertex {index} but only {loaded} vertices are loaded")]
pub struct InvalidVertexRef {
    pub index: usize,
    pub loaded: usize,
}

/// In-memory representation of all vertices and triangles, ready for
/// rasterization.
///
/// Both sequences preserve insertion order: vertex order gives indices their
/// meaning, triangle order decides rasterization precedence. Fields are
/// private so the index invariant checked by [`Scene::add_triangle`] cannot
/// be bypassed.
#[derive(Debug, Default, Clone)]
pub struct Scene {
    vertices: Vec<Vertex>,
    triangles: Vec<Triangle>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex and returns its index.
    pub fn add_vertex(&mut self, vertex: Vertex) -> usize {
        self.vertices.push(vertex);
        self.vertices.len() - 1
    }

    /// Appends a triangle and returns its index.
    ///
    /// Every vertex index must name an already-loaded vertex; otherwise the
    /// triangle is rejected and the scene is unchanged.
    pub fn add_triangle(&mut self, triangle: Triangle) -> Result<usize, InvalidVertexRef> {
        for &index in &triangle.verts {
            if index >= self.vertices.len() {
                return Err(InvalidVertexRef {
                    index,
                    loaded: self.vertices.len(),
                });
            }
        }
        self.triangles.push(triangle);
        Ok(self.triangles.len() - 1)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_add_vertex_returns_sequential_indices() {
        let mut scene = Scene::new();
        assert_eq!(scene.add_vertex(IVec2::new(0, 0)), 0);
        assert_eq!(scene.add_vertex(IVec2::new(1, 1)), 1);
        assert_eq!(scene.vertices().len(), 2);
    }

    #[test]
    fn test_add_triangle_with_loaded_vertices() {
        let mut scene = Scene::new();
        scene.add_vertex(IVec2::new(0, 0));
        scene.add_vertex(IVec2::new(4, 0));
        scene.add_vertex(IVec2::new(2, 4));

        let index = scene.add_triangle(Triangle::new([0, 1, 2], 'a'));
        assert_eq!(index, Ok(0));
        assert_eq!(scene.triangles().len(), 1);
    }

    #[test]
    fn test_add_triangle_rejects_unloaded_vertex() {
        let mut scene = Scene::new();
        scene.add_vertex(IVec2::new(0, 0));

        let err = scene.add_triangle(Triangle::new([0, 0, 3], 'a')).unwrap_err();
        assert_eq!(err, InvalidVertexRef { index: 3, loaded: 1 });
        assert!(scene.triangles().is_empty(), "rejected triangle must not be stored");
    }
}
