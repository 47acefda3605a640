//! Mesh geometry and render settings

use crate::foundation::math::{Vec2, Vec3};
use crate::scene::graph::MaterialKey;

/// Triangle geometry buffers.
///
/// `positions`, `normals`, and `uvs` are parallel arrays indexed identically;
/// each face is three indices into them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    /// Vertex positions
    pub positions: Vec<Vec3>,

    /// Per-vertex normals
    pub normals: Vec<Vec3>,

    /// Per-vertex texture coordinates
    pub uvs: Vec<Vec2>,

    /// Triangular faces as vertex index triples
    pub faces: Vec<[u32; 3]>,
}

impl Geometry {
    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }
}

/// A renderable shape: geometry plus a shared material reference.
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Key of the material in the scene graph's material arena.
    /// Always valid; meshes without an explicit material use the
    /// graph's default material.
    pub material: MaterialKey,

    /// Triangle buffers
    pub geometry: Geometry,

    /// Whether this mesh is flattened onto the ground in the shadow pass
    pub cast_shadows: bool,
}

impl Mesh {
    /// Create an empty mesh using the given material
    pub fn new(material: MaterialKey) -> Self {
        Self {
            material,
            geometry: Geometry::default(),
            cast_shadows: true,
        }
    }
}
