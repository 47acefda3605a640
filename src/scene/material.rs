//! Material and texture resources

use crate::foundation::math::Vec3;

/// Reference to a texture image.
///
/// The engine only tracks the image by name; decoding and upload happen in
/// the graphics backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    /// Image file name as referenced by the scene file
    pub name: String,
}

impl Texture {
    /// Create a texture reference for the given image name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Phong-style surface description shared between meshes.
///
/// Materials live in the scene graph's material arena and are referenced by
/// `MaterialKey`, so any number of meshes can share one without reference
/// counting.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Material name, unique per scene file
    pub name: String,

    /// Emission color
    pub emission: Vec3,

    /// Ambient color
    pub ambient: Vec3,

    /// Diffuse color
    pub diffuse: Vec3,

    /// Specular color
    pub specular: Vec3,

    /// Specular shininess exponent (0 to 128)
    pub shininess: f32,

    /// Optional texture reference
    pub texture: Option<Texture>,
}

impl Material {
    /// Create a material with the default neutral grey appearance
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            emission: Vec3::zeros(),
            ambient: Vec3::new(0.75, 0.75, 0.75),
            diffuse: Vec3::new(0.75, 0.75, 0.75),
            specular: Vec3::new(0.75, 0.75, 0.75),
            shininess: 64.0,
            texture: None,
        }
    }

    /// Create the all-black flat material used for planar shadows
    pub fn shadow() -> Self {
        Self {
            name: "shadow".to_string(),
            emission: Vec3::zeros(),
            ambient: Vec3::zeros(),
            diffuse: Vec3::zeros(),
            specular: Vec3::zeros(),
            shininess: 0.0,
            texture: None,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new("default")
    }
}
