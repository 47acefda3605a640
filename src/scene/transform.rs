//! Local transform of a scene node

use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};

/// Decomposed local transform of a node.
///
/// The base matrix is set directly (typically by the importer); position,
/// rotation, and scale are layered on top of it for runtime animation.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeTransform {
    /// Base transformation matrix, composed last
    pub base: Mat4,

    /// Position offset
    pub position: Vec3,

    /// Euler rotation in degrees around X, Y, and Z
    pub rotation_degrees: Vec3,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for NodeTransform {
    fn default() -> Self {
        Self {
            base: Mat4::identity(),
            position: Vec3::zeros(),
            rotation_degrees: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl NodeTransform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only a base matrix
    pub fn from_base(base: Mat4) -> Self {
        Self {
            base,
            ..Default::default()
        }
    }

    /// Compute the local transformation matrix.
    ///
    /// Composition order is fixed:
    /// `T(position) * Rz * Ry * Rx * S(scale) * base`.
    pub fn local_matrix(&self) -> Mat4 {
        let translation = Mat4::new_translation(&self.position);
        let rotation = Mat4::rotation_z(utils::deg_to_rad(self.rotation_degrees.z))
            * Mat4::rotation_y(utils::deg_to_rad(self.rotation_degrees.y))
            * Mat4::rotation_x(utils::deg_to_rad(self.rotation_degrees.x));
        let scaling = Mat4::new_nonuniform_scaling(&self.scale);
        translation * rotation * scaling * self.base
    }
}
