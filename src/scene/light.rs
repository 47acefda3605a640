//! Light source nodes

use crate::foundation::math::Vec3;

/// Light variant specific parameters
#[derive(Debug, Clone, PartialEq)]
pub enum LightKind {
    /// Omnidirectional light with inverse-linear attenuation
    Point {
        /// Distance at which the light has fallen off
        radius: f32,
    },

    /// Infinitely distant light shining along a direction
    Directional {
        /// Light direction
        direction: Vec3,
    },

    /// Cone light
    Spot {
        /// Light direction
        direction: Vec3,
        /// Maximum spread angle in degrees
        cutoff_degrees: f32,
        /// Intensity falloff from cone center to edge
        exponent: f32,
        /// Distance at which the light has fallen off
        radius: f32,
    },
}

/// A light source node.
///
/// Each light carries a `light_id` assigned once at creation from the scene
/// graph's allocator; active lights compete for hardware slots via
/// `light_id % max_light_slots`.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    /// Ambient color contribution
    pub ambient: Vec3,

    /// Diffuse color contribution
    pub diffuse: Vec3,

    /// Specular color contribution
    pub specular: Vec3,

    /// Process-unique light index, never reused
    pub light_id: u32,

    /// Variant specific parameters
    pub kind: LightKind,
}

impl Light {
    /// Create a light with white diffuse/specular and no ambient term
    pub fn new(light_id: u32, kind: LightKind) -> Self {
        Self {
            ambient: Vec3::zeros(),
            diffuse: Vec3::new(1.0, 1.0, 1.0),
            specular: Vec3::new(1.0, 1.0, 1.0),
            light_id,
            kind,
        }
    }

    /// Default point light (radius 1)
    pub fn point(light_id: u32) -> Self {
        Self::new(light_id, LightKind::Point { radius: 1.0 })
    }

    /// Default directional light shining along +Y
    pub fn directional(light_id: u32) -> Self {
        Self::new(
            light_id,
            LightKind::Directional {
                direction: Vec3::new(0.0, 1.0, 0.0),
            },
        )
    }

    /// Default spot light (cutoff 45 degrees, exponent 8, radius 1)
    pub fn spot(light_id: u32) -> Self {
        Self::new(
            light_id,
            LightKind::Spot {
                direction: Vec3::new(0.0, 1.0, 0.0),
                cutoff_degrees: 45.0,
                exponent: 8.0,
                radius: 1.0,
            },
        )
    }
}
