//! Graphics backend abstraction
//!
//! The engine drives a frame through this trait instead of talking to a
//! graphics API directly. Matrices arrive fully composed (projection and
//! model-view), lights arrive as resolved eye-space uniforms, and the
//! shadow pass is bracketed explicitly so the backend can flip blend and
//! depth state once per frame.

use crate::foundation::math::{Mat4, Vec3, Vec4};
use crate::scene::{Geometry, Material};

/// Resolved uniforms of one light, in eye space.
///
/// `position.w` distinguishes positional lights (1) from directional
/// lights (0); a `cutoff_degrees` of 180 marks an omnidirectional light.
#[derive(Debug, Clone, PartialEq)]
pub struct LightUniforms {
    /// Eye-space position or direction
    pub position: Vec4,

    /// Ambient color contribution
    pub ambient: Vec3,

    /// Diffuse color contribution
    pub diffuse: Vec3,

    /// Specular color contribution
    pub specular: Vec3,

    /// Cone spread in degrees; 180 for non-spot lights
    pub cutoff_degrees: f32,

    /// Eye-space cone direction; only meaningful for spot lights
    pub spot_direction: Vec3,

    /// Falloff from cone center to edge; only meaningful for spot lights
    pub spot_exponent: f32,

    /// Linear attenuation factor
    pub linear_attenuation: f32,
}

/// Frame-drawing interface implemented per graphics API
pub trait RenderBackend {
    /// Number of hardware light slots available
    fn max_light_slots(&self) -> u32;

    /// Set the projection matrix for the frame
    fn set_projection(&mut self, projection: &Mat4);

    /// Set the model-view matrix for subsequent draws
    fn set_model_view(&mut self, model_view: &Mat4);

    /// Turn every light slot off
    fn disable_all_lights(&mut self);

    /// Enable one light slot with the given uniforms
    fn set_light(&mut self, slot: u32, light: &LightUniforms);

    /// Bind the material for subsequent draws
    fn bind_material(&mut self, material: &Material);

    /// Draw the given triangle buffers with the current state
    fn draw_triangles(&mut self, geometry: &Geometry);

    /// Enter shadow rendering state: blending on, depth writes off,
    /// depth test less-or-equal
    fn begin_shadow_pass(&mut self);

    /// Restore the primary rendering state
    fn end_shadow_pass(&mut self);
}

/// Backend that accepts every call and draws nothing.
///
/// Useful for headless runs and as a stand-in while a real backend is
/// unavailable.
#[derive(Debug, Default)]
pub struct NullBackend;

impl RenderBackend for NullBackend {
    fn max_light_slots(&self) -> u32 {
        8
    }

    fn set_projection(&mut self, _projection: &Mat4) {}

    fn set_model_view(&mut self, _model_view: &Mat4) {}

    fn disable_all_lights(&mut self) {}

    fn set_light(&mut self, _slot: u32, _light: &LightUniforms) {}

    fn bind_material(&mut self, _material: &Material) {}

    fn draw_triangles(&mut self, _geometry: &Geometry) {}

    fn begin_shadow_pass(&mut self) {}

    fn end_shadow_pass(&mut self) {}
}
