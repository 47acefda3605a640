//! Camera nodes and projection setup

use crate::foundation::math::{utils, Mat4, Mat4Ext};

/// Minimum orthographic zoom, below which the projection degenerates
pub const MIN_ORTHO_ZOOM: f32 = 0.1;

/// Projection variant of a camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Field-of-view driven perspective projection
    Perspective,

    /// Zoom driven orthographic projection
    Orthographic {
        /// World-space extent of the larger viewport axis
        zoom: f32,
    },
}

/// Point of view from which the scene is rendered.
///
/// The viewport is injected by the engine each frame; only the active camera
/// contributes a projection matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Vertical field of view in degrees (perspective only)
    pub fov_degrees: f32,

    /// Near clipping distance
    pub near: f32,

    /// Far clipping distance
    pub far: f32,

    /// Viewport size in pixels, set by the engine per frame
    pub viewport: (u32, u32),

    /// Whether this camera currently drives rendering
    pub active: bool,

    /// Projection variant
    pub projection: Projection,
}

impl Camera {
    /// Create a perspective camera with default parameters
    /// (90 degree fov, clipping 0.01 to 1000)
    pub fn perspective() -> Self {
        Self {
            fov_degrees: 90.0,
            near: 0.01,
            far: 1000.0,
            viewport: (0, 0),
            active: false,
            projection: Projection::Perspective,
        }
    }

    /// Create an orthographic camera with the given zoom
    pub fn orthographic(zoom: f32) -> Self {
        Self {
            projection: Projection::Orthographic {
                zoom: zoom.max(MIN_ORTHO_ZOOM),
            },
            ..Self::perspective()
        }
    }

    /// Set the orthographic zoom, clamped to [`MIN_ORTHO_ZOOM`].
    /// No effect on perspective cameras.
    pub fn set_zoom(&mut self, zoom: f32) {
        if let Projection::Orthographic { zoom: z } = &mut self.projection {
            *z = zoom.max(MIN_ORTHO_ZOOM);
        }
    }

    /// Compute the projection matrix for the current viewport.
    ///
    /// Returns identity for a degenerate (zero-sized) viewport.
    pub fn projection_matrix(&self) -> Mat4 {
        let (width, height) = self.viewport;
        if width == 0 || height == 0 {
            return Mat4::identity();
        }
        let width = width as f32;
        let height = height as f32;
        match self.projection {
            Projection::Perspective => {
                let aspect = width / height;
                Mat4::perspective(utils::deg_to_rad(self.fov_degrees), aspect, self.near, self.far)
            }
            Projection::Orthographic { zoom } => {
                let max = width.max(height);
                let w = (width / max) * zoom;
                let h = (height / max) * zoom;
                Mat4::orthographic(-w / 2.0, w / 2.0, -h / 2.0, h / 2.0, self.near, self.far)
            }
        }
    }
}
