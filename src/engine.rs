//! Engine facade and frame pipeline
//!
//! The engine owns the loaded scene, tracks the active camera and viewport,
//! and turns the scene graph into backend calls once per frame. A frame is
//! two passes over a flattened render list: the primary pass binds lights
//! and draws meshes with their own materials, then the shadow pass redraws
//! shadow-casting meshes flattened onto the ground with a black material.

use std::path::Path;

use crate::foundation::math::{Mat4, Vec3, Vec4};
use crate::import::{self, ImportError};
use crate::render::{build_render_list, LightUniforms, RenderBackend, RenderItem};
use crate::scene::{Light, LightKind, Material, NodeKey, NodeKind, SceneGraph};

/// Vertical squash factor of the planar shadow pass
const SHADOW_FLATTEN_Y: f32 = 0.05;

/// Cutoff marking a light as omnidirectional
const OMNI_CUTOFF_DEGREES: f32 = 180.0;

/// Top-level engine state
pub struct Engine {
    scene: Option<SceneGraph>,
    active_camera: Option<NodeKey>,
    viewport: (u32, u32),
    shadow_material: Material,
}

impl Engine {
    /// Create an engine with no scene loaded
    pub fn new() -> Self {
        Self {
            scene: None,
            active_camera: None,
            viewport: (0, 0),
            shadow_material: Material::shadow(),
        }
    }

    /// Set the output viewport size in pixels.
    ///
    /// The size is pushed into the active camera at the start of every frame.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    /// Load a scene from an OVO file, replacing any current scene
    pub fn load_scene(&mut self, path: impl AsRef<Path>) -> Result<(), ImportError> {
        let graph = import::from_file(path)?;
        self.set_scene(graph);
        Ok(())
    }

    /// Install a scene, replacing any current one.
    ///
    /// The active camera is cleared; the new scene's cameras are unknown
    /// until one is activated.
    pub fn set_scene(&mut self, scene: SceneGraph) {
        self.scene = Some(scene);
        self.active_camera = None;
    }

    /// The current scene, if one is loaded
    pub fn scene(&self) -> Option<&SceneGraph> {
        self.scene.as_ref()
    }

    /// The current scene, mutably
    pub fn scene_mut(&mut self) -> Option<&mut SceneGraph> {
        self.scene.as_mut()
    }

    /// Key of the active camera node, if any
    pub fn active_camera(&self) -> Option<NodeKey> {
        self.active_camera
    }

    /// Find a node in the current scene by name
    pub fn find_by_name(&self, name: &str) -> Option<NodeKey> {
        self.scene.as_ref()?.find_by_name(name)
    }

    /// Make `key` the active camera.
    ///
    /// Deactivates the previous camera, marks the new one active, and hands
    /// it the current viewport. Returns false (and changes nothing) if `key`
    /// is not a camera node of the current scene.
    pub fn set_active_camera(&mut self, key: NodeKey) -> bool {
        let Some(scene) = self.scene.as_mut() else {
            log::warn!("cannot activate camera, no scene loaded");
            return false;
        };
        let is_camera = scene
            .node(key)
            .is_some_and(|node| node.as_camera().is_some());
        if !is_camera {
            log::warn!("cannot activate camera, node is not a camera");
            return false;
        }
        if let Some(previous) = self.active_camera.take() {
            if let Some(node) = scene.node_mut(previous) {
                if let NodeKind::Camera(camera) = &mut node.kind {
                    camera.active = false;
                }
            }
        }
        if let Some(node) = scene.node_mut(key) {
            if let NodeKind::Camera(camera) = &mut node.kind {
                camera.active = true;
                camera.viewport = self.viewport;
            }
        }
        self.active_camera = Some(key);
        true
    }

    /// Render one frame through the given backend.
    ///
    /// Without a scene and an active camera this is a logged no-op; nothing
    /// reaches the backend.
    pub fn render(&mut self, backend: &mut dyn RenderBackend) {
        let Some(scene) = self.scene.as_mut() else {
            log::debug!("render skipped, no scene loaded");
            return;
        };
        let Some(camera_key) = self.active_camera else {
            log::debug!("render skipped, no active camera");
            return;
        };

        // Viewport may have changed since activation.
        if let Some(node) = scene.node_mut(camera_key) {
            if let NodeKind::Camera(camera) = &mut node.kind {
                camera.viewport = self.viewport;
            }
        }

        backend.disable_all_lights();

        let items = build_render_list(scene, scene.root(), &Mat4::identity());
        if !items.iter().any(|item| item.node == camera_key) {
            log::warn!("active camera not reachable from the scene root");
            return;
        }
        let camera_node = match scene.node(camera_key) {
            Some(node) => node,
            None => return,
        };
        let Some(camera) = camera_node.as_camera() else {
            log::warn!("active camera node is not a camera");
            return;
        };
        backend.set_projection(&camera.projection_matrix());
        let view = camera_node
            .local_matrix()
            .try_inverse()
            .unwrap_or_else(Mat4::identity);

        // Everything except cameras participates in the passes, lights
        // first so their slots are bound before any mesh is shaded.
        let mut drawables: Vec<&RenderItem> = items
            .iter()
            .filter(|item| {
                scene
                    .node(item.node)
                    .is_some_and(|node| node.as_camera().is_none())
            })
            .collect();
        drawables.sort_by_key(|item| {
            scene.node(item.node).map(|node| node.priority).unwrap_or(0)
        });

        let max_slots = backend.max_light_slots();
        for item in &drawables {
            let Some(node) = scene.node(item.node) else {
                continue;
            };
            let model_view = view * item.world;
            match &node.kind {
                NodeKind::Light(light) => {
                    let slot = if max_slots > 0 { light.light_id % max_slots } else { 0 };
                    backend.set_light(slot, &light_uniforms(light, &model_view));
                }
                NodeKind::Mesh(mesh) => {
                    backend.set_model_view(&model_view);
                    let material = scene
                        .material(mesh.material)
                        .or_else(|| scene.material(scene.default_material()));
                    if let Some(material) = material {
                        backend.bind_material(material);
                    }
                    backend.draw_triangles(&mesh.geometry);
                }
                NodeKind::Group | NodeKind::Camera(_) => {}
            }
        }

        // Shadow pass: shadow casters are redrawn squashed onto the ground
        // plane with the black shadow material. Scene materials are read
        // only; the shadow material is handed to the backend directly.
        backend.begin_shadow_pass();
        let flatten = Mat4::new_nonuniform_scaling(&Vec3::new(1.0, SHADOW_FLATTEN_Y, 1.0));
        for item in &drawables {
            let Some(node) = scene.node(item.node) else {
                continue;
            };
            if let NodeKind::Mesh(mesh) = &node.kind {
                if !mesh.cast_shadows {
                    continue;
                }
                backend.set_model_view(&(view * (flatten * item.world)));
                backend.bind_material(&self.shadow_material);
                backend.draw_triangles(&mesh.geometry);
            }
        }
        backend.end_shadow_pass();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve a light's backend uniforms from its eye-space model-view matrix
fn light_uniforms(light: &Light, model_view: &Mat4) -> LightUniforms {
    let mut uniforms = LightUniforms {
        position: model_view * Vec4::new(0.0, 0.0, 0.0, 1.0),
        ambient: light.ambient,
        diffuse: light.diffuse,
        specular: light.specular,
        cutoff_degrees: OMNI_CUTOFF_DEGREES,
        spot_direction: Vec3::zeros(),
        spot_exponent: 0.0,
        linear_attenuation: 0.0,
    };
    match &light.kind {
        LightKind::Point { radius } => {
            uniforms.linear_attenuation = 1.0 / radius;
        }
        LightKind::Directional { direction } => {
            uniforms.position =
                model_view * Vec4::new(direction.x, direction.y, direction.z, 0.0);
        }
        LightKind::Spot {
            direction,
            cutoff_degrees,
            exponent,
            radius,
        } => {
            let d = model_view * Vec4::new(direction.x, direction.y, direction.z, 0.0);
            uniforms.spot_direction = Vec3::new(d.x, d.y, d.z);
            uniforms.cutoff_degrees = *cutoff_degrees;
            uniforms.spot_exponent = *exponent;
            uniforms.linear_attenuation = 1.0 / radius;
        }
    }
    uniforms
}
