//! # OVO Engine
//!
//! A compact retained-mode 3D rendering engine: load a binary OVO scene
//! file into a scene graph, pick a camera, and render frames through a
//! pluggable graphics backend with per-frame light slot assignment and a
//! planar shadow pass.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ovo_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     ovo_engine::foundation::logging::init();
//!     let mut engine = Engine::new();
//!     engine.set_viewport(1280, 720);
//!     engine.load_scene("scenes/room.ovo")?;
//!     let camera = engine.find_by_name("MainCamera").ok_or("no camera")?;
//!     engine.set_active_camera(camera);
//!     let mut backend = NullBackend;
//!     engine.render(&mut backend);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod foundation;
pub mod import;
pub mod render;
pub mod scene;

mod engine;

pub use config::{ConfigError, EngineConfig};
pub use engine::Engine;
pub use import::ImportError;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::EngineConfig,
        engine::Engine,
        foundation::math::{Mat4, Vec2, Vec3, Vec4},
        import::ImportError,
        render::{LightUniforms, NullBackend, RenderBackend},
        scene::{
            Camera, Light, LightKind, Material, Mesh, Node, NodeKey, NodeKind, Projection,
            SceneGraph, Texture,
        },
    };
}
