//! Frame rendering support
//!
//! [`list`] flattens the scene graph into a per-frame list of world-space
//! render items; [`backend`] abstracts the graphics API the engine drives
//! with those items.

pub mod backend;
pub mod list;

pub use backend::{LightUniforms, NullBackend, RenderBackend};
pub use list::{build_render_list, RenderItem};
