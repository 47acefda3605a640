//! Scene graph data model
//!
//! A retained scene description: a strict tree of transform-carrying nodes
//! stored in an arena, plus a shared material arena. Renderable behavior is a
//! closed set of node kinds (group, mesh, camera, light) dispatched by `match`
//! rather than virtual calls; cross references between nodes and materials are
//! slotmap keys, so sharing needs no reference counting.

mod camera;
mod graph;
mod light;
mod material;
mod mesh;
mod node;
mod transform;

pub use camera::{Camera, Projection, MIN_ORTHO_ZOOM};
pub use graph::{IdAllocator, MaterialKey, NodeKey, ObjectId, SceneGraph};
pub use light::{Light, LightKind};
pub use material::{Material, Texture};
pub use mesh::{Geometry, Mesh};
pub use node::{Node, NodeKind};
pub use transform::NodeTransform;
