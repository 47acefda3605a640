//! Scene node: identity, transform, and renderable variant

use crate::scene::camera::Camera;
use crate::scene::graph::{NodeKey, ObjectId};
use crate::scene::light::Light;
use crate::scene::mesh::Mesh;
use crate::scene::transform::NodeTransform;
use crate::foundation::math::Mat4;

/// Render priority of cameras; processed ahead of everything else
pub(crate) const CAMERA_PRIORITY: i32 = 200;

/// Render priority of lights; they must claim their hardware slots
/// before any mesh in the same frame is drawn
pub(crate) const LIGHT_PRIORITY: i32 = -100;

/// Closed set of renderable node variants
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Pure transform node with no renderable payload
    Group,

    /// Triangle mesh
    Mesh(Mesh),

    /// Camera
    Camera(Camera),

    /// Light source
    Light(Light),
}

impl NodeKind {
    fn default_priority(&self) -> i32 {
        match self {
            NodeKind::Camera(_) => CAMERA_PRIORITY,
            NodeKind::Light(_) => LIGHT_PRIORITY,
            NodeKind::Group | NodeKind::Mesh(_) => 0,
        }
    }
}

/// A scene graph entity.
///
/// Nodes are stored in the [`SceneGraph`](crate::scene::SceneGraph) arena and
/// own their children as an ordered list of keys; the ordering affects render
/// list flattening but not correctness.
#[derive(Debug, Clone)]
pub struct Node {
    /// Process-unique id, assigned at creation and never reused
    pub id: ObjectId,

    /// Human readable name; defaults to `"[<id>]"`
    pub name: String,

    /// Render order tie-break; lower values render earlier
    pub priority: i32,

    /// Local transform
    pub transform: NodeTransform,

    /// Renderable variant
    pub kind: NodeKind,

    pub(crate) children: Vec<NodeKey>,
}

impl Node {
    pub(crate) fn new(id: ObjectId, kind: NodeKind) -> Self {
        Self {
            id,
            name: format!("[{id}]"),
            priority: kind.default_priority(),
            transform: NodeTransform::identity(),
            kind,
            children: Vec::new(),
        }
    }

    /// Keys of this node's children, in insertion order
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    /// Local transformation matrix
    pub fn local_matrix(&self) -> Mat4 {
        self.transform.local_matrix()
    }

    /// The mesh payload, if this node is a mesh
    pub fn as_mesh(&self) -> Option<&Mesh> {
        match &self.kind {
            NodeKind::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    /// The camera payload, if this node is a camera
    pub fn as_camera(&self) -> Option<&Camera> {
        match &self.kind {
            NodeKind::Camera(camera) => Some(camera),
            _ => None,
        }
    }

    /// The light payload, if this node is a light
    pub fn as_light(&self) -> Option<&Light> {
        match &self.kind {
            NodeKind::Light(light) => Some(light),
            _ => None,
        }
    }
}
