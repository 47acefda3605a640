//! Arena-backed scene graph
//!
//! Nodes and materials live in slotmap arenas keyed by generational indices;
//! tree structure and material sharing are expressed as keys rather than
//! owning pointers. Dropping the graph drops every entity it owns.

use slotmap::{new_key_type, SlotMap};

use crate::scene::camera::{Camera, Projection};
use crate::scene::light::{Light, LightKind};
use crate::scene::material::Material;
use crate::scene::mesh::Mesh;
use crate::scene::node::{Node, NodeKind};

new_key_type! {
    /// Stable key of a node in the scene graph
    pub struct NodeKey;

    /// Stable key of a material in the scene graph
    pub struct MaterialKey;
}

/// Process-unique object id
pub type ObjectId = u32;

/// Allocator for object and light ids.
///
/// Owned by the graph instead of living in global statics so tests get
/// deterministic ids. Counters are monotonic and never reset.
#[derive(Debug, Default, Clone)]
pub struct IdAllocator {
    next_object: ObjectId,
    next_light: u32,
}

impl IdAllocator {
    /// Allocate the next object id
    pub fn next_object_id(&mut self) -> ObjectId {
        let id = self.next_object;
        self.next_object += 1;
        id
    }

    /// Allocate the next light id
    pub fn next_light_id(&mut self) -> u32 {
        let id = self.next_light;
        self.next_light += 1;
        id
    }
}

/// The scene: a strict tree of nodes plus a material arena.
///
/// Invariants: every node is reachable from the root exactly once (no shared
/// children, no cycles); children keep insertion order; every mesh's material
/// key is valid for the lifetime of the graph.
#[derive(Debug)]
pub struct SceneGraph {
    nodes: SlotMap<NodeKey, Node>,
    materials: SlotMap<MaterialKey, Material>,
    root: NodeKey,
    default_material: MaterialKey,
    ids: IdAllocator,
}

impl SceneGraph {
    /// Create a graph containing only the synthetic root group node
    /// and the default material
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let mut materials = SlotMap::with_key();
        let mut ids = IdAllocator::default();
        let default_material = materials.insert(Material::default());
        let mut root_node = Node::new(ids.next_object_id(), NodeKind::Group);
        root_node.name = "Scene Root".to_string();
        let root = nodes.insert(root_node);
        Self {
            nodes,
            materials,
            root,
            default_material,
            ids,
        }
    }

    /// Key of the synthetic root node
    pub fn root(&self) -> NodeKey {
        self.root
    }

    /// Key of the default material every mesh starts out with
    pub fn default_material(&self) -> MaterialKey {
        self.default_material
    }

    /// Total number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Look up a node by key
    pub fn node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// Look up a node mutably by key
    pub fn node_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    /// Look up a material by key
    pub fn material(&self, key: MaterialKey) -> Option<&Material> {
        self.materials.get(key)
    }

    /// Look up a material mutably by key
    pub fn material_mut(&mut self, key: MaterialKey) -> Option<&mut Material> {
        self.materials.get_mut(key)
    }

    /// Add a material to the arena
    pub fn add_material(&mut self, material: Material) -> MaterialKey {
        self.materials.insert(material)
    }

    /// Iterate over all materials in the arena
    pub fn materials(&self) -> impl Iterator<Item = (MaterialKey, &Material)> {
        self.materials.iter()
    }

    /// Create a group node under `parent`
    pub fn create_group(&mut self, parent: NodeKey) -> NodeKey {
        self.create_node(parent, NodeKind::Group)
    }

    /// Create an empty mesh node under `parent`, using the default material
    pub fn create_mesh(&mut self, parent: NodeKey) -> NodeKey {
        let mesh = Mesh::new(self.default_material);
        self.create_node(parent, NodeKind::Mesh(mesh))
    }

    /// Create a camera node under `parent`
    pub fn create_camera(&mut self, parent: NodeKey, projection: Projection) -> NodeKey {
        let camera = match projection {
            Projection::Perspective => Camera::perspective(),
            Projection::Orthographic { zoom } => Camera::orthographic(zoom),
        };
        self.create_node(parent, NodeKind::Camera(camera))
    }

    /// Create a light node under `parent`, allocating its light id
    pub fn create_light(&mut self, parent: NodeKey, kind: LightKind) -> NodeKey {
        let light = Light::new(self.ids.next_light_id(), kind);
        self.create_node(parent, NodeKind::Light(light))
    }

    fn create_node(&mut self, parent: NodeKey, kind: NodeKind) -> NodeKey {
        let node = Node::new(self.ids.next_object_id(), kind);
        let key = self.nodes.insert(node);
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(key);
        } else {
            log::warn!("attach to unknown parent node, re-parenting under root");
            let root = self.root;
            if let Some(root_node) = self.nodes.get_mut(root) {
                root_node.children.push(key);
            }
        }
        key
    }

    /// Depth-first search for the first node with the given name,
    /// root included
    pub fn find_by_name(&self, name: &str) -> Option<NodeKey> {
        self.find_in_subtree(self.root, name)
    }

    fn find_in_subtree(&self, key: NodeKey, name: &str) -> Option<NodeKey> {
        let node = self.nodes.get(key)?;
        if node.name == name {
            return Some(key);
        }
        for &child in &node.children {
            if let Some(found) = self.find_in_subtree(child, name) {
                return Some(found);
            }
        }
        None
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}
