//! Per-frame render list
//!
//! Every frame the scene graph is flattened into a linear list of
//! (node, world matrix) pairs. World matrices are accumulated during the
//! walk, so the list is self-contained; the pipeline never re-traverses
//! the tree while drawing.

use crate::foundation::math::Mat4;
use crate::scene::{NodeKey, SceneGraph};

/// One flattened entry of the frame's render list
#[derive(Debug, Clone)]
pub struct RenderItem {
    /// Key of the node in the scene graph
    pub node: NodeKey,

    /// Accumulated world transform (parent world times local)
    pub world: Mat4,
}

/// Flatten the subtree rooted at `root` into a render list.
///
/// Traversal is depth-first with children in insertion order, so a parent
/// always precedes its children in the list. Each item's world matrix is the
/// accumulated product of its ancestors' local matrices and its own.
pub fn build_render_list(graph: &SceneGraph, root: NodeKey, parent_world: &Mat4) -> Vec<RenderItem> {
    let mut items = Vec::with_capacity(graph.node_count());
    append_subtree(graph, root, parent_world, &mut items);
    items
}

fn append_subtree(
    graph: &SceneGraph,
    key: NodeKey,
    parent_world: &Mat4,
    items: &mut Vec<RenderItem>,
) {
    let Some(node) = graph.node(key) else {
        return;
    };
    let world = parent_world * node.local_matrix();
    items.push(RenderItem { node: key, world });
    for &child in node.children() {
        append_subtree(graph, child, &world, items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Vec3, Vec4};
    use approx::assert_relative_eq;

    #[test]
    fn test_list_length_matches_subtree_size() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let branch = graph.create_group(root);
        graph.create_mesh(branch);
        graph.create_mesh(branch);
        graph.create_light(root, crate::scene::LightKind::Point { radius: 1.0 });

        let items = build_render_list(&graph, root, &Mat4::identity());
        assert_eq!(items.len(), graph.node_count());
    }

    #[test]
    fn test_parents_precede_children() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let parent = graph.create_group(root);
        let child = graph.create_mesh(parent);

        let items = build_render_list(&graph, root, &Mat4::identity());
        let index_of = |key| items.iter().position(|item| item.node == key).unwrap();
        assert!(index_of(root) < index_of(parent));
        assert!(index_of(parent) < index_of(child));
    }

    #[test]
    fn test_world_matrices_accumulate_down_the_tree() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let parent = graph.create_group(root);
        let child = graph.create_group(parent);
        graph.node_mut(parent).unwrap().transform.position = Vec3::new(1.0, 0.0, 0.0);
        graph.node_mut(child).unwrap().transform.position = Vec3::new(0.0, 2.0, 0.0);

        let items = build_render_list(&graph, root, &Mat4::identity());
        let child_item = items.iter().find(|item| item.node == child).unwrap();
        let p = child_item.world * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(p.x, 1.0);
        assert_relative_eq!(p.y, 2.0);
    }

    #[test]
    fn test_parent_world_prefix_is_applied() {
        let mut graph = SceneGraph::new();
        let root = graph.root();
        let offset = Mat4::new_translation(&Vec3::new(0.0, 0.0, 5.0));
        let items = build_render_list(&graph, root, &offset);
        let p = items[0].world * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(p.z, 5.0);
    }
}
