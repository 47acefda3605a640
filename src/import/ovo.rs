//! OVO binary scene importer
//!
//! An OVO file is a flat sequence of `{type: u32, size: u32, payload}` chunks.
//! Node, light, and mesh chunks each declare how many children follow them in
//! the stream; the importer keeps a stack of (open node, remaining children)
//! frames to rebuild arbitrarily deep trees from the flat stream. Material
//! chunks bypass the stack and populate a name-keyed library consulted by
//! later mesh chunks.
//!
//! Error policy: a file that cannot be read or a truncated/malformed payload
//! fails the whole import; no partial scene is returned. Unknown chunk types,
//! unresolved material names, extra LODs, and unknown light subtypes are
//! warnings with defined fallbacks.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::foundation::math::{Mat4, Vec3};
use crate::import::chunk::{unpack_half2x16, unpack_snorm3x10, ChunkReader};
use crate::scene::{Geometry, LightKind, Material, MaterialKey, NodeKey, SceneGraph, Texture};

/// Chunk type: format version marker
const CHUNK_VERSION: u32 = 0;
/// Chunk type: generic transform node
const CHUNK_NODE: u32 = 1;
/// Chunk type: material definition
const CHUNK_MATERIAL: u32 = 9;
/// Chunk type: light source
const CHUNK_LIGHT: u32 = 16;
/// Chunk type: triangle mesh
const CHUNK_MESH: u32 = 18;

/// Material name meaning "no material/texture assigned"
const NO_RESOURCE: &str = "[none]";

/// Raw point-light radii are stored in millimeters
const POINT_RADIUS_SCALE: f32 = 1000.0;

/// Errors raised while importing a scene file
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A chunk payload ended before a field could be read
    #[error("truncated payload at offset {offset}: wanted {wanted} bytes, {available} available")]
    Truncated {
        /// Byte offset within the payload
        offset: usize,
        /// Bytes the field required
        wanted: usize,
        /// Bytes actually left
        available: usize,
    },

    /// A string field had no NUL terminator inside the payload
    #[error("unterminated string at offset {offset}")]
    UnterminatedString {
        /// Byte offset within the payload
        offset: usize,
    },

    /// A chunk arrived after every declared child slot was consumed
    #[error("corrupt hierarchy: more children in stream than declared")]
    HierarchyUnderflow,

    /// The stream ended while nodes still expected children
    #[error("corrupt hierarchy: stream ended with {open} unclosed node(s)")]
    OpenHierarchy {
        /// Number of frames still expecting children
        open: usize,
    },
}

/// Import a scene graph from an OVO file on disk
pub fn from_file(path: impl AsRef<Path>) -> Result<SceneGraph, ImportError> {
    let path = path.as_ref();
    log::debug!("loading scene file '{}'", path.display());
    let bytes = fs::read(path).map_err(|source| {
        log::error!("failed to read scene file '{}': {}", path.display(), source);
        ImportError::Io(source)
    })?;
    let graph = from_bytes(&bytes)?;
    log::debug!(
        "scene file '{}' loaded, {} node(s)",
        path.display(),
        graph.node_count()
    );
    Ok(graph)
}

/// Import a scene graph from an in-memory OVO chunk stream
pub fn from_bytes(data: &[u8]) -> Result<SceneGraph, ImportError> {
    let mut graph = SceneGraph::new();
    let mut library: HashMap<String, MaterialKey> = HashMap::new();
    // (open node, remaining declared children); seeded so the first
    // top-level entity attaches under the synthetic root.
    let mut stack: Vec<(NodeKey, u32)> = vec![(graph.root(), 1)];
    let mut stream = ChunkReader::new(data);

    while stream.remaining() > 0 {
        let chunk_type = stream.read_u32()?;
        let size = stream.read_u32()? as usize;
        let payload = stream.read_bytes(size)?;

        match chunk_type {
            CHUNK_VERSION => {
                let version = ChunkReader::new(payload).read_u32()?;
                log::debug!("OVO version {version}");
            }
            CHUNK_NODE => {
                let chunk = parse_node(payload)?;
                let parent = consume_child_slot(&mut stack)?;
                let key = graph.create_group(parent);
                if let Some(node) = graph.node_mut(key) {
                    node.name = chunk.name;
                    node.transform.base = chunk.base;
                }
                stack.push((key, chunk.child_count));
            }
            CHUNK_MATERIAL => {
                let (name, material) = parse_material(payload)?;
                log::debug!("parsed material '{name}'");
                let key = graph.add_material(material);
                library.insert(name, key);
            }
            CHUNK_LIGHT => {
                let chunk = parse_light(payload)?;
                let parent = consume_child_slot(&mut stack)?;
                let key = graph.create_light(parent, chunk.kind);
                if let Some(node) = graph.node_mut(key) {
                    node.name = chunk.name;
                    node.transform.base = chunk.base;
                    if let crate::scene::NodeKind::Light(light) = &mut node.kind {
                        light.diffuse = chunk.color;
                        light.specular = chunk.color;
                    }
                }
                stack.push((key, chunk.child_count));
            }
            CHUNK_MESH => {
                let chunk = parse_mesh(payload, &library)?;
                let parent = consume_child_slot(&mut stack)?;
                let key = graph.create_mesh(parent);
                if let Some(node) = graph.node_mut(key) {
                    node.name = chunk.name;
                    node.transform.base = chunk.base;
                    if let crate::scene::NodeKind::Mesh(mesh) = &mut node.kind {
                        mesh.geometry = chunk.geometry;
                        if let Some(material) = chunk.material {
                            mesh.material = material;
                        }
                    }
                }
                stack.push((key, chunk.child_count));
            }
            other => {
                log::warn!("unsupported OVO chunk type {other}, skipping");
            }
        }

        // Close subtrees as soon as all their declared children have arrived.
        while stack.last().is_some_and(|&(_, remaining)| remaining == 0) {
            stack.pop();
        }
    }

    // Satisfied frames below an open one may survive the eager pop; only
    // frames still expecting children count as unclosed.
    let open = stack
        .iter()
        .filter(|&&(_, remaining)| remaining > 0)
        .count();
    if open > 0 {
        return Err(ImportError::OpenHierarchy { open });
    }
    Ok(graph)
}

/// Attach point for the next entity chunk: decrement the top frame's
/// remaining-children counter and return its node.
fn consume_child_slot(stack: &mut [(NodeKey, u32)]) -> Result<NodeKey, ImportError> {
    let frame = stack.last_mut().ok_or(ImportError::HierarchyUnderflow)?;
    if frame.1 == 0 {
        return Err(ImportError::HierarchyUnderflow);
    }
    frame.1 -= 1;
    Ok(frame.0)
}

struct NodeChunk {
    name: String,
    base: Mat4,
    child_count: u32,
}

fn parse_node(payload: &[u8]) -> Result<NodeChunk, ImportError> {
    let mut reader = ChunkReader::new(payload);
    let name = reader.read_cstring()?;
    let base = reader.read_mat4()?;
    let child_count = reader.read_u32()?;
    Ok(NodeChunk {
        name,
        base,
        child_count,
    })
}

fn parse_material(payload: &[u8]) -> Result<(String, Material), ImportError> {
    let mut reader = ChunkReader::new(payload);
    let name = reader.read_cstring()?;
    let emission = reader.read_vec3()?;
    let albedo = reader.read_vec3()?;
    let roughness = reader.read_f32()?;
    // Metallic and transparency scalars are not part of this shading model.
    reader.skip(8)?;
    let texture_name = reader.read_cstring()?;
    // Four auxiliary texture slots, unused.
    for _ in 0..4 {
        reader.read_cstring()?;
    }

    let mut material = Material::new(name.clone());
    material.emission = emission;
    material.ambient = albedo;
    material.diffuse = albedo;
    material.specular = albedo;
    material.shininess = (1.0 - roughness.sqrt()) * 128.0;
    if texture_name != NO_RESOURCE {
        material.texture = Some(Texture::new(texture_name));
    }
    Ok((name, material))
}

struct LightChunk {
    name: String,
    base: Mat4,
    child_count: u32,
    color: Vec3,
    kind: LightKind,
}

fn parse_light(payload: &[u8]) -> Result<LightChunk, ImportError> {
    let mut reader = ChunkReader::new(payload);
    let name = reader.read_cstring()?;
    let base = reader.read_mat4()?;
    let child_count = reader.read_u32()?;
    reader.read_cstring()?;
    let subtype = reader.read_u8()?;
    let color = reader.read_vec3()?;
    let radius = reader.read_f32()?;
    let direction = reader.read_vec3()?;
    let cutoff_degrees = reader.read_f32()?;
    let exponent = reader.read_f32()?;

    let kind = match subtype {
        0 => LightKind::Point {
            radius: radius / POINT_RADIUS_SCALE,
        },
        1 => LightKind::Directional { direction },
        2 => LightKind::Spot {
            direction,
            cutoff_degrees,
            exponent,
            radius,
        },
        other => {
            // The declared child count is kept so the hierarchy stack
            // stays in sync even when the subtype is unrecognized.
            log::warn!("unknown light subtype {other}, defaulting to a point light");
            LightKind::Point { radius: 1.0 }
        }
    };
    Ok(LightChunk {
        name,
        base,
        child_count,
        color,
        kind,
    })
}

struct MeshChunk {
    name: String,
    base: Mat4,
    child_count: u32,
    material: Option<MaterialKey>,
    geometry: Geometry,
}

fn parse_mesh(
    payload: &[u8],
    library: &HashMap<String, MaterialKey>,
) -> Result<MeshChunk, ImportError> {
    let mut reader = ChunkReader::new(payload);
    let name = reader.read_cstring()?;
    let base = reader.read_mat4()?;
    let child_count = reader.read_u32()?;
    // Secondary name and render-flags byte.
    reader.read_cstring()?;
    reader.skip(1)?;

    let material_name = reader.read_cstring()?;
    let material = if material_name == NO_RESOURCE {
        None
    } else if let Some(&key) = library.get(&material_name) {
        Some(key)
    } else {
        log::warn!("material '{material_name}' not found in material library");
        None
    };

    // Bounding sphere radius and box min/max.
    reader.skip(4 + 12 + 12)?;
    skip_physics_blob(&mut reader)?;

    let lod_count = reader.read_u32()?;
    if lod_count > 1 {
        log::warn!("mesh LODs not supported, only first LOD will be used out of {lod_count}");
    }
    let geometry = if lod_count > 0 {
        parse_lod(&mut reader)?
    } else {
        Geometry::default()
    };

    Ok(MeshChunk {
        name,
        base,
        child_count,
        material,
        geometry,
    })
}

/// Consume the optional convex-hull physics blob without materializing it
fn skip_physics_blob(reader: &mut ChunkReader<'_>) -> Result<(), ImportError> {
    let has_physics = reader.read_u8()?;
    if has_physics == 0 {
        return Ok(());
    }
    reader.skip(40)?;
    let hull_count = reader.read_u32()?;
    reader.skip(20)?;
    for _ in 0..hull_count {
        let vertex_count = reader.read_u32()? as usize;
        let face_count = reader.read_u32()? as usize;
        reader.skip(12 + vertex_count * 12 + face_count * 12)?;
    }
    Ok(())
}

fn parse_lod(reader: &mut ChunkReader<'_>) -> Result<Geometry, ImportError> {
    let vertex_count = reader.read_u32()? as usize;
    let face_count = reader.read_u32()? as usize;
    let mut geometry = Geometry {
        positions: Vec::with_capacity(vertex_count),
        normals: Vec::with_capacity(vertex_count),
        uvs: Vec::with_capacity(vertex_count),
        faces: Vec::with_capacity(face_count),
    };
    for _ in 0..vertex_count {
        geometry.positions.push(reader.read_vec3()?);
        geometry.normals.push(unpack_snorm3x10(reader.read_u32()?));
        geometry.uvs.push(unpack_half2x16(reader.read_u32()?));
        // Padding word.
        reader.skip(4)?;
    }
    for _ in 0..face_count {
        let a = reader.read_u32()?;
        let b = reader.read_u32()?;
        let c = reader.read_u32()?;
        geometry.faces.push([a, b, c]);
    }
    Ok(geometry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cstr(text: &str) -> Vec<u8> {
        let mut bytes = text.as_bytes().to_vec();
        bytes.push(0);
        bytes
    }

    fn identity_matrix() -> Vec<u8> {
        let mut bytes = Vec::new();
        for column in 0..4 {
            for row in 0..4 {
                let value: f32 = if row == column { 1.0 } else { 0.0 };
                bytes.extend_from_slice(&value.to_le_bytes());
            }
        }
        bytes
    }

    fn chunk(chunk_type: u32, payload: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&chunk_type.to_le_bytes());
        bytes.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        bytes.extend_from_slice(payload);
        bytes
    }

    fn version_chunk(version: u32) -> Vec<u8> {
        chunk(CHUNK_VERSION, &version.to_le_bytes())
    }

    fn node_chunk(name: &str, child_count: u32) -> Vec<u8> {
        let mut payload = cstr(name);
        payload.extend_from_slice(&identity_matrix());
        payload.extend_from_slice(&child_count.to_le_bytes());
        chunk(CHUNK_NODE, &payload)
    }

    fn light_chunk(
        name: &str,
        child_count: u32,
        subtype: u8,
        color: [f32; 3],
        radius: f32,
        direction: [f32; 3],
        cutoff: f32,
        exponent: f32,
    ) -> Vec<u8> {
        let mut payload = cstr(name);
        payload.extend_from_slice(&identity_matrix());
        payload.extend_from_slice(&child_count.to_le_bytes());
        payload.extend_from_slice(&cstr("unused"));
        payload.push(subtype);
        for c in color {
            payload.extend_from_slice(&c.to_le_bytes());
        }
        payload.extend_from_slice(&radius.to_le_bytes());
        for d in direction {
            payload.extend_from_slice(&d.to_le_bytes());
        }
        payload.extend_from_slice(&cutoff.to_le_bytes());
        payload.extend_from_slice(&exponent.to_le_bytes());
        chunk(CHUNK_LIGHT, &payload)
    }

    fn material_chunk(name: &str, roughness: f32, texture: &str) -> Vec<u8> {
        let mut payload = cstr(name);
        for value in [0.0f32, 0.0, 0.0] {
            payload.extend_from_slice(&value.to_le_bytes());
        }
        for value in [0.5f32, 0.25, 0.125] {
            payload.extend_from_slice(&value.to_le_bytes());
        }
        payload.extend_from_slice(&roughness.to_le_bytes());
        payload.extend_from_slice(&0.0f32.to_le_bytes()); // metallic
        payload.extend_from_slice(&0.0f32.to_le_bytes()); // transparency
        payload.extend_from_slice(&cstr(texture));
        for _ in 0..4 {
            payload.extend_from_slice(&cstr(NO_RESOURCE));
        }
        chunk(CHUNK_MATERIAL, &payload)
    }

    /// One triangle with up-facing normals and uv (0.5, 1.0)
    fn mesh_chunk(name: &str, child_count: u32, material: &str, with_physics: bool) -> Vec<u8> {
        let mut payload = cstr(name);
        payload.extend_from_slice(&identity_matrix());
        payload.extend_from_slice(&child_count.to_le_bytes());
        payload.extend_from_slice(&cstr("unused"));
        payload.push(0); // render flags
        payload.extend_from_slice(&cstr(material));
        payload.extend_from_slice(&[0u8; 4 + 12 + 12]); // bounding volume
        if with_physics {
            payload.push(1);
            payload.extend_from_slice(&[0u8; 40]);
            payload.extend_from_slice(&1u32.to_le_bytes()); // hull count
            payload.extend_from_slice(&[0u8; 20]);
            payload.extend_from_slice(&2u32.to_le_bytes()); // hull vertices
            payload.extend_from_slice(&1u32.to_le_bytes()); // hull faces
            payload.extend_from_slice(&vec![0u8; 12 + 2 * 12 + 12]);
        } else {
            payload.push(0);
        }
        payload.extend_from_slice(&1u32.to_le_bytes()); // LOD count
        payload.extend_from_slice(&lod_block());
        chunk(CHUNK_MESH, &payload)
    }

    fn lod_block() -> Vec<u8> {
        let mut block = Vec::new();
        block.extend_from_slice(&3u32.to_le_bytes()); // vertices
        block.extend_from_slice(&1u32.to_le_bytes()); // faces
        let positions = [[0.0f32, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
        let packed_up_normal = 511u32 << 10;
        let packed_uv = 0x3800u32 | (0x3C00u32 << 16);
        for position in positions {
            for value in position {
                block.extend_from_slice(&value.to_le_bytes());
            }
            block.extend_from_slice(&packed_up_normal.to_le_bytes());
            block.extend_from_slice(&packed_uv.to_le_bytes());
            block.extend_from_slice(&0u32.to_le_bytes()); // padding
        }
        for index in [0u32, 1, 2] {
            block.extend_from_slice(&index.to_le_bytes());
        }
        block
    }

    #[test]
    fn test_three_node_round_trip() {
        let mut data = version_chunk(1);
        data.extend_from_slice(&node_chunk("parent", 2));
        data.extend_from_slice(&node_chunk("left", 0));
        data.extend_from_slice(&node_chunk("right", 0));

        let graph = from_bytes(&data).unwrap();
        // Synthetic root + 3 imported nodes.
        assert_eq!(graph.node_count(), 4);
        let root = graph.node(graph.root()).unwrap();
        assert_eq!(root.children().len(), 1);
        let parent_key = root.children()[0];
        let parent = graph.node(parent_key).unwrap();
        assert_eq!(parent.name, "parent");
        let names: Vec<_> = parent
            .children()
            .iter()
            .map(|&c| graph.node(c).unwrap().name.clone())
            .collect();
        // File order is preserved.
        assert_eq!(names, ["left", "right"]);
    }

    #[test]
    fn test_unknown_chunk_types_are_skipped() {
        let mut data = chunk(99, &[1, 2, 3, 4]);
        data.extend_from_slice(&node_chunk("only", 0));
        let graph = from_bytes(&data).unwrap();
        assert!(graph.find_by_name("only").is_some());
    }

    #[test]
    fn test_point_light_radius_unit_conversion() {
        let mut data = node_chunk("root", 1);
        data.extend_from_slice(&light_chunk(
            "lamp",
            0,
            0,
            [1.0, 0.5, 0.25],
            2000.0,
            [0.0, 0.0, 0.0],
            0.0,
            0.0,
        ));
        let graph = from_bytes(&data).unwrap();
        let key = graph.find_by_name("lamp").unwrap();
        let light = graph.node(key).unwrap().as_light().unwrap();
        assert_eq!(light.diffuse, Vec3::new(1.0, 0.5, 0.25));
        assert_eq!(light.specular, Vec3::new(1.0, 0.5, 0.25));
        match light.kind {
            LightKind::Point { radius } => assert_relative_eq!(radius, 2.0),
            ref other => panic!("expected point light, got {other:?}"),
        }
    }

    #[test]
    fn test_spot_light_uses_raw_values() {
        let mut data = node_chunk("root", 1);
        data.extend_from_slice(&light_chunk(
            "spot",
            0,
            2,
            [1.0, 1.0, 1.0],
            3.0,
            [0.0, -1.0, 0.0],
            30.0,
            4.0,
        ));
        let graph = from_bytes(&data).unwrap();
        let key = graph.find_by_name("spot").unwrap();
        let light = graph.node(key).unwrap().as_light().unwrap();
        match light.kind {
            LightKind::Spot {
                direction,
                cutoff_degrees,
                exponent,
                radius,
            } => {
                assert_eq!(direction, Vec3::new(0.0, -1.0, 0.0));
                assert_eq!(cutoff_degrees, 30.0);
                assert_eq!(exponent, 4.0);
                assert_eq!(radius, 3.0);
            }
            ref other => panic!("expected spot light, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_light_subtype_keeps_declared_children() {
        let mut data = node_chunk("root", 1);
        data.extend_from_slice(&light_chunk(
            "weird",
            1,
            7,
            [1.0, 1.0, 1.0],
            5.0,
            [0.0, 0.0, 0.0],
            0.0,
            0.0,
        ));
        data.extend_from_slice(&node_chunk("child", 0));
        let graph = from_bytes(&data).unwrap();
        let key = graph.find_by_name("weird").unwrap();
        let node = graph.node(key).unwrap();
        // Fallback is a default point light, but the child still attaches here.
        assert!(matches!(
            node.as_light().unwrap().kind,
            LightKind::Point { radius } if radius == 1.0
        ));
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn test_material_shininess_derivation() {
        let mut data = material_chunk("smooth", 0.0, NO_RESOURCE);
        data.extend_from_slice(&material_chunk("rough", 1.0, "wood.png"));
        data.extend_from_slice(&node_chunk("root", 0));
        let graph = from_bytes(&data).unwrap();
        let find = |name: &str| {
            graph
                .materials()
                .map(|(_, m)| m)
                .find(|m| m.name == name)
                .unwrap()
                .clone()
        };
        let smooth = find("smooth");
        assert_relative_eq!(smooth.shininess, 128.0);
        assert!(smooth.texture.is_none());
        // Albedo feeds ambient, diffuse, and specular uniformly.
        assert_eq!(smooth.ambient, Vec3::new(0.5, 0.25, 0.125));
        assert_eq!(smooth.diffuse, smooth.ambient);
        assert_eq!(smooth.specular, smooth.ambient);

        let rough = find("rough");
        assert_relative_eq!(rough.shininess, 0.0);
        assert_eq!(rough.texture, Some(Texture::new("wood.png")));
    }

    #[test]
    fn test_mesh_geometry_and_material_resolution() {
        let mut data = material_chunk("painted", 0.25, NO_RESOURCE);
        data.extend_from_slice(&node_chunk("root", 1));
        data.extend_from_slice(&mesh_chunk("tri", 0, "painted", false));
        let graph = from_bytes(&data).unwrap();
        let key = graph.find_by_name("tri").unwrap();
        let mesh = graph.node(key).unwrap().as_mesh().unwrap();

        assert_eq!(mesh.geometry.vertex_count(), 3);
        assert_eq!(mesh.geometry.triangle_count(), 1);
        assert_eq!(mesh.geometry.faces[0], [0, 1, 2]);
        assert_relative_eq!(mesh.geometry.normals[0].y, 1.0);
        assert_relative_eq!(mesh.geometry.uvs[0].x, 0.5);
        assert_relative_eq!(mesh.geometry.uvs[0].y, 1.0);

        let material = graph.material(mesh.material).unwrap();
        assert_eq!(material.name, "painted");
    }

    #[test]
    fn test_unresolved_material_falls_back_to_default() {
        let mut data = node_chunk("root", 1);
        data.extend_from_slice(&mesh_chunk("orphan", 0, "missing", false));
        let graph = from_bytes(&data).unwrap();
        let key = graph.find_by_name("orphan").unwrap();
        let mesh = graph.node(key).unwrap().as_mesh().unwrap();
        assert_eq!(mesh.material, graph.default_material());
    }

    #[test]
    fn test_physics_blob_is_skipped() {
        let mut data = node_chunk("root", 1);
        data.extend_from_slice(&mesh_chunk("hull", 0, NO_RESOURCE, true));
        let graph = from_bytes(&data).unwrap();
        let key = graph.find_by_name("hull").unwrap();
        let mesh = graph.node(key).unwrap().as_mesh().unwrap();
        assert_eq!(mesh.geometry.vertex_count(), 3);
    }

    #[test]
    fn test_truncated_payload_fails_import() {
        let mut payload = cstr("broken");
        payload.extend_from_slice(&[0u8; 8]); // matrix cut short
        let data = chunk(CHUNK_NODE, &payload);
        assert!(matches!(
            from_bytes(&data),
            Err(ImportError::Truncated { .. })
        ));
    }

    #[test]
    fn test_stream_ending_with_open_nodes_is_rejected() {
        let data = node_chunk("lonely parent", 3);
        assert!(matches!(
            from_bytes(&data),
            Err(ImportError::OpenHierarchy { open: 1 })
        ));
    }

    #[test]
    fn test_extra_sibling_is_rejected() {
        let mut data = node_chunk("root", 0);
        data.extend_from_slice(&node_chunk("unexpected", 0));
        assert!(matches!(
            from_bytes(&data),
            Err(ImportError::HierarchyUnderflow)
        ));
    }

    #[test]
    fn test_empty_stream_is_rejected() {
        assert!(matches!(
            from_bytes(&[]),
            Err(ImportError::OpenHierarchy { open: 1 })
        ));
    }

    #[test]
    fn test_multiple_lods_only_first_installed() {
        let mut payload = cstr("lods");
        payload.extend_from_slice(&identity_matrix());
        payload.extend_from_slice(&0u32.to_le_bytes()); // children
        payload.extend_from_slice(&cstr("unused"));
        payload.push(0);
        payload.extend_from_slice(&cstr(NO_RESOURCE));
        payload.extend_from_slice(&[0u8; 4 + 12 + 12]);
        payload.push(0); // no physics
        payload.extend_from_slice(&2u32.to_le_bytes()); // two LODs
        payload.extend_from_slice(&lod_block());
        payload.extend_from_slice(&lod_block());
        let mut data = node_chunk("root", 1);
        data.extend_from_slice(&chunk(CHUNK_MESH, &payload));

        let graph = from_bytes(&data).unwrap();
        let key = graph.find_by_name("lods").unwrap();
        let mesh = graph.node(key).unwrap().as_mesh().unwrap();
        assert_eq!(mesh.geometry.vertex_count(), 3);
    }
}
