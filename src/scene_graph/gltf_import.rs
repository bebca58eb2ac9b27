use std::path::Path;

use anyhow::Context;
use glam::{DQuat, Vec3};
use gltf::json;
use log::{debug, warn};

use crate::scene_graph::error::SceneGraphError;
use crate::scene_graph::node::{MeshId, NodeId, SceneNode};
use crate::scene_graph::scene::SceneGraph;
use crate::scene_graph::transform::NodeTransform;

const GLB_MAGIC: &[u8] = b"glTF";

/// Loads the node hierarchy of a `.gltf` or `.glb` file. Buffers and meshes
/// are not read.
pub fn load_scene_graph(path: &Path) -> anyhow::Result<SceneGraph> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    scene_graph_from_slice(&bytes).with_context(|| format!("Invalid glTF file {}", path.display()))
}

pub fn scene_graph_from_slice(bytes: &[u8]) -> anyhow::Result<SceneGraph> {
    let root = if bytes.starts_with(GLB_MAGIC) {
        let glb = gltf::Glb::from_slice(bytes).context("Failed to parse GLB container")?;
        json::Root::from_slice(&glb.json).context("Failed to parse GLB JSON chunk")?
    } else {
        json::Root::from_slice(bytes).context("Failed to parse glTF JSON")?
    };

    Ok(scene_graph_from_json(&root)?)
}

/// Copies every node of `root` into a [`SceneGraph`], keeping glTF node
/// indices as node ids, and takes roots from the default scene (or the first
/// scene when no default is set).
///
/// References are not validated here, so out-of-range child indices survive
/// as dangling ids.
///
/// TRS values are read through `gltf-json`, which stores them as `f32`, so
/// they are widened to `f64` with single precision (`0.1` arrives as
/// `0.10000000149011612`).
pub fn scene_graph_from_json(root: &json::Root) -> Result<SceneGraph, SceneGraphError> {
    let mut scene = SceneGraph::new();

    for (index, node) in root.nodes.iter().enumerate() {
        if node.matrix.is_some() {
            warn!("Node #{index} uses a matrix transform, which is ignored");
        }

        let transform = NodeTransform {
            scale: node.scale.map(|scale| Vec3::from_array(scale).as_dvec3()),
            rotation: node.rotation.map(|rotation| {
                let [x, y, z, w] = rotation.0;
                DQuat::from_xyzw(x.into(), y.into(), z.into(), w.into())
            }),
            translation: node
                .translation
                .map(|translation| Vec3::from_array(translation).as_dvec3()),
        };

        scene.add_node(SceneNode {
            name: node.name.clone(),
            transform,
            mesh: node.mesh.map(|mesh| MeshId(mesh.value())),
            child_ids: node
                .children
                .iter()
                .flatten()
                .map(|child| NodeId(child.value()))
                .collect(),
        });
    }

    if root.scenes.is_empty() {
        debug!("Document has no scenes");
        return Ok(scene);
    }

    let scene_index = root.scene.map(|index| index.value()).unwrap_or(0);
    let gltf_scene = root
        .scenes
        .get(scene_index)
        .ok_or(SceneGraphError::SceneNotFound { index: scene_index })?;

    for node in &gltf_scene.nodes {
        scene.add_root(NodeId(node.value()));
    }

    Ok(scene)
}
