pub mod error;
pub mod gltf_import;
pub mod node;
pub mod scene;
pub mod transform;
pub mod walker;

pub use error::SceneGraphError;
pub use gltf_import::{load_scene_graph, scene_graph_from_json, scene_graph_from_slice};
pub use node::{MeshId, NodeId, SceneNode};
pub use scene::SceneGraph;
pub use transform::{apply_node_transform, apply_transform_chain, NodeTransform};
pub use walker::{build_mesh_transforms, build_mesh_transforms_with, MeshTransforms};
