//! Scene-graph transform resolution and default camera framing for board
//! exports.
//!
//! [`build_mesh_transforms`] resolves, for every mesh in a scene, the chain
//! of node transforms that places it in world space. [`best_camera_position`]
//! picks a default oblique view of the primary board.

pub mod camera;
pub mod circuit;
pub mod config;
pub mod math;
pub mod scene_graph;

pub use camera::{best_camera_position, best_camera_position_with, Camera, CameraFraming};
pub use circuit::{CircuitElement, PcbBoard};
pub use config::{FramingConfig, TraversalConfig};
pub use math::{rotate_point, Aabb, Point3};
pub use scene_graph::{
    apply_node_transform, apply_transform_chain, build_mesh_transforms,
    build_mesh_transforms_with, MeshId, MeshTransforms, NodeId, NodeTransform, SceneGraph,
    SceneGraphError, SceneNode,
};
