use std::fmt;

use glam::{DQuat, DVec3};
use serde::Serialize;

use crate::scene_graph::transform::NodeTransform;

/// Index into a [`SceneGraph`](crate::scene_graph::SceneGraph) node table.
/// An id is not guaranteed to resolve; the walker decides what a dangling
/// reference means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub usize);

/// Identifier of a renderable mesh. For glTF input this is the mesh index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MeshId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node #{}", self.0)
    }
}

impl fmt::Display for MeshId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mesh #{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneNode {
    pub name: Option<String>,
    pub transform: NodeTransform,
    pub mesh: Option<MeshId>,
    pub child_ids: Vec<NodeId>,
}

impl SceneNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_transform(mut self, transform: NodeTransform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_scale(mut self, scale: DVec3) -> Self {
        self.transform.scale = Some(scale);
        self
    }

    pub fn with_rotation(mut self, rotation: DQuat) -> Self {
        self.transform.rotation = Some(rotation);
        self
    }

    pub fn with_translation(mut self, translation: DVec3) -> Self {
        self.transform.translation = Some(translation);
        self
    }

    pub fn with_mesh(mut self, mesh: MeshId) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = NodeId>) -> Self {
        self.child_ids.extend(children);
        self
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed")
    }
}
