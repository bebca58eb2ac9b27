use std::collections::HashMap;

use itertools::Itertools;
use log::{trace, warn};

use crate::config::TraversalConfig;
use crate::math::{bounds::Aabb, point::Point3};
use crate::scene_graph::error::SceneGraphError;
use crate::scene_graph::node::{MeshId, NodeId};
use crate::scene_graph::scene::SceneGraph;
use crate::scene_graph::transform::{apply_transform_chain, NodeTransform};

/// Root-first transform chain for every mesh bound somewhere in a scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshTransforms {
    chains: HashMap<MeshId, Vec<NodeTransform>>,
}

impl MeshTransforms {
    pub fn get(&self, mesh: MeshId) -> Option<&[NodeTransform]> {
        self.chains.get(&mesh).map(Vec::as_slice)
    }

    pub fn contains(&self, mesh: MeshId) -> bool {
        self.chains.contains_key(&mesh)
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MeshId, &[NodeTransform])> {
        self.chains
            .iter()
            .map(|(&mesh, chain)| (mesh, chain.as_slice()))
    }

    /// Same as [`iter`](Self::iter) but ordered by mesh id.
    pub fn sorted(&self) -> Vec<(MeshId, &[NodeTransform])> {
        self.iter().sorted_by_key(|(mesh, _)| *mesh).collect()
    }

    /// Places a mesh-local point in world space. Meshes never bound by a node
    /// get no transform.
    pub fn to_world(&self, mesh: MeshId, point: Point3) -> Point3 {
        match self.get(mesh) {
            Some(chain) => apply_transform_chain(point, chain),
            None => point,
        }
    }

    pub fn world_bounds(&self, mesh: MeshId, local: &Aabb) -> Aabb {
        local.transform_by_chain(self.get(mesh).unwrap_or(&[]))
    }

    fn bind(&mut self, mesh: MeshId, chain: Vec<NodeTransform>) {
        if self.chains.insert(mesh, chain).is_some() {
            trace!("{mesh} bound again, keeping the later path");
        }
    }
}

/// Walks `scene` with the default lenient configuration.
pub fn build_mesh_transforms(scene: &SceneGraph) -> Result<MeshTransforms, SceneGraphError> {
    build_mesh_transforms_with(scene, &TraversalConfig::default())
}

/// Visits roots in order and children in order, depth first. When two paths
/// bind the same mesh, the one visited last wins.
pub fn build_mesh_transforms_with(
    scene: &SceneGraph,
    config: &TraversalConfig,
) -> Result<MeshTransforms, SceneGraphError> {
    let mut walker = Walker {
        scene,
        config,
        ancestors: Vec::new(),
        visits: 0,
        max_visits: config.visit_limit(scene.len()),
        transforms: MeshTransforms::default(),
    };

    for &root_id in scene.root_ids() {
        walker.visit(root_id, None, &[])?;
    }

    Ok(walker.transforms)
}

struct Walker<'a> {
    scene: &'a SceneGraph,
    config: &'a TraversalConfig,
    // Nodes on the current root-to-node path. A node reached twice through
    // different parents is fine; reaching one of its own ancestors is not.
    ancestors: Vec<NodeId>,
    visits: usize,
    max_visits: usize,
    transforms: MeshTransforms,
}

impl Walker<'_> {
    fn visit(
        &mut self,
        node_id: NodeId,
        parent_id: Option<NodeId>,
        inherited: &[NodeTransform],
    ) -> Result<(), SceneGraphError> {
        let scene = self.scene;
        let Some(node) = scene.get_node(node_id) else {
            if self.config.strict {
                return Err(SceneGraphError::UnresolvedNode {
                    parent: parent_id,
                    node: node_id,
                });
            }
            warn!("Skipping unresolved {node_id}");
            return Ok(());
        };

        if self.ancestors.contains(&node_id) {
            return Err(SceneGraphError::Cycle { node: node_id });
        }
        if self.ancestors.len() >= self.config.max_depth {
            return Err(SceneGraphError::DepthExceeded {
                node: node_id,
                max_depth: self.config.max_depth,
            });
        }
        if self.visits >= self.max_visits {
            return Err(SceneGraphError::VisitLimitExceeded {
                node: node_id,
                max_visits: self.max_visits,
            });
        }
        self.visits += 1;

        let mut chain = inherited.to_vec();
        if !node.transform.is_empty() {
            chain.push(node.transform);
        }

        if let Some(mesh) = node.mesh {
            trace!(
                "{mesh} bound by {node_id} ({}) with {} transform(s)",
                node.display_name(),
                chain.len()
            );
            self.transforms.bind(mesh, chain.clone());
        }

        self.ancestors.push(node_id);
        for &child_id in &node.child_ids {
            self.visit(child_id, Some(node_id), &chain)?;
        }
        self.ancestors.pop();

        Ok(())
    }
}
