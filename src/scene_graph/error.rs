use thiserror::Error;

use crate::scene_graph::node::NodeId;

/// Structural problems found while walking a scene graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneGraphError {
    /// Only reported in strict mode; lenient walks skip the reference.
    #[error("{node} is referenced{} but not present in the node table", parent_suffix(.parent))]
    UnresolvedNode {
        parent: Option<NodeId>,
        node: NodeId,
    },

    #[error("{node} is its own ancestor")]
    Cycle { node: NodeId },

    #[error("{node} is deeper than the maximum scene depth of {max_depth}")]
    DepthExceeded { node: NodeId, max_depth: usize },

    #[error("walk stopped at {node} after {max_visits} node visits")]
    VisitLimitExceeded { node: NodeId, max_visits: usize },

    #[error("scene #{index} does not exist")]
    SceneNotFound { index: usize },
}

fn parent_suffix(parent: &Option<NodeId>) -> String {
    match parent {
        Some(parent) => format!(" by {parent}"),
        None => " as a root".to_string(),
    }
}
