use glam::{DQuat, DVec3};
use serde::Serialize;

use crate::math::point::{rotate_point, Point3};

/// Local scale / rotation / translation of a scene node.
///
/// Every field keeps its presence: `None` means the node never declared it,
/// while `Some(identity)` is kept as written. Absent fields are skipped when
/// applied rather than replaced by an identity value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NodeTransform {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<DVec3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<DQuat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<DVec3>,
}

impl NodeTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale(mut self, scale: DVec3) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_rotation(mut self, rotation: DQuat) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn with_translation(mut self, translation: DVec3) -> Self {
        self.translation = Some(translation);
        self
    }

    /// True when no field is present. Such transforms never enter a chain.
    pub fn is_empty(&self) -> bool {
        self.scale.is_none() && self.rotation.is_none() && self.translation.is_none()
    }

    /// Scale, then rotate, then translate. Non-uniform scale therefore acts
    /// along the node's own axes, not the parent's.
    pub fn apply(&self, point: Point3) -> Point3 {
        let mut result = point;

        if let Some(scale) = self.scale {
            result *= scale;
        }

        if let Some(rotation) = self.rotation {
            result = rotate_point(result, rotation);
        }

        if let Some(translation) = self.translation {
            result += translation;
        }

        result
    }
}

pub fn apply_node_transform(point: Point3, transform: &NodeTransform) -> Point3 {
    transform.apply(point)
}

/// Applies `chain` in stored order, root entry first. This is the order
/// export consumers use to place mesh vertices.
pub fn apply_transform_chain(point: Point3, chain: &[NodeTransform]) -> Point3 {
    chain
        .iter()
        .fold(point, |point, transform| transform.apply(point))
}
