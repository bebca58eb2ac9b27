use glam::DVec3;

use crate::scene_graph::transform::{apply_transform_chain, NodeTransform};

/// Axis-aligned box, usually a mesh's local-space extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    pub fn new(point1: DVec3, point2: DVec3) -> Aabb {
        let min = point1.min(point2);
        let max = point1.max(point2);
        Aabb { min, max }
    }

    /// Smallest box enclosing every point, or `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = DVec3>) -> Option<Aabb> {
        points.into_iter().fold(None, |acc, point| match acc {
            None => Some(Aabb::new(point, point)),
            Some(aabb) => Some(Aabb::new(aabb.min.min(point), aabb.max.max(point))),
        })
    }

    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    pub fn corners(&self) -> [DVec3; 8] {
        [
            DVec3::new(self.min.x, self.min.y, self.min.z),
            DVec3::new(self.max.x, self.min.y, self.min.z),
            DVec3::new(self.min.x, self.max.y, self.min.z),
            DVec3::new(self.max.x, self.max.y, self.min.z),
            DVec3::new(self.min.x, self.min.y, self.max.z),
            DVec3::new(self.max.x, self.min.y, self.max.z),
            DVec3::new(self.min.x, self.max.y, self.max.z),
            DVec3::new(self.max.x, self.max.y, self.max.z),
        ]
    }

    /// Maps all eight corners through `chain` (root first) and re-encloses
    /// them. Rotations make the result looser than the true hull.
    pub fn transform_by_chain(&self, chain: &[NodeTransform]) -> Aabb {
        let [first, rest @ ..] = self
            .corners()
            .map(|corner| apply_transform_chain(corner, chain));

        rest.iter().fold(Aabb::new(first, first), |aabb, &corner| {
            Aabb::new(aabb.min.min(corner), aabb.max.max(corner))
        })
    }

    pub fn contains_point(&self, point: DVec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}
