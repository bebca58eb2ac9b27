pub mod bounds;
pub mod point;

pub use bounds::Aabb;
pub use point::{rotate_point, Point3};
