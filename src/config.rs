use glam::DVec3;

use crate::camera::CameraFraming;

#[derive(Debug, Clone)]
pub struct TraversalConfig {
    /// Report unresolved node references instead of skipping them.
    pub strict: bool,
    /// Deepest root-to-node path accepted before the walk gives up.
    pub max_depth: usize,
    /// Total node visits allowed. Shared children are re-entered once per
    /// path, so a DAG can cost far more visits than it has nodes. `None`
    /// allows [`VISITS_PER_NODE`] visits per node in the table.
    pub max_visits: Option<usize>,
}

pub const VISITS_PER_NODE: usize = 64;

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            strict: false,
            max_depth: 256,
            max_visits: None,
        }
    }
}

impl TraversalConfig {
    pub fn visit_limit(&self, node_count: usize) -> usize {
        self.max_visits
            .unwrap_or_else(|| node_count.max(1).saturating_mul(VISITS_PER_NODE))
    }

    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct FramingConfig {
    /// Cosmetic rounding of the output. `None` keeps full precision.
    pub round_decimals: Option<u32>,
    /// Used when the input has no usable board.
    pub fallback: CameraFraming,
}

impl Default for FramingConfig {
    fn default() -> Self {
        Self {
            round_decimals: Some(2),
            fallback: CameraFraming {
                cam_pos: DVec3::new(30.0, 30.0, 25.0),
                look_at: DVec3::ZERO,
            },
        }
    }
}
