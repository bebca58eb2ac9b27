use glam::{DMat4, DVec3};
use log::debug;
use serde::Serialize;

use crate::circuit::{find_board, CircuitElement};
use crate::config::FramingConfig;

/// Default view of an exported board: where the camera sits and what it
/// looks at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraFraming {
    pub cam_pos: DVec3,
    pub look_at: DVec3,
}

impl CameraFraming {
    pub fn camera(&self) -> Camera {
        Camera {
            eye: self.cam_pos,
            target: self.look_at,
            up: DVec3::Y,
        }
    }
}

pub struct Camera {
    pub eye: DVec3,
    pub target: DVec3,
    pub up: DVec3,
}

impl Camera {
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.eye, self.target, self.up)
    }
}

pub fn best_camera_position(elements: &[CircuitElement]) -> CameraFraming {
    best_camera_position_with(elements, &FramingConfig::default())
}

/// Frames the first board in `elements` from an elevated oblique angle so
/// both its top face and its edge are visible. Falls back to
/// `config.fallback` when there is no board or it lacks a center or size.
pub fn best_camera_position_with(
    elements: &[CircuitElement],
    config: &FramingConfig,
) -> CameraFraming {
    let Some(board) = find_board(elements) else {
        debug!("No board found, using fallback camera");
        return config.fallback;
    };
    let Some(geometry) = board.geometry() else {
        debug!("Board is missing center or dimensions, using fallback camera");
        return config.fallback;
    };

    let base_distance = geometry.width.max(geometry.height) * 0.8;
    let framing = CameraFraming {
        cam_pos: DVec3::new(0.7, 1.2, 0.8) * base_distance,
        look_at: DVec3::new(geometry.center.x, geometry.center.y, 0.0),
    };

    match config.round_decimals {
        Some(decimals) => CameraFraming {
            cam_pos: round_to(framing.cam_pos, decimals),
            look_at: round_to(framing.look_at, decimals),
        },
        None => framing,
    }
}

/// Most decimal places an f64 can carry meaningfully.
const MAX_ROUND_DECIMALS: u32 = 15;

// Ties round towards +inf, so -2.5 becomes -2.
fn round_to(v: DVec3, decimals: u32) -> DVec3 {
    let factor = 10f64.powi(decimals.min(MAX_ROUND_DECIMALS) as i32);
    (v * factor + 0.5).floor() / factor
}
