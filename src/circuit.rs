use std::path::Path;

use anyhow::Context;
use glam::DVec2;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One entry of a flat circuit description. Only the board is modelled;
/// every other element type is kept as an opaque marker.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum CircuitElement {
    #[serde(rename = "pcb_board")]
    PcbBoard(PcbBoard),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardCenter {
    #[serde(deserialize_with = "lenient_f64")]
    pub x: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub y: Option<f64>,
}

/// A `pcb_board` element. Fields with the wrong shape read as missing, so a
/// malformed board falls back to default framing instead of failing the
/// whole document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PcbBoard {
    #[serde(deserialize_with = "lenient_string")]
    pub pcb_board_id: Option<String>,
    #[serde(deserialize_with = "lenient_center")]
    pub center: Option<BoardCenter>,
    #[serde(deserialize_with = "lenient_f64")]
    pub width: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub height: Option<f64>,
    #[serde(deserialize_with = "lenient_f64")]
    pub thickness: Option<f64>,
}

/// Board dimensions once every field needed for framing is known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    pub center: DVec2,
    pub width: f64,
    pub height: f64,
}

impl PcbBoard {
    /// `None` when a center coordinate is missing or a dimension is missing
    /// or zero. NaN is not treated as missing and flows into the framing.
    pub fn geometry(&self) -> Option<BoardGeometry> {
        let center = self.center?;
        let center = DVec2::new(center.x?, center.y?);
        let width = self.width.filter(|width| *width != 0.0)?;
        let height = self.height.filter(|height| *height != 0.0)?;

        Some(BoardGeometry {
            center,
            width,
            height,
        })
    }
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_f64))
}

fn lenient_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_str).map(str::to_owned))
}

fn lenient_center<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<BoardCenter>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}

/// First board in document order, if any.
pub fn find_board(elements: &[CircuitElement]) -> Option<&PcbBoard> {
    elements.iter().find_map(|element| match element {
        CircuitElement::PcbBoard(board) => Some(board),
        CircuitElement::Other => None,
    })
}

pub fn parse_circuit_json(bytes: &[u8]) -> anyhow::Result<Vec<CircuitElement>> {
    serde_json::from_slice(bytes).context("Failed to parse circuit JSON")
}

pub fn load_circuit_json(path: &Path) -> anyhow::Result<Vec<CircuitElement>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    parse_circuit_json(&bytes).with_context(|| format!("Invalid circuit file {}", path.display()))
}
