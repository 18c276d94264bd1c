//! JSON curve output

use crate::geometry::curve::Curve;
use anyhow::Result;

/// Serialize a curve as pretty-printed JSON
pub fn to_json(curve: &Curve) -> Result<String> {
    Ok(serde_json::to_string_pretty(curve)?)
}
