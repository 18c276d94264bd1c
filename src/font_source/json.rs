//! JSON stroke fonts
//!
//! The JSON format is the serde form of [`Font`]:
//!
//! ```json
//! {
//!   "scale": 1.0,
//!   "baseline_y": 0.0,
//!   "bounds": { "min": { "x": 0, "y": 0 }, "max": { "x": 10, "y": 20 } },
//!   "glyphs": {
//!     "65": { "min_x": 0, "max_x": 8, "path": [[{ "x": 0, "y": 0 }, { "x": 4, "y": 20 }]] }
//!   }
//! }
//! ```

use super::data::Font;
use crate::core::errors::FontLoadError;
use std::fs;
use std::path::Path;

pub fn load_json_font(path: &Path) -> Result<Font, FontLoadError> {
    let contents = fs::read_to_string(path).map_err(|e| FontLoadError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|source| FontLoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a font in the JSON stroke font format
pub fn save_json_font(font: &Font, path: &Path) -> anyhow::Result<()> {
    let contents = serde_json::to_string_pretty(font)?;
    fs::write(path, contents)?;
    Ok(())
}
