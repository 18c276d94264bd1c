//! Glyph-local to world-space transforms
//!
//! Stroke fonts store glyphs with Y growing downward; the output curve space
//! has Y growing upward. A glyph point `(px, py)` maps to world space as
//!
//! ```text
//! world = Translate(pen_x, 0) · ScaleY(-1) · Scale(scale) · (px, py - baseline_y)
//! ```
//!
//! so the baseline lands on world `y = 0` and glyph-local "up" (negative y)
//! becomes positive world y.

use crate::font_source::Font;
use kurbo::{Affine, Point};

/// Affine map from glyph-local units to world space for a pen position
pub fn glyph_to_world(font: &Font, pen_x: f64) -> Affine {
    Affine::translate((pen_x, 0.0))
        * Affine::FLIP_Y
        * Affine::scale(font.scale)
        * Affine::translate((0.0, -font.baseline_y))
}

/// Inverse of [`glyph_to_world`]
///
/// Only meaningful for fonts with a non-zero scale.
pub fn world_to_glyph(font: &Font, pen_x: f64) -> Affine {
    glyph_to_world(font, pen_x).inverse()
}

/// Transform a glyph-local point to world space
pub fn to_world(font: &Font, pen_x: f64, point: Point) -> Point {
    glyph_to_world(font, pen_x) * point
}
