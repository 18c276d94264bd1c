//! Glyph layout
//!
//! Turns a string and a stroke font into an ordered list of world-space
//! polylines placed along a horizontal baseline. Layout is a pure function
//! of its inputs: no logging, no errors, no state kept between calls.

use crate::font_source::Font;
use crate::geometry::world_space::glyph_to_world;
use kurbo::Point;

/// One polyline of laid-out text in world space
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSubpath {
    pub points: Vec<Point>,
    pub closed: bool,
}

/// Ordered output of a layout pass
///
/// Subpaths are in character order, then stroke order within a character.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutResult {
    subpaths: Vec<RenderSubpath>,
    advance: f64,
}

impl LayoutResult {
    pub fn subpaths(&self) -> &[RenderSubpath] {
        &self.subpaths
    }

    pub fn len(&self) -> usize {
        self.subpaths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    /// Final pen position in world units
    pub fn advance(&self) -> f64 {
        self.advance
    }

    pub fn into_subpaths(self) -> Vec<RenderSubpath> {
        self.subpaths
    }
}

/// Running horizontal pen offset for a single layout call
#[derive(Clone, Copy, Debug, Default)]
struct PenState {
    x: f64,
}

impl PenState {
    fn advance(&mut self, width: f64, scale: f64) {
        self.x += width * scale;
    }
}

/// Lay out `text` with `font`
///
/// With no font the result is empty whatever the text, which is how hosts
/// create placeholder geometry. Characters without a glyph get a closed box
/// spanning the font bounds and advance by the bounds width.
pub fn layout(text: &str, font: Option<&Font>) -> LayoutResult {
    let Some(font) = font else {
        return LayoutResult::default();
    };

    let mut pen = PenState::default();
    let mut subpaths = Vec::new();

    for ch in text.chars() {
        let transform = glyph_to_world(font, pen.x);
        let advance_width = match font.lookup(ch).glyph() {
            Some(glyph) => {
                subpaths.extend(glyph.path.iter().map(|stroke| RenderSubpath {
                    points: stroke.iter().map(|&point| transform * point).collect(),
                    closed: false,
                }));
                glyph.advance_width()
            }
            None => {
                subpaths.push(RenderSubpath {
                    points: font
                        .bounds
                        .corners()
                        .iter()
                        .map(|&corner| transform * corner)
                        .collect(),
                    closed: true,
                });
                font.bounds.width()
            }
        };
        pen.advance(advance_width, font.scale);
    }

    LayoutResult {
        subpaths,
        advance: pen.x,
    }
}
