//! Stroke font data structures
//!
//! This module contains the in-memory font model shared by every font
//! format: a font-wide bounding box, scale and baseline, an optional
//! character encoding, and the glyph outlines themselves.
//!
//! Glyph-local coordinates use the Hershey convention: Y grows downward.
//! Providers for formats with a Y-up convention flip at load time.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier of a glyph inside a font's glyph table
pub type GlyphId = u32;

/// One stroke of a glyph: an ordered polyline in glyph-local units
pub type Subpath = Vec<Point>;

/// Overall font bounding box in unscaled glyph-local units
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Horizontal extent, used as the advance of fallback geometry
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// The four box corners in drawing order:
    /// (min,min) → (max,min) → (max,max) → (min,max)
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min.x, self.min.y),
            Point::new(self.max.x, self.min.y),
            Point::new(self.max.x, self.max.y),
            Point::new(self.min.x, self.max.y),
        ]
    }

    /// Grow the box to include `point`
    pub fn include(&mut self, point: Point) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }
}

/// Outline data for a single character
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    pub min_x: f64,
    pub max_x: f64,
    /// Strokes in drawing order. Empty for whitespace glyphs.
    #[serde(default)]
    pub path: Vec<Subpath>,
}

impl Glyph {
    pub fn new(min_x: f64, max_x: f64, path: Vec<Subpath>) -> Self {
        Self { min_x, max_x, path }
    }

    /// Unscaled distance the pen moves after this glyph
    pub fn advance_width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Largest y of any point, i.e. the lowest point of the glyph
    pub fn lowest_y(&self) -> Option<f64> {
        self.path
            .iter()
            .flatten()
            .map(|point| point.y)
            .fold(None, |acc: Option<f64>, y| Some(acc.map_or(y, |a| a.max(y))))
    }
}

/// A loaded stroke font
///
/// Fonts are read-only once loaded; layout only ever borrows them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Uniform factor applied to all glyph coordinates
    pub scale: f64,
    /// Offset subtracted from glyph-local Y before scaling
    pub baseline_y: f64,
    pub bounds: Bounds,
    /// Codepoint to glyph id mapping. When absent the codepoint is the id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<BTreeMap<u32, GlyphId>>,
    pub glyphs: BTreeMap<GlyphId, Glyph>,
}

/// Result of resolving a character against a font
///
/// Layout treats both non-`Found` variants identically; the distinction is
/// kept for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GlyphLookup<'a> {
    /// The character resolved to a glyph with outline data
    Found { id: GlyphId, glyph: &'a Glyph },
    /// The character resolved to an id that has no entry in the glyph table
    MissingGlyph { id: GlyphId },
    /// The font has an encoding and the character is not in it
    Unmapped,
}

impl<'a> GlyphLookup<'a> {
    pub fn glyph(&self) -> Option<&'a Glyph> {
        match *self {
            GlyphLookup::Found { glyph, .. } => Some(glyph),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, GlyphLookup::Found { .. })
    }
}

impl Font {
    /// Resolve the glyph id for a character, if the font maps it
    pub fn glyph_id(&self, ch: char) -> Option<GlyphId> {
        let codepoint = u32::from(ch);
        match &self.encoding {
            Some(encoding) => encoding.get(&codepoint).copied(),
            None => Some(codepoint),
        }
    }

    /// Resolve a character all the way to its glyph
    pub fn lookup(&self, ch: char) -> GlyphLookup<'_> {
        match self.glyph_id(ch) {
            Some(id) => match self.glyphs.get(&id) {
                Some(glyph) => GlyphLookup::Found { id, glyph },
                None => GlyphLookup::MissingGlyph { id },
            },
            None => GlyphLookup::Unmapped,
        }
    }

    /// Number of characters in `text` that will fall back to the box glyph
    pub fn missing_glyph_count(&self, text: &str) -> usize {
        text.chars().filter(|&ch| !self.lookup(ch).is_found()).count()
    }
}
