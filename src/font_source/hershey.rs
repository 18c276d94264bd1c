//! Hershey font loading
//!
//! Reads `.jhf` glyph files and their optional `.hmp` character maps.
//!
//! A `.jhf` record is a 5-column glyph number, a 3-column count of
//! coordinate pairs, then the pairs themselves. Each coordinate is stored
//! as a printable character offset from `'R'`. The first pair holds the
//! glyph's left and right extents, and the pair `" R"` lifts the pen.
//! Long records wrap onto following lines.

use super::data::{Bounds, Font, Glyph, GlyphId, Subpath};
use crate::core::errors::FontLoadError;
use kurbo::Point;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Glyph number used by ASCII-ordered files instead of a real Hershey number
const PLACEHOLDER_NUMBER: u32 = 12345;

/// Codepoint assigned to the first glyph of an ASCII-ordered file or map
const FIRST_CODEPOINT: u32 = 32;

const PEN_UP: &[u8; 2] = b" R";

fn coordinate(byte: u8) -> f64 {
    f64::from(i32::from(byte) - i32::from(b'R'))
}

/// Parse the contents of a `.jhf` file into a glyph table
pub fn parse_jhf(source: &str, path: &Path) -> Result<BTreeMap<GlyphId, Glyph>, FontLoadError> {
    let mut glyphs = BTreeMap::new();
    let mut lines = source
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .enumerate()
        .map(|(index, line)| (index + 1, line));
    let mut record_index: u32 = 0;

    while let Some((line_nr, line)) = lines.next() {
        if line.trim().is_empty() {
            continue;
        }
        if !line.is_ascii() || line.len() < 8 {
            return Err(FontLoadError::parse(path, line_nr, "truncated glyph header"));
        }

        let number = line[..5].trim();
        let id = if number.is_empty() {
            FIRST_CODEPOINT + record_index
        } else {
            match number.parse::<u32>() {
                Ok(PLACEHOLDER_NUMBER) => FIRST_CODEPOINT + record_index,
                Ok(id) => id,
                Err(_) => {
                    return Err(FontLoadError::parse(
                        path,
                        line_nr,
                        format!("invalid glyph number '{number}'"),
                    ))
                }
            }
        };
        let pair_count: usize = line[5..8].trim().parse().map_err(|_| {
            FontLoadError::parse(path, line_nr, format!("invalid vertex count '{}'", &line[5..8]))
        })?;
        if pair_count == 0 {
            return Err(FontLoadError::parse(path, line_nr, "glyph without extents"));
        }

        let mut data = line.as_bytes()[8..].to_vec();
        while data.len() < pair_count * 2 {
            match lines.next() {
                Some((_, continuation)) => data.extend_from_slice(continuation.as_bytes()),
                None => {
                    return Err(FontLoadError::parse(
                        path,
                        line_nr,
                        format!("glyph {id} expects {pair_count} pairs, file ended early"),
                    ))
                }
            }
        }
        if data.len() > pair_count * 2 && !data[pair_count * 2..].iter().all(u8::is_ascii_whitespace) {
            return Err(FontLoadError::parse(
                path,
                line_nr,
                format!("glyph {id} has more data than its {pair_count} pairs"),
            ));
        }

        glyphs.insert(id, glyph_from_pairs(&data[..pair_count * 2]));
        record_index += 1;
    }

    Ok(glyphs)
}

fn glyph_from_pairs(data: &[u8]) -> Glyph {
    let mut pairs = data.chunks_exact(2);
    let (min_x, max_x) = match pairs.next() {
        Some(extents) => (coordinate(extents[0]), coordinate(extents[1])),
        None => (0.0, 0.0),
    };

    let mut path = Vec::new();
    let mut stroke = Subpath::new();
    for pair in pairs {
        if pair == PEN_UP {
            if !stroke.is_empty() {
                path.push(std::mem::take(&mut stroke));
            }
        } else {
            stroke.push(Point::new(coordinate(pair[0]), coordinate(pair[1])));
        }
    }
    if !stroke.is_empty() {
        path.push(stroke);
    }

    Glyph::new(min_x, max_x, path)
}

/// Parse a `.hmp` character map into an encoding
///
/// Entries are glyph numbers or inclusive `first-last` ranges; the glyphs
/// they list are assigned consecutive codepoints starting at space. A map
/// that would assign codepoints beyond `char::MAX` is rejected.
pub fn parse_hmp(source: &str, path: &Path) -> Result<BTreeMap<u32, GlyphId>, FontLoadError> {
    let mut encoding = BTreeMap::new();
    let mut codepoint = FIRST_CODEPOINT;

    for (index, line) in source.lines().enumerate() {
        for token in line.split_whitespace() {
            let invalid = || FontLoadError::parse(path, index + 1, format!("invalid map entry '{token}'"));
            let (first, last) = match token.split_once('-') {
                Some((first, last)) => (
                    first.parse::<GlyphId>().map_err(|_| invalid())?,
                    last.parse::<GlyphId>().map_err(|_| invalid())?,
                ),
                None => {
                    let id = token.parse::<GlyphId>().map_err(|_| invalid())?;
                    (id, id)
                }
            };
            if last < first {
                return Err(invalid());
            }
            let remaining = u64::from(u32::from(char::MAX)) + 1 - u64::from(codepoint);
            if u64::from(last - first) + 1 > remaining {
                return Err(FontLoadError::parse(
                    path,
                    index + 1,
                    format!("map entry '{token}' runs past the last Unicode codepoint"),
                ));
            }
            for id in first..=last {
                encoding.insert(codepoint, id);
                codepoint += 1;
            }
        }
    }

    Ok(encoding)
}

/// Build a font from a Hershey glyph table, deriving its metrics
///
/// The font height is normalised to one world unit, and the baseline is
/// taken from the bottom of the capital A.
pub fn font_from_glyphs(
    glyphs: BTreeMap<GlyphId, Glyph>,
    encoding: Option<BTreeMap<u32, GlyphId>>,
) -> Font {
    let mut bounds: Option<Bounds> = None;
    for glyph in glyphs.values() {
        let extents = [Point::new(glyph.min_x, 0.0), Point::new(glyph.max_x, 0.0)];
        for point in extents.iter().chain(glyph.path.iter().flatten()) {
            match bounds.as_mut() {
                Some(bounds) => bounds.include(*point),
                None => bounds = Some(Bounds::new(*point, *point)),
            }
        }
    }
    let bounds = bounds.unwrap_or(Bounds::new(Point::ZERO, Point::ZERO));

    let height = bounds.height();
    let scale = if height > 0.0 { 1.0 / height } else { 1.0 };

    let mut font = Font {
        scale,
        baseline_y: bounds.max.y,
        bounds,
        encoding,
        glyphs,
    };
    let capital_base = font.lookup('A').glyph().and_then(Glyph::lowest_y);
    if let Some(baseline_y) = capital_base {
        font.baseline_y = baseline_y;
    }
    font
}

/// Load `<name>.jhf`, plus `<name>.hmp` when one sits next to it
pub fn load_hershey(path: &Path) -> Result<Font, FontLoadError> {
    let source = fs::read_to_string(path).map_err(|e| FontLoadError::io(path, e))?;
    let glyphs = parse_jhf(&source, path)?;

    let map_path = path.with_extension("hmp");
    let encoding = if map_path.is_file() {
        let map_source = fs::read_to_string(&map_path).map_err(|e| FontLoadError::io(&map_path, e))?;
        debug!("Using character map {:?}", map_path);
        Some(parse_hmp(&map_source, &map_path)?)
    } else {
        None
    };

    debug!("Parsed {} Hershey glyphs from {:?}", glyphs.len(), path);
    Ok(font_from_glyphs(glyphs, encoding))
}
