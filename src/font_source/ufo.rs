//! UFO sources as stroke fonts
//!
//! Any UFO can be drawn as strokes: each contour of the default layer is
//! flattened into a polyline. Open contours (starting with a `move` point)
//! stay open, which is how single-line fonts are stored in UFO.
//!
//! UFO is Y-up; glyph points are negated on load to match the Y-down
//! stroke font convention.

use super::data::{Bounds, Font, Glyph, GlyphId, Subpath};
use crate::core::errors::FontLoadError;
use kurbo::{BezPath, PathEl, Point};
use norad::PointType;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

const DEFAULT_UNITS_PER_EM: f64 = 1000.0;

/// Build a kurbo path from a UFO contour
///
/// Closed contours wrap from the last point back to the first using the
/// first point's segment type.
pub fn contour_to_bezpath(contour: &norad::Contour) -> BezPath {
    let mut path = BezPath::new();
    let mut pending_offcurves: Vec<Point> = Vec::new();
    let Some(first) = contour.points.first() else {
        return path;
    };

    // A closed contour may begin with off-curve points belonging to the
    // wrap-around segment; start drawing at the first on-curve point.
    let start = contour
        .points
        .iter()
        .position(|point| point.typ != PointType::OffCurve)
        .unwrap_or(0);
    let is_open = first.typ == PointType::Move;
    let count = if is_open {
        contour.points.len()
    } else {
        contour.points.len() + 1
    };

    let points = contour.points.iter().cycle().skip(start).take(count);
    for (idx, point) in points.enumerate() {
        let pt = Point::new(point.x, point.y);
        if idx == 0 {
            path.move_to(pt);
            continue;
        }
        match point.typ {
            PointType::Move => path.move_to(pt),
            PointType::Line => path.line_to(pt),
            PointType::OffCurve => pending_offcurves.push(pt),
            PointType::Curve => {
                match pending_offcurves.as_slice() {
                    [.., cp1, cp2] => path.curve_to(*cp1, *cp2, pt),
                    [cp] => path.quad_to(*cp, pt),
                    [] => path.line_to(pt),
                }
                pending_offcurves.clear();
            }
            PointType::QCurve => {
                for (i, &cp) in pending_offcurves.iter().enumerate() {
                    let end = match pending_offcurves.get(i + 1) {
                        Some(next_cp) => cp.midpoint(*next_cp),
                        None => pt,
                    };
                    path.quad_to(cp, end);
                }
                if pending_offcurves.is_empty() {
                    path.line_to(pt);
                }
                pending_offcurves.clear();
            }
        }
    }

    if !is_open {
        path.close_path();
    }
    path
}

/// Flatten a path into polylines, one per subpath
///
/// Closed subpaths repeat their starting point so the polyline visibly closes.
pub fn flatten_to_subpaths(path: &BezPath, tolerance: f64) -> Vec<Subpath> {
    let mut subpaths: Vec<Subpath> = Vec::new();
    let mut current = Subpath::new();
    kurbo::flatten(path.iter(), tolerance, |element| match element {
        PathEl::MoveTo(point) => {
            if !current.is_empty() {
                subpaths.push(std::mem::take(&mut current));
            }
            current.push(point);
        }
        PathEl::LineTo(point) => current.push(point),
        PathEl::ClosePath => {
            if let (Some(&first), Some(&last)) = (current.first(), current.last()) {
                if first != last {
                    current.push(first);
                }
            }
        }
        // flatten only emits lines
        PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
    });
    if !current.is_empty() {
        subpaths.push(current);
    }
    subpaths
}

fn flip_y(subpath: Subpath) -> Subpath {
    subpath.into_iter().map(|p| Point::new(p.x, -p.y)).collect()
}

/// Load a UFO directory as a stroke font
pub fn load_ufo(path: &Path, tolerance: f64) -> Result<Font, FontLoadError> {
    let ufo = norad::Font::load(path).map_err(|e| FontLoadError::Ufo {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let font_info = &ufo.font_info;
    let units_per_em = font_info
        .units_per_em
        .map(|v| v.to_string().parse().unwrap_or(DEFAULT_UNITS_PER_EM))
        .filter(|upm: &f64| *upm > 0.0)
        .unwrap_or(DEFAULT_UNITS_PER_EM);
    let ascender = font_info.ascender.unwrap_or(units_per_em * 0.8);
    let descender = font_info.descender.unwrap_or(-(units_per_em * 0.2));

    let mut sources: Vec<&norad::Glyph> = ufo.default_layer().iter().collect();
    sources.sort_by_key(|glyph| glyph.name().to_string());

    let mut glyphs = BTreeMap::new();
    let mut encoding = BTreeMap::new();
    let mut max_advance: f64 = 0.0;
    for (index, source) in sources.iter().enumerate() {
        let id = index as GlyphId;
        let path = source
            .contours
            .iter()
            .flat_map(|contour| flatten_to_subpaths(&contour_to_bezpath(contour), tolerance))
            .map(flip_y)
            .collect();
        if !source.components.is_empty() {
            warn!(
                "Glyph '{}' uses components, which are not drawn as strokes",
                source.name()
            );
        }
        for codepoint in source.codepoints.iter() {
            encoding.insert(u32::from(codepoint), id);
        }
        max_advance = max_advance.max(source.width);
        glyphs.insert(id, Glyph::new(0.0, source.width, path));
    }

    debug!("Loaded {} UFO glyphs from {:?}", glyphs.len(), path);
    Ok(Font {
        scale: 1.0 / units_per_em,
        baseline_y: 0.0,
        bounds: Bounds::new(Point::new(0.0, -ascender), Point::new(max_advance, -descender)),
        encoding: Some(encoding),
        glyphs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use norad::{Contour, ContourPoint};

    fn point(x: f64, y: f64, typ: PointType) -> ContourPoint {
        ContourPoint::new(x, y, typ, false, None, None)
    }

    #[test]
    fn test_open_contour_stays_open() {
        let contour = Contour::new(
            vec![
                point(0.0, 0.0, PointType::Move),
                point(50.0, 700.0, PointType::Line),
                point(100.0, 0.0, PointType::Line),
            ],
            None,
        );
        let subpaths = flatten_to_subpaths(&contour_to_bezpath(&contour), 1.0);
        assert_eq!(subpaths.len(), 1);
        assert_eq!(
            subpaths[0],
            vec![Point::new(0.0, 0.0), Point::new(50.0, 700.0), Point::new(100.0, 0.0)]
        );
    }

    #[test]
    fn test_closed_contour_repeats_start() {
        let contour = Contour::new(
            vec![
                point(0.0, 0.0, PointType::Line),
                point(100.0, 0.0, PointType::Line),
                point(100.0, 100.0, PointType::Line),
            ],
            None,
        );
        let subpaths = flatten_to_subpaths(&contour_to_bezpath(&contour), 1.0);
        assert_eq!(subpaths.len(), 1);
        assert_eq!(subpaths[0].first(), subpaths[0].last());
        assert_eq!(subpaths[0].len(), 4);
    }

    #[test]
    fn test_curves_are_flattened_within_tolerance() {
        let contour = Contour::new(
            vec![
                point(0.0, 0.0, PointType::Move),
                point(0.0, 100.0, PointType::OffCurve),
                point(100.0, 100.0, PointType::OffCurve),
                point(100.0, 0.0, PointType::Curve),
            ],
            None,
        );
        let subpaths = flatten_to_subpaths(&contour_to_bezpath(&contour), 0.5);
        assert_eq!(subpaths.len(), 1);
        assert!(subpaths[0].len() > 4);
        let end = subpaths[0].last().copied().unwrap_or(Point::ZERO);
        assert!((end - Point::new(100.0, 0.0)).hypot() < 1e-9);
    }
}
