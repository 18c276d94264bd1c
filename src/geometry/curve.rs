//! Curve assembly
//!
//! Packages laid-out polylines into the poly-spline curve handed to hosts
//! and writers. Assembly copies points verbatim; all transforms happen
//! during layout.

use crate::layout::LayoutResult;
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// A single poly spline
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Spline {
    pub points: Vec<Point>,
    /// Whether the last point connects back to the first
    pub cyclic: bool,
}

/// Host-facing curve: an ordered list of poly splines
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub splines: Vec<Spline>,
}

impl Curve {
    pub fn is_empty(&self) -> bool {
        self.splines.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.splines.iter().map(|spline| spline.points.len()).sum()
    }

    /// Convert to a kurbo path, one subpath per spline
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        for spline in &self.splines {
            let mut points = spline.points.iter();
            let Some(&first) = points.next() else {
                continue;
            };
            path.move_to(first);
            for &point in points {
                path.line_to(point);
            }
            if spline.cyclic {
                path.close_path();
            }
        }
        path
    }

    /// Smallest rectangle containing every point, if there are any
    pub fn bounding_box(&self) -> Option<Rect> {
        self.splines
            .iter()
            .flat_map(|spline| spline.points.iter())
            .fold(None, |rect: Option<Rect>, &point| match rect {
                Some(rect) => Some(rect.union_pt(point)),
                None => Some(Rect::from_points(point, point)),
            })
    }
}

/// Repackage a layout result as a curve, preserving order and closure
pub fn assemble(result: LayoutResult) -> Curve {
    Curve {
        splines: result
            .into_subpaths()
            .into_iter()
            .map(|subpath| Spline {
                points: subpath.points,
                cyclic: subpath.closed,
            })
            .collect(),
    }
}
