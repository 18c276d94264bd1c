//! SVG curve output
//!
//! Curves live in a Y-up world; the path is wrapped in a vertical flip so
//! the text reads upright in SVG's Y-down canvas. Path data comes from
//! kurbo as a raw `d` string to keep full `f64` precision.

use crate::geometry::curve::Curve;
use svg::node::element::Path;
use svg::Document;

/// Build a standalone SVG document of stroked paths
pub fn render(curve: &Curve, stroke_width: f64) -> Document {
    let view_box = match curve.bounding_box() {
        Some(rect) => {
            let margin = stroke_width / 2.0;
            let rect = rect.inflate(margin, margin);
            // y flips: the top of the canvas is the highest world y
            format!("{} {} {} {}", rect.x0, -rect.y1, rect.width(), rect.height())
        }
        None => "0 0 0 0".to_string(),
    };

    let document = Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set("viewBox", view_box);
    if curve.is_empty() {
        return document;
    }

    let path = Path::new()
        .set("transform", "scale(1 -1)")
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", stroke_width.to_string())
        .set("stroke-linecap", "round")
        .set("stroke-linejoin", "round")
        .set("d", curve.to_bezpath().to_svg());
    document.add(path)
}

/// Render a curve as SVG markup
pub fn write_svg(curve: &Curve, stroke_width: f64) -> String {
    render(curve, stroke_width).to_string()
}
