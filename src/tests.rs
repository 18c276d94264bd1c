#[cfg(test)]
mod scenario_tests {
    use crate::font_source::{Bounds, Font, Glyph};
    use crate::geometry::curve::assemble;
    use crate::layout::layout;
    use kurbo::Point;
    use std::collections::BTreeMap;

    /// scale 1, baseline 0, bounds (0,0)-(10,20), one glyph for 'A'
    fn font_with_a() -> Font {
        let mut glyphs = BTreeMap::new();
        glyphs.insert(
            65,
            Glyph::new(
                0.0,
                8.0,
                vec![vec![Point::new(0.0, 0.0), Point::new(4.0, 20.0), Point::new(8.0, 0.0)]],
            ),
        );
        Font {
            scale: 1.0,
            baseline_y: 0.0,
            bounds: Bounds::new(Point::new(0.0, 0.0), Point::new(10.0, 20.0)),
            encoding: None,
            glyphs,
        }
    }

    #[test]
    fn test_single_glyph_is_flipped() {
        let font = font_with_a();
        let result = layout("A", Some(&font));

        assert_eq!(result.len(), 1);
        let stroke = &result.subpaths()[0];
        assert!(!stroke.closed);
        assert_eq!(stroke.points.len(), 3);
        assert_eq!(stroke.points[0], Point::new(0.0, 0.0));
        assert_eq!(stroke.points[1], Point::new(4.0, -20.0));
        assert_eq!(stroke.points[2], Point::new(8.0, 0.0));
        assert_eq!(result.advance(), 8.0);
    }

    #[test]
    fn test_missing_glyph_draws_bounds_box() {
        let font = font_with_a();
        let result = layout("B", Some(&font));

        assert_eq!(result.len(), 1);
        let rect = &result.subpaths()[0];
        assert!(rect.closed);
        assert_eq!(
            rect.points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, -20.0),
                Point::new(0.0, -20.0),
            ]
        );
        assert_eq!(result.advance(), 10.0);
    }

    #[test]
    fn test_second_character_starts_at_first_advance() {
        let font = font_with_a();
        let result = layout("AB", Some(&font));

        assert_eq!(result.len(), 2);
        let rect = &result.subpaths()[1];
        assert_eq!(rect.points[0], Point::new(8.0, 0.0));
        assert_eq!(rect.points[2], Point::new(18.0, -20.0));
        assert_eq!(result.advance(), 18.0);
    }

    #[test]
    fn test_unmapped_character_with_encoding_draws_box() {
        let mut font = font_with_a();
        font.encoding = Some(BTreeMap::from([(u32::from('x'), 65)]));

        let result = layout("xA", Some(&font));
        assert_eq!(result.len(), 2);
        assert!(!result.subpaths()[0].closed);
        assert!(result.subpaths()[1].closed);
        assert_eq!(result.subpaths()[1].points.len(), 4);
        assert_eq!(result.subpaths()[1].points[0], Point::new(8.0, 0.0));
    }

    #[test]
    fn test_characters_never_start_left_of_previous_character() {
        let font = font_with_a();
        let text = "ABAAB";
        let result = layout(text, Some(&font));

        // each character here emits exactly one subpath
        assert_eq!(result.len(), text.chars().count());
        let starts: Vec<f64> = result
            .subpaths()
            .iter()
            .map(|subpath| subpath.points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min))
            .collect();
        for pair in starts.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert_eq!(starts, vec![0.0, 8.0, 18.0, 26.0, 34.0]);
    }

    #[test]
    fn test_empty_inputs() {
        let font = font_with_a();
        assert!(layout("", Some(&font)).is_empty());
        assert!(layout("AB", None).is_empty());
        assert!(assemble(layout("AB", None)).is_empty());
    }

    #[test]
    fn test_assembly_preserves_order_and_closure() {
        let font = font_with_a();
        let result = layout("ABA", Some(&font));
        let expected: Vec<_> = result.subpaths().to_vec();
        let curve = assemble(result);

        assert_eq!(curve.splines.len(), expected.len());
        for (spline, subpath) in curve.splines.iter().zip(&expected) {
            assert_eq!(spline.points, subpath.points);
            assert_eq!(spline.cyclic, subpath.closed);
        }
    }
}

#[cfg(test)]
mod property_tests {
    use crate::font_source::hershey::{font_from_glyphs, parse_jhf};
    use crate::font_source::Font;
    use crate::geometry::curve::assemble;
    use crate::geometry::world_space::world_to_glyph;
    use crate::layout::layout;
    use std::path::Path;

    /// space, 'A' and 'I' in Hershey notation, numbered by codepoint
    const FONT: &str = "   32  1JZ\n   65  9MWRFJ[ RRFZ[ RMTWT\n   73  3NVRFR[\n";

    const SAMPLES: &[&str] = &["", "A", "AIA", "A I", "I\u{0}A", "zzz", "\u{1F600}A\nI", "  "];

    fn font() -> Font {
        font_from_glyphs(parse_jhf(FONT, Path::new("props.jhf")).unwrap(), None)
    }

    fn advance_of(font: &Font, ch: char) -> f64 {
        font.lookup(ch)
            .glyph()
            .map_or(font.bounds.width(), |glyph| glyph.advance_width())
    }

    #[test]
    fn test_layout_is_deterministic() {
        let font = font();
        for text in SAMPLES {
            assert_eq!(layout(text, Some(&font)), layout(text, Some(&font)));
        }
    }

    #[test]
    fn test_total_advance_is_sum_of_widths() {
        let font = font();
        for text in SAMPLES {
            let expected: f64 = text.chars().map(|ch| advance_of(&font, ch)).sum::<f64>() * font.scale;
            let result = layout(text, Some(&font));
            assert!((result.advance() - expected).abs() < 1e-9, "{text:?}");
        }
    }

    #[test]
    fn test_inverse_transform_recovers_glyph_points() {
        let font = font();
        let result = layout("AIA", Some(&font));
        let mut pen = 0.0;
        let mut subpaths = result.subpaths().iter();
        for ch in "AIA".chars() {
            let glyph = font.lookup(ch).glyph().unwrap();
            for stroke in &glyph.path {
                let rendered = subpaths.next().unwrap();
                for (local, world) in stroke.iter().zip(&rendered.points) {
                    let back = world_to_glyph(&font, pen) * *world;
                    assert!((back - *local).hypot() < 1e-9);
                }
            }
            pen += glyph.advance_width() * font.scale;
        }
    }

    #[test]
    fn test_fallback_count_matches_missing_glyphs() {
        let font = font();
        for text in SAMPLES {
            let curve = assemble(layout(text, Some(&font)));
            let boxes = curve.splines.iter().filter(|spline| spline.cyclic).count();
            assert_eq!(boxes, font.missing_glyph_count(text), "{text:?}");
            assert!(curve
                .splines
                .iter()
                .filter(|spline| spline.cyclic)
                .all(|spline| spline.points.len() == 4));
        }
    }
}
