//! Directory font provider tests

use crate::core::errors::FontLoadError;
use crate::font_source::json::save_json_font;
use crate::font_source::{
    font_choices, DirectoryFontProvider, Font, FontFormat, FontProvider, FontSelection,
    NO_FONT_LABEL, NO_FONT_SENTINEL,
};
use std::cell::Cell;
use std::fs;
use std::path::Path;

const HERSHEY_A: &str = "   32  1JZ\n   65  9MWRFJ[ RRFZ[ RMTWT\n";

fn write(dir: &Path, file: &str, contents: &str) {
    fs::write(dir.join(file), contents).unwrap();
}

#[test]
fn test_lists_fonts_by_stem() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "timesr.jhf", HERSHEY_A);
    write(dir.path(), "timesr.hmp", "32-65");
    write(dir.path(), "futural.jhf", HERSHEY_A);
    write(dir.path(), "notes.txt", "not a font");
    fs::create_dir(dir.path().join("single.ufo")).unwrap();

    let provider = DirectoryFontProvider::new(dir.path());
    assert_eq!(
        provider.font_names().unwrap(),
        vec!["futural".to_string(), "single".to_string(), "timesr".to_string()]
    );

    let choices = font_choices(&provider).unwrap();
    assert_eq!(choices[0].id, NO_FONT_SENTINEL);
    assert_eq!(choices[0].label, NO_FONT_LABEL);
    assert_eq!(choices[1].id, "futural");
    assert_eq!(choices.len(), 4);
}

#[test]
fn test_missing_font_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let provider = DirectoryFontProvider::new(dir.path());
    match provider.load("nope") {
        Err(FontLoadError::NotFound { name, .. }) => assert_eq!(name, "nope"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_missing_directory_cannot_be_listed() {
    let provider = DirectoryFontProvider::new("/definitely/not/a/font/dir");
    assert!(matches!(provider.font_names(), Err(FontLoadError::Io { .. })));
}

#[test]
fn test_hershey_with_character_map() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "mapped.jhf", HERSHEY_A);
    write(dir.path(), "mapped.hmp", "65");

    let font = DirectoryFontProvider::new(dir.path()).load("mapped").unwrap();
    let encoding = font.encoding.as_ref().unwrap();
    assert_eq!(encoding.len(), 1);
    // the first mapped glyph lands on the space codepoint
    assert_eq!(font.glyph_id(' '), Some(65));
    assert!(!font.lookup('A').is_found());
}

#[test]
fn test_hershey_takes_priority_over_json() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "dup.jhf", HERSHEY_A);
    write(dir.path(), "dup.json", "{ not json");

    let provider = DirectoryFontProvider::new(dir.path());
    let (path, format) = provider.locate("dup").unwrap();
    assert_eq!(format, FontFormat::Hershey);
    assert_eq!(FontFormat::from_path(&path), Some(FontFormat::Hershey));
    assert!(provider.load("dup").is_ok());
}

#[test]
fn test_json_font_round_trips_through_provider() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "source.jhf", HERSHEY_A);
    let provider = DirectoryFontProvider::new(dir.path());
    let font = provider.load("source").unwrap();

    save_json_font(&font, &dir.path().join("copy.json")).unwrap();
    let copy: Font = provider.load("copy").unwrap();
    assert_eq!(copy.glyphs, font.glyphs);
    assert_eq!(copy.bounds, font.bounds);
    assert_eq!(copy.baseline_y, font.baseline_y);
    assert!((copy.scale - font.scale).abs() < 1e-12);
}

#[test]
fn test_invalid_json_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "bad.json", r#"{ "scale": "big" }"#);
    match DirectoryFontProvider::new(dir.path()).load("bad") {
        Err(FontLoadError::Json { path, .. }) => assert!(path.ends_with("bad.json")),
        other => panic!("expected Json error, got {other:?}"),
    }
}

struct CountingProvider {
    loads: Cell<usize>,
}

impl FontProvider for CountingProvider {
    fn load(&self, name: &str) -> Result<Font, FontLoadError> {
        self.loads.set(self.loads.get() + 1);
        Err(FontLoadError::NotFound {
            name: name.to_string(),
            dir: "/".into(),
        })
    }

    fn font_names(&self) -> Result<Vec<String>, FontLoadError> {
        Ok(Vec::new())
    }
}

#[test]
fn test_sentinel_selection_never_loads() {
    let provider = CountingProvider { loads: Cell::new(0) };

    assert_eq!(FontSelection::parse(NO_FONT_SENTINEL), FontSelection::NoFont);
    assert_eq!(FontSelection::parse(""), FontSelection::NoFont);
    assert!(FontSelection::NoFont.resolve(&provider).unwrap().is_none());
    assert_eq!(provider.loads.get(), 0);

    let named = FontSelection::parse("futural");
    assert_eq!(named.name(), Some("futural"));
    assert!(named.resolve(&provider).is_err());
    assert_eq!(provider.loads.get(), 1);
}
