//! Font lookup by name
//!
//! A [`FontProvider`] turns a font name into a loaded [`Font`]. Hosts pass
//! a [`FontSelection`], which may be the "no font" sentinel; in that case
//! the provider is never consulted and layout produces empty geometry.

use super::data::Font;
use super::hershey::load_hershey;
use super::json::load_json_font;
use super::ufo::load_ufo;
use crate::core::errors::FontLoadError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Value hosts use in font pickers to mean "no font selected"
pub const NO_FONT_SENTINEL: &str = " ";

/// Label shown next to the sentinel entry in font pickers
pub const NO_FONT_LABEL: &str = "(pick a font)";

/// Default flattening tolerance for curved sources, in font units
pub const DEFAULT_FLATTEN_TOLERANCE: f64 = 1.0;

/// Resolves font names to loaded fonts
pub trait FontProvider {
    /// Load the named font
    fn load(&self, name: &str) -> Result<Font, FontLoadError>;

    /// Names of every font this provider can load, sorted
    fn font_names(&self) -> Result<Vec<String>, FontLoadError>;
}

/// The font choice made in the host
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FontSelection {
    #[default]
    NoFont,
    Named(String),
}

impl FontSelection {
    /// Interpret a picker value; the sentinel and the empty string mean no font
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == NO_FONT_SENTINEL {
            FontSelection::NoFont
        } else {
            FontSelection::Named(value.to_string())
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            FontSelection::NoFont => None,
            FontSelection::Named(name) => Some(name),
        }
    }

    /// Load the selected font, if any
    ///
    /// Load failures propagate; there is no fallback font.
    pub fn resolve(&self, provider: &dyn FontProvider) -> Result<Option<Font>, FontLoadError> {
        match self {
            FontSelection::NoFont => Ok(None),
            FontSelection::Named(name) => provider.load(name).map(Some),
        }
    }
}

/// One entry of a font picker
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontChoice {
    pub id: String,
    pub label: String,
}

/// Picker entries: the "no font" sentinel first, then every available font
pub fn font_choices(provider: &dyn FontProvider) -> Result<Vec<FontChoice>, FontLoadError> {
    let mut choices = vec![FontChoice {
        id: NO_FONT_SENTINEL.to_string(),
        label: NO_FONT_LABEL.to_string(),
    }];
    choices.extend(provider.font_names()?.into_iter().map(|name| FontChoice {
        id: name.clone(),
        label: name,
    }));
    Ok(choices)
}

/// Font file formats, in lookup priority order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontFormat {
    Hershey,
    Json,
    Ufo,
}

impl FontFormat {
    pub const ALL: [FontFormat; 3] = [FontFormat::Hershey, FontFormat::Json, FontFormat::Ufo];

    pub fn extension(&self) -> &'static str {
        match self {
            FontFormat::Hershey => "jhf",
            FontFormat::Json => "json",
            FontFormat::Ufo => "ufo",
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        Self::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(extension))
    }
}

/// Loads fonts stored as files in a single directory
#[derive(Clone, Debug)]
pub struct DirectoryFontProvider {
    dir: PathBuf,
    flatten_tolerance: f64,
}

impl DirectoryFontProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            flatten_tolerance: DEFAULT_FLATTEN_TOLERANCE,
        }
    }

    pub fn with_flatten_tolerance(mut self, tolerance: f64) -> Self {
        self.flatten_tolerance = tolerance;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Find the file backing `name`, trying each format in priority order
    pub fn locate(&self, name: &str) -> Option<(PathBuf, FontFormat)> {
        FontFormat::ALL.into_iter().find_map(|format| {
            let path = self.dir.join(format!("{name}.{}", format.extension()));
            path.exists().then_some((path, format))
        })
    }
}

impl FontProvider for DirectoryFontProvider {
    fn load(&self, name: &str) -> Result<Font, FontLoadError> {
        let (path, format) = self.locate(name).ok_or_else(|| FontLoadError::NotFound {
            name: name.to_string(),
            dir: self.dir.clone(),
        })?;

        let font = match format {
            FontFormat::Hershey => load_hershey(&path)?,
            FontFormat::Json => load_json_font(&path)?,
            FontFormat::Ufo => load_ufo(&path, self.flatten_tolerance)?,
        };
        info!("Loaded font '{}' ({} glyphs) from {:?}", name, font.glyphs.len(), path);
        Ok(font)
    }

    fn font_names(&self) -> Result<Vec<String>, FontLoadError> {
        let entries = fs::read_dir(&self.dir).map_err(|e| FontLoadError::io(&self.dir, e))?;
        let mut names = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| FontLoadError::io(&self.dir, e))?.path();
            if FontFormat::from_path(&path).is_none() {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        names.dedup();
        debug!("Found {} fonts in {:?}", names.len(), self.dir);
        Ok(names)
    }
}
