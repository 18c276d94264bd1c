//! Command line interface for strokefont
//!
//! Handles parsing command line arguments and resolving each setting
//! against the user config file and built-in defaults.

use crate::core::config_file::ConfigFile;
use crate::font_source::provider::DEFAULT_FLATTEN_TOLERANCE;
use crate::font_source::{FontSelection, NO_FONT_SENTINEL};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::debug;

/// Where Hershey fonts are usually installed
pub const DEFAULT_FONT_DIR: &str = "/usr/share/hershey-fonts";

pub const DEFAULT_STROKE_WIDTH: f64 = 0.02;

/// Output file formats
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Svg,
    Json,
}

impl OutputFormat {
    pub fn parse(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}

/// strokefont CLI arguments
///
/// Examples:
///   strokefont --list-fonts                          # Show available fonts
///   strokefont -t "Hello" -f futural                 # SVG of "Hello" on stdout
///   strokefont -t "Hello" -f futural -o hello.svg    # Write to a file
///   strokefont -t "Hello" -f rowmans --format json   # Curve points as JSON
///   strokefont -t "Hello"                            # No font: empty curve
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = "strokefont",
    version,
    about = "Turn text into stroke-font curves",
    long_about = "strokefont lays out text with a stroke font (Hershey .jhf, JSON or UFO) and writes the resulting polylines as SVG or JSON. Characters the font has no glyph for are drawn as a box the size of the font bounds."
)]
pub struct CliArgs {
    /// Text to convert
    #[clap(long = "text", short = 't', default_value = "")]
    pub text: String,

    /// Font name to use
    ///
    /// The name is looked up as <name>.jhf, <name>.json or <name>.ufo in the
    /// font directory. A single space selects no font.
    #[clap(
        long = "font",
        short = 'f',
        help = "Stroke font name",
        long_help = "Name of the stroke font, looked up as <name>.jhf, <name>.json or <name>.ufo in the font directory. Omit it, or pass a single space, to produce an empty curve."
    )]
    pub font: Option<String>,

    /// Directory containing stroke fonts
    #[clap(long = "font-dir", help = "Directory containing stroke fonts")]
    pub font_dir: Option<PathBuf>,

    /// Output format
    #[clap(long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file; stdout when omitted
    #[clap(long = "output", short = 'o')]
    pub output: Option<PathBuf>,

    /// SVG stroke width in world units (one unit is the font height for Hershey fonts)
    #[clap(long = "stroke-width")]
    pub stroke_width: Option<f64>,

    /// Curve flattening tolerance for UFO sources, in font units
    #[clap(long = "flatten-tolerance")]
    pub flatten_tolerance: Option<f64>,

    /// List available fonts and exit
    #[clap(long = "list-fonts")]
    pub list_fonts: bool,

    /// Write the selected font in the JSON stroke font format and exit
    #[clap(long = "export-font", value_name = "PATH")]
    pub export_font: Option<PathBuf>,

    /// Initialize user configuration directory with default settings
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with settings",
        long_help = "Initialize the ~/.config/strokefont directory with a settings.json file and a logs directory."
    )]
    pub new_config: bool,

    /// Write logs to ~/.config/strokefont/logs instead of stderr
    #[clap(long = "log-file")]
    pub log_file: bool,

    /// Enable debug logging
    #[clap(long = "verbose", short = 'v')]
    pub verbose: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    pub fn validate(&self) -> Result<(), String> {
        if let Some(width) = self.stroke_width {
            if !(width.is_finite() && width > 0.0) {
                return Err(format!("Stroke width must be a positive number, got {width}"));
            }
        }
        if let Some(tolerance) = self.flatten_tolerance {
            if !(tolerance.is_finite() && tolerance > 0.0) {
                return Err(format!(
                    "Flatten tolerance must be a positive number, got {tolerance}"
                ));
            }
        }
        if let Some(dir) = &self.font_dir {
            if !dir.is_dir() {
                return Err(format!(
                    "Font directory does not exist: {}\nMake sure the path is correct.",
                    dir.display()
                ));
            }
        }
        Ok(())
    }

    /// Font directory from CLI args, config file, or default
    pub fn font_dir(&self, config: Option<&ConfigFile>) -> PathBuf {
        if let Some(dir) = &self.font_dir {
            return dir.clone();
        }
        if let Some(dir) = config.and_then(|config| config.font_dir.clone()) {
            debug!("Using font directory from config file: {:?}", dir);
            return dir;
        }
        PathBuf::from(DEFAULT_FONT_DIR)
    }

    /// Font selection from CLI args, config file, or no font
    pub fn font_selection(&self, config: Option<&ConfigFile>) -> FontSelection {
        let name = self
            .font
            .clone()
            .or_else(|| config.and_then(|config| config.default_font.clone()))
            .unwrap_or_else(|| NO_FONT_SENTINEL.to_string());
        FontSelection::parse(&name)
    }

    /// Output format from CLI args, config file, or SVG
    pub fn output_format(&self, config: Option<&ConfigFile>) -> OutputFormat {
        if let Some(format) = self.format {
            return format;
        }
        config
            .and_then(|config| config.format.as_deref())
            .and_then(OutputFormat::parse)
            .unwrap_or_default()
    }

    pub fn stroke_width(&self, config: Option<&ConfigFile>) -> f64 {
        self.stroke_width
            .or_else(|| config.and_then(|config| config.stroke_width))
            .unwrap_or(DEFAULT_STROKE_WIDTH)
    }

    pub fn flatten_tolerance(&self, config: Option<&ConfigFile>) -> f64 {
        self.flatten_tolerance
            .or_else(|| config.and_then(|config| config.flatten_tolerance))
            .unwrap_or(DEFAULT_FLATTEN_TOLERANCE)
    }
}
