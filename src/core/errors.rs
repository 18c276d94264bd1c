//! Error types
//!
//! Typed errors for the two places an operation can fail: loading a font
//! and validating the host selection. Glyph resolution never fails; a
//! missing glyph gets fallback geometry instead.

use std::path::PathBuf;
use thiserror::Error;

/// A named font could not be found or parsed
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("font '{name}' not found in {}", dir.display())]
    NotFound { name: String, dir: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("invalid stroke font JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to load UFO {}: {message}", path.display())]
    Ufo { path: PathBuf, message: String },
}

impl FontLoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}

/// The operator was invoked in a context where it cannot run
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvocationError {
    #[error("no selected object")]
    NothingSelected,

    #[error("need to operate on a text object, '{name}' is a {kind}")]
    NotText { name: String, kind: &'static str },

    #[error("source object '{name}' no longer exists")]
    SourceMissing { name: String },

    #[error("operator has not been invoked on a source object yet")]
    NotInvoked,
}

/// Everything that can abort a text-to-strokes operation
#[derive(Debug, Error)]
pub enum StrokeTextError {
    #[error(transparent)]
    Invocation(#[from] InvocationError),

    #[error(transparent)]
    FontLoad(#[from] FontLoadError),
}

impl StrokeTextError {
    /// Invocation problems cancel the operation rather than failing it
    pub fn is_cancellation(&self) -> bool {
        matches!(self, StrokeTextError::Invocation(_))
    }

    /// Message suitable for a host status line
    pub fn user_message(&self) -> String {
        match self {
            StrokeTextError::Invocation(error) => error.to_string(),
            StrokeTextError::FontLoad(error) => format!("cannot load font: {error}"),
        }
    }
}
