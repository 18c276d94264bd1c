//! Stroke font sources
//!
//! This module contains the font model consumed by layout and the
//! providers that load it from Hershey, JSON and UFO files.

pub mod data;
pub mod hershey;
pub mod json;
pub mod provider;
pub mod ufo;

#[cfg(test)]
mod tests;

// Explicit re-exports for public API
// Data structures
pub use data::{Bounds, Font, Glyph, GlyphId, GlyphLookup, Subpath};
// Providers
pub use provider::{
    font_choices, DirectoryFontProvider, FontChoice, FontFormat, FontProvider, FontSelection,
    NO_FONT_LABEL, NO_FONT_SENTINEL,
};
