//! Geometric Primitives and Operations

pub mod curve;
pub mod world_space;

// Re-export commonly used items
pub use curve::{assemble, Curve, Spline};
pub use world_space::{glyph_to_world, to_world, world_to_glyph};
