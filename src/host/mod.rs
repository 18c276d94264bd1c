//! Host integration
//!
//! The glue between an editing environment and the layout core: a small
//! scene model and the operator that converts a text object into strokes.

pub mod operator;
pub mod scene;

pub use operator::{StrokeTextOperator, CURVE_NAME_SUFFIX};
pub use scene::{ObjectData, Scene, SceneObject};
