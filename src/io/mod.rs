//! Curve output
//!
//! Writers that turn an assembled curve into files other tools can read.

pub mod json;
pub mod svg;

pub use self::json::to_json;
pub use self::svg::write_svg;
