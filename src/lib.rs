//! strokefont
pub mod core;
pub mod font_source;
pub mod geometry;
pub mod host;
pub mod io;
pub mod layout;
pub mod logging;
#[cfg(test)]
mod tests;
