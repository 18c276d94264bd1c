//! Core application functionality
//!
//! This module contains the application layer around the layout engine:
//! - CLI parsing and settings resolution
//! - User configuration file
//! - Error types
//! - The runner that wires fonts, host scene and output together

pub mod cli;
pub mod config_file;
pub mod errors;
pub mod platform;
pub mod runner;

// Re-export commonly used items
pub use cli::{CliArgs, OutputFormat};
pub use config_file::ConfigFile;
pub use errors::{FontLoadError, InvocationError, StrokeTextError};
pub use runner::run_app;
