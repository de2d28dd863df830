//! Configuration types for the application.
//!
//! This module holds the immutable scan options consumed by both walks and the
//! optional defaults file used to pre-fill the interactive prompts.

pub mod file;
pub mod scan;

pub use file::FileConfig;
pub use scan::{DEFAULT_INCLUDE_EXTENSIONS, ScanOptions, merge_include_extensions};
