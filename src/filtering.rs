//! Exclusion rules shared by the tree renderer and the context collector.
//!
//! Directory exclusion is decided in exactly one place, [`is_excluded_dir`],
//! so the two walks can never disagree about which subtrees are skipped.

use std::path::Path;

use crate::config::ScanOptions;

/// Name of the dependency directory skipped by `exclude_node_modules`.
pub const NODE_MODULES: &str = "node_modules";

/// Decide whether a directory (and everything beneath it) is skipped.
///
/// Any one of these rules excludes the directory:
/// - it is named `node_modules` and `exclude_node_modules` is set
/// - its name starts with `.` and `exclude_dot_folders` is set
/// - its name is listed in `additional_exclude_folders` (exact match)
#[must_use]
pub fn is_excluded_dir(name: &str, options: &ScanOptions) -> bool {
    (options.exclude_node_modules && name == NODE_MODULES)
        || (options.exclude_dot_folders && name.starts_with('.'))
        || options.additional_exclude_folders.contains(name)
}

/// Extension of a file name without the leading dot.
///
/// Returns an empty string when the name has no extension. A name made only of
/// a leading dot and a stem, such as `.bashrc`, has no extension.
#[must_use]
pub fn file_extension(path: &Path) -> &str {
    path.extension().and_then(|ext| ext.to_str()).unwrap_or("")
}

/// Whether a file appears in the tree listing.
#[must_use]
pub fn is_listed_in_tree(path: &Path, options: &ScanOptions) -> bool {
    !options.exclude_extensions.contains(file_extension(path))
}

/// Whether a file's contents go into the context document.
#[must_use]
pub fn is_included_in_context(path: &Path, options: &ScanOptions) -> bool {
    options.include_extensions.contains(file_extension(path))
}
