//! Scan configuration.
//!
//! [`ScanOptions`] is built once by the prompt phase and then only read by the
//! tree renderer and the context collector.

use std::collections::BTreeSet;
use std::path::PathBuf;

/// Extensions always collected into the context document.
pub const DEFAULT_INCLUDE_EXTENSIONS: [&str; 5] = ["js", "jsx", "ts", "tsx", "vue"];

/// Options controlling a single scan.
///
/// Extensions are stored without a leading dot and are matched case-sensitively
/// against the extension of each file name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ScanOptions {
    /// Directory to scan. Its existence is checked before the options are built.
    pub root_path: PathBuf,

    /// Skip every directory named `node_modules`
    pub exclude_node_modules: bool,

    /// Skip every directory whose name starts with `.`
    pub exclude_dot_folders: bool,

    /// Directory names to skip (exact match on the base name)
    pub additional_exclude_folders: BTreeSet<String>,

    /// Extensions of files left out of the tree listing
    pub exclude_extensions: BTreeSet<String>,

    /// Extensions of files concatenated into the context document
    pub include_extensions: BTreeSet<String>,

    /// Whether a context document should be produced at all
    pub create_context_doc: bool,

    /// Prepended to the output file names (may be empty)
    pub file_prefix: String,
}

impl ScanOptions {
    /// Create options for `root_path` with the same defaults the prompts offer.
    #[must_use]
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            exclude_node_modules: true,
            exclude_dot_folders: true,
            additional_exclude_folders: BTreeSet::new(),
            exclude_extensions: BTreeSet::new(),
            include_extensions: merge_include_extensions(std::iter::empty::<String>()),
            create_context_doc: true,
            file_prefix: String::new(),
        }
    }
}

/// Union of [`DEFAULT_INCLUDE_EXTENSIONS`] and the user-supplied extensions.
pub fn merge_include_extensions<I, S>(extra: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    DEFAULT_INCLUDE_EXTENSIONS
        .iter()
        .map(|ext| (*ext).to_string())
        .chain(extra.into_iter().map(Into::into))
        .collect()
}
