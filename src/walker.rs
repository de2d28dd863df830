//! Depth-first directory traversal shared by every output.
//!
//! The [`Walker`] owns the ordering and exclusion logic; what happens at each
//! node is delegated to a [`Visitor`]. The tree renderer and the context
//! collector are both visitors over the same walk.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::config::ScanOptions;
use crate::filtering::is_excluded_dir;

/// A directory or file reached during the walk.
#[derive(Debug, Clone)]
pub struct Node {
    /// Full path of the entry
    pub path: PathBuf,

    /// Base name as displayed in the tree
    pub name: String,

    /// Distance from the scan root (the root itself is 0)
    pub depth: usize,

    /// Whether this is the last visited entry among its siblings.
    ///
    /// Excluded directories and files rejected by [`Visitor::keep_file`] never
    /// count as siblings.
    pub is_last: bool,
}

/// Callbacks invoked by [`Walker::walk`].
pub trait Visitor {
    /// Whether a file is visited at all.
    ///
    /// Files rejected here do not count as siblings when `is_last` is computed.
    fn keep_file(&self, _path: &Path) -> bool {
        true
    }

    /// Called before the children of a directory are listed.
    fn enter_dir(&mut self, _dir: &Node) {}

    /// Called after every child of a directory has been visited.
    fn leave_dir(&mut self, _dir: &Node) {}

    /// Called for each kept file.
    fn visit_file(&mut self, file: &Node);
}

/// Single-threaded, depth-first walker honoring the directory exclusion rules.
pub struct Walker<'a> {
    options: &'a ScanOptions,
}

impl<'a> Walker<'a> {
    #[must_use]
    pub const fn new(options: &'a ScanOptions) -> Self {
        Self { options }
    }

    /// Walk the scan root, feeding every visible node to `visitor`.
    ///
    /// The root itself is always entered, whatever its name. Children are
    /// visited sorted by file name. Symbolic links are followed; a directory
    /// that resolves to one of its own ancestors is listed but not descended.
    /// Unreadable directories and entries are logged and skipped; the walk
    /// never aborts.
    pub fn walk<V: Visitor>(&self, visitor: &mut V) {
        let root = &self.options.root_path;
        let node = Node {
            path: root.clone(),
            name: display_name(root),
            depth: 0,
            is_last: true,
        };

        let mut ancestors = Vec::new();
        self.walk_dir(&node, visitor, &mut ancestors);
    }

    fn walk_dir<V: Visitor>(
        &self,
        dir: &Node,
        visitor: &mut V,
        ancestors: &mut Vec<PathBuf>,
    ) {
        visitor.enter_dir(dir);

        let canonical = dir.path.canonicalize().ok();
        if let Some(canonical) = &canonical
            && ancestors.contains(canonical)
        {
            log::warn!(
                "Not descending into {}: it links back to {}",
                dir.path.display(),
                canonical.display()
            );
            visitor.leave_dir(dir);
            return;
        }
        if let Some(canonical) = canonical.clone() {
            ancestors.push(canonical);
        }

        match list_children(&dir.path) {
            Ok(children) => {
                let visible: Vec<DirEntry> = children
                    .into_iter()
                    .filter(|entry| self.is_visible(entry, visitor))
                    .collect();
                let count = visible.len();

                for (index, entry) in visible.into_iter().enumerate() {
                    // Links are followed, so this is the type of the target.
                    let is_dir = entry.file_type().is_dir();
                    let node = Node {
                        name: entry.file_name().to_string_lossy().into_owned(),
                        path: entry.into_path(),
                        depth: dir.depth + 1,
                        is_last: index + 1 == count,
                    };

                    if is_dir {
                        self.walk_dir(&node, visitor, ancestors);
                    } else {
                        visitor.visit_file(&node);
                    }
                }
            }
            Err(err) => {
                log::error!("Error reading directory {}: {err}", dir.path.display());
            }
        }

        if canonical.is_some() {
            ancestors.pop();
        }
        visitor.leave_dir(dir);
    }

    fn is_visible<V: Visitor>(&self, entry: &DirEntry, visitor: &V) -> bool {
        if entry.file_type().is_dir() {
            let name = entry.file_name().to_string_lossy();
            if is_excluded_dir(&name, self.options) {
                log::debug!("Skipping excluded directory {}", entry.path().display());
                return false;
            }
            return true;
        }

        if visitor.keep_file(entry.path()) {
            return true;
        }
        log::debug!("Skipping file {}", entry.path().display());
        false
    }
}

/// List the direct children of `dir`, sorted by file name, following links.
///
/// Fails only when the directory itself cannot be read; a single unreadable
/// entry (such as a dangling link) is logged and left out.
fn list_children(dir: &Path) -> Result<Vec<DirEntry>, walkdir::Error> {
    let mut children = Vec::new();

    for result in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        match result {
            Ok(entry) => children.push(entry),
            Err(err) if err.depth() == 0 => return Err(err),
            Err(err) => log::error!("Error reading entry in {}: {err}", dir.display()),
        }
    }

    Ok(children)
}

/// Name shown for the scan root.
///
/// Paths such as `.` or `..` have no file name of their own, so the
/// canonical path is consulted before falling back to the path as typed.
fn display_name(root: &Path) -> String {
    root.file_name()
        .map(ToOwned::to_owned)
        .or_else(|| {
            root.canonicalize()
                .ok()
                .and_then(|canonical| canonical.file_name().map(ToOwned::to_owned))
        })
        .map_or_else(
            || root.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
}
