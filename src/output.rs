//! Persistence of the generated artifacts.
//!
//! Both artifacts land in an `output/` directory under a base directory (the
//! current working directory for the binary). Each write is independent: a
//! failure to write one artifact never prevents an attempt at the other.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Name of the directory created to hold the artifacts.
pub const OUTPUT_DIR_NAME: &str = "output";

/// Base file name of the tree artifact.
pub const TREE_FILE_NAME: &str = "directory_tree.txt";

/// Base file name of the context document artifact.
pub const CONTEXT_FILE_NAME: &str = "context_document.txt";

/// Writes artifacts to `<base>/output/<prefix><name>`.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    dir: PathBuf,
    prefix: String,
}

impl OutputWriter {
    #[must_use]
    pub fn new(base: &Path, prefix: impl Into<String>) -> Self {
        Self {
            dir: base.join(OUTPUT_DIR_NAME),
            prefix: prefix.into(),
        }
    }

    /// The directory artifacts are written to.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the output directory if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create output directory {}", self.dir.display())
        })
    }

    /// File name for the artifact `base`, with the prefix applied.
    ///
    /// A single leading `_` is dropped from the result, so an empty prefix
    /// yields exactly `base`.
    #[must_use]
    pub fn file_name(&self, base: &str) -> String {
        let name = format!("{}{base}", self.prefix);
        match name.strip_prefix('_') {
            Some(stripped) => stripped.to_string(),
            None => name,
        }
    }

    /// Write the tree artifact, returning the path written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_tree(&self, tree: &str) -> Result<PathBuf> {
        self.write(TREE_FILE_NAME, tree)
            .context("Error writing tree to file")
    }

    /// Write the context document artifact, returning the path written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_context(&self, document: &str) -> Result<PathBuf> {
        self.write(CONTEXT_FILE_NAME, document)
            .context("Error writing context document")
    }

    fn write(&self, base: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.join(self.file_name(base));
        fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
        log::debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(path)
    }
}
