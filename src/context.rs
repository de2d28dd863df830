//! Context document collection.
//!
//! Every file whose extension is in the include set is appended to a single
//! document as a block:
//!
//! ```text
//! // <path relative to the scan root>
//! <file contents>
//!
//! ```

use std::fs;
use std::path::Path;

use crate::config::ScanOptions;
use crate::filtering::is_included_in_context;
use crate::walker::{Node, Visitor, Walker};

/// Visitor that concatenates included files into one document.
pub struct ContextCollector<'a> {
    options: &'a ScanOptions,
    document: String,
    file_count: usize,
}

impl<'a> ContextCollector<'a> {
    #[must_use]
    pub const fn new(options: &'a ScanOptions) -> Self {
        Self {
            options,
            document: String::new(),
            file_count: 0,
        }
    }

    /// Number of files appended so far.
    #[must_use]
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Consume the collector and return the document.
    #[must_use]
    pub fn finish(self) -> String {
        self.document
    }

    fn relative_path(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.options.root_path).unwrap_or(path);
        relative.to_string_lossy().replace('\\', "/")
    }
}

impl Visitor for ContextCollector<'_> {
    fn keep_file(&self, path: &Path) -> bool {
        is_included_in_context(path, self.options)
    }

    fn visit_file(&mut self, file: &Node) {
        match fs::read_to_string(&file.path) {
            Ok(content) => {
                let relative = self.relative_path(&file.path);
                self.document.push_str("// ");
                self.document.push_str(&relative);
                self.document.push('\n');
                self.document.push_str(&content);
                self.document.push_str("\n\n");
                self.file_count += 1;
            }
            Err(err) => {
                log::error!("Error reading file {}: {err}", file.path.display());
            }
        }
    }
}

/// Concatenate every included file under `options.root_path`.
///
/// Unreadable directories and files (including files that are not valid
/// UTF-8) are logged and left out; the rest of the document is still built.
#[must_use]
pub fn collect_context(options: &ScanOptions) -> String {
    let mut collector = ContextCollector::new(options);
    Walker::new(options).walk(&mut collector);
    collector.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_empty_directory_yields_empty_document() {
        let tmp = TempDir::new().unwrap();

        let document = collect_context(&ScanOptions::new(tmp.path()));
        assert_eq!(document, "");
    }

    #[test]
    fn test_block_format() {
        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("src/app.ts"), "export const x = 1;");

        let document = collect_context(&ScanOptions::new(tmp.path()));
        assert_eq!(document, "// src/app.ts\nexport const x = 1;\n\n");
    }

    #[test]
    fn test_contents_are_kept_verbatim() {
        let tmp = TempDir::new().unwrap();
        let content = "line one\n\n  indented — ünïcode\n";
        create_file(&tmp.path().join("a.js"), content);

        let document = collect_context(&ScanOptions::new(tmp.path()));
        assert_eq!(document, format!("// a.js\n{content}\n\n"));
    }

    #[test]
    fn test_only_included_extensions() {
        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("a.ts"), "a");
        create_file(&tmp.path().join("b.rs"), "b");
        create_file(&tmp.path().join("README"), "c");

        let options = ScanOptions::new(tmp.path());
        let mut collector = ContextCollector::new(&options);
        Walker::new(&options).walk(&mut collector);

        assert_eq!(collector.file_count(), 1);
        assert_eq!(collector.finish(), "// a.ts\na\n\n");
    }

    #[test]
    fn test_user_extensions_are_collected() {
        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("lib.rs"), "fn f() {}");

        let options = ScanOptions {
            include_extensions: crate::config::merge_include_extensions(["rs"]),
            ..ScanOptions::new(tmp.path())
        };

        assert_eq!(collect_context(&options), "// lib.rs\nfn f() {}\n\n");
    }

    #[test]
    fn test_excluded_directories_are_not_collected() {
        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("a.ts"), "a");
        create_file(&tmp.path().join("node_modules/b.ts"), "b");
        create_file(&tmp.path().join(".cache/c.ts"), "c");
        create_file(&tmp.path().join("build/d.ts"), "d");

        let options = ScanOptions {
            additional_exclude_folders: ["build".to_string()].into(),
            ..ScanOptions::new(tmp.path())
        };

        assert_eq!(collect_context(&options), "// a.ts\na\n\n");
    }

    #[test]
    fn test_tree_exclusions_do_not_affect_collection() {
        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("a.ts"), "a");

        let options = ScanOptions {
            exclude_extensions: ["ts".to_string()].into(),
            ..ScanOptions::new(tmp.path())
        };

        assert_eq!(collect_context(&options), "// a.ts\na\n\n");
    }

    #[test]
    fn test_invalid_utf8_is_skipped() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("bad.js"), [0xff, 0xfe, 0x00, 0x61]).unwrap();
        create_file(&tmp.path().join("good.js"), "ok");

        let options = ScanOptions::new(tmp.path());
        let mut collector = ContextCollector::new(&options);
        Walker::new(&options).walk(&mut collector);

        assert_eq!(collector.file_count(), 1);
        assert_eq!(collector.finish(), "// good.js\nok\n\n");
    }

    #[test]
    fn test_depth_first_order() {
        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("b.ts"), "b");
        create_file(&tmp.path().join("a/x.ts"), "x");
        create_file(&tmp.path().join("c.ts"), "c");

        let document = collect_context(&ScanOptions::new(tmp.path()));
        assert_eq!(document, "// a/x.ts\nx\n\n// b.ts\nb\n\n// c.ts\nc\n\n");
    }
}
