//! ASCII tree rendering in the style of the `tree` command.

use std::path::Path;

use crate::config::ScanOptions;
use crate::filtering::is_listed_in_tree;
use crate::walker::{Node, Visitor, Walker};

/// Marker printed on the first line, standing for the scan root's position.
pub const ROOT_MARKER: &str = ".";

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const BLANK_INDENT: &str = "    ";

/// Visitor that emits one line per directory and per listed file.
pub struct TreeRenderer<'a> {
    options: &'a ScanOptions,
    output: String,
    /// `is_last` of every directory currently open, outermost first
    open_dirs: Vec<bool>,
}

impl<'a> TreeRenderer<'a> {
    #[must_use]
    pub fn new(options: &'a ScanOptions) -> Self {
        let mut output = String::from(ROOT_MARKER);
        output.push('\n');

        Self {
            options,
            output,
            open_dirs: Vec::new(),
        }
    }

    /// Consume the renderer and return the rendered tree.
    #[must_use]
    pub fn finish(self) -> String {
        self.output
    }

    fn push_line(&mut self, node: &Node) {
        for &ancestor_is_last in &self.open_dirs {
            self.output
                .push_str(if ancestor_is_last { BLANK_INDENT } else { PIPE_INDENT });
        }
        self.output
            .push_str(if node.is_last { LAST_BRANCH } else { BRANCH });
        self.output.push_str(&node.name);
        self.output.push('\n');
    }
}

impl Visitor for TreeRenderer<'_> {
    fn keep_file(&self, path: &Path) -> bool {
        is_listed_in_tree(path, self.options)
    }

    fn enter_dir(&mut self, dir: &Node) {
        self.push_line(dir);
        self.open_dirs.push(dir.is_last);
    }

    fn leave_dir(&mut self, _dir: &Node) {
        self.open_dirs.pop();
    }

    fn visit_file(&mut self, file: &Node) {
        self.push_line(file);
    }
}

/// Render the directory hierarchy under `options.root_path`.
///
/// The first line is always [`ROOT_MARKER`], followed by the root directory
/// itself. Directories that cannot be listed still get their own line but
/// contribute no children; the error is logged.
#[must_use]
pub fn render_tree(options: &ScanOptions) -> String {
    let mut renderer = TreeRenderer::new(options);
    Walker::new(options).walk(&mut renderer);
    renderer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_empty_directory() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("empty");
        fs::create_dir(&root).unwrap();

        let tree = render_tree(&ScanOptions::new(&root));
        assert_eq!(tree, ".\n└── empty\n");
    }

    #[test]
    fn test_nested_prefixes() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("app");
        create_file(&root.join("src/lib/util.ts"), "");
        create_file(&root.join("src/main.ts"), "");
        create_file(&root.join("tests/main.test.ts"), "");
        create_file(&root.join("package.json"), "{}");

        let tree = render_tree(&ScanOptions::new(&root));
        let expected = "\
.
└── app
    ├── package.json
    ├── src
    │   ├── lib
    │   │   └── util.ts
    │   └── main.ts
    └── tests
        └── main.test.ts
";
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_excluded_extension_is_not_listed_and_last_sibling_adjusts() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("site");
        create_file(&root.join("index.ts"), "");
        create_file(&root.join("logo.png"), "");

        let options = ScanOptions {
            exclude_extensions: ["png".to_string()].into(),
            ..ScanOptions::new(&root)
        };
        let tree = render_tree(&options);

        assert_eq!(tree, ".\n└── site\n    └── index.ts\n");
    }

    #[test]
    fn test_directories_are_descended_regardless_of_file_exclusions() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("site");
        create_file(&root.join("assets.png/readme.md"), "");

        let options = ScanOptions {
            exclude_extensions: ["png".to_string()].into(),
            ..ScanOptions::new(&root)
        };
        let tree = render_tree(&options);

        assert!(tree.contains("assets.png"));
        assert!(tree.contains("readme.md"));
    }

    #[test]
    fn test_excluded_directories_leave_no_line() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("proj");
        create_file(&root.join("a.ts"), "");
        create_file(&root.join("node_modules/b.ts"), "");
        create_file(&root.join(".git/HEAD"), "");
        create_file(&root.join("dist/bundle.js"), "");

        let options = ScanOptions {
            additional_exclude_folders: ["dist".to_string()].into(),
            ..ScanOptions::new(&root)
        };
        let tree = render_tree(&options);

        assert_eq!(tree, ".\n└── proj\n    └── a.ts\n");
    }

    #[test]
    fn test_dot_folders_listed_when_not_excluded() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("proj");
        create_file(&root.join(".github/ci.yml"), "");

        let options = ScanOptions {
            exclude_dot_folders: false,
            ..ScanOptions::new(&root)
        };
        let tree = render_tree(&options);

        assert_eq!(tree, ".\n└── proj\n    └── .github\n        └── ci.yml\n");
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("proj");
        for name in ["z.ts", "m.ts", "a/b/c.ts", "a/d.vue", "k/l.txt"] {
            create_file(&root.join(name), "x");
        }

        let options = ScanOptions::new(&root);
        assert_eq!(render_tree(&options), render_tree(&options));
    }

    #[test]
    fn test_renderer_starts_with_root_marker() {
        let options = ScanOptions::new("/nonexistent/for/sure");
        let tree = render_tree(&options);

        assert!(tree.starts_with(".\n"));
        assert_eq!(tree, ".\n└── sure\n");
    }
}
