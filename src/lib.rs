//! # dir-context
//!
//! Snapshot a project directory as an ASCII tree and, optionally, a single
//! "context document" holding the contents of selected source files.
//!
//! Both outputs are produced by one depth-first [`walker::Walker`] driving a
//! different [`walker::Visitor`]: [`tree::TreeRenderer`] for the tree and
//! [`context::ContextCollector`] for the document. Directory exclusion rules
//! live in [`filtering`] and are shared by both.

pub mod config;
pub mod context;
pub mod filtering;
pub mod output;
pub mod prompt;
pub mod tree;
pub mod walker;

pub use config::ScanOptions;
pub use context::collect_context;
pub use output::OutputWriter;
pub use tree::render_tree;
