//! # dir-context
//!
//! An interactive CLI that snapshots a project directory.
//!
//! It asks which folder to scan and what to leave out, then writes two
//! artifacts under `./output/`:
//!
//! - `directory_tree.txt`: an ASCII tree in the style of the `tree` command
//! - `context_document.txt`: the contents of every file with an included
//!   extension, each preceded by a `// <relative path>` header
//!
//! ## Usage
//!
//! ```bash
//! # Answer the prompts
//! dir-context
//!
//! # Same, with debug logging of skipped folders
//! dir-context --verbose
//! ```
//!
//! Errors met while walking or writing are logged to stderr and never change
//! the exit code; only a failure to gather the options does.

mod cli;

use std::{env, process::exit};

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use dir_context::{
    OutputWriter,
    config::FileConfig,
    context::ContextCollector,
    prompt::gather_options,
    render_tree,
    walker::Walker,
};
use humansize::{DECIMAL, format_size};

/// Entry point for the dir-context application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("{} {err:#}", "Error:".red());

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// This function:
/// 1. Parses command-line arguments and sets up logging
/// 2. Loads the prompt defaults file (if present)
/// 3. Gathers the scan options interactively
/// 4. Renders and writes the directory tree
/// 5. Collects and writes the context document, when requested
///
/// # Errors
///
/// Only the setup and prompt phases can fail. Walk and write problems are
/// logged and the run still completes.
fn inner_main() -> Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    let file_config = FileConfig::load().unwrap_or_else(|e| {
        log::warn!("{e}");
        FileConfig::default()
    });

    let options = gather_options(&file_config)?;
    let cwd = env::current_dir().context("Failed to get current directory")?;

    let writer = OutputWriter::new(&cwd, options.file_prefix.as_str());
    if let Err(e) = writer.ensure_dir() {
        log::error!("{e:#}");
    }

    println!(
        "\n{} {}",
        "📂 Scanning".bold(),
        options.root_path.display().to_string().bright_white()
    );

    let tree = render_tree(&options);
    match writer.write_tree(&tree) {
        Ok(path) => println!(
            "{} {}",
            "🌳 Tree structure has been written to".green(),
            path.display()
        ),
        Err(e) => log::error!("{e:#}"),
    }

    if options.create_context_doc {
        let mut collector = ContextCollector::new(&options);
        Walker::new(&options).walk(&mut collector);
        let file_count = collector.file_count();
        let document = collector.finish();

        match writer.write_context(&document) {
            Ok(path) => println!(
                "{} {} {}",
                "📄 Context document has been written to".green(),
                path.display(),
                format!(
                    "({file_count} files, {})",
                    format_size(document.len(), DECIMAL)
                )
                .dimmed()
            ),
            Err(e) => log::error!("{e:#}"),
        }
    }

    Ok(())
}

/// Route `log` records to stderr.
///
/// `RUST_LOG` takes precedence over the `--verbose` flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
