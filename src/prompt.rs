//! Interactive collection of the scan options.
//!
//! This is the only module that talks to the terminal for input. It asks the
//! questions once, in order, and hands back an immutable [`ScanOptions`].

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use inquire::{
    Confirm, CustomUserError, Text,
    validator::{ErrorMessage, Validation},
};

use crate::config::file::expand_tilde;
use crate::config::{
    DEFAULT_INCLUDE_EXTENSIONS, FileConfig, ScanOptions, merge_include_extensions,
};

/// Ask every question and build the scan options.
///
/// Answers pre-filled from `defaults` can be edited or cleared by the user.
/// The scan path is asked again until it names an existing directory.
///
/// # Errors
///
/// Returns an error if the terminal cannot be used for prompting or the user
/// cancels a prompt.
pub fn gather_options(defaults: &FileConfig) -> Result<ScanOptions> {
    let suggested_dir = defaults
        .dir
        .as_ref()
        .map(|dir| dir.display().to_string())
        .unwrap_or_default();

    let root_input = Text::new("Enter the folder to scan:")
        .with_initial_value(&suggested_dir)
        .with_validator(validate_scan_root)
        .prompt()
        .context("Failed to read the folder to scan")?;
    let root_path = resolve_scan_root(&root_input).map_err(anyhow::Error::msg)?;

    let exclude_node_modules = Confirm::new("Exclude node_modules folder?")
        .with_default(defaults.scan.exclude_node_modules.unwrap_or(true))
        .prompt()?;

    let exclude_dot_folders = Confirm::new("Exclude folders starting with a dot (.)?")
        .with_default(defaults.scan.exclude_dot_folders.unwrap_or(true))
        .prompt()?;

    let initial_folders = join_list(defaults.scan.exclude_folders.as_deref());
    let additional_exclude_folders = parse_list(
        &Text::new("Additional folders to exclude:")
            .with_initial_value(&initial_folders)
            .with_help_message("comma-separated, press enter for none")
            .prompt()?,
    );

    let initial_excluded = join_list(defaults.scan.exclude_extensions.as_deref());
    let exclude_extensions = parse_extensions(
        &Text::new("File extensions to exclude from the tree:")
            .with_initial_value(&initial_excluded)
            .with_help_message("comma-separated, press enter for none")
            .prompt()?,
    );

    let create_context_doc = Confirm::new("Create a context document?")
        .with_default(defaults.context.create.unwrap_or(true))
        .prompt()?;

    let include_extensions = if create_context_doc {
        let initial_included = join_list(defaults.context.include_extensions.as_deref());
        let help = format!(
            "comma-separated, always included: {}",
            DEFAULT_INCLUDE_EXTENSIONS.join(",")
        );
        merge_include_extensions(parse_extensions(
            &Text::new("Additional file extensions to include in the context document:")
                .with_initial_value(&initial_included)
                .with_help_message(&help)
                .prompt()?,
        ))
    } else {
        merge_include_extensions(std::iter::empty::<String>())
    };

    let initial_prefix = defaults.output.file_prefix.clone().unwrap_or_default();
    let file_prefix = Text::new("Prefix for output files:")
        .with_initial_value(&initial_prefix)
        .with_help_message("press enter for none")
        .prompt()?
        .trim()
        .to_string();

    Ok(ScanOptions {
        root_path,
        exclude_node_modules,
        exclude_dot_folders,
        additional_exclude_folders,
        exclude_extensions,
        include_extensions,
        create_context_doc,
        file_prefix,
    })
}

/// Split a comma-separated answer into trimmed, non-empty items.
#[must_use]
pub fn parse_list(input: &str) -> BTreeSet<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Like [`parse_list`], with a leading `.` removed from each extension.
#[must_use]
pub fn parse_extensions(input: &str) -> BTreeSet<String> {
    input
        .split(',')
        .map(|item| item.trim().trim_start_matches('.'))
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Resolve the scan path answer, requiring an existing directory.
///
/// # Errors
///
/// Returns a message suitable for re-prompting when the path is empty,
/// missing, or not a directory.
pub fn resolve_scan_root(input: &str) -> Result<PathBuf, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Please enter a folder to scan.".to_string());
    }

    let path = expand_tilde(&PathBuf::from(trimmed));
    if !path.exists() {
        return Err(format!(
            "The directory \"{trimmed}\" does not exist. Please enter a valid path."
        ));
    }
    if !path.is_dir() {
        return Err(format!("\"{trimmed}\" is not a directory."));
    }

    Ok(path)
}

fn validate_scan_root(input: &str) -> Result<Validation, CustomUserError> {
    Ok(match resolve_scan_root(input) {
        Ok(_) => Validation::Valid,
        Err(message) => Validation::Invalid(ErrorMessage::Custom(message)),
    })
}

fn join_list(items: Option<&[String]>) -> String {
    items.map(|items| items.join(", ")).unwrap_or_default()
}
