// src/core/loader.rs
use anyhow::{Context as _, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::models::{FilteredNote, Note};
use crate::utils::is_hidden;

/// Reads a scraped export: a JSON array of note records.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The content is not valid JSON
/// * The JSON root is not an array
/// * An array entry is not a note object
pub fn load_notes(path: &Path) -> Result<Vec<Note>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let root: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))?;
    if !root.is_array() {
        bail!("JSON root must be an array of notes: {}", path.display());
    }

    serde_json::from_value(root)
        .with_context(|| format!("Malformed note record in {}", path.display()))
}

/// Writes filtered notes as pretty-printed JSON, creating parent
/// directories first.
///
/// # Errors
///
/// This function may return an error if:
/// * A parent directory cannot be created
/// * The file cannot be written
pub fn write_notes(path: &Path, notes: &[FilteredNote]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let json =
        serde_json::to_string_pretty(notes).context("Failed to serialize filtered notes")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

/// Expands an input path into the exports to process: a file is taken
/// as-is, a directory is scanned for `.json` files in sorted order,
/// skipping hidden entries and the excluded directory names.
///
/// # Errors
///
/// This function may return an error if:
/// * The path is neither a file nor a directory
/// * Directory traversal fails
/// * A directory scan finds no `.json` files
pub fn collect_json_files(path: &Path, exclude_dirs: &[&str]) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        bail!("Input not found: {}", path.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !should_skip_entry(e, exclude_dirs))
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().is_some_and(|ext| ext == "json") {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort();

    if files.is_empty() {
        bail!("No .json files found under {}", path.display());
    }
    Ok(files)
}

fn should_skip_entry(entry: &walkdir::DirEntry, exclude_dirs: &[&str]) -> bool {
    if is_hidden(entry) {
        return true;
    }
    exclude_dirs.iter().any(|dir| {
        !dir.is_empty()
            && entry.file_type().is_dir()
            && entry.file_name().to_str() == Some(*dir)
    })
}
