//! Completeness check for generated pages

use crate::catalog::CategoryTable;
use crate::doc::{has_empty_subcategory, DocsLayout};
use crate::errors::DocsError;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A page whose category is still empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingCategory {
    pub directory: PathBuf,
    pub filename: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CompletenessReport {
    /// Pages still carrying `subcategory: ""`
    pub missing: Vec<MissingCategory>,
    /// Directories that did not exist
    pub skipped_directories: Vec<PathBuf>,
    /// Number of files read
    pub scanned: usize,
}

impl CompletenessReport {
    pub fn has_issues(&self) -> bool {
        !self.missing.is_empty()
    }
}

/// Regular files directly inside `dir`, sorted by name
///
/// Entries that cannot be inspected, such as dangling symlinks, are not
/// regular files and are left out. Failing to list `dir` itself is an error.
fn page_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() > 0 => continue,
            Err(e) => return Err(e).with_context(|| format!("Failed to list {}", dir.display())),
        };
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Scan every regular file directly inside each directory for an empty category
///
/// All offending files are collected; one hit does not stop the scan.
pub fn check_completeness<P: AsRef<Path>>(dirs: &[P]) -> Result<CompletenessReport> {
    let mut report = CompletenessReport::default();

    for dir in dirs {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            report.skipped_directories.push(dir.to_path_buf());
            continue;
        }

        for path in page_files(dir)? {
            let bytes = fs::read(&path).map_err(|e| DocsError::io(&path, e))?;
            report.scanned += 1;

            if has_empty_subcategory(&String::from_utf8_lossy(&bytes)) {
                let filename = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                report.missing.push(MissingCategory { directory: dir.to_path_buf(), filename, path });
            }
        }
    }

    Ok(report)
}

/// Pages on disk that the table does not list
pub fn uncategorized(table: &CategoryTable, layout: &DocsLayout) -> Result<Vec<PathBuf>> {
    let mut pages = Vec::new();

    for dir in layout.dirs() {
        if !dir.is_dir() {
            continue;
        }
        for path in page_files(dir)? {
            let listed = path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|name| table.contains_file(name))
                .unwrap_or(false);
            if !listed {
                pages.push(path);
            }
        }
    }

    Ok(pages)
}
