//! Writing categories into generated pages

use crate::catalog::CategoryTable;
use crate::doc::{set_subcategory, DocKind, DocsLayout, LineRewrite};
use crate::errors::DocsError;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// What happened to one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategorizeOutcome {
    /// Category line rewritten and saved
    Updated,
    /// Category line already carried the category
    Unchanged,
    /// Page has no category line; left alone
    NoCategoryLine,
    /// Page does not exist
    SkippedMissing,
    /// Page exists but could not be read as text
    SkippedUnreadable,
}

impl CategorizeOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategorizeOutcome::Updated => "updated",
            CategorizeOutcome::Unchanged => "unchanged",
            CategorizeOutcome::NoCategoryLine => "no category line",
            CategorizeOutcome::SkippedMissing => "not found",
            CategorizeOutcome::SkippedUnreadable => "unreadable",
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, CategorizeOutcome::SkippedMissing | CategorizeOutcome::SkippedUnreadable)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileUpdate {
    pub category: String,
    pub kind: DocKind,
    pub path: PathBuf,
    pub outcome: CategorizeOutcome,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CategorizeReport {
    pub updates: Vec<FileUpdate>,
}

impl CategorizeReport {
    pub fn count(&self, outcome: CategorizeOutcome) -> usize {
        self.updates.iter().filter(|u| u.outcome == outcome).count()
    }

    pub fn updated(&self) -> usize {
        self.count(CategorizeOutcome::Updated)
    }

    pub fn skipped(&self) -> usize {
        self.updates.iter().filter(|u| u.outcome.is_skipped()).count()
    }
}

/// Set the category of one page
///
/// Reading is best effort: a page that is missing or unreadable is reported
/// as skipped and nothing is created. Failing to write an existing page is
/// an error.
pub fn categorize_file(path: &Path, category: &str) -> Result<CategorizeOutcome, DocsError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(CategorizeOutcome::SkippedMissing),
        Err(_) => return Ok(CategorizeOutcome::SkippedUnreadable),
    };

    match set_subcategory(&content, category) {
        LineRewrite::Rewritten(updated) => {
            fs::write(path, updated).map_err(|e| DocsError::io(path, e))?;
            Ok(CategorizeOutcome::Updated)
        }
        LineRewrite::Unchanged => Ok(CategorizeOutcome::Unchanged),
        LineRewrite::NoCategoryLine => Ok(CategorizeOutcome::NoCategoryLine),
    }
}

/// Apply the whole table to the page directories
///
/// `on_file` sees each page path before it is touched.
pub fn categorize(
    table: &CategoryTable,
    layout: &DocsLayout,
    mut on_file: impl FnMut(&Path),
) -> Result<CategorizeReport, DocsError> {
    let mut report = CategorizeReport::default();

    for (category, filename) in table.entries() {
        for (kind, path) in layout.paths_for(filename) {
            on_file(path.as_path());
            let outcome = categorize_file(&path, category)?;
            report.updates.push(FileUpdate { category: category.to_string(), kind, path, outcome });
        }
    }

    Ok(report)
}
