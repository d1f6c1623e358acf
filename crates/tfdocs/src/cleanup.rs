//! Placeholder page removal

use crate::doc::DocsLayout;
use crate::errors::DocsError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Delete placeholder pages from both page directories
///
/// Returns the paths that were actually removed. Absent placeholders are
/// not an error.
pub fn remove_placeholders(layout: &DocsLayout, placeholders: &[String]) -> Result<Vec<PathBuf>, DocsError> {
    let mut removed = Vec::new();

    for dir in layout.dirs() {
        for name in placeholders {
            let path = dir.join(name);
            match fs::remove_file(&path) {
                Ok(()) => removed.push(path),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(DocsError::io(path, e)),
            }
        }
    }

    Ok(removed)
}
