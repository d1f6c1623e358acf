//! Generated documentation pages and their subcategory line

use crate::constants::{DATA_SOURCE_MARKER, EMPTY_SUBCATEGORY, RESOURCE_MARKER, SUBCATEGORY_PREFIX};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Kind of generated page, derived from its filename
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocKind {
    DataSource,
    Resource,
}

impl DocKind {
    /// Get the display name for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            DocKind::DataSource => "data source",
            DocKind::Resource => "resource",
        }
    }

    /// Filename fragment that routes a page to this kind
    pub fn marker(&self) -> &'static str {
        match self {
            DocKind::DataSource => DATA_SOURCE_MARKER,
            DocKind::Resource => RESOURCE_MARKER,
        }
    }

    /// All kinds whose marker appears in the filename
    ///
    /// A name such as `protocols_cifs_resource_data_source.md` matches both
    /// and is looked up in both directories.
    pub fn kinds_for(filename: &str) -> Vec<DocKind> {
        Self::all_kinds().into_iter().filter(|kind| filename.contains(kind.marker())).collect()
    }

    pub fn all_kinds() -> Vec<DocKind> {
        vec![DocKind::DataSource, DocKind::Resource]
    }
}

/// Where the generator writes each kind of page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsLayout {
    pub data_sources: PathBuf,
    pub resources: PathBuf,
}

impl DocsLayout {
    pub fn new(data_sources: impl Into<PathBuf>, resources: impl Into<PathBuf>) -> Self {
        Self { data_sources: data_sources.into(), resources: resources.into() }
    }

    /// Layout with the generator's default directory names under `docs_dir`
    pub fn under(docs_dir: impl AsRef<Path>) -> Self {
        let docs_dir = docs_dir.as_ref();
        Self::new(
            docs_dir.join(crate::constants::DEFAULT_DATA_SOURCES_DIR),
            docs_dir.join(crate::constants::DEFAULT_RESOURCES_DIR),
        )
    }

    pub fn dir_for(&self, kind: DocKind) -> &Path {
        match kind {
            DocKind::DataSource => &self.data_sources,
            DocKind::Resource => &self.resources,
        }
    }

    /// Directories in check order: data sources, then resources
    pub fn dirs(&self) -> Vec<&Path> {
        vec![self.data_sources.as_path(), self.resources.as_path()]
    }

    /// Every path a table filename resolves to
    pub fn paths_for(&self, filename: &str) -> Vec<(DocKind, PathBuf)> {
        DocKind::kinds_for(filename)
            .into_iter()
            .map(|kind| (kind, self.dir_for(kind).join(filename)))
            .collect()
    }
}

/// Result of setting the subcategory in a page's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRewrite {
    /// Content with the category line replaced
    Rewritten(String),
    /// The category line already carries the category
    Unchanged,
    /// No line starts with the subcategory prefix
    NoCategoryLine,
}

/// Set the value of the first subcategory line, leaving every other byte alone
pub fn set_subcategory(content: &str, category: &str) -> LineRewrite {
    let mut output = String::with_capacity(content.len() + category.len());
    let mut found = false;

    for line in content.split_inclusive('\n') {
        if !found && line.starts_with(SUBCATEGORY_PREFIX) {
            output.push_str(&rewrite_category_line(line, category));
            found = true;
        } else {
            output.push_str(line);
        }
    }

    if !found {
        LineRewrite::NoCategoryLine
    } else if output == content {
        LineRewrite::Unchanged
    } else {
        LineRewrite::Rewritten(output)
    }
}

/// Replace the quoted value of a single category line
///
/// `line` starts with the prefix and may end with `\n` or `\r\n`. Whatever
/// follows the closing quote is kept. A line without a closing quote gets one.
pub fn rewrite_category_line(line: &str, category: &str) -> String {
    let value_and_rest = &line[SUBCATEGORY_PREFIX.len()..];
    let (body, terminator) = split_terminator(value_and_rest);

    let tail = match body.find('"') {
        Some(pos) => &body[pos..],
        None => "\"",
    };

    format!("{}{}{}{}", SUBCATEGORY_PREFIX, category, tail, terminator)
}

/// Value of the first subcategory line, if there is one
pub fn subcategory_value(content: &str) -> Option<&str> {
    let line = content.lines().find(|line| line.starts_with(SUBCATEGORY_PREFIX))?;
    let value = &line[SUBCATEGORY_PREFIX.len()..];
    Some(match value.find('"') {
        Some(pos) => &value[..pos],
        None => value,
    })
}

/// Whether the content carries an empty category anywhere
pub fn has_empty_subcategory(content: &str) -> bool {
    content.contains(EMPTY_SUBCATEGORY)
}

fn split_terminator(s: &str) -> (&str, &str) {
    if let Some(body) = s.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = s.strip_suffix('\n') {
        (body, "\n")
    } else {
        (s, "")
    }
}
