//! Post-processing for generated Terraform provider documentation
//!
//! The generator writes one markdown page per resource and data source.
//! This library assigns each page its `subcategory` from a category table
//! and reports pages that are still uncategorized.

pub mod catalog;
pub mod categorize;
pub mod check;
pub mod cleanup;
pub mod config;
pub mod constants;
pub mod doc;
pub mod errors;
pub mod pipeline;
pub mod theme;
pub mod tools;

pub use catalog::{CategoryTable, TableIssue};
pub use categorize::{categorize, categorize_file, CategorizeOutcome, CategorizeReport, FileUpdate};
pub use check::{check_completeness, uncategorized, CompletenessReport, MissingCategory};
pub use config::Config;
pub use doc::{DocKind, DocsLayout};
pub use errors::DocsError;
pub use pipeline::{run_pipeline, PipelineEvent, PipelineOptions, PipelineReport, Stage};
pub use tools::{ExternalTool, ToolRun};

/// Re-export common error types
pub use anyhow::{Error, Result};
