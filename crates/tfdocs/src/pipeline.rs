//! The full documentation pass: generate, clean up, categorize, validate, check

use crate::categorize::{categorize, CategorizeReport, FileUpdate};
use crate::check::{check_completeness, CompletenessReport};
use crate::cleanup::remove_placeholders;
use crate::config::Config;
use crate::errors::DocsError;
use crate::tools::{ExternalTool, ToolRun};
use anyhow::Result;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Generate,
    Cleanup,
    Categorize,
    Validate,
    Check,
}

impl Stage {
    pub fn title(&self) -> &'static str {
        match self {
            Stage::Generate => "Generating docs",
            Stage::Cleanup => "Removing placeholders",
            Stage::Categorize => "Adding categories",
            Stage::Validate => "Validating docs",
            Stage::Check => "Checking categories",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    pub skip_generate: bool,
    pub skip_validate: bool,
}

/// Progress notifications, in order of occurrence
#[derive(Debug)]
pub enum PipelineEvent<'a> {
    StageStarted(Stage),
    ToolSkipped(&'a ExternalTool),
    PlaceholderRemoved(&'a Path),
    Updating(&'a Path),
    Categorized(&'a FileUpdate),
}

#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    pub removed: Vec<std::path::PathBuf>,
    pub categorized: CategorizeReport,
    pub completeness: CompletenessReport,
}

impl PipelineReport {
    /// Whether the run should end with the missing-category status
    pub fn has_missing_categories(&self) -> bool {
        self.completeness.has_issues()
    }
}

/// Run every stage in order
///
/// A failing generator or validator aborts the run, as does a generator run
/// that leaves a page directory missing. Missing categories do not; they are
/// returned in the report for the caller to act on.
pub fn run_pipeline(
    config: &Config,
    options: PipelineOptions,
    mut on_event: impl FnMut(PipelineEvent<'_>),
) -> Result<PipelineReport> {
    let layout = config.layout();
    let mut report = PipelineReport::default();

    on_event(PipelineEvent::StageStarted(Stage::Generate));
    let generator = config.generator_tool();
    let generated = !options.skip_generate
        && run_tool(&generator, &config.project_root)? == ToolRun::Succeeded;
    if !generated {
        on_event(PipelineEvent::ToolSkipped(&generator));
    }

    on_event(PipelineEvent::StageStarted(Stage::Cleanup));
    report.removed = remove_placeholders(&layout, &config.placeholders)?;
    for path in &report.removed {
        on_event(PipelineEvent::PlaceholderRemoved(path));
    }

    on_event(PipelineEvent::StageStarted(Stage::Categorize));
    report.categorized =
        categorize(&config.categories, &layout, |path| on_event(PipelineEvent::Updating(path)))?;
    for update in &report.categorized.updates {
        on_event(PipelineEvent::Categorized(update));
    }

    on_event(PipelineEvent::StageStarted(Stage::Validate));
    let validator = config.validator_tool();
    if options.skip_validate || run_tool(&validator, &config.project_root)? == ToolRun::Skipped {
        on_event(PipelineEvent::ToolSkipped(&validator));
    }

    on_event(PipelineEvent::StageStarted(Stage::Check));
    report.completeness = check_completeness(&layout.dirs())?;

    // A generator run that left a page directory absent produced nothing to check
    if generated {
        if let Some(dir) = report.completeness.skipped_directories.first() {
            return Err(DocsError::MissingOutput(dir.clone()).into());
        }
    }

    Ok(report)
}

fn run_tool(tool: &ExternalTool, working_dir: &Path) -> Result<ToolRun> {
    Ok(tool.run(working_dir)?)
}
