//! Full pipeline command

use super::categorize::{print_removed, print_summary, print_update, print_updating};
use super::check::{outcome_of, print_report};
use crate::Outcome;
use anyhow::Result;
use colored::*;
use tfdocs::config::Config;
use tfdocs::pipeline::{run_pipeline, PipelineEvent, PipelineOptions, Stage};
use tfdocs::theme;

/// Generate, categorize, validate, and check
pub fn run_all(config: &Config, options: PipelineOptions) -> Result<Outcome> {
    let report = run_pipeline(config, options, |event| match event {
        PipelineEvent::StageStarted(stage) => {
            println!("\n{}\n", format!("{}...", stage.title()).bold());
            match stage {
                Stage::Generate if !options.skip_generate => announce(&config.generator_tool()),
                Stage::Validate if !options.skip_validate => announce(&config.validator_tool()),
                _ => {}
            }
        }
        PipelineEvent::ToolSkipped(tool) => {
            println!("  {} Skipped {}", theme::info(theme::info_symbol()), tool.name());
        }
        PipelineEvent::PlaceholderRemoved(path) => print_removed(path),
        PipelineEvent::Updating(path) => print_updating(path),
        PipelineEvent::Categorized(update) => print_update(update),
    })?;

    print_summary(&report.categorized);
    print_report(&report.completeness);

    Ok(outcome_of(&report.completeness))
}

fn announce(tool: &tfdocs::ExternalTool) {
    if tool.is_configured() {
        println!("  {} {}", theme::info(theme::info_symbol()), tool.display_command().dimmed());
    }
}
