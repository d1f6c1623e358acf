//! Categorize command implementation

use crate::Outcome;
use anyhow::Result;
use colored::*;
use std::path::Path;
use tfdocs::categorize::{categorize, CategorizeOutcome, CategorizeReport, FileUpdate};
use tfdocs::cleanup::remove_placeholders;
use tfdocs::config::Config;
use tfdocs::theme;

/// Remove placeholders and write categories into existing pages
pub fn categorize_pages(config: &Config) -> Result<Outcome> {
    let layout = config.layout();

    println!("\n{}\n", "Removing placeholders...".bold());
    for path in remove_placeholders(&layout, &config.placeholders)? {
        print_removed(&path);
    }

    println!("\n{}\n", "Adding categories...".bold());
    let report = categorize(&config.categories, &layout, print_updating)?;
    for update in &report.updates {
        print_update(update);
    }
    print_summary(&report);

    Ok(Outcome::Clean)
}

pub fn print_removed(path: &Path) {
    println!("  {} Removed {}", "-".red(), path.display());
}

pub fn print_updating(path: &Path) {
    println!("  {} Updating {}", theme::info_symbol().dimmed(), path.display().to_string().dimmed());
}

/// Report pages that need attention; updated and missing pages stay quiet
pub fn print_update(update: &FileUpdate) {
    match update.outcome {
        CategorizeOutcome::NoCategoryLine | CategorizeOutcome::SkippedUnreadable => {
            println!(
                "  {} {} ({}): {}",
                theme::warning(theme::warning_symbol()),
                update.path.display(),
                theme::category(&update.category),
                theme::outcome_badge(update.outcome)
            );
        }
        _ => {}
    }
}

pub fn print_summary(report: &CategorizeReport) {
    println!(
        "\n{} {} updated, {} already set, {} without a category line, {} skipped\n",
        theme::success(theme::success_symbol()).bold(),
        report.updated(),
        report.count(CategorizeOutcome::Unchanged),
        report.count(CategorizeOutcome::NoCategoryLine),
        report.skipped()
    );
}
