//! Check command implementation

use crate::cli::OutputFormat;
use crate::Outcome;
use anyhow::Result;
use colored::*;
use serde_json::json;
use tfdocs::check::{check_completeness, uncategorized, CompletenessReport};
use tfdocs::config::Config;
use tfdocs::errors::print_warning;
use tfdocs::theme;

/// Check the page directories for missing categories
pub fn check_pages(config: &Config, format: OutputFormat, verbose: bool) -> Result<Outcome> {
    let layout = config.layout();
    let report = check_completeness(&layout.dirs())?;
    let unlisted = if verbose { Some(uncategorized(&config.categories, &layout)?) } else { None };

    match format {
        OutputFormat::Text => {
            println!("\n{}\n", "Checking categories...".bold());
            print_report(&report);

            if let Some(unlisted) = &unlisted {
                if !unlisted.is_empty() {
                    println!("{}", "Not in the category table:".yellow().bold());
                    for path in unlisted {
                        println!("  {} {}", theme::warning("?"), path.display());
                    }
                    println!();
                }
            }
        }
        OutputFormat::Json => {
            let value = json!({
                "scanned": report.scanned,
                "missing": report.missing,
                "skipped_directories": report.skipped_directories,
                "uncategorized": unlisted,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(outcome_of(&report))
}

pub fn outcome_of(report: &CompletenessReport) -> Outcome {
    if report.has_issues() {
        Outcome::MissingCategories
    } else {
        Outcome::Clean
    }
}

pub fn print_report(report: &CompletenessReport) {
    for dir in &report.skipped_directories {
        print_warning(&format!("{} does not exist; skipped", dir.display()));
    }

    for missing in &report.missing {
        let message = format!("{} is missing a category", missing.filename);
        println!("  {} {}", theme::error(theme::error_symbol()), theme::error(&message));
    }

    if report.has_issues() {
        println!(
            "\n{} {} of {} pages missing a category\n",
            theme::error(theme::error_symbol()).bold(),
            report.missing.len(),
            report.scanned
        );
    } else {
        println!(
            "{} All {} pages have a category\n",
            theme::success(theme::success_symbol()).bold(),
            report.scanned
        );
    }
}
