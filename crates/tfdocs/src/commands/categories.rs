//! Categories command implementation

use crate::Outcome;
use anyhow::Result;
use colored::*;
use tfdocs::config::Config;
use tfdocs::doc::DocKind;
use tfdocs::theme;

/// Print the category table, optionally with lint findings
pub fn show_categories(config: &Config, lint: bool) -> Result<Outcome> {
    let table = &config.categories;

    println!(
        "\n{} ({} categories, {} pages)\n",
        "Category Table".bold(),
        table.len(),
        table.file_count()
    );

    for name in table.categories() {
        let files = table.files(name);
        println!("{} {}", theme::category(name), format!("({})", files.len()).dimmed());
        for file in files {
            let kinds: Vec<&str> = DocKind::kinds_for(file).iter().map(|k| k.as_str()).collect();
            let kinds = if kinds.is_empty() { "unrouted".to_string() } else { kinds.join(", ") };
            println!("  {} {}", file, format!("[{}]", kinds).dimmed());
        }
    }
    println!();

    if lint {
        let issues = table.lint();
        if issues.is_empty() {
            println!("{} No problems found\n", theme::success(theme::success_symbol()).bold());
        } else {
            println!("{}", "Table Problems:".yellow().bold());
            for issue in &issues {
                let severity = match issue.severity() {
                    "ERROR" => issue.severity().red().bold(),
                    _ => issue.severity().yellow().bold(),
                };
                println!("  {} {}", severity, issue.description());
            }
            println!();
        }
    }

    Ok(Outcome::Clean)
}
