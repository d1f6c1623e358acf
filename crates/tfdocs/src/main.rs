//! Documentation post-processing CLI

use anyhow::Result;
use clap::Parser;
use tfdocs::config::Config;
use tfdocs::constants::{EXIT_FAILURE, EXIT_MISSING_CATEGORY};
use tfdocs::PipelineOptions;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::*;

/// How a command finished when it did not fail outright
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    MissingCategories,
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::load(&cli.root, cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tfdocs::errors::print_error_with_suggestion(
                "Failed to load configuration",
                &e,
                &format!("Check the [categories] table and paths in '{}'", tfdocs::constants::CONFIG_FILENAME),
            );
            std::process::exit(EXIT_FAILURE);
        }
    };

    match execute(cli.command, &config) {
        Ok(Outcome::Clean) => {}
        Ok(Outcome::MissingCategories) => std::process::exit(EXIT_MISSING_CATEGORY),
        Err(e) => {
            tfdocs::errors::print_error("Command failed", &e);
            std::process::exit(EXIT_FAILURE);
        }
    }
}

fn execute(command: Option<Commands>, config: &Config) -> Result<Outcome> {
    match command.unwrap_or(Commands::Run { skip_generate: false, skip_validate: false }) {
        Commands::Run { skip_generate, skip_validate } => {
            run_all(config, PipelineOptions { skip_generate, skip_validate })
        }
        Commands::Categorize => categorize_pages(config),
        Commands::Check { format, verbose } => check_pages(config, format, verbose),
        Commands::Categories { lint } => show_categories(config, lint),
    }
}
