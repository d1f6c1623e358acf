//! CLI argument parsing

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gendocs")]
#[command(about = "Generate and categorize Terraform provider documentation", long_about = None)]
#[command(after_help = "Without a command, runs the full pipeline: generate, categorize, validate, check.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Project root; tools run here and docs are found below it
    #[arg(short, long, default_value = ".", global = true)]
    pub root: PathBuf,

    /// Config file (defaults to gendocs.toml in the project root, if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate docs, add categories, validate, and check for missing categories
    Run {
        /// Do not invoke the documentation generator
        #[arg(long)]
        skip_generate: bool,

        /// Do not invoke the documentation validator
        #[arg(long)]
        skip_validate: bool,
    },

    /// Remove placeholders and add categories to existing pages
    #[command(visible_alias = "cat")]
    Categorize,

    /// Report pages that are still missing a category
    Check {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also list pages the category table does not mention
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the category table
    #[command(visible_alias = "ls")]
    Categories {
        /// Report problems in the table
        #[arg(short, long)]
        lint: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
