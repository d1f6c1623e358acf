use crate::catalog::{CategoryTable, TableIssue};
use crate::constants::{
    CONFIG_FILENAME, DEFAULT_DATA_SOURCES_DIR, DEFAULT_DOCS_DIR, DEFAULT_RESOURCES_DIR,
    PLACEHOLDER_FILENAME, TFPLUGINDOCS,
};
use crate::doc::DocsLayout;
use crate::errors::DocsError;
use crate::tools::ExternalTool;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Application configuration with layered defaults
#[derive(Debug, Clone)]
pub struct Config {
    /// Project root; the tools run here and relative paths resolve against it
    pub project_root: PathBuf,

    /// Documentation directory
    pub docs_directory: PathBuf,

    /// Data source pages, relative to the docs directory
    pub data_sources_directory: PathBuf,

    /// Resource pages, relative to the docs directory
    pub resources_directory: PathBuf,

    /// Placeholder pages removed from both page directories
    pub placeholders: Vec<String>,

    /// Generator command line; empty skips generation
    pub generator: Vec<String>,

    /// Validator command line; empty skips validation
    pub validator: Vec<String>,

    /// Category table
    pub categories: CategoryTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            docs_directory: PathBuf::from(DEFAULT_DOCS_DIR),
            data_sources_directory: PathBuf::from(DEFAULT_DATA_SOURCES_DIR),
            resources_directory: PathBuf::from(DEFAULT_RESOURCES_DIR),
            placeholders: vec![PLACEHOLDER_FILENAME.to_string()],
            generator: tfplugindocs("generate"),
            validator: tfplugindocs("validate"),
            categories: CategoryTable::builtin(),
        }
    }
}

fn tfplugindocs(subcommand: &str) -> Vec<String> {
    vec!["go".to_string(), "run".to_string(), TFPLUGINDOCS.to_string(), subcommand.to_string()]
}

impl Config {
    /// Load configuration from all sources with proper precedence
    ///
    /// An explicit `config_file` must exist; otherwise `gendocs.toml` in the
    /// project root is used when present.
    pub fn load(project_root: impl AsRef<Path>, config_file: Option<&Path>) -> Result<Self> {
        // Start with defaults
        let mut config = Config { project_root: project_root.as_ref().to_path_buf(), ..Default::default() };

        let file_config = match config_file {
            Some(path) => Some(Self::load_from_file(path)?),
            None => {
                let default_path = config.project_root.join(CONFIG_FILENAME);
                if default_path.exists() {
                    Some(Self::load_from_file(&default_path)?)
                } else {
                    None
                }
            }
        };

        if let Some(file_config) = file_config {
            config.merge(file_config);
        }

        config.check()?;
        Ok(config)
    }

    /// Load a config file
    fn load_from_file(path: &Path) -> Result<PartialConfig> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: PartialConfig =
            toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(config)
    }

    /// Merge partial config into this one (partial takes precedence for specified fields)
    fn merge(&mut self, other: PartialConfig) {
        if let Some(val) = other.docs_dir {
            self.docs_directory = val;
        }
        if let Some(val) = other.data_sources_dir {
            self.data_sources_directory = val;
        }
        if let Some(val) = other.resources_dir {
            self.resources_directory = val;
        }
        if let Some(val) = other.placeholders {
            self.placeholders = val;
        }
        if let Some(val) = other.generator {
            self.generator = val;
        }
        if let Some(val) = other.validator {
            self.validator = val;
        }
        if let Some(val) = other.categories {
            if !val.is_empty() {
                self.categories = CategoryTable::from_map(val);
            }
        }
    }

    fn check(&self) -> Result<(), DocsError> {
        if self.data_sources_directory == self.resources_directory {
            return Err(DocsError::Config(format!(
                "data source and resource pages share the directory '{}'",
                self.data_sources_directory.display()
            )));
        }
        if let Some(bad) = self.placeholders.iter().find(|p| p.contains(['/', '\\'])) {
            return Err(DocsError::Config(format!("placeholder '{}' must be a bare filename", bad)));
        }
        if let Some(issue) = self
            .categories
            .lint()
            .into_iter()
            .find(|issue| matches!(issue, TableIssue::InvalidCategoryName { .. }))
        {
            return Err(DocsError::Config(issue.description()));
        }
        Ok(())
    }

    /// Docs directory resolved against the project root
    pub fn docs_dir(&self) -> PathBuf {
        self.project_root.join(&self.docs_directory)
    }

    /// Page directories resolved against the project root
    pub fn layout(&self) -> DocsLayout {
        let docs = self.docs_dir();
        DocsLayout::new(docs.join(&self.data_sources_directory), docs.join(&self.resources_directory))
    }

    pub fn generator_tool(&self) -> ExternalTool {
        ExternalTool::new("generator", self.generator.clone())
    }

    pub fn validator_tool(&self) -> ExternalTool {
        ExternalTool::new("validator", self.validator.clone())
    }
}

/// Partial configuration for deserializing from TOML with optional fields
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    docs_dir: Option<PathBuf>,
    data_sources_dir: Option<PathBuf>,
    resources_dir: Option<PathBuf>,
    placeholders: Option<Vec<String>>,
    generator: Option<Vec<String>>,
    validator: Option<Vec<String>>,
    categories: Option<BTreeMap<String, Vec<String>>>,
}
