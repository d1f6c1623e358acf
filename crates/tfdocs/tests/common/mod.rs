// Test infrastructure and utilities for gendocs tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Front matter as the generator writes it, with an empty category
pub fn generated_page(title: &str) -> String {
    format!(
        "---\n\
         page_title: \"netapp-ontap_{title} - terraform-provider-netapp-ontap\"\n\
         subcategory: \"\"\n\
         description: |-\n  {title}\n\
         ---\n\n\
         # {title}\n\n\
         ## Example Usage\n"
    )
}

/// A project root with a docs tree, removed on drop
pub struct DocsFixture {
    temp: TempDir,
}

impl DocsFixture {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("docs/data-sources")).unwrap();
        fs::create_dir_all(temp.path().join("docs/resources")).unwrap();
        Self { temp }
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn resource(&self, name: &str) -> PathBuf {
        self.root().join("docs/resources").join(name)
    }

    pub fn data_source(&self, name: &str) -> PathBuf {
        self.root().join("docs/data-sources").join(name)
    }

    pub fn with_resource(self, name: &str, content: &str) -> Self {
        fs::write(self.resource(name), content).unwrap();
        self
    }

    pub fn with_data_source(self, name: &str, content: &str) -> Self {
        fs::write(self.data_source(name), content).unwrap();
        self
    }

    /// Write gendocs.toml with no external tools and the given table
    pub fn with_categories(self, categories: &[(&str, &[&str])]) -> Self {
        let mut config = String::from("generator = []\nvalidator = []\n\n[categories]\n");
        for (category, files) in categories {
            let files: Vec<String> = files.iter().map(|f| format!("\"{}\"", f)).collect();
            config.push_str(&format!("{} = [{}]\n", category, files.join(", ")));
        }
        self.with_config(&config)
    }

    pub fn with_config(self, contents: &str) -> Self {
        fs::write(self.root().join("gendocs.toml"), contents).unwrap();
        self
    }

    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }
}

impl Default for DocsFixture {
    fn default() -> Self {
        Self::new()
    }
}
