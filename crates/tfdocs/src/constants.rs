//! Constants used throughout the tfdocs crate

/// Start of the front-matter line that carries a page's category
pub const SUBCATEGORY_PREFIX: &str = "subcategory: \"";

/// A category line whose value is empty
pub const EMPTY_SUBCATEGORY: &str = "subcategory: \"\"";

/// Filename fragment that marks a data source page
pub const DATA_SOURCE_MARKER: &str = "data_source";

/// Filename fragment that marks a resource page
pub const RESOURCE_MARKER: &str = "resource";

/// Default documentation root, relative to the project root
pub const DEFAULT_DOCS_DIR: &str = "docs";

/// Default data source page directory, relative to the docs root
pub const DEFAULT_DATA_SOURCES_DIR: &str = "data-sources";

/// Default resource page directory, relative to the docs root
pub const DEFAULT_RESOURCES_DIR: &str = "resources";

/// Placeholder page the generator emits from the provider scaffold
pub const PLACEHOLDER_FILENAME: &str = "example.md";

/// Config file looked up in the project root
pub const CONFIG_FILENAME: &str = "gendocs.toml";

/// Module path of the documentation generator
pub const TFPLUGINDOCS: &str = "github.com/hashicorp/terraform-plugin-docs/cmd/tfplugindocs";

/// Exit status when generated pages are missing a category
pub const EXIT_MISSING_CATEGORY: i32 = 1;

/// Exit status for every other failure
pub const EXIT_FAILURE: i32 = 2;
