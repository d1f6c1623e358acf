//! Category table: which product area each generated page belongs to
//!
//! To find the right category for a new page, check which top-level section
//! of the ONTAP REST API documentation the endpoint lives under.

use crate::doc::DocKind;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

const BUILTIN: &[(&str, &[&str])] = &[
    ("application", &[]),
    ("cloud", &[]),
    (
        "cluster",
        &[
            "cluster_data_source.md",
            "cluster_schedule_data_source.md",
            "cluster_schedule_resource.md",
            "cluster_licensing_license_resource.md",
        ],
    ),
    (
        "nas",
        &[
            "protocols_cifs_local_group_data_source.md",
            "protocols_cifs_local_group_resource.md",
            "protocols_cifs_local_group_member_data_source.md",
            "protocols_cifs_local_group_member_resource.md",
            "protocols_cifs_local_user_data_source.md",
            "protocols_cifs_local_user_resource.md",
            "protocols_cifs_service_data_source.md",
            "protocols_cifs_user_group_privilege_data_source.md",
            "protocols_cifs_user_group_privilege_resource.md",
            "protocols_nfs_service_data_source.md",
            "protocols_nfs_service_resource.md",
            "protocols_nfs_export_policy_resource.md",
            "protocols_nfs_export_policy_rule_data_source.md",
            "protocols_nfs_export_policy_rule_resource.md",
        ],
    ),
    ("name-services", &["name_services_dns_data_source.md", "name_services_dns_resource.md"]),
    ("ndmp", &[]),
    (
        "networking",
        &[
            "networking_ip_interfaces_data_source.md",
            "networking_ip_interface_data_source.md",
            "networking_ip_interface_resource.md",
            "networking_ip_route_data_source.md",
            "networking_ip_route_resource.md",
        ],
    ),
    ("nvme", &[]),
    ("object-store", &[]),
    ("san", &[]),
    ("security", &[]),
    ("snaplock", &[]),
    ("snapmirror", &["snapmirror_policy_resource.md"]),
    (
        "storage",
        &[
            "storage_aggregate_resource.md",
            "storage_snapshot_policy_resource.md",
            "storage_volume_snapshot_data_source.md",
            "storage_volume_resource.md",
            "storage_volume_data_source.md",
            "storage_volume_snapshot_resource.md",
        ],
    ),
    ("support", &[]),
    ("svm", &["svm_resource.md"]),
];

/// Mapping from category name to the page filenames it covers
///
/// Filenames are not checked against the disk: the table is maintained by
/// hand and may still list pages the generator no longer produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTable {
    categories: BTreeMap<String, Vec<String>>,
}

/// Hygiene problems in a category table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableIssue {
    /// Filename matches neither the data source nor the resource convention
    Unroutable { category: String, filename: String },
    /// Filename listed under more than one category
    MultipleCategories { filename: String, categories: Vec<String> },
    /// Filename listed twice under the same category
    Duplicate { category: String, filename: String },
    /// Category name that cannot be written into a quoted front-matter value
    InvalidCategoryName { category: String },
}

impl TableIssue {
    pub fn severity(&self) -> &str {
        match self {
            TableIssue::Unroutable { .. } => "WARNING",
            TableIssue::MultipleCategories { .. } => "WARNING",
            TableIssue::Duplicate { .. } => "WARNING",
            TableIssue::InvalidCategoryName { .. } => "ERROR",
        }
    }

    pub fn description(&self) -> String {
        match self {
            TableIssue::Unroutable { category, filename } => format!(
                "'{}' in '{}' contains neither '{}' nor '{}' and is never updated",
                filename,
                category,
                DocKind::DataSource.marker(),
                DocKind::Resource.marker()
            ),
            TableIssue::MultipleCategories { filename, categories } => {
                format!("'{}' is listed under {}; the last one wins", filename, categories.join(", "))
            }
            TableIssue::Duplicate { category, filename } => {
                format!("'{}' is listed more than once in '{}'", filename, category)
            }
            TableIssue::InvalidCategoryName { category } => {
                format!("category name {:?} contains a quote or line break", category)
            }
        }
    }
}

impl CategoryTable {
    /// The provider's own table
    pub fn builtin() -> Self {
        let categories = BUILTIN
            .iter()
            .map(|(name, files)| {
                (name.to_string(), files.iter().map(|f| f.to_string()).collect::<Vec<_>>())
            })
            .collect();
        Self { categories }
    }

    pub fn from_map(categories: BTreeMap<String, Vec<String>>) -> Self {
        Self { categories }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Category names in table order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Filenames listed under a category
    pub fn files(&self, category: &str) -> &[String] {
        self.categories.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every `(category, filename)` pair in table order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categories
            .iter()
            .flat_map(|(name, files)| files.iter().map(move |f| (name.as_str(), f.as_str())))
    }

    /// Category a page ends up with; the last listing wins, as on disk
    pub fn category_of(&self, filename: &str) -> Option<&str> {
        self.entries().filter(|(_, f)| *f == filename).map(|(c, _)| c).last()
    }

    pub fn contains_file(&self, filename: &str) -> bool {
        self.entries().any(|(_, f)| f == filename)
    }

    pub fn file_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Check the table for entries that will not behave as intended
    pub fn lint(&self) -> Vec<TableIssue> {
        let mut issues = Vec::new();
        let mut owners: HashMap<&str, Vec<String>> = HashMap::new();

        for (category, files) in &self.categories {
            if category.contains(['"', '\n', '\r']) {
                issues.push(TableIssue::InvalidCategoryName { category: category.clone() });
            }

            let mut seen = Vec::new();
            for filename in files {
                if seen.contains(&filename) {
                    issues.push(TableIssue::Duplicate {
                        category: category.clone(),
                        filename: filename.clone(),
                    });
                    continue;
                }
                seen.push(filename);

                if DocKind::kinds_for(filename).is_empty() {
                    issues.push(TableIssue::Unroutable {
                        category: category.clone(),
                        filename: filename.clone(),
                    });
                }

                owners.entry(filename.as_str()).or_default().push(category.clone());
            }
        }

        let mut shared: Vec<_> = owners.into_iter().filter(|(_, cats)| cats.len() > 1).collect();
        shared.sort_by(|a, b| a.0.cmp(b.0));
        for (filename, categories) in shared {
            issues.push(TableIssue::MultipleCategories { filename: filename.to_string(), categories });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &[&str])]) -> CategoryTable {
        CategoryTable::from_map(
            entries
                .iter()
                .map(|(c, files)| (c.to_string(), files.iter().map(|f| f.to_string()).collect()))
                .collect(),
        )
    }

    #[test]
    fn test_builtin_has_all_product_areas() {
        let builtin = CategoryTable::builtin();
        assert_eq!(builtin.len(), 16);
        assert!(builtin.files("application").is_empty());
        assert_eq!(builtin.files("svm"), ["svm_resource.md".to_string()]);
        assert_eq!(builtin.category_of("storage_volume_resource.md"), Some("storage"));
        assert_eq!(builtin.category_of("name_services_dns_resource.md"), Some("name-services"));
    }

    #[test]
    fn test_builtin_is_clean() {
        assert!(CategoryTable::builtin().lint().is_empty());
    }

    #[test]
    fn test_entries_in_table_order() {
        let t = table(&[("storage", &["b_resource.md", "a_resource.md"]), ("nas", &["c_resource.md"])]);
        let entries: Vec<_> = t.entries().collect();
        assert_eq!(
            entries,
            vec![
                ("nas", "c_resource.md"),
                ("storage", "b_resource.md"),
                ("storage", "a_resource.md"),
            ]
        );
    }

    #[test]
    fn test_category_of_missing() {
        assert_eq!(CategoryTable::builtin().category_of("unknown_resource.md"), None);
        assert!(!CategoryTable::builtin().contains_file("unknown_resource.md"));
    }

    #[test]
    fn test_category_of_last_listing_wins() {
        let t = table(&[("nas", &["x_resource.md"]), ("san", &["x_resource.md"])]);
        assert_eq!(t.category_of("x_resource.md"), Some("san"));
    }

    #[test]
    fn test_lint_unroutable() {
        let t = table(&[("cluster", &["cluster.md"])]);
        assert_eq!(
            t.lint(),
            vec![TableIssue::Unroutable {
                category: "cluster".to_string(),
                filename: "cluster.md".to_string()
            }]
        );
    }

    #[test]
    fn test_lint_duplicates_and_shared() {
        let t = table(&[
            ("nas", &["x_resource.md", "x_resource.md"]),
            ("san", &["x_resource.md"]),
        ]);
        let issues = t.lint();
        assert_eq!(issues.len(), 2);
        assert!(matches!(issues[0], TableIssue::Duplicate { .. }));
        assert_eq!(
            issues[1],
            TableIssue::MultipleCategories {
                filename: "x_resource.md".to_string(),
                categories: vec!["nas".to_string(), "san".to_string()],
            }
        );
    }

    #[test]
    fn test_lint_invalid_category_name() {
        let t = table(&[("bad\"name", &[])]);
        let issues = t.lint();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity(), "ERROR");
    }

    #[test]
    fn test_deserialize_from_toml() {
        let t: CategoryTable = toml::from_str("storage = [\"storage_volume_resource.md\"]\n").unwrap();
        assert_eq!(t.category_of("storage_volume_resource.md"), Some("storage"));
    }
}
