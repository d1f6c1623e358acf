mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::{generated_page, DocsFixture};
use predicates::prelude::*;

#[test]
fn test_help() {
    let mut cmd = cargo_bin_cmd!("gendocs");
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Generate and categorize Terraform provider documentation"));
}

#[test]
fn test_pipeline_assigns_category() {
    let fixture = DocsFixture::new()
        .with_categories(&[("storage", &["storage_volume_resource.md"])])
        .with_resource("storage_volume_resource.md", &generated_page("storage_volume_resource"));

    let mut cmd = cargo_bin_cmd!("gendocs");
    cmd.arg("--root").arg(fixture.root());

    cmd.assert().success().stdout(predicate::str::contains("have a category"));

    let content = fixture.read(&fixture.resource("storage_volume_resource.md"));
    assert!(content.contains("\nsubcategory: \"storage\"\n"));
    assert_eq!(
        content.replace("subcategory: \"storage\"", "subcategory: \"\""),
        generated_page("storage_volume_resource")
    );
}

#[test]
fn test_pipeline_fails_on_uncategorized_page() {
    let fixture = DocsFixture::new()
        .with_categories(&[("storage", &["storage_volume_resource.md"])])
        .with_resource("storage_volume_resource.md", &generated_page("storage_volume_resource"))
        .with_resource("snaplock_resource.md", &generated_page("snaplock_resource"));

    let mut cmd = cargo_bin_cmd!("gendocs");
    cmd.arg("--root").arg(fixture.root()).arg("run");

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("snaplock_resource.md is missing a category"));
}

#[test]
fn test_pipeline_removes_placeholders() {
    let fixture = DocsFixture::new()
        .with_categories(&[("svm", &["svm_resource.md"])])
        .with_resource("example.md", &generated_page("example"))
        .with_data_source("example.md", &generated_page("example"));

    let mut cmd = cargo_bin_cmd!("gendocs");
    cmd.arg("--root").arg(fixture.root());

    cmd.assert().success();
    assert!(!fixture.resource("example.md").exists());
    assert!(!fixture.data_source("example.md").exists());
}

#[test]
fn test_listed_but_missing_page_is_not_created() {
    let fixture = DocsFixture::new().with_categories(&[("svm", &["svm_resource.md"])]);

    let mut cmd = cargo_bin_cmd!("gendocs");
    cmd.arg("--root").arg(fixture.root()).arg("categorize");

    cmd.assert().success().stdout(predicate::str::contains("1 skipped"));
    assert!(!fixture.resource("svm_resource.md").exists());
}

#[test]
fn test_categorize_twice_is_stable() {
    let fixture = DocsFixture::new()
        .with_categories(&[("nas", &["protocols_nfs_service_data_source.md"])])
        .with_data_source("protocols_nfs_service_data_source.md", &generated_page("nfs"));

    cargo_bin_cmd!("gendocs").arg("--root").arg(fixture.root()).arg("categorize").assert().success();
    let once = fixture.read(&fixture.data_source("protocols_nfs_service_data_source.md"));

    cargo_bin_cmd!("gendocs").arg("--root").arg(fixture.root()).arg("categorize").assert().success();
    let twice = fixture.read(&fixture.data_source("protocols_nfs_service_data_source.md"));

    assert_eq!(once, twice);
    assert!(twice.contains("subcategory: \"nas\"\n"));
}

#[test]
fn test_check_json_output() {
    let fixture = DocsFixture::new()
        .with_categories(&[("svm", &["svm_resource.md"])])
        .with_resource("svm_resource.md", &generated_page("svm_resource"));

    let mut cmd = cargo_bin_cmd!("gendocs");
    cmd.arg("--root").arg(fixture.root()).arg("check").arg("--format").arg("json");

    let output = cmd.assert().code(1).get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["scanned"], 1);
    assert_eq!(value["missing"][0]["filename"], "svm_resource.md");
}

#[test]
fn test_check_verbose_lists_unlisted_pages() {
    let fixture = DocsFixture::new()
        .with_categories(&[("svm", &["svm_resource.md"])])
        .with_resource("svm_resource.md", "subcategory: \"svm\"\n")
        .with_resource("ndmp_resource.md", "subcategory: \"ndmp\"\n");

    let mut cmd = cargo_bin_cmd!("gendocs");
    cmd.arg("--root").arg(fixture.root()).arg("check").arg("--verbose");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Not in the category table"))
        .stdout(predicate::str::contains("ndmp_resource.md"));
}

#[cfg(unix)]
#[test]
fn test_validator_failure_exits_with_failure_status() {
    let fixture = DocsFixture::new().with_config(
        "generator = []\nvalidator = [\"sh\", \"-c\", \"exit 4\"]\n\n[categories]\nsvm = [\"svm_resource.md\"]\n",
    );

    let mut cmd = cargo_bin_cmd!("gendocs");
    cmd.arg("--root").arg(fixture.root());

    cmd.assert().code(2).stderr(predicate::str::contains("validator exited with status 4"));
}

#[cfg(unix)]
#[test]
fn test_skip_validate_flag() {
    let fixture = DocsFixture::new().with_config(
        "generator = []\nvalidator = [\"sh\", \"-c\", \"exit 4\"]\n\n[categories]\nsvm = [\"svm_resource.md\"]\n",
    );

    let mut cmd = cargo_bin_cmd!("gendocs");
    cmd.arg("--root").arg(fixture.root()).arg("run").arg("--skip-validate");

    cmd.assert().success().stdout(predicate::str::contains("Skipped validator"));
}

#[test]
fn test_bad_config_exits_with_failure_status() {
    let fixture = DocsFixture::new().with_config("docs_directory = \"docs\"\n");

    let mut cmd = cargo_bin_cmd!("gendocs");
    cmd.arg("--root").arg(fixture.root()).arg("check");

    cmd.assert().code(2).stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_categories_lint() {
    let fixture = DocsFixture::new().with_categories(&[("cluster", &["cluster.md"])]);

    let mut cmd = cargo_bin_cmd!("gendocs");
    cmd.arg("--root").arg(fixture.root()).arg("categories").arg("--lint");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("cluster.md"))
        .stdout(predicate::str::contains("never updated"));
}

#[test]
fn test_categories_builtin_table() {
    let fixture = DocsFixture::new();

    let mut cmd = cargo_bin_cmd!("gendocs");
    cmd.arg("--root").arg(fixture.root()).arg("categories");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("name-services"))
        .stdout(predicate::str::contains("svm_resource.md"));
}
