use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

const EXAMPLE_BUCKET: &str = r#"{
    "name": "bucket1",
    "read_by_(static)": [{"type": "term", "_id": "t1"}],
    "unexpected_field": 42
}"#;

const SEARCH_PAGE: &str = r#"{
    "paging": {"numTotal": 5, "pageSize": 2, "begin": 0, "end": 1},
    "items": [
        {"_type": "term", "_id": "term1", "name": "Order", "status": "ACCEPTED"},
        {"_type": "category", "_id": "cat1", "name": "Sales"}
    ]
}"#;

/// Command with a config path inside `dir` and no inherited igcop env
fn igcop(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("igcop"));
    cmd.arg("--config")
        .arg(dir.join("config.yaml"))
        .env_remove("IGCOP_CONFIG")
        .env_remove("IGCOP_FORMAT")
        .env_remove("IGCOP_DEBUG")
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0");
    cmd
}

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write file");
    path
}

#[test]
fn types_lists_registered_types() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    igcop(temp.path())
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("TYPE ID"))
        .stdout(predicate::str::contains("amazon_s3_bucket"))
        .stdout(predicate::str::contains("information_governance_rule"));

    Ok(())
}

#[test]
fn types_filters_by_base() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    igcop(temp.path())
        .args(["types", "--base", "reference"])
        .assert()
        .success()
        .stdout(predicate::str::contains("note"))
        .stdout(predicate::str::contains("database_table").not());

    Ok(())
}

#[test]
fn schema_shows_property_classification() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    igcop(temp.path())
        .args(["schema", "database_table", "--paged"])
        .assert()
        .success()
        .stdout(predicate::str::contains("database_columns"))
        .stdout(predicate::str::contains("reference list"))
        .stdout(predicate::str::contains("short_description").not());

    Ok(())
}

#[test]
fn schema_unknown_type_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    igcop(temp.path())
        .args(["schema", "widget"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown asset type: widget"));

    Ok(())
}

#[test]
fn decode_tolerates_unknown_fields() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let input = write_file(temp.path(), "bucket.json", EXAMPLE_BUCKET);

    igcop(temp.path())
        .arg("decode")
        .arg(&input)
        .args(["--type", "amazon_s3_bucket"])
        .assert()
        .success()
        .stdout(predicate::str::contains("amazon_s3_bucket"))
        .stdout(predicate::str::contains("bucket1"))
        .stdout(predicate::str::contains("unexpected_field"));

    Ok(())
}

#[test]
fn decode_strict_rejects_unknown_fields() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let input = write_file(temp.path(), "bucket.json", EXAMPLE_BUCKET);

    igcop(temp.path())
        .arg("decode")
        .arg(&input)
        .args(["--type", "amazon_s3_bucket", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized fields: unexpected_field"));

    Ok(())
}

#[test]
fn decode_strict_from_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    write_file(temp.path(), "config.yaml", "preferences:\n  strict: true\n");
    let input = write_file(temp.path(), "bucket.json", EXAMPLE_BUCKET);

    igcop(temp.path())
        .arg("decode")
        .arg(&input)
        .args(["--type", "amazon_s3_bucket"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected_field"));

    Ok(())
}

#[test]
fn decode_json_output_is_normalized() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let input = write_file(temp.path(), "bucket.json", EXAMPLE_BUCKET);

    let assert = igcop(temp.path())
        .args(["--format", "json", "decode"])
        .arg(&input)
        .args(["--type", "amazon_s3_bucket"])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
    let asset = &value["data"][0];
    assert_eq!(asset["_type"], "amazon_s3_bucket");
    assert_eq!(asset["name"], "bucket1");
    assert_eq!(asset["read_by_(static)"]["items"][0]["_type"], "term");
    assert_eq!(asset["read_by_(static)"]["items"][0]["_id"], "t1");
    assert!(asset.get("unexpected_field").is_none());
    assert_eq!(value["meta"]["version"], env!("CARGO_PKG_VERSION"));

    Ok(())
}

#[test]
fn decode_reads_stdin_envelope() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    let assert = igcop(temp.path())
        .args(["--format", "json", "decode", "-"])
        .write_stdin(SEARCH_PAGE)
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
    assert_eq!(value["data"].as_array().map(|a| a.len()), Some(2));
    assert_eq!(value["data"][0]["_type"], "term");
    assert_eq!(value["data"][1]["_type"], "category");
    assert_eq!(value["meta"]["paging"]["numTotal"], 5);

    Ok(())
}

#[test]
fn decode_untagged_without_type_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let input = write_file(temp.path(), "bucket.json", EXAMPLE_BUCKET);

    igcop(temp.path())
        .arg("decode")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--type"));

    Ok(())
}

#[test]
fn query_prints_request_parameters() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    igcop(temp.path())
        .args(["query", "database_table", "--property", "name", "--page-size", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("types"))
        .stdout(predicate::str::contains("database_table"))
        .stdout(predicate::str::contains("pageSize"))
        .stdout(predicate::str::contains("25"));

    Ok(())
}

#[test]
fn query_uses_configured_page_size() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    write_file(
        temp.path(),
        "config.yaml",
        "preferences:\n  format: json\n  page_size: 250\n",
    );

    let assert = igcop(temp.path())
        .args(["query", "term"])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;
    let params = value["data"].as_array().expect("data array");
    assert!(
        params
            .iter()
            .any(|p| p["name"] == "pageSize" && p["value"] == "250")
    );

    Ok(())
}

#[test]
fn query_relationship_must_be_paged() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    igcop(temp.path())
        .args(["query", "database_table", "--relationship", "database_schema"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a paged relationship"));

    Ok(())
}

#[test]
fn status_uses_custom_config_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_file(
        temp.path(),
        "config.yaml",
        "preferences:\n  page_size: 250\n  strict: true\n",
    );

    let assert = igcop(temp.path()).arg("status").assert().success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains(&config_path.to_string_lossy().to_string()));
    assert!(stdout.contains("Page size: 250"));
    assert!(stdout.contains("Strict decoding: on"));

    Ok(())
}

#[test]
fn version_prints_package_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    igcop(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));

    Ok(())
}

#[test]
fn completion_generates_script() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    igcop(temp.path())
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("igcop"));

    Ok(())
}
