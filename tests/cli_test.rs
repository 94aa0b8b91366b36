//! End-to-end tests of the `feature-matrix` binary.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn feature_matrix(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("feature-matrix");
    cmd.current_dir(dir.path()).env_remove("GITHUB_OUTPUT");
    cmd
}

fn package_with_features(features: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("Cargo.toml"),
        format!(
            "[package]\nname = \"demo\"\nversion = \"0.1.0\"\n\n[features]\n{}",
            features
        ),
    )
    .unwrap();
    dir
}

#[test]
fn stdout_is_exactly_the_matrix() {
    let dir = package_with_features("a = []\nb = []\nc = [\"a\"]\n");

    feature_matrix(&dir)
        .assert()
        .success()
        .stdout("[\"\",\"a\",\"b\",\"c\",\"a,b\",\"a,c\",\"b,c\",\"a,b,c\"]\n");
}

#[test]
fn github_output_gets_one_appended_line() {
    let dir = package_with_features("x = []\n");
    let output = dir.path().join("github_output");
    std::fs::write(&output, "earlier=value\n").unwrap();

    feature_matrix(&dir)
        .env("GITHUB_OUTPUT", &output)
        .assert()
        .success()
        .stdout("");

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "earlier=value\nfeatures=[\"\",\"x\"]\n"
    );
}

#[test]
fn explicit_manifest_path_and_output_name() {
    let dir = package_with_features("tls = []\n");
    let elsewhere = TempDir::new().unwrap();
    let output = elsewhere.path().join("out");

    feature_matrix(&elsewhere)
        .arg("--manifest-path")
        .arg(dir.path().join("Cargo.toml"))
        .args(["--output-name", "matrix"])
        .env("GITHUB_OUTPUT", &output)
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "matrix=[\"\",\"tls\"]\n"
    );
}

#[test]
fn missing_features_section_yields_empty_combination() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("Cargo.toml"), "[package]\nname = \"bare\"\n").unwrap();

    feature_matrix(&dir).assert().success().stdout("[\"\"]\n");
}

#[test]
fn missing_manifest_fails() {
    let dir = TempDir::new().unwrap();

    feature_matrix(&dir)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Could not find manifest"));
}

#[test]
fn malformed_manifest_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("Cargo.toml"), "[features\nhttp = []\n").unwrap();

    feature_matrix(&dir)
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("not valid TOML"));
}

#[test]
fn invalid_output_name_rejected() {
    let dir = package_with_features("x = []\n");

    feature_matrix(&dir)
        .args(["--output-name", "a=b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("output_name"));
}
