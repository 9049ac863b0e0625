use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("lintrelay").unwrap()
}

fn write_results(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("lint.json");
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

// --- Help & version ---

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("lint results"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lintrelay"));
}

// --- Configuration errors are fatal ---

#[test]
fn missing_results_path_fails() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .current_dir(&tmp)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("results path not supplied"));
}

#[test]
fn explicit_config_must_exist() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .current_dir(&tmp)
        .args(["--config", "nope.toml", "--results", "lint.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn unknown_review_backend_fails() {
    let tmp = TempDir::new().unwrap();
    let results = write_results(&tmp, "[]");
    cmd()
        .current_dir(&tmp)
        .args(["--results", &results, "--review", "gitlab"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown review backend"));
}

#[test]
fn github_backend_requires_pr() {
    let tmp = TempDir::new().unwrap();
    let results = write_results(&tmp, "[]");
    cmd()
        .current_dir(&tmp)
        .args(["--results", &results, "--review", "github"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("requires a pull request number"));
}

// --- Console backend output ---

#[test]
fn clean_results_print_success_message() {
    let tmp = TempDir::new().unwrap();
    let results = write_results(&tmp, "[]");
    cmd()
        .current_dir(&tmp)
        .args(["--results", &results])
        .assert()
        .success()
        .stdout(predicate::str::contains("message: Lint passed."));
}

#[test]
fn violations_print_failure_lines() {
    let tmp = TempDir::new().unwrap();
    let results = write_results(
        &tmp,
        r#"[{"ruleName": "no-var", "failure": "use let instead of var", "name": "src/index.ts",
            "startPosition": {"line": 3, "character": 2, "position": 40}}]"#,
    );
    cmd()
        .current_dir(&tmp)
        .args(["--results", &results])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("fail:")
                .and(predicate::str::contains("no-var"))
                .and(predicate::str::contains("use let instead of var")),
        );
}

#[test]
fn missing_results_file_prints_warning() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .current_dir(&tmp)
        .args(["--results", "does-not-exist.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "warn: Couldn't read lint results file",
        ));
}

#[test]
fn unparseable_results_file_prints_warning() {
    let tmp = TempDir::new().unwrap();
    let results = write_results(&tmp, "{ not json");
    cmd()
        .current_dir(&tmp)
        .args(["--results", &results])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "warn: Couldn't read lint results file",
        ));
}

// --- Config file ---

#[test]
fn explicit_config_file_is_applied() {
    let tmp = TempDir::new().unwrap();
    let results = write_results(&tmp, "[]");
    let config_path = tmp.path().join("relay.toml");
    fs::write(
        &config_path,
        format!("results_path = {results:?}\nsuccess_message = \"TSLint passed\"\n"),
    )
    .unwrap();

    cmd()
        .current_dir(&tmp)
        .args(["--config", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("message: TSLint passed"));
}

#[test]
fn default_config_path_is_picked_up() {
    let tmp = TempDir::new().unwrap();
    let results = write_results(&tmp, "[]");
    fs::write(
        tmp.path().join("lintrelay.toml"),
        format!("results_path = {results:?}\n"),
    )
    .unwrap();

    cmd()
        .current_dir(&tmp)
        .assert()
        .success()
        .stdout(predicate::str::contains("message: Lint passed."));
}

#[test]
fn cli_flag_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    let results = write_results(&tmp, "[]");
    fs::write(
        tmp.path().join("lintrelay.toml"),
        format!("results_path = {results:?}\nsuccess_message = \"from file\"\n"),
    )
    .unwrap();

    cmd()
        .current_dir(&tmp)
        .args(["--success-message", "from cli"])
        .assert()
        .success()
        .stdout(predicate::str::contains("message: from cli"));
}

#[test]
fn malformed_config_file_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("lintrelay.toml"), "bogus = \"field\"\n").unwrap();

    cmd()
        .current_dir(&tmp)
        .args(["--results", "lint.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("config parse error"));
}
