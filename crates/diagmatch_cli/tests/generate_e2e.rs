//! End-to-end tests for the `diagmatch generate` command.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn diagmatch_in(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_diagmatch"));
    cmd.current_dir(dir.path());
    cmd
}

fn owners(json: &Value) -> Vec<String> {
    json["problemMatcher"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["owner"].as_str().unwrap().to_string())
        .collect()
}

fn generate_stdout(dir: &TempDir, extra: &[&str]) -> Value {
    let output = diagmatch_in(dir).arg("generate").args(extra).output().unwrap();
    assert!(output.status.success(), "generate failed: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn generate_prints_json_to_stdout() {
    let dir = TempDir::new().unwrap();
    let json = generate_stdout(&dir, &[]);

    assert_eq!(owners(&json), ["gcc", "clang", "msvc", "godot"]);
}

#[test]
fn clang_fields_are_positional() {
    let dir = TempDir::new().unwrap();
    let json = generate_stdout(&dir, &["--only", "clang"]);

    let line = &json["problemMatcher"][0]["pattern"][0];
    assert_eq!(line["file"], 1);
    assert_eq!(line["line"], 2);
    assert_eq!(line["column"], 3);
    assert!(!line["regexp"].as_str().unwrap().contains("?P<"));
}

#[test]
fn godot_has_two_lines() {
    let dir = TempDir::new().unwrap();
    let json = generate_stdout(&dir, &["--only", "godot"]);

    let pattern = json["problemMatcher"][0]["pattern"].as_array().unwrap();
    assert_eq!(pattern.len(), 2);
    assert!(pattern[0].get("severity").is_some());
    assert!(pattern[1].get("file").is_some());
}

#[test]
fn only_keeps_registry_order() {
    let dir = TempDir::new().unwrap();
    let json = generate_stdout(&dir, &["--only", "godot", "gcc"]);

    assert_eq!(owners(&json), ["gcc", "godot"]);
}

#[test]
fn only_with_unknown_owner_fails() {
    let dir = TempDir::new().unwrap();

    diagmatch_in(&dir)
        .args(["generate", "--only", "javac"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown matcher 'javac'"));
}

#[test]
fn output_is_identical_across_runs() {
    let dir = TempDir::new().unwrap();

    let first = diagmatch_in(&dir).arg("generate").output().unwrap().stdout;
    let second = diagmatch_in(&dir).arg("generate").output().unwrap().stdout;

    assert_eq!(first, second);
}

#[test]
fn generate_writes_output_file() {
    let dir = TempDir::new().unwrap();

    diagmatch_in(&dir)
        .args(["generate", "-o", "matchers.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote 4 matchers"));

    let written = fs::read_to_string(dir.path().join("matchers.json")).unwrap();
    let json: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(owners(&json).len(), 4);
    assert!(written.ends_with('\n'));
}

#[test]
fn check_passes_after_generate() {
    let dir = TempDir::new().unwrap();

    diagmatch_in(&dir).args(["generate", "-o", "matchers.json"]).assert().success();

    diagmatch_in(&dir)
        .args(["generate", "-o", "matchers.json", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("up to date"));
}

#[test]
fn check_fails_when_file_is_stale() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("matchers.json"), "{}\n").unwrap();

    diagmatch_in(&dir)
        .args(["generate", "-o", "matchers.json", "--check"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("out of date"));

    assert_eq!(fs::read_to_string(dir.path().join("matchers.json")).unwrap(), "{}\n");
}

#[test]
fn check_fails_when_file_is_missing() {
    let dir = TempDir::new().unwrap();

    diagmatch_in(&dir)
        .args(["generate", "-o", "matchers.json", "--check"])
        .assert()
        .code(1);
}

#[test]
fn check_without_output_path_is_an_error() {
    let dir = TempDir::new().unwrap();

    diagmatch_in(&dir)
        .args(["generate", "--check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--check needs an output path"));
}

#[test]
fn config_disables_and_adds_matchers() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".diagmatch.toml"),
        r#"
disabled_matchers = ["msvc"]

[[matchers]]
owner = "mytool"
lines = [['(?P<file>[^:]+)', ':(?P<line>\d+)', '(?P<message>.+)']]
"#,
    )
    .unwrap();

    let json = generate_stdout(&dir, &[]);
    assert_eq!(owners(&json), ["gcc", "clang", "godot", "mytool"]);
    assert_eq!(json["problemMatcher"][3]["pattern"][0]["message"], 3);
}

#[test]
fn config_output_path_is_used() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".diagmatch.toml"), r#"output = "out.json""#).unwrap();

    diagmatch_in(&dir).arg("generate").assert().success();

    assert!(dir.path().join("out.json").exists());
}

#[test]
fn duplicate_field_in_custom_matcher_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".diagmatch.toml"),
        r#"
[[matchers]]
owner = "broken"
lines = [['(?P<file>a)', '(?P<file>b)']]
"#,
    )
    .unwrap();

    diagmatch_in(&dir)
        .arg("generate")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("duplicate field 'file'"));
}

#[test]
fn custom_owner_colliding_with_builtin_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".diagmatch.toml"),
        r#"
[[matchers]]
owner = "gcc"
lines = [['(?P<message>.+)']]
"#,
    )
    .unwrap();

    diagmatch_in(&dir)
        .arg("generate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("defined more than once"));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();

    diagmatch_in(&dir)
        .args(["generate", "-c", "nope.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn verbose_mode_in_custom_matcher_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".diagmatch.toml"),
        r#"
[[matchers]]
owner = "spaced"
lines = [['(?x) (?P<message>\w+) # word (only)']]
"#,
    )
    .unwrap();

    diagmatch_in(&dir)
        .arg("generate")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("verbose mode is not supported"));
}

#[test]
fn alternation_in_custom_matcher_stays_anchored() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".diagmatch.toml"),
        r#"
disabled_matchers = ["gcc", "clang", "msvc", "godot"]

[[matchers]]
owner = "either"
lines = [['(?P<file>a)', 'x|y']]
"#,
    )
    .unwrap();

    let json = generate_stdout(&dir, &[]);
    let regexp = json["problemMatcher"][0]["pattern"][0]["regexp"].as_str().unwrap();
    assert!(regexp.contains("(?:x|y)"));
}
