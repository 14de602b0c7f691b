//! End-to-end tests for the non-interactive commands.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn freetier() -> Command {
    let mut cmd = Command::cargo_bin("freetier").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("FREETIER_LOG_LEVEL")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn list_filters_by_model_name() {
    freetier()
        .args(["list", "--query", "deepseek"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OpenRouter"))
        .stdout(predicate::str::contains("https://openrouter.ai"));
}

#[test]
fn list_json_is_valid() {
    let output = freetier().args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["tab"], "providers");
    assert_eq!(value["query"], "");
    let count = value["count"].as_u64().unwrap();
    assert!(count > 0);
    assert_eq!(value["entries"].as_array().unwrap().len() as u64, count);
}

#[test]
fn list_deployment_tab() {
    freetier()
        .args(["list", "--tab", "deployment"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Deployment ("))
        .stdout(predicate::str::contains("Vercel"))
        .stdout(predicate::str::contains("Features:"));
}

#[test]
fn list_without_matches() {
    freetier()
        .args(["list", "-q", "xyz123"])
        .assert()
        .success()
        .stdout("No LLM Providers match \"xyz123\".\n");
}

#[test]
fn list_rejects_unknown_tab() {
    freetier()
        .args(["list", "--tab", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid catalog"));
}

#[test]
fn open_prints_link() {
    freetier()
        .args(["open", "groq", "--print"])
        .assert()
        .success()
        .stdout("https://console.groq.com\n");
}

#[test]
fn open_unknown_entry_fails() {
    freetier()
        .args(["open", "nonexistent", "--print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no entry matches"));
}

#[test]
fn completion_bash() {
    freetier()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("freetier"));
}

#[test]
fn help_mentions_environment() {
    freetier()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("freetier"))
        .stdout(predicate::str::contains("FREETIER_HOME"));
}

#[test]
fn interactive_mode_needs_a_terminal() {
    let dir = tempfile::tempdir().unwrap();
    freetier()
        .env("FREETIER_HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs a terminal"));
}
