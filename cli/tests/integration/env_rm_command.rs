//! End-to-end tests for `fleet env rm`.
//!
//! By default the API URL points at a closed local port so every delete fails
//! fast with a transport error. Tests that need real responses start a
//! [`StubApi`] and point `FLEET_API_URL` at it.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::stub_api::StubApi;

/// Port 9 (discard) is not listening on test machines.
const UNREACHABLE_API: &str = "http://127.0.0.1:9";

fn fleet(home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fleet"));
    cmd.env("NO_COLOR", "1")
        .env("FLEET_CONFIG", home.path().join("config.yaml"))
        .env("FLEET_API_URL", UNREACHABLE_API)
        .env_remove("FLEET_TOKEN")
        .env_remove("FLEET_YES")
        .env_remove("FLEET_LOG");
    for proxy in ["HTTP_PROXY", "http_proxy", "ALL_PROXY", "all_proxy"] {
        cmd.env_remove(proxy);
    }
    cmd
}

fn logged_in(home: &TempDir) -> Command {
    let mut cmd = fleet(home);
    cmd.env("FLEET_TOKEN", "test-token");
    cmd
}

#[test]
fn test_not_logged_in_fails_before_prompting() {
    let home = TempDir::new().expect("tempdir");
    fleet(&home)
        .args(["env", "rm", "123"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Login required"));
}

#[test]
fn test_token_from_config_file_counts_as_session() {
    let home = TempDir::new().expect("tempdir");
    std::fs::write(
        home.path().join("config.yaml"),
        "token: file-token\nrequest_timeout_secs: 5\n",
    )
    .expect("write config");
    fleet(&home)
        .args(["env", "rm", "123", "--yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Login required").not())
        .stdout(predicate::str::contains(", id: 123"));
}

#[test]
fn test_unparsable_config_is_fatal() {
    let home = TempDir::new().expect("tempdir");
    std::fs::write(home.path().join("config.yaml"), "token: [broken\n").expect("write config");
    logged_in(&home)
        .args(["env", "rm", "1", "--yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot parse"));
}

#[test]
fn test_every_id_is_attempted_when_deletes_fail() {
    let home = TempDir::new().expect("tempdir");
    logged_in(&home)
        .args(["env", "rm", "1,2,3", "--yes"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(", id: 1"))
        .stdout(predicate::str::contains(", id: 2"))
        .stdout(predicate::str::contains(", id: 3"))
        .stdout(predicate::str::contains("3 of 3 deletions failed"));
}

#[test]
fn test_short_yes_flag_and_scope_flags_target_device_config() {
    let home = TempDir::new().expect("tempdir");
    logged_in(&home)
        .args(["env", "rm", "9", "--device", "--config", "-y"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("device_config_variable 9"));
}

#[test]
fn test_fleet_yes_env_skips_prompt() {
    let home = TempDir::new().expect("tempdir");
    logged_in(&home)
        .env("FLEET_YES", "1")
        .args(["env", "rm", "4"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(", id: 4"));
}

#[test]
fn test_json_output_reports_each_outcome() {
    let home = TempDir::new().expect("tempdir");
    let output = logged_in(&home)
        .args(["--json", "env", "rm", "5,6", "--yes"])
        .output()
        .expect("run fleet");

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is one JSON document");
    assert_eq!(value["status"], "completed");
    assert_eq!(value["resource"], "application_environment_variable");
    assert_eq!(value["outcomes"][0]["id"], 5);
    assert_eq!(value["outcomes"][0]["result"], "failed");
    assert_eq!(value["outcomes"][1]["id"], 6);
}

#[test]
fn test_json_output_error_object_when_not_logged_in() {
    let home = TempDir::new().expect("tempdir");
    let output = fleet(&home)
        .args(["--json", "env", "rm", "1", "--yes"])
        .output()
        .expect("run fleet");

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is one JSON document");
    assert_eq!(value["error"], true);
    assert_eq!(value["code"], "NOT_LOGGED_IN");
}

// --- Against a responding API ---

fn ok(_request_line: &str) -> (u16, &'static str) {
    (204, "")
}

fn second_id_missing(request_line: &str) -> (u16, &'static str) {
    if request_line.contains("(2)") {
        (404, "not found")
    } else {
        (200, "")
    }
}

#[test]
fn test_single_id_deleted_exits_zero() {
    let home = TempDir::new().expect("tempdir");
    let api = StubApi::serve(1, ok);
    logged_in(&home)
        .env("FLEET_API_URL", &api.url)
        .args(["env", "rm", "123", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "deleted application_environment_variable 123",
        ))
        .stdout(predicate::str::contains("failed").not());

    assert_eq!(
        api.request_lines(),
        vec!["DELETE /v6/application_environment_variable(123) HTTP/1.1"]
    );
}

#[test]
fn test_not_found_is_reported_and_later_ids_still_deleted() {
    let home = TempDir::new().expect("tempdir");
    let api = StubApi::serve(3, second_id_missing);
    logged_in(&home)
        .env("FLEET_API_URL", &api.url)
        .args(["env", "rm", "1,2,3", "--yes"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("not found, id: 2"))
        .stdout(predicate::str::contains(
            "deleted application_environment_variable 3",
        ))
        .stdout(predicate::str::contains("1 of 3 deletions failed"));

    assert_eq!(
        api.request_lines(),
        vec![
            "DELETE /v6/application_environment_variable(1) HTTP/1.1",
            "DELETE /v6/application_environment_variable(2) HTTP/1.1",
            "DELETE /v6/application_environment_variable(3) HTTP/1.1",
        ]
    );
}

#[test]
fn test_no_color_env_set_to_one_still_runs_command() {
    let home = TempDir::new().expect("tempdir");
    let api = StubApi::serve(2, ok);
    logged_in(&home)
        .env("NO_COLOR", "1")
        .env("FLEET_API_URL", &api.url)
        .args(["env", "rm", "1,2", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted application_environment_variable 2"));

    assert_eq!(api.request_lines().len(), 2);
}
