// CLI surface tests. Network-touching paths are exercised at the library
// level (wiremock); these only pin the argument surface.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_the_sync_flow() {
    Command::cargo_bin("ccgsync")
        .expect("binary should exist")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cloud config group"))
        .stdout(predicate::str::contains("--simulated"))
        .stdout(predicate::str::contains("--account"));
}

#[test]
fn version_reports_the_crate_version() {
    Command::cargo_bin("ccgsync")
        .expect("binary should exist")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ccgsync"));
}

#[test]
fn unknown_flags_are_rejected() {
    Command::cargo_bin("ccgsync")
        .expect("binary should exist")
        .arg("--frobnicate")
        .assert()
        .failure();
}

#[test]
fn account_flag_requires_a_numeric_id() {
    Command::cargo_bin("ccgsync")
        .expect("binary should exist")
        .args(["--account", "not-a-number"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
