//! Smoke tests for the gatesync binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn gatesync() -> Command {
    let mut cmd = Command::cargo_bin("gatesync").unwrap();
    cmd.env_remove("NEXTDNS_API_KEY")
        .env_remove("NEXTDNS_PROFILE")
        .env_remove("GATESYNC_BLOCK_SOURCES")
        .env_remove("GATESYNC_REWRITE_SOURCES");
    cmd
}

#[test]
fn help_lists_the_commands() {
    gatesync()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("sync")
                .and(predicate::str::contains("status"))
                .and(predicate::str::contains("wipe"))
                .and(predicate::str::contains("config")),
        );
}

#[test]
fn wipe_refuses_without_confirmation() {
    gatesync()
        .arg("wipe")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn config_path_prints_a_toml_location() {
    gatesync()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
