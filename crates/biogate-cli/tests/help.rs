use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get a Command for the biogate binary.
#[allow(deprecated)]
fn biogate_cmd() -> Command {
    Command::cargo_bin("biogate").unwrap()
}

#[test]
fn help_works() {
    biogate_cmd().arg("--help").assert().success();
}

#[test]
fn help_lists_subcommands() {
    biogate_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("decide"))
        .stdout(predicate::str::contains("simple"))
        .stdout(predicate::str::contains("summary"))
        .stdout(predicate::str::contains("explain"));
}

#[test]
fn decide_requires_attempt() {
    biogate_cmd()
        .arg("decide")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--attempt"));
}
