use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn glossa() -> Command {
    cargo_bin_cmd!("glossa").into()
}

#[test]
fn help_describes_the_export() {
    glossa()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--out-dir"))
        .stdout(predicate::str::contains("--spreadsheet-key"));
}

#[test]
fn version_runs() {
    glossa()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("glossa"));
}

#[test]
fn unknown_flag_is_rejected() {
    glossa()
        .arg("--no-such-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--no-such-flag"));
}
