use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

#[test]
fn check_lists_sections_and_member_links() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("netplan-gen"));
    cmd.env("NO_COLOR", "1")
        .arg("check")
        .arg("--input")
        .arg(fixture("fixtures/bond-bridge.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("- eth0 dhcp4=off member_of=bond0"))
        .stdout(predicate::str::contains("- br0 interfaces=bond0 dhcp4=off"))
        .stdout(predicate::str::contains(
            "version=2 renderer=networkd ethernets=2 bonds=1 bridges=1",
        ));
}

#[test]
fn check_quiet_prints_summary_only() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("netplan-gen"));
    cmd.env("NO_COLOR", "1")
        .arg("check")
        .arg("--quiet")
        .arg("--input")
        .arg(fixture("fixtures/mixed.json"))
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "version=2 renderer=networkd ethernets=4 bonds=1 bridges=1\n",
        ));
}

#[test]
fn check_json_dumps_compiled_model() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("netplan-gen"));
    let output = cmd
        .arg("check")
        .arg("--format")
        .arg("json")
        .arg("--input")
        .arg(fixture("fixtures/mixed.json"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let model: serde_json::Value = serde_json::from_slice(&output).expect("json output");
    assert_eq!(model["version"], 2);
    assert_eq!(model["ethernets"]["eth0"]["dhcp4_overrides"]["route-metric"], 100);
    assert_eq!(model["ethernets"]["eth0"]["dhcp4_overrides"]["use-dns"], false);
    assert_eq!(model["bonds"]["bond0"]["dhcp4"], "disabled");
}

#[test]
fn check_fails_on_missing_name() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("netplan-gen"));
    cmd.arg("check")
        .arg("--input")
        .arg("-")
        .write_stdin(r#"{"interfaces":[{"type":"ethernet","name":""}]}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("interface name is required"));
}
