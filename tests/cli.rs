use std::fs;

use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("wbenvelope").expect("binary is built")
}

const PASSING: &str = "title = \"Local flight\"\ncallsign = \"PH-KAT\"\ndate = \"2024-05-01\"\n\
                       empty_weight = 500\nempty_moment = 150\npilot_weight = 80\n\
                       pax_weight = 70\nbaggage = 10\nfuel = 50\n";

#[test]
fn evaluates_profile_and_writes_diagram() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let profile = dir.path().join("flight.toml");
    fs::write(&profile, PASSING).expect("profile written");

    cmd()
        .arg(&profile)
        .assert()
        .success()
        .stdout(contains("Local flight    PH-KAT    2024-05-01"))
        .stdout(contains("Fuel: 50 litres, 36.0 kg"))
        .stdout(contains("Verdict: within limits"));

    let svg = fs::read_to_string(dir.path().join("flight.svg")).expect("diagram written");
    assert!(svg.contains("Moment (kg.m)"));
}

#[test]
fn defaults_to_example_profile_in_working_directory() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let failing = PASSING.replace("empty_moment = 150", "empty_moment = 125");
    fs::write(dir.path().join("example.toml"), failing).expect("profile written");

    cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(contains("[OUT]"))
        .stdout(contains("Verdict: OUT OF LIMITS"));

    assert!(dir.path().join("example.svg").exists());
}

#[test]
fn existing_diagram_is_overwritten() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let profile = dir.path().join("flight.toml");
    fs::write(&profile, PASSING).expect("profile written");
    let diagram = dir.path().join("flight.svg");
    fs::write(&diagram, "stale").expect("old diagram written");

    cmd().arg(&profile).assert().success();

    let svg = fs::read_to_string(&diagram).expect("diagram written");
    assert!(!svg.contains("stale"));
    assert!(svg.contains("Verdict: within limits"));
}

#[test]
fn missing_required_field_is_fatal() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let profile = dir.path().join("broken.toml");
    fs::write(&profile, PASSING.replace("fuel = 50\n", "")).expect("profile written");

    cmd()
        .arg(&profile)
        .assert()
        .failure()
        .stderr(contains("missing required field `fuel`"));
}

#[test]
fn missing_profile_file_is_fatal() {
    let dir = tempfile::tempdir().expect("temporary directory");

    cmd()
        .arg(dir.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(contains("failed to read profile"));
}
