use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn plot_writes_png() {
    let dir = assert_fs::TempDir::new().unwrap();
    let out = dir.child("nested").child("profile.png");

    Command::cargo_bin("dikeplot")
        .unwrap()
        .args(["plot", "--outfile", out.path().to_str().unwrap()])
        .assert()
        .success();

    out.assert(predicate::path::is_file());
}

#[test]
fn plot_writes_svg() {
    let dir = assert_fs::TempDir::new().unwrap();
    let out = dir.child("profile.svg");

    Command::cargo_bin("dikeplot")
        .unwrap()
        .args(["--variant", "reinforced", "plot", "-o"])
        .arg(out.path())
        .assert()
        .success();

    out.assert(predicate::str::contains("<svg"));
}

#[test]
fn plot_replaces_existing_file() {
    let dir = assert_fs::TempDir::new().unwrap();
    let out = dir.child("profile.svg");
    out.write_str("stale").unwrap();

    Command::cargo_bin("dikeplot")
        .unwrap()
        .arg("plot")
        .arg("--outfile")
        .arg(out.path())
        .assert()
        .success();

    out.assert(predicate::str::contains("stale").not());
}

#[test]
fn plot_to_terminal() {
    Command::cargo_bin("dikeplot")
        .unwrap()
        .arg("plot")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Dike Profile"));
}

#[test]
fn plot_unset_profile_fails() {
    Command::cargo_bin("dikeplot")
        .unwrap()
        .args(["--dike-input", "0,3,0,0,NaN,5,3,0,0,0", "plot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-finite"));
}

#[test]
fn plot_overflowing_extent_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    let out = dir.child("profile.png");

    Command::cargo_bin("dikeplot")
        .unwrap()
        .args(["--dike-input=0,1,0,0,1e308,5,1,0,0,0", "plot", "--outfile"])
        .arg(out.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-finite extent"));

    out.assert(predicate::path::missing());
}

#[test]
fn json_default_design() {
    Command::cargo_bin("dikeplot")
        .unwrap()
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""variant":"standard""#))
        .stdout(predicate::str::contains(r#""height":6.0"#))
        .stdout(predicate::str::contains(r#""width":23.0"#))
        .stdout(predicate::str::contains(r#""crest_width":5.0"#));
}

#[test]
fn csv_has_eight_points() {
    Command::cargo_bin("dikeplot")
        .unwrap()
        .arg("csv")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Index,X,Y\n0,-18,0\n"))
        .stdout(predicate::str::contains("\n7,23,0\n"));
}

#[test]
fn summary_with_negative_values() {
    Command::cargo_bin("dikeplot")
        .unwrap()
        .args([
            "--dike-input=-1,2,3,4,8,6,2.5,4,5,0.5",
            "--variant",
            "reinforced",
            "summary",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Reinforced Profile"))
        .stdout(predicate::str::contains("height: 8\n"))
        .stdout(predicate::str::contains("p1: (-22, -1)"))
        .stdout(predicate::str::contains("width: 29.75\n"));
}

#[test]
fn wrong_value_count_is_rejected() {
    Command::cargo_bin("dikeplot")
        .unwrap()
        .args(["--dike-input", "1,2,3", "summary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected 10 values, 3 provided"));
}
