mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn test_captures_lists_only_analyzable_files() {
    let fixture = TestFixture::new();
    fixture.write_file("scans/trace.pcapng", "\n");
    fixture.write_file("scans/nested/export.json", "[]");
    fixture.write_file("scans/notes.txt", "n/a");

    fixture
        .command()
        .arg("captures")
        .arg(fixture.path().join("scans"))
        .assert()
        .success()
        .stdout(predicate::str::contains("trace.pcapng"))
        .stdout(predicate::str::contains("export.json"))
        .stdout(predicate::str::contains("json export"))
        .stdout(predicate::str::contains("notes.txt").not());
}

#[test]
fn test_captures_empty_directory() {
    let fixture = TestFixture::new();
    fixture.write_file("scans/notes.txt", "n/a");

    fixture
        .command()
        .arg("captures")
        .arg(fixture.path().join("scans"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No captures found"));
}

#[test]
fn test_captures_missing_directory_fails() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("captures")
        .arg("/nonexistent/scans")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_opcodes_prints_the_standard_table() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("opcodes")
        .assert()
        .success()
        .stdout(predicate::str::contains("0x12  Write Request"))
        .stdout(predicate::str::contains("0x1b  Handle Value Notification"))
        .stdout(predicate::str::contains("0xd2  Signed Write Command"));
}

#[test]
fn test_no_command_shows_guidance() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("gattrace analyze"));
}
