//! Integration tests driving the three binaries as subprocesses.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn doc_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn cat_reemits_indented_by_default() {
    let file = doc_file("name: \"Ada\"\nage: 36\n");
    Command::cargo_bin("hipack-cat")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("name:\"Ada\"").or(predicate::str::contains("name: \"Ada\"")));
}

#[test]
fn cat_compact_has_no_newlines_between_items() {
    let file = doc_file("a: 1\nb: 2\n");
    Command::cargo_bin("hipack-cat")
        .unwrap()
        .args(["--compact"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("a:1,b:2,"));
}

#[test]
fn cat_reports_parse_errors_with_position() {
    let file = doc_file("broken: 0x");
    Command::cargo_bin("hipack-cat")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid numeric value"));
}

#[test]
fn get_walks_nested_dict_keys() {
    let file = doc_file("outer: {inner: 42}");
    Command::cargo_bin("hipack-get")
        .unwrap()
        .arg(file.path())
        .args(["outer", "inner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("42"));
}

#[test]
fn get_walks_list_indices() {
    let file = doc_file("xs: [10, 20, 30]");
    Command::cargo_bin("hipack-get")
        .unwrap()
        .arg(file.path())
        .args(["xs", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("20"));
}

#[test]
fn get_reports_missing_key() {
    let file = doc_file("a: 1");
    Command::cargo_bin("hipack-get")
        .unwrap()
        .arg(file.path())
        .args(["missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn roundtrip_succeeds_on_well_formed_input() {
    let file = doc_file("msg: \"hello\"\nxs: [true, false, -7]\n");
    Command::cargo_bin("hipack-roundtrip")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ok"));
}

#[test]
fn roundtrip_fails_on_unparseable_input() {
    let file = doc_file("broken: {");
    Command::cargo_bin("hipack-roundtrip")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure();
}
