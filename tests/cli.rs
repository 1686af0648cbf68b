//! End-to-end tests driving the code_parser binary

use assert_cmd::Command;
use indoc::indoc;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const SAMPLE: &str = indoc! {"
    1
    Intro text A1 and B22 here.
    2
    C5 D10 A1
"};

fn code_parser_cmd() -> Command {
    Command::cargo_bin("code_parser").unwrap()
}

#[test]
fn prints_summary_and_declines_save() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, SAMPLE).unwrap();

    code_parser_cmd()
        .current_dir(dir.path())
        .arg(&input)
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total codes found: 5"))
        .stdout(predicate::str::contains("A1, B22, C5, D10, A1"))
        .stdout(predicate::str::contains("Save results to file? (y/n)"));

    assert!(!dir.path().join("extracted_codes.txt").exists());
}

#[test]
fn saves_to_default_output_on_blank_name() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, SAMPLE).unwrap();

    code_parser_cmd()
        .current_dir(dir.path())
        .arg("input.txt")
        .write_stdin("y\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Results saved to 'extracted_codes.txt'"));

    let saved = fs::read_to_string(dir.path().join("extracted_codes.txt")).unwrap();
    assert_eq!(saved, "A1, B22, C5, D10, A1");
}

#[test]
fn saves_to_named_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("input.txt"), "B7 A123\n3\nD21").unwrap();

    code_parser_cmd()
        .current_dir(dir.path())
        .arg("input.txt")
        .write_stdin("Y\nmine.txt\n")
        .assert()
        .success();

    let saved = fs::read_to_string(dir.path().join("mine.txt")).unwrap();
    assert_eq!(saved, "B7, A12, D21");
}

#[test]
fn save_failure_is_reported_without_failing() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("input.txt"), SAMPLE).unwrap();

    code_parser_cmd()
        .current_dir(dir.path())
        .arg("input.txt")
        .write_stdin("y\nno_such_dir/out.txt\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total codes found: 5"))
        .stdout(predicate::str::contains("Error saving to file:"));
}

#[test]
fn missing_input_reports_not_found() {
    let dir = tempdir().unwrap();

    code_parser_cmd()
        .current_dir(dir.path())
        .arg("absent.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: File 'absent.txt' not found."))
        .stdout(predicate::str::contains("No codes found."))
        .stdout(predicate::str::contains("Save results").not());
}

#[test]
fn default_input_file_is_used_without_argument() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("new 2 simple.txt"), "C3").unwrap();

    code_parser_cmd()
        .current_dir(dir.path())
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Parsing codes from file: new 2 simple.txt"))
        .stdout(predicate::str::contains("Total codes found: 1"));
}

#[test]
fn file_without_codes_skips_prompt() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("input.txt"), "nothing\n1\nE5 here").unwrap();

    code_parser_cmd()
        .current_dir(dir.path())
        .arg("input.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("No codes found."))
        .stdout(predicate::str::contains("Save results").not());
}

#[test]
fn unreadable_input_reports_read_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("input.txt"), [0x41, 0x31, 0xff, 0xfe]).unwrap();

    code_parser_cmd()
        .current_dir(dir.path())
        .arg("input.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error reading file: "))
        .stdout(predicate::str::contains("No codes found."))
        .stdout(predicate::str::contains("Save results").not());
}

#[test]
fn plays_back_a_saved_list() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("input.txt"), SAMPLE).unwrap();

    code_parser_cmd()
        .current_dir(dir.path())
        .arg("input.txt")
        .write_stdin("y\n\n")
        .assert()
        .success();

    code_parser_cmd()
        .current_dir(dir.path())
        .args(["--play", "extracted_codes.txt"])
        .write_stdin("n\ng 9\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("File loaded successfully! 5 codes found."))
        .stdout(predicate::str::contains("[1/5] A1"))
        .stdout(predicate::str::contains("[2/5] B22"))
        .stdout(predicate::str::contains("[5/5] A1"))
        .stdout(predicate::str::contains("Finished! All codes displayed."));
}

#[test]
fn playing_an_empty_list_reports_no_codes() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("codes.txt"), " , ").unwrap();

    code_parser_cmd()
        .current_dir(dir.path())
        .args(["--play", "codes.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: No codes found in the file!"));
}
