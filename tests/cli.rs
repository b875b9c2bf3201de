use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn sorting_tool() -> Command {
    Command::cargo_bin("sorting-tool").expect("binary is built")
}

#[test]
fn sorts_numbers_from_stdin_by_default() {
    sorting_tool()
        .write_stdin("3 1 2")
        .assert()
        .success()
        .stdout("Total numbers: 3.\nSorted data: 1 2 3 \n");
}

#[test]
fn counts_words() {
    sorting_tool()
        .args(["-dataType", "word", "-sortingType", "byCount"])
        .write_stdin("a b a")
        .assert()
        .success()
        .stdout("Total words: 3.\nb: 1 time(s), 33%\na: 2 time(s), 67%\n");
}

#[test]
fn counts_lines() {
    sorting_tool()
        .args(["-sortingType", "byCount", "-dataType", "line"])
        .write_stdin("apple\napple\n")
        .assert()
        .success()
        .stdout("Total lines: 2.\napple: 2 time(s), 100%\n");
}

#[test]
fn skips_malformed_numbers() {
    sorting_tool()
        .write_stdin("5 x 7")
        .assert()
        .success()
        .stdout("\"x\" is not an int. It will be skipped.\nTotal numbers: 2.\nSorted data: 5 7 \n");
}

#[test]
fn empty_input() {
    sorting_tool()
        .args(["-dataType", "word"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("Total words: 0.\nSorted data: \n");
}

#[test]
fn reports_unknown_parameters_and_continues() {
    sorting_tool()
        .args(["-reverse", "-dataType", "word", "extra"])
        .write_stdin("b a")
        .assert()
        .success()
        .stdout(
            "\"-reverse\" is not a valid parameter. It will be skipped.\n\
             \"extra\" is not a valid parameter. It will be skipped.\n\
             Total words: 2.\nSorted data: a b \n",
        );
}

#[test]
fn trailing_parameter_without_value_is_ignored() {
    sorting_tool()
        .args(["-dataType", "word", "-sortingType"])
        .write_stdin("b a")
        .assert()
        .success()
        .stdout("Total words: 2.\nSorted data: a b \n");
}

#[test]
fn unknown_data_type_sorts_nothing() {
    sorting_tool()
        .args(["-dataType", "float"])
        .write_stdin("1.5 0.5")
        .assert()
        .success()
        .stdout("Unknown data type: float\n");
}

#[test]
fn reads_and_writes_files() {
    let temp_dir = TempDir::new().expect("temp dir");
    let input = temp_dir.path().join("input.txt");
    let output = temp_dir.path().join("output.txt");
    fs::write(&input, "pear\nApple\n\npear\n").expect("write input");

    sorting_tool()
        .arg("-inputFile")
        .arg(&input)
        .arg("-outputFile")
        .arg(&output)
        .args(["-dataType", "line"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(
        fs::read_to_string(&output).expect("read output"),
        "Total lines: 4.\nSorted data:\n\nApple\npear\npear\n"
    );
}

#[cfg(unix)]
#[test]
fn reads_input_file_that_is_a_pipe() {
    sorting_tool()
        .args(["-inputFile", "/dev/stdin"])
        .write_stdin("3 1 2")
        .assert()
        .success()
        .stdout("Total numbers: 3.\nSorted data: 1 2 3 \n");
}

#[cfg(unix)]
#[test]
fn refuses_output_hard_linked_to_input() {
    let temp_dir = TempDir::new().expect("temp dir");
    let input = temp_dir.path().join("input.txt");
    let linked = temp_dir.path().join("linked.txt");
    fs::write(&input, "3 1 2").expect("write input");
    fs::hard_link(&input, &linked).expect("hard link");

    sorting_tool()
        .arg("-inputFile")
        .arg(&input)
        .arg("-outputFile")
        .arg(&linked)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is also the output file"));

    assert_eq!(fs::read_to_string(&input).expect("read input"), "3 1 2");
}

#[test]
fn missing_input_file_is_reported() {
    let temp_dir = TempDir::new().expect("temp dir");
    let input = temp_dir.path().join("missing.txt");
    let output = temp_dir.path().join("output.txt");

    sorting_tool()
        .arg("-inputFile")
        .arg(&input)
        .arg("-outputFile")
        .arg(&output)
        .assert()
        .success()
        .stdout("Error: Input file not found.\n");

    assert!(!output.exists());
}

#[test]
fn logs_stay_off_stdout() {
    sorting_tool()
        .env("RUST_LOG", "debug")
        .write_stdin("2 1")
        .assert()
        .success()
        .stdout("Total numbers: 2.\nSorted data: 1 2 \n")
        .stderr(predicate::str::contains("sorting long tokens"));
}

#[test]
fn shows_help() {
    sorting_tool()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("-dataType"));
}
