use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../quizzer-babel/tests/fixtures")
        .join(name)
}

#[test]
fn bare_file_argument_converts() {
    let mut cmd = cargo_bin_cmd!("quizzer");
    cmd.arg(fixture("capitals.quiz")).args(["--to", "json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let quiz: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(quiz["questions"].as_array().unwrap().len(), 3);
    assert_eq!(quiz["questions"][0]["text"], "Capital of France?");
    assert_eq!(
        quiz["questions"][1]["options"],
        serde_json::json!(["Madrid", "Barcelona"])
    );
    assert!(quiz.get("id").is_none());
}

#[test]
fn converts_to_blank_report() {
    let mut cmd = cargo_bin_cmd!("quizzer");
    cmd.arg("convert")
        .arg(fixture("capitals.quiz"))
        .args(["--to", "report"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(
            "1. Capital of France?\nRespuesta: \n\n2. Capital of Spain?",
        ))
        .stdout(predicate::str::contains("3. Capital of Italy?"));
}

#[test]
fn json_output_converts_back_to_quiz_text() {
    let dir = tempdir().unwrap();
    let json_path = dir.path().join("capitals.json");

    cargo_bin_cmd!("quizzer")
        .arg(fixture("capitals.quiz"))
        .args(["--to", "json", "-o"])
        .arg(&json_path)
        .assert()
        .success()
        .stdout("");

    cargo_bin_cmd!("quizzer")
        .arg(&json_path)
        .args(["--to", "quiz"])
        .assert()
        .success()
        .stdout(
            "# Capital of France?\n- Paris\n- Lyon\n- Marseille\n\n\
             # Capital of Spain?\n- Madrid\n- Barcelona\n\n\
             # Capital of Italy?\n- Rome\n- Milan\n",
        );
}

#[test]
fn format_prints_canonical_text() {
    let expected = fs::read_to_string(fixture("canonical.quiz")).unwrap();
    cargo_bin_cmd!("quizzer")
        .arg("format")
        .arg(fixture("canonical.quiz"))
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn txt_source_is_read_as_quiz_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pasted.txt");
    fs::write(&path, "1. What is 2+2?\na) 3\nb) 4\n").unwrap();

    cargo_bin_cmd!("quizzer")
        .arg(&path)
        .args(["--to", "quiz"])
        .assert()
        .success()
        .stdout("# What is 2+2?\n- 3\n- 4\n");
}

#[test]
fn undetectable_source_format_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.md");
    fs::write(&path, "# Q\n- A\n").unwrap();

    cargo_bin_cmd!("quizzer")
        .arg(&path)
        .args(["--to", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not detect format"));
}

#[test]
fn report_cannot_be_parsed() {
    cargo_bin_cmd!("quizzer")
        .arg(fixture("capitals.quiz"))
        .args(["--from", "report", "--to", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not support parsing"));
}

#[test]
fn lists_formats() {
    cargo_bin_cmd!("quizzer")
        .arg("--list-formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("quiz"))
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("json"));
}
