#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Runs inside an empty directory with HOME pointed at it, so no stray
/// config file is picked up.
fn sentiment_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sentiment").expect("binary should compile");
    cmd.current_dir(dir.path()).env("HOME", dir.path());
    cmd
}

#[test]
fn predict_positive_text_outputs_wire_json() {
    let dir = TempDir::new().expect("temp dir should be created");
    sentiment_in(&dir)
        .args(["predict", "I love this amazing product"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            r#"{"sentiment":"Positive","confidence":1.0,"prediction":1,"pos_score":6.0,"neg_score":0.0}"#,
        ));
}

#[test]
fn predict_empty_input_omits_scores() {
    let dir = TempDir::new().expect("temp dir should be created");
    sentiment_in(&dir)
        .args(["predict", "123 !!!"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            r#"{"sentiment":"Neutral","confidence":0.5,"prediction":0}"#,
        ))
        .stdout(predicate::str::contains("pos_score").not());
}

#[test]
fn predict_reads_stdin_when_no_text_given() {
    let dir = TempDir::new().expect("temp dir should be created");
    sentiment_in(&dir)
        .arg("predict")
        .write_stdin("This is absolutely terrible and awful")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"sentiment\":\"Negative\""))
        .stdout(predicate::str::contains("\"neg_score\":4.0"));
}

#[test]
fn predict_reads_file_and_renders_markdown() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("review.txt"), "It was okay I guess").expect("review should write");

    sentiment_in(&dir)
        .args(["predict", "--file", "review.txt", "--format", "md"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("- sentiment: Neutral"))
        .stdout(predicate::str::contains("- confidence: 0.50"));
}

#[test]
fn predict_missing_file_is_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    sentiment_in(&dir)
        .args(["predict", "--file", "absent.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn predict_uses_repository_config_format() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("sentiment.toml"),
        r#"
[report]
format = "md"
"#,
    )
    .expect("config should write");

    sentiment_in(&dir)
        .args(["predict", "great"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Sentiment"));
}

#[test]
fn invalid_config_is_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("sentiment.toml"),
        r#"
[server]
max_body_bytes = 0
"#,
    )
    .expect("config should write");

    sentiment_in(&dir)
        .args(["predict", "great"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("max_body_bytes"));
}

#[test]
fn explicit_config_must_exist() {
    let dir = TempDir::new().expect("temp dir should be created");
    sentiment_in(&dir)
        .args(["--config", "missing.toml", "predict", "great"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn keyword_engine_labels_ties_negative() {
    let dir = TempDir::new().expect("temp dir should be created");
    sentiment_in(&dir)
        .args(["predict", "good bad", "--engine", "keyword"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            r#"{"sentiment":"Negative","confidence":0.5,"prediction":0}"#,
        ));
}

#[test]
fn exported_model_is_loadable() {
    let dir = TempDir::new().expect("temp dir should be created");
    sentiment_in(&dir)
        .args(["export-model", "models/keyword.json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("model file:"));
    assert!(dir.path().join("models/keyword.json").exists());

    sentiment_in(&dir)
        .args(["predict", "great product", "--model-path", "models/keyword.json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"sentiment\":\"Positive\""));
}

#[test]
fn tampered_model_is_rejected() {
    let dir = TempDir::new().expect("temp dir should be created");
    sentiment_in(&dir)
        .args(["export-model", "keyword.json"])
        .assert()
        .code(0);

    let path = dir.path().join("keyword.json");
    let content = fs::read_to_string(&path).expect("artifact should read");
    fs::write(&path, content.replace("\"love\"", "\"like\"")).expect("artifact should write");

    sentiment_in(&dir)
        .args(["predict", "great", "--model-path", "keyword.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("checksum mismatch"));
}

#[test]
fn batch_scores_directory_and_summarizes() {
    let dir = TempDir::new().expect("temp dir should be created");
    let reviews = dir.path().join("reviews");
    fs::create_dir_all(&reviews).expect("reviews dir should create");
    fs::write(reviews.join("a.txt"), "I love this amazing product").expect("a should write");
    fs::write(reviews.join("b.txt"), "This is absolutely terrible and awful")
        .expect("b should write");
    fs::write(reviews.join("c.txt"), "It was okay I guess").expect("c should write");
    fs::write(reviews.join("ignored.md"), "great").expect("md should write");

    sentiment_in(&dir)
        .args(["batch", "reviews"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"total\": 3"))
        .stdout(predicate::str::contains("\"positive\": 1"))
        .stdout(predicate::str::contains("\"negative\": 1"))
        .stdout(predicate::str::contains("\"neutral\": 1"))
        .stdout(predicate::str::contains("ignored.md").not());
}

#[test]
fn batch_warns_when_no_documents_found() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::create_dir_all(dir.path().join("empty")).expect("empty dir should create");

    sentiment_in(&dir)
        .args(["batch", "empty", "--format", "md"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("- none"))
        .stderr(predicate::str::contains("no .txt files found"));
}

#[test]
fn batch_missing_directory_is_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    sentiment_in(&dir)
        .args(["batch", "nowhere"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("path does not exist"));
}
