/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use common::WordbookEnv;
use predicates::prelude::*;

fn wordbook(env: &WordbookEnv) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wordbook"));
    cmd.env("WORDBOOK_DATA_DIR", env.data_dir()).env("WORDBOOK_DICT", env.dict_path());
    cmd
}

#[test]
fn test_cli_lookup_known_word() {
    let env = WordbookEnv::new().with_sample_dict();

    wordbook(&env)
        .args(["lookup", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello [həˈləʊ]"))
        .stdout(predicate::str::contains("int. 你好；喂"))
        .stdout(predicate::str::contains("hello world: 世界你好"));
}

#[test]
fn test_cli_lookup_unknown_word_prints_message() {
    let env = WordbookEnv::new().with_sample_dict();

    wordbook(&env)
        .args(["lookup", "xyzzy"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no dictionary entry for \"xyzzy\""));
}

#[test]
fn test_cli_lookup_blank_word_fails() {
    let env = WordbookEnv::new().with_sample_dict();

    wordbook(&env)
        .args(["lookup", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Query is blank"));
}

#[test]
fn test_cli_lookup_records_history() {
    let env = WordbookEnv::new().with_sample_dict();

    wordbook(&env).args(["lookup", "hello"]).assert().success();
    wordbook(&env).args(["lookup", "foo"]).assert().success();

    // Most recent first
    wordbook(&env)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::diff("foo\nhello\n"));
}

#[test]
fn test_cli_repeated_lookup_promotes_without_duplicating() {
    let env = WordbookEnv::new().with_sample_dict();

    wordbook(&env).args(["lookup", "hello"]).assert().success();
    wordbook(&env).args(["lookup", "foo"]).assert().success();
    wordbook(&env).args(["lookup", "hello"]).assert().success();

    wordbook(&env)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::diff("hello\nfoo\n"));
}

#[test]
fn test_cli_failed_lookup_still_records_history() {
    let env = WordbookEnv::new().with_sample_dict();

    wordbook(&env).args(["lookup", "xyzzy"]).assert().success();

    wordbook(&env).arg("history").assert().success().stdout(predicate::str::contains("xyzzy"));
}

#[test]
fn test_cli_history_empty() {
    let env = WordbookEnv::new().with_sample_dict();

    wordbook(&env)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No history yet"));
}

#[test]
fn test_cli_history_is_bounded() {
    let env = WordbookEnv::new().with_sample_dict();

    // Unknown words still get recorded, so drive well past the bound
    for i in 0..25 {
        wordbook(&env).args(["lookup", &format!("word{}", i)]).assert().success();
    }

    let output = wordbook(&env).arg("history").output().unwrap();
    let lines = String::from_utf8_lossy(&output.stdout).lines().count();
    assert_eq!(lines, 20);
}

#[test]
fn test_cli_lookup_with_dict_flag() {
    let env = WordbookEnv::new().with_sample_dict();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wordbook"));
    cmd.env("WORDBOOK_DATA_DIR", env.data_dir())
        .env_remove("WORDBOOK_DICT")
        .arg("--dict")
        .arg(env.dict_path())
        .args(["lookup", "bar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("placeholder two"));
}

#[test]
fn test_cli_lookup_missing_dict_fails() {
    let env = WordbookEnv::new(); // no dictionary written

    wordbook(&env)
        .args(["lookup", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read dictionary file"));
}

#[test]
fn test_cli_help_flag() {
    let env = WordbookEnv::new();
    wordbook(&env)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactive dictionary lookup"))
        .stdout(predicate::str::contains("lookup"))
        .stdout(predicate::str::contains("history"));
}

#[test]
fn test_cli_version_flag() {
    let env = WordbookEnv::new();
    wordbook(&env).arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_invalid_command() {
    let env = WordbookEnv::new();
    wordbook(&env).arg("invalid-command").assert().failure();
}
