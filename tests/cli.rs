//! Command line tests for the wordlist-forge binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn forge() -> Command {
    let mut cmd = Command::cargo_bin("wordlist-forge").unwrap();
    cmd.env_remove("WORDLIST_FORGE_INPUT")
        .env_remove("WORDLIST_FORGE_OUTPUT")
        .env_remove("WORDLIST_FORGE_PROFILE");
    cmd
}

#[test]
fn test_help() {
    forge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--leet"))
        .stdout(predicate::str::contains("--years"));
}

#[test]
fn test_missing_input_file_exits_with_2() {
    let dir = tempdir().unwrap();
    forge()
        .current_dir(dir.path())
        .args(["-i", "nope.txt", "--quiet"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nope.txt"));
    assert!(!dir.path().join("wordlist.txt").exists());
}

#[test]
fn test_generates_from_input_file() {
    let dir = tempdir().unwrap();
    let words = dir.path().join("words.txt");
    let out = dir.path().join("out.txt");
    std::fs::write(&words, "admin\n").unwrap();

    forge()
        .args(["-i", words.to_str().unwrap(), "-o", out.to_str().unwrap(), "--quiet"])
        .args(["--numbers", "", "123", "--separators", "", "--prefixes", "--suffixes"])
        .args(["--years", "2020", "2020"])
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[..3], ["admin", "admin", "admin123"]);
    assert!(lines.contains(&"Admin2020"));
    assert!(lines.contains(&"ADMIN202001"));
}

#[test]
fn test_piped_stdin_with_limit() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out.txt");

    forge()
        .args(["-o", out.to_str().unwrap(), "--limit", "5", "--unique"])
        .write_stdin("root\nguest\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 5 entries"));

    let content = std::fs::read_to_string(&out).unwrap();
    assert_eq!(content.lines().count(), 5);
    assert!(content.lines().all(|l| l.to_lowercase().starts_with("root")));
}

#[test]
fn test_profile_file() {
    let dir = tempdir().unwrap();
    let profile = dir.path().join("profile.json");
    let out = dir.path().join("out.txt");
    std::fs::write(
        &profile,
        r#"{"base_words": ["acme"], "numbers": [], "separators": [], "years": [2021, 2021], "min_len": 1}"#,
    )
    .unwrap();

    forge()
        .args(["--profile", profile.to_str().unwrap(), "-o", out.to_str().unwrap(), "--quiet"])
        .write_stdin("")
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.lines().any(|l| l == "acme2021"));
    assert!(content.lines().any(|l| l == "ACME1010"));
}
