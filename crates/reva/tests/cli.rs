//! CLI integration tests for reva commands.
//!
//! These tests focus on exit codes and ranking behavior, not exact output
//! formatting which may change.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Helper to get a reva command.
fn reva() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("reva").unwrap()
}

/// Writes a document file and returns its path.
fn write_doc(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Creates the two-document fruit corpus used across tests.
fn fruit_corpus(dir: &Path) -> (PathBuf, PathBuf) {
    let apples = write_doc(dir, "apples.txt", "apples are red and sweet");
    let oranges = write_doc(dir, "oranges.txt", "oranges are citrus fruit");
    (apples, oranges)
}

/// Strips ANSI escape sequences from a string.
fn strip_ansi(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            output.push(ch);
        }
    }

    output
}

mod search {
    use super::*;

    #[test]
    fn ranks_matching_document_first() {
        let dir = temp_dir();
        let (apples, oranges) = fruit_corpus(dir.path());

        let assert = reva()
            .arg("search")
            .arg("I want information on apples")
            .arg(&apples)
            .arg(&oranges)
            .assert()
            .success();

        let stdout = strip_ansi(&String::from_utf8_lossy(&assert.get_output().stdout));
        assert!(stdout.contains("Most relevant: apples.txt"));
        // The orange document shares no query terms, so its score is zero.
        assert!(stdout.contains("0.0000"));
    }

    #[test]
    fn full_document_query_is_self_match() {
        let dir = temp_dir();
        let text = "the entire text of the only document";
        let only = write_doc(dir.path(), "only.txt", text);

        let assert = reva().arg("search").arg(text).arg(&only).assert().success();

        let stdout = strip_ansi(&String::from_utf8_lossy(&assert.get_output().stdout));
        assert!(stdout.contains("Score: 1.0000"));
    }

    #[test]
    fn json_output_shape() {
        let dir = temp_dir();
        let (apples, oranges) = fruit_corpus(dir.path());

        let assert = reva()
            .arg("search")
            .arg("apples")
            .arg(&apples)
            .arg(&oranges)
            .arg("--json")
            .assert()
            .success();

        let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
        let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();

        assert_eq!(parsed["query"], "apples");
        assert_eq!(parsed["total"], 2);
        let matches = parsed["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0]["name"], "apples.txt");
        assert!(matches[0]["score"].as_f64().unwrap() > 0.0);
        assert_eq!(matches[1]["score"].as_f64().unwrap(), 0.0);
    }

    #[test]
    fn list_mode_outputs_score_name_lines() {
        let dir = temp_dir();
        let (apples, oranges) = fruit_corpus(dir.path());

        let assert = reva()
            .arg("search")
            .arg("apples")
            .arg(&apples)
            .arg(&oranges)
            .arg("--list")
            .assert()
            .success();

        let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("\tapples.txt"));
        assert!(lines[1].ends_with("\toranges.txt"));
    }

    #[test]
    fn limit_caps_displayed_results() {
        let dir = temp_dir();
        let (apples, oranges) = fruit_corpus(dir.path());
        let pears = write_doc(dir.path(), "pears.txt", "pears are green");

        let assert = reva()
            .args(["search", "apples", "-n", "1", "--list"])
            .arg(&apples)
            .arg(&oranges)
            .arg(&pears)
            .assert()
            .success();

        let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
        assert_eq!(stdout.lines().count(), 1);
    }

    #[test]
    fn preview_shows_best_document_text() {
        let dir = temp_dir();
        let (apples, oranges) = fruit_corpus(dir.path());

        let assert = reva()
            .arg("search")
            .arg("apples")
            .arg(&apples)
            .arg(&oranges)
            .arg("--preview")
            .assert()
            .success();

        let stdout = strip_ansi(&String::from_utf8_lossy(&assert.get_output().stdout));
        assert!(stdout.contains("Preview: apples.txt"));
        assert!(stdout.contains("apples are red and sweet"));
    }

    #[test]
    fn missing_file_fails() {
        let dir = temp_dir();

        reva()
            .arg("search")
            .arg("anything")
            .arg(dir.path().join("absent.txt"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("error:"));
    }

    #[test]
    fn duplicate_document_names_fail() {
        let dir = temp_dir();
        fs::create_dir(dir.path().join("one")).unwrap();
        fs::create_dir(dir.path().join("two")).unwrap();
        let first = write_doc(&dir.path().join("one"), "same.txt", "first");
        let second = write_doc(&dir.path().join("two"), "same.txt", "second");

        reva()
            .arg("search")
            .arg("anything")
            .arg(&first)
            .arg(&second)
            .assert()
            .failure()
            .stderr(predicate::str::contains("duplicate document name"));
    }

    #[test]
    fn empty_document_warns_and_ranks_last() {
        let dir = temp_dir();
        let (apples, oranges) = fruit_corpus(dir.path());
        let empty = write_doc(dir.path(), "empty.txt", "");

        let assert = reva()
            .arg("search")
            .arg("apples")
            .arg(&apples)
            .arg(&oranges)
            .arg(&empty)
            .arg("--list")
            .assert()
            .success()
            .stderr(predicate::str::contains("warning: document is empty"));

        let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
        let last = stdout.lines().last().unwrap();
        assert!(last.starts_with("0.0000"));
        assert!(last.ends_with("empty.txt"));
    }
}

mod ask {
    use super::*;

    #[test]
    fn answers_piped_query() {
        let dir = temp_dir();
        let (apples, oranges) = fruit_corpus(dir.path());

        let assert = reva()
            .arg("ask")
            .arg(&apples)
            .arg(&oranges)
            .write_stdin("apples\n\n")
            .assert()
            .success();

        let stdout = strip_ansi(&String::from_utf8_lossy(&assert.get_output().stdout));
        assert!(stdout.contains("Loaded 2 document(s)"));
        assert!(stdout.contains("Most relevant: apples.txt"));
    }

    #[test]
    fn exits_cleanly_on_end_of_input() {
        let dir = temp_dir();
        let (apples, _) = fruit_corpus(dir.path());

        reva()
            .arg("ask")
            .arg(&apples)
            .write_stdin("")
            .assert()
            .success();
    }

    #[test]
    fn missing_file_fails_before_prompting() {
        let dir = temp_dir();

        reva()
            .arg("ask")
            .arg(dir.path().join("absent.txt"))
            .write_stdin("apples\n")
            .assert()
            .failure()
            .stderr(predicate::str::contains("error:"));
    }
}

mod inspect {
    use super::*;

    #[test]
    fn prints_corpus_statistics() {
        let dir = temp_dir();
        let (apples, oranges) = fruit_corpus(dir.path());

        let assert = reva()
            .arg("inspect")
            .arg(&apples)
            .arg(&oranges)
            .assert()
            .success();

        let stdout = strip_ansi(&String::from_utf8_lossy(&assert.get_output().stdout));
        assert!(stdout.contains("Documents:        2"));
        // Union of both documents' tokens: 8 distinct terms.
        assert!(stdout.contains("Vocabulary terms: 8"));
        assert!(stdout.contains("apples.txt"));
        assert!(stdout.contains("oranges.txt"));
    }

    #[test]
    fn lists_document_terms() {
        let dir = temp_dir();
        let doc = write_doc(dir.path(), "doc.txt", "apples apples pears");

        let assert = reva().arg("inspect").arg(&doc).assert().success();

        let stdout = strip_ansi(&String::from_utf8_lossy(&assert.get_output().stdout));
        assert!(stdout.contains("apples"));
        assert!(stdout.contains("pears"));
    }
}
