//! End-to-end tests for the chatlens binary.

#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("chat.txt"),
            "1/1/24, 9:00 am - Alice: hello there\n\
             1/1/24, 9:05 am - Bob: hi https://example.com\n\
             1/1/24, 9:10 am - Alice: 😂 bye\n",
        )
        .unwrap();
        fs::write(dir.path().join("stop.txt"), "the a an and\n").unwrap();
        fs::write(dir.path().join("emoji.txt"), "😂❤️🔥\n").unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> String {
        self.dir.path().join(name).display().to_string()
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("chatlens").unwrap();
        cmd.arg(self.path("chat.txt"))
            .arg("--stop-words")
            .arg(self.path("stop.txt"))
            .arg("--emoji")
            .arg(self.path("emoji.txt"));
        cmd
    }
}

#[test]
fn test_overall_analysis() {
    let fx = Fixture::new();
    fx.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Top Statistics"))
        .stdout(predicate::str::contains("Messages:     3"))
        .stdout(predicate::str::contains("Links shared: 1"))
        .stdout(predicate::str::contains("Most Active Senders"))
        .stdout(predicate::str::contains("Smart Insights"));
}

#[test]
fn test_user_filtered_analysis() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("--user")
        .arg("Alice")
        .assert()
        .success()
        .stdout(predicate::str::contains("Messages:     2"))
        .stdout(predicate::str::contains("Alice"));
}

#[test]
fn test_missing_stop_words_fails_fast() {
    let fx = Fixture::new();
    let mut cmd = Command::cargo_bin("chatlens").unwrap();
    cmd.arg(fx.path("chat.txt"))
        .arg("--stop-words")
        .arg(fx.path("nope.txt"))
        .arg("--emoji")
        .arg(fx.path("emoji.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("stop-word list"));
}

#[test]
fn test_unrecognized_export_succeeds_with_empty_state() {
    let fx = Fixture::new();
    fs::write(fx.dir.path().join("plain.txt"), "not a chat export at all\n").unwrap();
    let mut cmd = Command::cargo_bin("chatlens").unwrap();
    cmd.arg(fx.path("plain.txt"))
        .arg("--stop-words")
        .arg(fx.path("stop.txt"))
        .arg("--emoji")
        .arg(fx.path("emoji.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No recognizable chat entries"))
        .stdout(predicate::str::contains("Messages:     0"));
}

#[cfg(feature = "csv-report")]
#[test]
fn test_report_written() {
    let fx = Fixture::new();
    let report_path = fx.path("summary.csv");
    fx.cmd()
        .arg("--report")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary report written"));

    let content = fs::read_to_string(&report_path).unwrap();
    assert!(content.starts_with("Metric,Value"));
    assert!(content.contains("Total Messages,3"));
    assert!(content.contains("Most Active Day,Monday"));
}

#[test]
fn test_missing_input_file_errors() {
    let fx = Fixture::new();
    let mut cmd = Command::cargo_bin("chatlens").unwrap();
    cmd.arg(fx.path("ghost.txt"))
        .arg("--stop-words")
        .arg(fx.path("stop.txt"))
        .arg("--emoji")
        .arg(fx.path("emoji.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}
