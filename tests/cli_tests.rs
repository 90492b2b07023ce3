//! Binary tests for the `autocomment` CLI

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn autocomment(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("autocomment").unwrap();
    cmd.env("AUTOCOMMENT_CONFIG_DIR", config_dir.path())
        .env("NO_COLOR", "1")
        .env_remove("AUTOCOMMENT_URL")
        .env_remove("AUTOCOMMENT_TIMEOUT_SECS");
    cmd
}

#[test]
fn test_theme_defaults_to_light() {
    let dir = TempDir::new().unwrap();
    autocomment(&dir)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::diff("light\n"));
}

#[test]
fn test_theme_toggle_twice_round_trips() {
    let dir = TempDir::new().unwrap();

    autocomment(&dir)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::diff("dark\n"));
    autocomment(&dir)
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout(predicate::str::diff("dark\n"));
    autocomment(&dir)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::diff("light\n"));

    let saved = fs::read_to_string(dir.path().join("preferences.json")).unwrap();
    assert!(saved.contains("\"light\""), "{saved}");
}

#[test]
fn test_empty_file_rejected_before_network() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("empty.py");
    fs::write(&file, "").unwrap();

    // Port 9 (discard) would fail loudly if a request were attempted
    autocomment(&dir)
        .args(["--url", "http://127.0.0.1:9", "comment"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter code and select a language."));
}

#[test]
fn test_unreadable_file_fails() {
    let dir = TempDir::new().unwrap();
    autocomment(&dir)
        .args(["comment", "/no/such/file.py"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read"));
}

#[test]
fn test_comment_prints_and_downloads() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("main.cpp");
    fs::write(&file, "int main() {}").unwrap();

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/comment")
        .match_body(mockito::Matcher::Json(
            json!({ "code": "int main() {}", "language": "cpp" }),
        ))
        .with_status(200)
        .with_body(json!({ "commented code": "```cpp\n// entry\nint main() {}\n```" }).to_string())
        .expect(1)
        .create();

    autocomment(&dir)
        .args(["--url", &server.url(), "comment"])
        .arg(&file)
        .arg("--download")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("// entry\nint main() {}\n"));

    mock.assert();
    let saved = fs::read_to_string(dir.path().join("commented_code.cpp")).unwrap();
    assert_eq!(saved, "// entry\nint main() {}");
}

#[test]
fn test_server_failure_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("a.py");
    fs::write(&file, "x = 1").unwrap();

    let mut server = mockito::Server::new();
    server.mock("POST", "/comment").with_status(500).create();

    autocomment(&dir)
        .args(["--url", &server.url(), "comment"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP 500").count(1));
}

#[test]
fn test_upload_variant_cli() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("a.js");
    fs::write(&file, "let a = 1;").unwrap();

    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/upload")
        .match_body(mockito::Matcher::Json(
            json!({ "code": "let a = 1;", "comment_style": "detailed" }),
        ))
        .with_status(200)
        .with_body(r#"{"commented_code": "// a\nlet a = 1;"}"#)
        .create();

    autocomment(&dir)
        .args(["--url", &server.url(), "--variant", "upload", "comment", "--style", "detailed"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::diff("// a\nlet a = 1;\n"));

    mock.assert();
}

#[test]
fn test_detect_command() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("snippet");
    fs::write(&file, "fn main() {}").unwrap();

    let mut server = mockito::Server::new();
    server
        .mock("POST", "/detect_language")
        .with_status(200)
        .with_body(r#"{"language": "rust"}"#)
        .create();

    autocomment(&dir)
        .args(["--url", &server.url(), "detect"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::diff("rust\n"));
}
