//! Integration tests for the og-extractor binary.
//!
//! A wiremock server plays the web page; the binary runs as a child process
//! (on a blocking thread so the mock server keeps serving).

#![allow(deprecated)] // cargo_bin deprecation — replacement not yet stable

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ARTICLE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta property="og:title" content="Writing Rust CLIs">
  <meta property="og:description" content="A short guide">
  <meta property="og:url" content="https://blog.example.com/posts/rust-clis">
  <meta property="og:image" content="https://blog.example.com/cover.png">
  <meta property="og:site_name" content="Example Blog">
  <script type="application/ld+json">
    {"@type": "Article", "datePublished": "2024-03-01T09:00:00Z"}
  </script>
</head>
<body><h1>Writing Rust CLIs</h1></body>
</html>"#;

fn og_extractor() -> Command {
    Command::cargo_bin("og-extractor").expect("binary 'og-extractor' should be built")
}

async fn serve(route: &str, status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;
    server
}

// Runs the binary off the async runtime and returns its assert handle
async fn run(args: Vec<String>) -> assert_cmd::assert::Assert {
    tokio::task::spawn_blocking(move || og_extractor().args(&args).assert())
        .await
        .unwrap()
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn missing_arguments_prints_usage() {
    og_extractor()
        .arg("https://example.com")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn too_many_arguments_fails() {
    og_extractor()
        .args(["a", "b", "c"])
        .assert()
        .failure();
}

#[test]
fn help_mentions_collection_shape() {
    og_extractor()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("articles"))
        .stdout(predicate::str::contains("backup"));
}

#[tokio::test(flavor = "multi_thread")]
async fn appends_to_new_file() {
    let server = serve("/posts/rust-clis", 200, ARTICLE).await;
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("articles.json");

    run(vec![
        format!("{}/posts/rust-clis", server.uri()),
        file.display().to_string(),
    ])
    .await
    .success()
    .stdout(predicate::str::contains("\"title\": \"Writing Rust CLIs\""))
    .stdout(predicate::str::contains("Successfully appended to"));

    let json = read_json(&file);
    let article = &json["articles"][0];
    assert_eq!(article["title"], "Writing Rust CLIs");
    assert_eq!(article["description"], "A short guide");
    assert_eq!(article["url"], "https://blog.example.com/posts/rust-clis");
    assert_eq!(article["image"], "https://blog.example.com/cover.png");
    assert_eq!(article["slug"], "rust-clis");
    assert_eq!(article["publishDate"], "2024-03-01T09:00:00Z");
    assert_eq!(article["source"], "Example Blog");
}

#[tokio::test(flavor = "multi_thread")]
async fn appends_to_existing_file_with_backup() {
    let server = serve("/2023/05/15/launch/", 200, "<html><head></head></html>").await;
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("articles.json");
    let before = concat!(
        r#"{"articles": [{"url": "https://old.example.com", "title": "Old", "#,
        r#""description": "", "image": "", "slug": "old"}]}"#
    );
    fs::write(&file, before).unwrap();

    run(vec![
        format!("{}/2023/05/15/launch/", server.uri()),
        file.display().to_string(),
    ])
    .await
    .success();

    let json = read_json(&file);
    let articles = json["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[1]["slug"], "launch");
    assert_eq!(articles[1]["publishDate"], "2023-05-15");
    assert!(articles[1].get("source").is_none());

    let backups: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .filter(|name| name.starts_with("articles.json.") && name.ends_with(".bkp"))
        .collect();
    assert_eq!(backups.len(), 1);
    assert_eq!(fs::read_to_string(dir.path().join(&backups[0])).unwrap(), before);
}

#[tokio::test(flavor = "multi_thread")]
async fn standalone_writes_single_record() {
    let server = serve("/posts/rust-clis", 200, ARTICLE).await;
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("record.json");

    run(vec![
        "--standalone".to_string(),
        format!("{}/posts/rust-clis", server.uri()),
        file.display().to_string(),
    ])
    .await
    .success()
    .stdout(predicate::str::contains("Successfully wrote"));

    let json = read_json(&file);
    assert_eq!(json["slug"], "rust-clis");
    assert!(json.get("articles").is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn non_200_response_fails_and_leaves_file_alone() {
    let server = serve("/missing", 404, "not found").await;
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("articles.json");

    run(vec![
        format!("{}/missing", server.uri()),
        file.display().to_string(),
    ])
    .await
    .failure()
    .stderr(predicate::str::contains("failed to extract metadata"))
    .stderr(predicate::str::contains("status code 404"));

    assert!(!file.exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_collection_fails() {
    let server = serve("/posts/rust-clis", 200, ARTICLE).await;
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("articles.json");
    fs::write(&file, "[1, 2, 3]").unwrap();

    run(vec![
        format!("{}/posts/rust-clis", server.uri()),
        file.display().to_string(),
    ])
    .await
    .failure()
    .stderr(predicate::str::contains("invalid JSON format"));

    assert_eq!(fs::read_to_string(&file).unwrap(), "[1, 2, 3]");
}

#[test]
fn invalid_url_fails() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("articles.json");

    og_extractor()
        .arg("not a url")
        .arg(&file)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid URL"));
}
