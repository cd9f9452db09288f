use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

/// Build a content root with one blog post and one project.
fn write_content(root: &std::path::Path) {
    let blog = root.join("content/blog");
    std::fs::create_dir_all(&blog).unwrap();
    std::fs::write(
        blog.join("understanding-caching.md"),
        "---\ntitle: Understanding Caching\ndate: 2024-06-01\nexcerpt: A deep dive into cache eviction\ntags: [systems, caching]\n---\n\nBody.\n",
    )
    .unwrap();

    std::fs::write(
        root.join("content/projects.toml"),
        r#"
[[projects]]
slug = "snippetsync"
title = "SnippetSync"
description = "Real-time collaborative code editor"
category = "featured"
date = "2024"
technologies = ["React", "Redis", "WebSockets"]
"#,
    )
    .unwrap();
}

fn folio() -> Command {
    Command::cargo_bin("folio").unwrap()
}

#[test]
fn test_cli_help() {
    folio()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version() {
    folio()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_search_finds_blog_post() {
    let dir = tempdir().unwrap();
    write_content(dir.path());

    let output = folio()
        .env("FOLIO_ROOT", dir.path())
        .args(["--json", "search", "caching"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = json["results"].as_array().unwrap();
    assert!(!results.is_empty());
    assert_eq!(results[0]["kind"], "blog");
    assert_eq!(results[0]["url"], "/blog/understanding-caching");
}

#[test]
fn test_search_empty_query_returns_nothing() {
    let dir = tempdir().unwrap();
    write_content(dir.path());

    for query in ["", "   "] {
        let output = folio()
            .env("FOLIO_ROOT", dir.path())
            .args(["--json", "search", query])
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["count"], 0);
    }
}

#[test]
fn test_search_ranks_exact_page_first() {
    let dir = tempdir().unwrap();
    write_content(dir.path());

    let output = folio()
        .env("FOLIO_ROOT", dir.path())
        .args(["--json", "search", "projects"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = json["results"].as_array().unwrap();
    // Exact title match on the built-in Projects page outranks everything
    assert_eq!(results[0]["kind"], "page");
    assert_eq!(results[0]["url"], "/projects");
}

#[test]
fn test_search_by_technology_tag() {
    let dir = tempdir().unwrap();
    write_content(dir.path());

    let output = folio()
        .env("FOLIO_ROOT", dir.path())
        .args(["--json", "search", "redis"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = json["results"].as_array().unwrap();
    assert!(
        results
            .iter()
            .any(|r| r["url"] == "/projects/snippetsync")
    );
}

#[test]
fn test_search_human_output_mentions_no_results() {
    let dir = tempdir().unwrap();
    write_content(dir.path());

    folio()
        .env("FOLIO_ROOT", dir.path())
        .args(["search", "zzzzzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found"));
}

#[test]
fn test_list_shows_all_kinds() {
    let dir = tempdir().unwrap();
    write_content(dir.path());

    let output = folio()
        .env("FOLIO_ROOT", dir.path())
        .args(["--json", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = json.as_array().unwrap();
    // 5 built-in pages + 1 post + 1 project
    assert_eq!(items.len(), 7);
}

#[test]
fn test_list_kind_filter() {
    let dir = tempdir().unwrap();
    write_content(dir.path());

    let output = folio()
        .env("FOLIO_ROOT", dir.path())
        .args(["--json", "list", "--kind", "project"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["url"], "/projects/snippetsync");
}

#[test]
fn test_missing_content_degrades_to_pages_only() {
    let dir = tempdir().unwrap();

    let output = folio()
        .env("FOLIO_ROOT", dir.path())
        .args(["--json", "--quiet", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 5);
}

#[test]
fn test_search_limit_flag_caps_results() {
    let dir = tempdir().unwrap();
    let blog = dir.path().join("content/blog");
    std::fs::create_dir_all(&blog).unwrap();
    for i in 0..8 {
        std::fs::write(
            blog.join(format!("caching-{i}.md")),
            format!("---\ntitle: Caching part {i}\ndate: 2024-01-0{}\n---\nx\n", i + 1),
        )
        .unwrap();
    }

    let output = folio()
        .env("FOLIO_ROOT", dir.path())
        .args(["--json", "search", "caching", "--limit", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 3);
}

#[test]
fn test_limit_env_cannot_exceed_ten() {
    let dir = tempdir().unwrap();
    let blog = dir.path().join("content/blog");
    std::fs::create_dir_all(&blog).unwrap();
    for i in 0..15 {
        std::fs::write(
            blog.join(format!("caching-{i}.md")),
            format!("---\ntitle: Caching part {i}\ndate: 2024-01-{:02}\n---\nx\n", i + 1),
        )
        .unwrap();
    }

    let output = folio()
        .env("FOLIO_ROOT", dir.path())
        .env("FOLIO_SEARCH_LIMIT", "50")
        .args(["--json", "search", "caching"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 10);
}

#[test]
fn test_config_file_overrides_limit() {
    let dir = tempdir().unwrap();
    write_content(dir.path());
    let config_path = dir.path().join("custom.toml");
    std::fs::write(&config_path, "[search]\nlimit = 1\n").unwrap();

    let output = folio()
        .env("FOLIO_ROOT", dir.path())
        .arg("--config")
        .arg(&config_path)
        .args(["--json", "search", "s"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 1);
}

#[test]
fn test_palette_requires_a_terminal() {
    let dir = tempdir().unwrap();
    write_content(dir.path());

    folio()
        .env("FOLIO_ROOT", dir.path())
        .arg("palette")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}
