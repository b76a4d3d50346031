//! Content loading and validation from disk

use std::fs;
use std::time::Instant;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use vita::app::{App, Settings};
use vita::config::Config;
use vita::content::Portfolio;

fn write_content(dir: &TempDir, name: &str, json: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    if let Err(e) = fs::write(&path, json) {
        unreachable!("temp write must succeed: {e}");
    }
    path
}

const MINIMAL: &str = r#"{
    "profile": {
        "name": "Test Person",
        "tagline": "Hello, I'm",
        "roles": ["Tester", "Builder"]
    },
    "about": { "summary": "summary", "education": [] },
    "skills": {
        "technical": [{ "name": "Rust", "percent": 90 }],
        "soft": ["Patience"],
        "tools": ["cargo"]
    },
    "certifications": [],
    "experience": [],
    "projects": [],
    "contact": []
}"#;

#[test]
fn loads_a_valid_content_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = write_content(&dir, "content.json", MINIMAL);

    let portfolio = Portfolio::load(&path)?;
    assert_eq!(portfolio.profile.name, "Test Person");
    assert_eq!(portfolio.profile.roles.len(), 2);

    // A loaded portfolio drives the whole app.
    let app = App::new(
        Config::default(),
        Settings::default(),
        portfolio,
        Instant::now(),
    )?;
    assert_eq!(app.gauges.len(), 1);
    Ok(())
}

#[test]
fn missing_file_reports_the_path() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("nope.json");

    let err = match Portfolio::load(&path) {
        Ok(_) => unreachable!("missing file must not load"),
        Err(e) => format!("{e:#}"),
    };
    assert!(err.contains("nope.json"));
    Ok(())
}

#[test]
fn malformed_json_is_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = write_content(&dir, "bad.json", "{ not json");

    assert!(Portfolio::load(&path).is_err());
    Ok(())
}

#[test]
fn empty_role_list_is_rejected_at_load() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let json = MINIMAL.replace(r#"["Tester", "Builder"]"#, "[]");
    let path = write_content(&dir, "roles.json", &json);

    let err = match Portfolio::load(&path) {
        Ok(_) => unreachable!("empty roles must not load"),
        Err(e) => format!("{e:#}"),
    };
    assert!(err.contains("roles"));
    Ok(())
}

#[test]
fn out_of_range_percent_is_rejected_at_load() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let json = MINIMAL.replace(r#"{ "name": "Rust", "percent": 90 }"#, r#"{ "name": "Rust", "percent": 150 }"#);
    let path = write_content(&dir, "percent.json", &json);

    let err = match Portfolio::load(&path) {
        Ok(_) => unreachable!("percent over 100 must not load"),
        Err(e) => format!("{e:#}"),
    };
    assert!(err.contains("Rust"));
    assert!(err.contains("150"));
    Ok(())
}

#[test]
fn builtin_content_survives_a_disk_roundtrip() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("builtin.json");
    fs::write(&path, serde_json::to_string_pretty(&Portfolio::builtin())?)?;

    let loaded = Portfolio::load(&path)?;
    assert_eq!(loaded, Portfolio::builtin());
    Ok(())
}
