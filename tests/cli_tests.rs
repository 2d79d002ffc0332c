//! Integration tests for the cinematch CLI
//!
//! These tests run the cinematch binary against small on-disk tables.

mod common;

use std::fs;

use predicates::prelude::*;
use tempfile::tempdir;

use common::{cinematch, write_fixture};

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    cinematch(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: cinematch"))
        .stdout(predicate::str::contains("recommend"))
        .stdout(predicate::str::contains("interactive"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    cinematch(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cinematch"));
}

// ============================================================================
// recommend
// ============================================================================

#[test]
fn test_recommend_human() {
    let dir = tempdir().unwrap();
    let fixture = write_fixture(dir.path());

    cinematch(dir.path())
        .args(fixture.args())
        .args(["recommend", "alien"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Aliens (1986)"))
        .stdout(predicate::str::contains("Score: 3.5/5.0 (2 ratings)"))
        .stdout(predicate::str::contains("Score: Not available"))
        .stdout(predicate::str::contains("6. ").not());
}

#[test]
fn test_recommend_excludes_anchor() {
    let dir = tempdir().unwrap();
    let fixture = write_fixture(dir.path());

    let output = cinematch(dir.path())
        .args(fixture.args())
        .args(["--format", "json", "recommend", "alien", "--limit", "10"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    // seven movies, anchor removed
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|r| r["id"] != "1"));
    assert_eq!(rows[0]["id"], "2");
    assert_eq!(rows[0]["rank"], 1);
    assert_eq!(rows[0]["year"], 1986);
    assert_eq!(rows[0]["rating_count"], 2);

    let scores: Vec<f64> = rows
        .iter()
        .map(|r| r["similarity"].as_f64().unwrap())
        .collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_recommend_top_k_bounds_results() {
    let dir = tempdir().unwrap();
    let fixture = write_fixture(dir.path());

    let output = cinematch(dir.path())
        .args(fixture.args())
        .args(["--format", "json", "recommend", "heat", "--top-k", "2"])
        .output()
        .unwrap();
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 2);
}

#[test]
fn test_recommend_substring_fallback_records() {
    let dir = tempdir().unwrap();
    let fixture = write_fixture(dir.path());

    cinematch(dir.path())
        .args(fixture.args())
        .args(["--format", "records", "recommend", "Matrix"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H cinematch=1 records=1 mode=recommend query=\"Matrix\" found=true results=5",
        ))
        .stdout(predicate::str::contains("A 5 \"The Matrix\""))
        .stdout(predicate::str::contains(
            "R 1 6 \"The Matrix Reloaded\" year=2003 rating=- votes=-",
        ));
}

#[test]
fn test_recommend_not_found_exits_zero() {
    let dir = tempdir().unwrap();
    let fixture = write_fixture(dir.path());

    cinematch(dir.path())
        .args(fixture.args())
        .args(["recommend", "casablanca"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No movies found with that term. Try another search.",
        ));
}

#[test]
fn test_recommend_not_found_json_is_empty_array() {
    let dir = tempdir().unwrap();
    let fixture = write_fixture(dir.path());

    let output = cinematch(dir.path())
        .args(fixture.args())
        .args(["--format", "json", "recommend", "casablanca"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows, serde_json::json!([]));
}

#[test]
fn test_recommend_overview_corpus() {
    let dir = tempdir().unwrap();
    let fixture = write_fixture(dir.path());

    cinematch(dir.path())
        .args(fixture.args())
        .args(["recommend", "the matrix", "--corpus", "overview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. The Matrix Reloaded (2003)"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_paths_and_limit() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path());
    let config = dir.path().join("cinematch.toml");
    fs::write(
        &config,
        "[data]\nmovies = \"movies_metadata.csv\"\nkeywords = \"keywords.csv\"\nratings = \"ratings.csv\"\n\n[display]\nlimit = 1\n",
    )
    .unwrap();

    cinematch(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["recommend", "alien"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Aliens"))
        .stdout(predicate::str::contains("2. ").not());
}

#[test]
fn test_config_discovered_from_config_dir() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path());
    fs::write(
        dir.path().join("config.toml"),
        "[data]\nmovies = \"movies_metadata.csv\"\nkeywords = \"keywords.csv\"\nratings = \"ratings.csv\"\n",
    )
    .unwrap();

    cinematch(dir.path())
        .args(["stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Movies: 7"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempdir().unwrap();
    cinematch(dir.path())
        .args(["--config", "/nonexistent/cinematch.toml", "stats"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("read config"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_missing_data_file_exit_code_3() {
    let dir = tempdir().unwrap();
    let fixture = write_fixture(dir.path());
    fs::remove_file(&fixture.ratings).unwrap();

    cinematch(dir.path())
        .args(fixture.args())
        .args(["recommend", "alien"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("data file not found"));
}

#[test]
fn test_missing_column_json_error() {
    let dir = tempdir().unwrap();
    let fixture = write_fixture(dir.path());
    fs::write(&fixture.movies, "id,name\n1,Alien\n").unwrap();

    cinematch(dir.path())
        .args(fixture.args())
        .args(["--format", "json", "recommend", "alien"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"missing_column\""));
}

#[test]
fn test_unknown_format_exit_code_2() {
    let dir = tempdir().unwrap();
    cinematch(dir.path())
        .args(["--format", "yaml", "stats"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_query_json_usage_error() {
    let dir = tempdir().unwrap();
    cinematch(dir.path())
        .args(["--format", "json", "recommend"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_duplicate_format_json_error() {
    let dir = tempdir().unwrap();
    cinematch(dir.path())
        .args(["--format", "json", "--format", "human", "stats"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"duplicate_format\""));
}

#[test]
fn test_zero_top_k_is_usage_error() {
    let dir = tempdir().unwrap();
    let fixture = write_fixture(dir.path());

    cinematch(dir.path())
        .args(fixture.args())
        .args(["recommend", "alien", "--top-k", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("recommend.top_k"));
}

// ============================================================================
// interactive
// ============================================================================

#[test]
fn test_interactive_until_exit() {
    let dir = tempdir().unwrap();
    let fixture = write_fixture(dir.path());

    cinematch(dir.path())
        .args(fixture.args())
        .arg("interactive")
        .write_stdin("alien\n\ncasablanca\nEXIT\nheat\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("or 'exit' to close"))
        .stdout(predicate::str::contains("1. Aliens (1986)"))
        .stdout(predicate::str::contains(
            "No movies found with that term. Try another search.",
        ));
}

#[test]
fn test_interactive_survives_undecodable_line() {
    let dir = tempdir().unwrap();
    let fixture = write_fixture(dir.path());

    cinematch(dir.path())
        .args(fixture.args())
        .args(["--quiet", "interactive"])
        .write_stdin(b"\xff\xfe\nalien\nexit\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Aliens (1986)"));
}

#[test]
fn test_default_command_is_interactive() {
    let dir = tempdir().unwrap();
    let fixture = write_fixture(dir.path());

    cinematch(dir.path())
        .args(fixture.args())
        .args(["--format", "records"])
        .write_stdin("matrix\nmatrix\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("A 5 \"The Matrix\"").count(2));
}

#[test]
fn test_interactive_cache_index() {
    let dir = tempdir().unwrap();
    let fixture = write_fixture(dir.path());

    cinematch(dir.path())
        .args(fixture.args())
        .args(["--verbose", "interactive", "--cache-index"])
        .write_stdin("alien\naliens\nexit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("index_cache_hit"));
}

// ============================================================================
// stats
// ============================================================================

#[test]
fn test_stats_human() {
    let dir = tempdir().unwrap();
    let fixture = write_fixture(dir.path());

    cinematch(dir.path())
        .args(fixture.args())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Movies: 7"))
        .stdout(predicate::str::contains("With keywords: 6"))
        .stdout(predicate::str::contains("With overview: 6"))
        .stdout(predicate::str::contains("With ratings: 2"))
        .stdout(predicate::str::contains("Vocabulary (keywords): 11"));
}

#[test]
fn test_stats_json() {
    let dir = tempdir().unwrap();
    let fixture = write_fixture(dir.path());

    let output = cinematch(dir.path())
        .args(fixture.args())
        .args(["--format", "json", "stats", "--corpus", "overview"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["movies"], 7);
    assert_eq!(stats["corpus"], "overview");
    assert!(stats["vocabulary_size"].as_u64().unwrap() > 11);
}
