//! Integration tests for the statline CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.
//! Every command runs in a temp directory with config lookups pointed
//! at it, so user configuration never leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get an isolated statline command
fn statline(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("statline").unwrap();
    cmd.current_dir(tmp.path())
        .env("HOME", tmp.path())
        .env("XDG_CONFIG_HOME", tmp.path())
        .env_remove("STATLINE_DATA")
        .env_remove("STATLINE_PAGE_SIZE")
        .env_remove("STATLINE_LOG");
    cmd
}

const FEED: &str = r#"[
  {"playerName": "Cade Klubnik", "position": "QB", "opponent": "Miami", "gameType": "conference",
   "location": "Home", "date": "2024-10-05", "season": "JR", "passingYards": 288, "passingTDs": 3},
  {"playerName": "Phil Mafah", "position": "RB", "opponent": "Miami", "gameType": "conference",
   "location": "Home", "date": "2024-10-05", "season": "SR", "rushingYards": 115},
  {"playerName": "Broken Row", "position": "QB", "opponent": "Miami"}
]"#;

fn write_feed(tmp: &TempDir, name: &str, contents: &str) -> String {
    let path = tmp.path().join(name);
    fs::write(&path, contents).unwrap();
    path.display().to_string()
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    let tmp = TempDir::new().unwrap();
    statline(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Search, filter, sort and page through per-game player statistics",
        ))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("browse"));
}

#[test]
fn test_short_help_displays_about() {
    let tmp = TempDir::new().unwrap();
    statline(&tmp)
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Player game stats dashboard"));
}

#[test]
fn test_version_displays() {
    let tmp = TempDir::new().unwrap();
    statline(&tmp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("statline"));
}

#[test]
fn test_completions_bash() {
    let tmp = TempDir::new().unwrap();
    statline(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("statline"));
}

// ============================================================================
// List Command Tests (demo data set)
// ============================================================================

#[test]
fn test_list_first_page_with_footer() {
    let tmp = TempDir::new().unwrap();
    statline(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 21 records"))
        .stdout(predicate::str::contains("Showing 1 to 5 of 21 players"))
        .stdout(predicate::str::contains("Page 1 of 5"));
}

#[test]
fn test_list_count_by_position() {
    let tmp = TempDir::new().unwrap();
    statline(&tmp)
        .args(["list", "--position", "qb", "--count"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_list_category_requires_positive_production() {
    // The freshman QB with 0 passing yards is excluded
    let tmp = TempDir::new().unwrap();
    statline(&tmp)
        .args(["list", "--category", "passing", "--count"])
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn test_list_sorted_ids() {
    let tmp = TempDir::new().unwrap();
    statline(&tmp)
        .args([
            "list",
            "--position",
            "QB",
            "--sort",
            "passingYards",
            "--desc",
            "-f",
            "id",
        ])
        .assert()
        .success()
        .stdout("5\n0\n14\n17\n9\n");
}

#[test]
fn test_list_search_and_filter_compose() {
    let tmp = TempDir::new().unwrap();
    statline(&tmp)
        .args(["list", "--search", "away", "--position", "LB", "--count"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_list_page_clamps_to_last() {
    let tmp = TempDir::new().unwrap();
    let output = statline(&tmp)
        .args(["list", "--page", "99", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["page"], 5);
    assert_eq!(value["summary"]["totalPages"], 5);
    assert_eq!(value["summary"]["pageStart"], 21);
    assert_eq!(value["summary"]["pageEnd"], 21);
    assert_eq!(value["records"].as_array().unwrap().len(), 1);
}

#[test]
fn test_list_empty_result() {
    let tmp = TempDir::new().unwrap();
    statline(&tmp)
        .args(["list", "--position", "K", "--opponent", "Miami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 0 records at K position"))
        .stdout(predicate::str::contains("No players found."));
}

#[test]
fn test_list_cards_view() {
    let tmp = TempDir::new().unwrap();
    statline(&tmp)
        .args(["list", "--view", "cards", "--position", "K"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Erik Lund"))
        .stdout(predicate::str::contains("1/2"))
        .stdout(predicate::str::contains("3/3"));
}

#[test]
fn test_list_markdown_marks_sort_column() {
    let tmp = TempDir::new().unwrap();
    statline(&tmp)
        .args(["list", "-f", "md"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("| # | Player ▲ | Pos |"));
}

#[test]
fn test_list_csv_fills_missing_stats_with_zero() {
    let tmp = TempDir::new().unwrap();
    statline(&tmp)
        .args(["list", "--position", "OL", "-f", "csv"])
        .assert()
        .success()
        .stdout("index,player,pos,season,pass,rush,rec,tackles,sacks,ints\n12,Noah Brandt,OL,SR,0,0,0,0,0,0\n");
}

#[test]
fn test_list_unknown_filter_value_rejected() {
    let tmp = TempDir::new().unwrap();
    statline(&tmp)
        .args(["list", "--type", "scrimmage"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown game type"));
}

// ============================================================================
// Data Source Tests
// ============================================================================

#[test]
fn test_json_file_skips_malformed_records() {
    let tmp = TempDir::new().unwrap();
    let path = write_feed(&tmp, "games.json", FEED);
    statline(&tmp)
        .args(["--data", &path, "list", "--count"])
        .assert()
        .success()
        .stdout("2\n")
        .stderr(predicate::str::contains("1 malformed record(s) skipped"));
}

#[test]
fn test_csv_file_source() {
    let tmp = TempDir::new().unwrap();
    let path = write_feed(
        &tmp,
        "games.csv",
        "playerName,position,opponent,gameType,location,date,season,tackles,sacks\n\
         Barrett Carter,LB,Duke,regular,Away,2024-11-02,SR,9,1\n\
         Peter Woods,DL,Duke,regular,Away,2024-11-02,JR,4,\n",
    );
    statline(&tmp)
        .args(["--data", &path, "list", "--sort", "tackles", "--desc", "-f", "id"])
        .assert()
        .success()
        .stdout("0\n1\n");
}

#[test]
fn test_data_source_from_env() {
    let tmp = TempDir::new().unwrap();
    let path = write_feed(&tmp, "games.json", FEED);
    statline(&tmp)
        .env("STATLINE_DATA", &path)
        .args(["-q", "list", "--count"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    statline(&tmp)
        .args(["--data", "nope.json", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_non_array_feed_fails() {
    let tmp = TempDir::new().unwrap();
    let path = write_feed(&tmp, "games.json", r#"{"games": []}"#);
    statline(&tmp)
        .args(["--data", &path, "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected a JSON array"));
}

// ============================================================================
// Show and Facets Tests
// ============================================================================

#[test]
fn test_show_detail_with_stat_bars() {
    let tmp = TempDir::new().unwrap();
    statline(&tmp)
        .args(["show", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marcus Hale"))
        .stdout(predicate::str::contains("Passing Yards"))
        .stdout(predicate::str::contains("W 31-24"))
        .stdout(predicate::str::contains("Receiving Yards").not());
}

#[test]
fn test_show_without_detailed_stats() {
    let tmp = TempDir::new().unwrap();
    statline(&tmp)
        .args(["show", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No detailed stats available for this game."));
}

#[test]
fn test_show_out_of_range() {
    let tmp = TempDir::new().unwrap();
    statline(&tmp)
        .args(["show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No record at index 99"));
}

#[test]
fn test_facets_first_seen_order() {
    let tmp = TempDir::new().unwrap();
    let output = statline(&tmp)
        .args(["facets", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["seasons"], serde_json::json!(["SR", "JR", "SO", "FR"]));
    assert_eq!(
        value["opponents"],
        serde_json::json!(["Clemson", "Boston College", "Samford", "Miami", "Louisville", "Georgia"])
    );
    assert_eq!(
        value["gameTypes"],
        serde_json::json!(["conference", "non-conference", "regular", "playoff", "bowl"])
    );
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_local_config_page_size() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".statline.yaml"), "page_size: 3\n").unwrap();
    statline(&tmp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1 of 7"));
}

#[test]
fn test_flag_overrides_env_page_size() {
    let tmp = TempDir::new().unwrap();
    statline(&tmp)
        .env("STATLINE_PAGE_SIZE", "10")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1 of 3"));

    statline(&tmp)
        .env("STATLINE_PAGE_SIZE", "10")
        .args(["--page-size", "21", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1 of").not());
}

#[test]
fn test_config_show_yaml() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".statline.yaml"),
        "data_source: demo\ndefault_view: cards\n",
    )
    .unwrap();
    statline(&tmp)
        .args(["config", "show", "-f", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data_source: demo"))
        .stdout(predicate::str::contains("default_view: cards"));
}

#[test]
fn test_malformed_config_is_not_fatal() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".statline.yaml"), "page_size: [oops").unwrap();
    statline(&tmp)
        .args(["list", "--count"])
        .assert()
        .success()
        .stdout("21\n");
}
