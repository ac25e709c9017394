//! Integration tests for route-cli functionality.
//! Tests the underlying library functions the CLI commands invoke, then the
//! binary itself.

use route_core::graph::{Graph, GraphDescription};
use std::process::Command;

fn planner() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_route-planner"));
    cmd.env_remove("ROUTE_MAP")
        .env_remove("ROUTE_FORMAT")
        .env_remove("ROUTE_LOG_LEVEL")
        .env("RUST_LOG", "off");
    cmd
}

fn write_map(dir: &std::path::Path) -> std::path::PathBuf {
    let desc = GraphDescription::new()
        .with_location("A", [("B", 10, "I-1")])
        .with_location("B", [("A", 10, "I-1"), ("C", 5, "I-2")])
        .with_location("Island", Vec::<(&str, u32, &str)>::new());
    let path = dir.join("map.toml");
    route_core::storage::save(&path, &desc).unwrap();
    path
}

#[test]
fn test_config_defaults_without_file() {
    let tmpdir = tempfile::tempdir().unwrap();
    let config = route_core::config::RouteConfig::load(tmpdir.path()).unwrap();
    assert!(config.map.path.is_none());
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_bundled_map_has_known_conflicts() {
    let graph = Graph::from_description(&route_core::dataset::east_coast().unwrap()).unwrap();
    assert_eq!(graph.conflicts().len(), 7);
    assert_eq!(graph.isolated().count(), 0);
    assert_eq!(route_core::search::components(&graph).len(), 1);
}

#[test]
fn test_suggestion_for_misspelled_city() {
    let graph = Graph::from_description(&route_core::dataset::east_coast().unwrap()).unwrap();
    assert_eq!(graph.closest_name("Pittsburg"), Some("Pittsburgh"));
    assert_eq!(graph.closest_name("baltimore"), Some("Baltimore"));
}

#[test]
fn test_route_text_output() {
    let tmpdir = tempfile::tempdir().unwrap();
    let map = write_map(tmpdir.path());

    let output = planner()
        .arg("--project")
        .arg(tmpdir.path())
        .arg("--map")
        .arg(&map)
        .args(["route", "--from", "A", "--to", "C"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec![
            "Starting at A",
            "Drive 10 miles on I-1 towards B, then",
            "Drive 5 miles on I-2 towards C, then",
            "You will arrive at your destination",
        ]
    );
}

#[test]
fn test_route_json_output_with_legacy_flags() {
    let tmpdir = tempfile::tempdir().unwrap();
    let map = write_map(tmpdir.path());

    let output = planner()
        .arg("--project")
        .arg(tmpdir.path())
        .arg("--map")
        .arg(&map)
        .args([
            "route",
            "--starting-city",
            "A",
            "--destination-city",
            "B",
            "--format",
            "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["steps"][1]["kind"], "drive");
    assert_eq!(json["steps"][1]["distance"], 10);
    assert_eq!(json["steps"][2]["kind"], "arrive");
}

#[test]
fn test_no_path_exits_nonzero() {
    let tmpdir = tempfile::tempdir().unwrap();
    let map = write_map(tmpdir.path());

    let output = planner()
        .arg("--project")
        .arg(tmpdir.path())
        .arg("--map")
        .arg(&map)
        .args(["route", "--from", "A", "--to", "Island"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("no path found from A to Island"));
}

#[test]
fn test_unknown_location_suggests_name() {
    let tmpdir = tempfile::tempdir().unwrap();

    let output = planner()
        .arg("--project")
        .arg(tmpdir.path())
        .args(["route", "--from", "Baltimor", "--to", "Richmond"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unknown location: Baltimor"));
    assert!(stderr.contains("Did you mean 'Baltimore'?"));
}

#[test]
fn test_validate_reports_isolated_location() {
    let tmpdir = tempfile::tempdir().unwrap();
    let map = write_map(tmpdir.path());

    let output = planner()
        .arg("--project")
        .arg(tmpdir.path())
        .arg("--map")
        .arg(&map)
        .arg("validate")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("isolated: Island"));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("No conflicting road declarations."));
    assert!(!stderr.contains("Map is consistent."));
}

#[test]
fn test_validate_connected_map_is_consistent() {
    let tmpdir = tempfile::tempdir().unwrap();
    let desc = GraphDescription::new().with_location("A", [("B", 10, "I-1")]);
    let map = tmpdir.path().join("pair.json");
    route_core::storage::save(&map, &desc).unwrap();

    let output = planner()
        .arg("--project")
        .arg(tmpdir.path())
        .arg("--map")
        .arg(&map)
        .arg("validate")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Map is consistent."));
}

#[test]
fn test_validate_bundled_map_fails_on_conflicts() {
    let tmpdir = tempfile::tempdir().unwrap();

    let output = planner()
        .arg("--project")
        .arg(tmpdir.path())
        .arg("validate")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("conflict: Philadelphia - Baltimore: kept 106 miles"));
}

#[test]
fn test_route_map_env_selects_map() {
    let tmpdir = tempfile::tempdir().unwrap();
    let map = write_map(tmpdir.path());

    let output = planner()
        .env("ROUTE_MAP", &map)
        .arg("--project")
        .arg(tmpdir.path())
        .args(["route", "--from", "A", "--to", "C"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Drive 5 miles on I-2 towards C, then"));
}

#[test]
fn test_route_format_env_selects_json() {
    let tmpdir = tempfile::tempdir().unwrap();
    let map = write_map(tmpdir.path());

    let output = planner()
        .env("ROUTE_FORMAT", "json")
        .arg("--project")
        .arg(tmpdir.path())
        .arg("--map")
        .arg(&map)
        .args(["route", "--from", "A", "--to", "B"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["steps"][0]["kind"], "start");
    assert_eq!(json["steps"][0]["location"], "A");
}

#[test]
fn test_empty_env_overrides_are_ignored() {
    let tmpdir = tempfile::tempdir().unwrap();
    let map = write_map(tmpdir.path());

    let output = planner()
        .env("ROUTE_FORMAT", "")
        .env("ROUTE_LOG_LEVEL", "")
        .arg("--project")
        .arg(tmpdir.path())
        .arg("--map")
        .arg(&map)
        .args(["route", "--from", "A", "--to", "B"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Starting at A"));
}

#[test]
fn test_invalid_log_level_env_fails() {
    let tmpdir = tempfile::tempdir().unwrap();

    let output = planner()
        .env("ROUTE_LOG_LEVEL", "loud")
        .arg("--project")
        .arg(tmpdir.path())
        .arg("locations")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid logging level 'loud'"));
}
