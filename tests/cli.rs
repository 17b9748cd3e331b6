use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_routes(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_town-routes"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("run town-routes")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

fn reference_dataset() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/reference_graph.json")
}

#[test]
fn route_distance_of_reference_routes() {
    let tmp = TempDir::new().expect("tmpdir");
    for (towns, expected) in [
        (&["A", "B", "C"][..], "9"),
        (&["A", "D"][..], "5"),
        (&["A", "D", "C"][..], "13"),
        (&["A", "E", "B", "C", "D"][..], "22"),
    ] {
        let mut args = vec!["--quiet", "route-distance"];
        args.extend_from_slice(towns);
        let output = run_routes(tmp.path(), &args);
        assert!(output.status.success(), "{:?} failed", towns);
        assert_eq!(stdout_lines(&output), [expected]);
    }
}

#[test]
fn missing_edge_is_reported_not_fatal() {
    let tmp = TempDir::new().expect("tmpdir");
    let output = run_routes(tmp.path(), &["--quiet", "route-distance", "A", "E", "D"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["NO SUCH ROUTE"]);
}

#[test]
fn unknown_town_is_fatal() {
    let tmp = TempDir::new().expect("tmpdir");
    let output = run_routes(tmp.path(), &["--quiet", "route-distance", "A", "Z"]);
    assert!(!output.status.success());
}

#[test]
fn routes_are_listed_sorted() {
    let tmp = TempDir::new().expect("tmpdir");
    let output = run_routes(
        tmp.path(),
        &["--quiet", "routes", "C", "C", "--max-stops", "3"],
    );
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["C-D-C", "C-E-B-C"]);

    let output = run_routes(
        tmp.path(),
        &["--quiet", "routes", "A", "C", "--max-stops", "4", "--min-stops", "4"],
    );
    assert_eq!(
        stdout_lines(&output),
        ["A-B-C-D-C", "A-D-C-D-C", "A-D-E-B-C"]
    );
}

#[test]
fn routes_count_only() {
    let tmp = TempDir::new().expect("tmpdir");
    let output = run_routes(
        tmp.path(),
        &["--quiet", "routes", "A", "C", "--max-stops", "4", "--min-stops", "4", "--count"],
    );
    assert_eq!(stdout_lines(&output), ["3"]);
}

#[test]
fn exhausted_budget_is_fatal() {
    let tmp = TempDir::new().expect("tmpdir");
    let output = run_routes(
        tmp.path(),
        &["--quiet", "routes", "A", "C", "--max-stops", "30", "--min-stops", "30", "--budget", "50"],
    );
    assert!(!output.status.success());
}

#[test]
fn loads_graph_from_json() {
    let tmp = TempDir::new().expect("tmpdir");
    let dataset = reference_dataset();
    let output = run_routes(
        tmp.path(),
        &["--quiet", "--graph", dataset.to_str().unwrap(), "route-distance", "A", "E", "B", "C", "D"],
    );
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["22"]);

    let custom = tmp.path().join("ring.json");
    std::fs::write(
        &custom,
        r#"{"edges": [{"from": "North", "to": "South", "distance": 10}, {"from": "South", "to": "North", "distance": 12}]}"#,
    )
    .unwrap();
    let output = run_routes(
        tmp.path(),
        &["--quiet", "--graph", custom.to_str().unwrap(), "connections", "South"],
    );
    assert_eq!(stdout_lines(&output), ["North 12"]);
}

#[test]
fn malformed_graph_is_fatal() {
    let tmp = TempDir::new().expect("tmpdir");
    let bad = tmp.path().join("bad.json");
    std::fs::write(&bad, "{ not json").unwrap();
    let output = run_routes(
        tmp.path(),
        &["--quiet", "--graph", bad.to_str().unwrap(), "route-distance", "A"],
    );
    assert!(!output.status.success());
}

#[test]
fn verbose_run_writes_log_file() {
    let tmp = TempDir::new().expect("tmpdir");
    let output = run_routes(tmp.path(), &["routes", "C", "C", "--max-stops", "3"]);
    assert!(output.status.success());
    let log = std::fs::read_to_string(tmp.path().join("routes.log")).expect("log file");
    assert!(log.contains("Found 2 routes."));
}
