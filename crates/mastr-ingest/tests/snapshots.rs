//! Tests for snapshot discovery and reading.

use std::fs;
use std::path::Path;

use mastr_ingest::{IngestError, discover_snapshots, load_periods, parse_snapshot};

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write file");
}

#[test]
fn discovers_periods_in_chronological_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "2021-11.json", "[]");
    write(dir.path(), "2020-12.json", "[]");
    write(dir.path(), "2021-01.JSON", "[]");
    write(dir.path(), "notes.json", "[]");
    write(dir.path(), "2021-02.csv", "a,b");
    fs::create_dir(dir.path().join("2021-03.json")).expect("create dir");

    let snapshots = discover_snapshots(dir.path()).expect("discover");
    let periods: Vec<String> = snapshots.iter().map(|s| s.period.to_string()).collect();
    assert_eq!(periods, vec!["2020-12", "2021-01", "2021-11"]);
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = discover_snapshots(&dir.path().join("absent")).expect_err("missing dir");
    assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
}

#[test]
fn flattens_json_values_to_text() {
    let records = parse_snapshot(
        r#"[{"EinheitMastrNummer": "SEE1", "NutzbareSpeicherkapazitaet": 21041.5,
             "pr_url_id": 3179493, "Laengengrad": null, "Flag": true}]"#,
        Path::new("2021-10.json"),
    )
    .expect("parse");
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.get("EinheitMastrNummer"), Some("SEE1"));
    assert_eq!(record.get("NutzbareSpeicherkapazitaet"), Some("21041.5"));
    assert_eq!(record.get("pr_url_id"), Some("3179493"));
    assert_eq!(record.get("Laengengrad"), None);
    assert_eq!(record.get("Flag"), Some("true"));
    assert_eq!(record.len(), 4);
}

#[test]
fn rejects_non_array_snapshot() {
    let err = parse_snapshot(r#"{"a": 1}"#, Path::new("2021-10.json")).expect_err("shape");
    assert!(matches!(err, IngestError::InvalidShape { .. }));

    let err = parse_snapshot("[1, 2]", Path::new("2021-10.json")).expect_err("shape");
    assert!(matches!(err, IngestError::InvalidShape { .. }));

    let err = parse_snapshot("[", Path::new("2021-10.json")).expect_err("json");
    assert!(matches!(err, IngestError::Json { .. }));
}

#[test]
fn loads_all_periods() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "2021-10.json", r#"[{"EinheitMastrNummer": "SEE1"}]"#);
    write(
        dir.path(),
        "2021-11.json",
        r#"[{"EinheitMastrNummer": "SEE1"}, {"EinheitMastrNummer": "SEE2"}]"#,
    );

    let periods = load_periods(dir.path()).expect("load");
    assert_eq!(periods.len(), 2);
    assert_eq!(periods[0].period.to_string(), "2021-10");
    assert_eq!(periods[0].records.len(), 1);
    assert_eq!(periods[1].records.len(), 2);
}
