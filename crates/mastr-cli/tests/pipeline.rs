//! Integration tests for the pipeline module.

use std::fs;
use std::path::Path;

use mastr_cli::pipeline::{load_feed_options, run_pipeline};
use mastr_codes::default_code_tables;
use mastr_model::{EntityKey, FeedOptions, Status};

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

const OCTOBER: &str = r#"[
  {"EinheitMastrNummer": "SEE100", "NameStromerzeugungseinheit": "Speicher Nord",
   "EinheitBetriebsstatus": "31", "Nettonennleistung": 15000, "NutzbareSpeicherkapazitaet": 20000,
   "Bundesland": "1403", "AnlagenbetreiberMastrNummer": "ABR1",
   "Registrierungsdatum": "2021-03-01", "DatumLetzteAktualisierung": "2021-09-30T10:00:00",
   "Technologie": "524", "pr_url_id": 4711},
  {"EinheitMastrNummer": "SEE200", "NameStromerzeugungseinheit": "Speicher Sued",
   "EinheitBetriebsstatus": "31", "Nettonennleistung": 800, "NutzbareSpeicherkapazitaet": 1000,
   "Bundesland": "1402", "AnlagenbetreiberMastrNummer": "ABR2",
   "Registrierungsdatum": "2021-04-01", "DatumLetzteAktualisierung": "2021-09-01"}
]"#;

const NOVEMBER: &str = r#"[
  {"EinheitMastrNummer": "SEE100", "NameStromerzeugungseinheit": "Speicher Nord",
   "EinheitBetriebsstatus": "35", "Nettonennleistung": 15000, "NutzbareSpeicherkapazitaet": 20000,
   "Bundesland": "1403", "AnlagenbetreiberMastrNummer": "ABR1",
   "Registrierungsdatum": "2021-03-01", "Inbetriebnahmedatum": "2021-10-28",
   "DatumLetzteAktualisierung": "2021-11-02T08:00:00",
   "Technologie": "524", "pr_url_id": 4711}
]"#;

#[test]
fn builds_feed_from_snapshot_folder() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "2021-10.json", OCTOBER);
    write(dir.path(), "2021-11.json", NOVEMBER);
    let tables = default_code_tables().unwrap();

    let feed = run_pipeline(dir.path(), &tables, &FeedOptions::default()).unwrap();

    assert_eq!(feed.current_period.to_string(), "2021-11");
    assert_eq!(feed.summaries.len(), 2);
    assert_eq!(feed.current.get(Status::Operation).count, 1);
    assert_eq!(feed.current.get(Status::Operation).power_mw, 15);

    let november = &feed.period_changes[0];
    assert_eq!(november.updated.len(), 1);
    assert_eq!(november.disappeared.len(), 1);
    assert_eq!(november.disappeared[0].key.as_str(), "SEE200");

    let short = &feed.short_form[&EntityKey::new("SEE100").unwrap()];
    assert_eq!(short.state, "bavaria");
    assert_eq!(short.start_operation.map(|d| d.to_string()).as_deref(), Some("2021-10-28"));
    assert!(short.detail_url.as_deref().unwrap().ends_with("/4711"));

    let json = serde_json::to_value(&feed).unwrap();
    assert_eq!(json["period_changes"][0]["period"], "2021-11");
}

#[test]
fn options_file_sets_filter_and_ignore_set() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "feed.toml",
        r#"
[diff]
ignored_fields = ["last_update"]

[filter]
min_power_mw = 1
excluded_keys = ["SEE999"]

[source]
country = "de"
"#,
    );

    let options = load_feed_options(Some(&dir.path().join("feed.toml"))).unwrap();
    assert!(options.diff.is_ignored("last_update"));
    assert_eq!(options.filter.min_power_mw, Some(1));
    assert!(options.filter.excluded_keys.contains("SEE999"));
    assert_eq!(options.source.country, "de");
    assert_eq!(options.source.name, "de_mastr");

    let snapshots = tempfile::tempdir().unwrap();
    write(snapshots.path(), "2021-10.json", OCTOBER);
    let tables = default_code_tables().unwrap();
    let feed = run_pipeline(snapshots.path(), &tables, &options).unwrap();
    assert_eq!(feed.histories.len(), 1);
    assert_eq!(feed.short_form[&EntityKey::new("SEE100").unwrap()].country, "de");
}

#[test]
fn no_config_means_defaults() {
    assert_eq!(load_feed_options(None).unwrap(), FeedOptions::default());
}

#[test]
fn errors_carry_context() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_feed_options(Some(&dir.path().join("missing.toml"))).unwrap_err();
    assert!(format!("{err:#}").contains("read config"));

    let tables = default_code_tables().unwrap();
    let err = run_pipeline(dir.path(), &tables, &FeedOptions::default()).unwrap_err();
    assert!(format!("{err:#}").contains("build feed"));
}
