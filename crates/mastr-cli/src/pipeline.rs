//! Feed pipeline stages shared by the commands: options, snapshot loading
//! and feed construction.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use mastr_codes::CodeTables;
use mastr_core::build_feed;
use mastr_ingest::load_periods;
use mastr_model::{FeedOptions, FeedSummary};

/// Read feed options from a TOML file. Missing keys take their defaults;
/// without a path the defaults are returned.
pub fn load_feed_options(path: Option<&Path>) -> Result<FeedOptions> {
    let Some(path) = path else {
        return Ok(FeedOptions::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parse config {}", path.display()))
}

/// Load every snapshot under `snapshot_dir` and build the feed.
pub fn run_pipeline(
    snapshot_dir: &Path,
    tables: &CodeTables,
    options: &FeedOptions,
) -> Result<FeedSummary> {
    let span = info_span!("feed", dir = %snapshot_dir.display());
    let _guard = span.enter();

    let periods = load_periods(snapshot_dir)
        .with_context(|| format!("load snapshots from {}", snapshot_dir.display()))?;
    let records: usize = periods.iter().map(|period| period.records.len()).sum();
    info!(records, "building feed");

    build_feed(&periods, tables, options).context("build feed")
}
