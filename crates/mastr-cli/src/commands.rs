use std::io::{self, Write};

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use mastr_cli::pipeline::{load_feed_options, run_pipeline};
use mastr_codes::resolve_code_tables;
use mastr_model::CodeKind;

use crate::cli::{CodesArgs, FeedArgs};

pub fn run_feed(args: &FeedArgs) -> Result<()> {
    let tables = resolve_code_tables(args.codes.as_deref()).context("load code tables")?;
    let mut options = load_feed_options(args.config.as_deref())?
        .with_ignored_fields(args.ignore_fields.iter().cloned());
    if args.min_power_mw.is_some() {
        options = options.with_min_power_mw(args.min_power_mw);
    }

    let feed = run_pipeline(&args.snapshot_dir, &tables, &options)?;
    let json = if args.compact {
        serde_json::to_string(&feed)
    } else {
        serde_json::to_string_pretty(&feed)
    }
    .context("serialize feed")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}").context("write feed")?;
    Ok(())
}

pub fn run_codes(args: &CodesArgs) -> Result<()> {
    let tables = resolve_code_tables(args.codes.as_deref()).context("load code tables")?;
    let mut table = Table::new();
    table.set_header(vec!["Kind", "Code", "Label"]);
    apply_table_style(&mut table);
    for kind in [CodeKind::Status, CodeKind::Region, CodeKind::Technology] {
        for (code, label) in tables.entries(kind) {
            table.add_row(vec![kind.as_str(), code, label]);
        }
    }
    println!("{table}");
    Ok(())
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}
