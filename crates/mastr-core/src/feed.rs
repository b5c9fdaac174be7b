//! End-to-end feed construction over an ordered sequence of periods.

use std::collections::BTreeMap;

use tracing::{debug, info, info_span};

use mastr_codes::CodeTables;
use mastr_model::{
    EntityKey, EntityRecord, FeedOptions, FeedSummary, RawPeriod, RawRecord, RecordFilter,
    ShortRecord, fields,
};

use crate::error::{CoreError, Result};
use crate::history::HistoryAggregator;
use crate::normalize::Normalizer;
use crate::short_form::project;
use crate::summary::summarize;

fn is_excluded(filter: &RecordFilter, raw: &RawRecord) -> bool {
    raw.get(fields::KEY)
        .is_some_and(|key| filter.excluded_keys.contains(key))
}

fn below_minimum(filter: &RecordFilter, record: &EntityRecord) -> bool {
    filter
        .min_power_mw
        .is_some_and(|minimum| record.power_mw < minimum)
}

/// Normalize one period and apply the record filter.
fn prepare_period(
    normalizer: &Normalizer<'_>,
    filter: &RecordFilter,
    raw: &RawPeriod,
) -> Result<Vec<EntityRecord>> {
    let mut records = Vec::with_capacity(raw.records.len());
    let mut excluded = 0usize;
    let mut below = 0usize;
    for raw_record in &raw.records {
        if is_excluded(filter, raw_record) {
            excluded += 1;
            continue;
        }
        let record = normalizer.normalize(raw_record, raw.period)?;
        if below_minimum(filter, &record) {
            below += 1;
            continue;
        }
        records.push(record);
    }
    if excluded > 0 || below > 0 {
        debug!(excluded, below_minimum = below, "records filtered");
    }
    Ok(records)
}

/// Build the change feed from periods in chronological order.
///
/// Fails on the first error; no partial feed is returned.
pub fn build_feed(
    periods: &[RawPeriod],
    tables: &CodeTables,
    options: &FeedOptions,
) -> Result<FeedSummary> {
    let Some(last) = periods.last() else {
        return Err(CoreError::NoPeriods);
    };
    let span = info_span!("build_feed", periods = periods.len());
    let _guard = span.enter();

    let normalizer = Normalizer::new(tables);
    let mut aggregator = HistoryAggregator::new(options.diff.clone());
    let mut summaries = Vec::with_capacity(periods.len());
    let mut period_changes = Vec::with_capacity(periods.len());

    for raw in periods {
        let records = prepare_period(&normalizer, &options.filter, raw)?;
        summaries.push(summarize(raw.period, &records)?);
        period_changes.push(aggregator.advance(raw.period, records)?);
    }
    period_changes.reverse();

    let histories = aggregator.into_histories();
    let short_form: BTreeMap<EntityKey, ShortRecord> = histories
        .iter()
        .map(|(key, history)| (key.clone(), project(history, tables, &options.source)))
        .collect();
    let current = match summaries.last() {
        Some(summary) => summary.clone(),
        None => return Err(CoreError::NoPeriods),
    };

    info!(
        current_period = %last.period,
        entities = histories.len(),
        "feed built"
    );

    Ok(FeedSummary {
        current,
        current_period: last.period,
        period_changes,
        summaries,
        histories,
        short_form,
    })
}
