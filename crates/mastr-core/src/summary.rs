//! Per-period totals by lifecycle status.

use mastr_model::{EntityRecord, Period, PeriodSummary, Status, StatusTotals};

use crate::error::{CoreError, Result};

fn add(totals: &mut StatusTotals, record: &EntityRecord) -> Option<()> {
    totals.count += 1;
    totals.power_mw = totals.power_mw.checked_add(record.power_mw)?;
    totals.energy_mwh = totals.energy_mwh.checked_add(record.energy_mwh)?;
    Some(())
}

/// Count records and sum their capacities per status.
///
/// Capacities are summed in the units the normalizer produced. Statuses are
/// resolved during normalization, so every record lands in a bucket. A sum
/// that leaves the `i64` range is an error.
pub fn summarize(period: Period, records: &[EntityRecord]) -> Result<PeriodSummary> {
    let mut summary = PeriodSummary::empty(period);
    for record in records {
        let totals = summary.totals.entry(record.status).or_default();
        add(totals, record).ok_or_else(|| overflow(period, record.status))?;
    }
    Ok(summary)
}

fn overflow(period: Period, status: Status) -> CoreError {
    CoreError::TotalsOverflow { period, status }
}
