//! Aggregate and projected outputs of a feed run.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::{EntityHistory, EntityKey, Period, PeriodChanges, Status};

/// Count and capacity totals for one status bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusTotals {
    pub count: usize,
    pub power_mw: i64,
    pub energy_mwh: i64,
}

/// Per-status totals for one period. Every status has a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodSummary {
    pub period: Period,
    pub totals: BTreeMap<Status, StatusTotals>,
}

impl PeriodSummary {
    pub fn empty(period: Period) -> Self {
        Self {
            period,
            totals: Status::ALL
                .iter()
                .map(|status| (*status, StatusTotals::default()))
                .collect(),
        }
    }

    pub fn get(&self, status: Status) -> StatusTotals {
        self.totals.get(&status).copied().unwrap_or_default()
    }

    pub fn total_count(&self) -> usize {
        self.totals.values().map(|totals| totals.count).sum()
    }
}

/// Flat, source-independent view of one entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortRecord {
    pub data_source: String,
    pub external_id: String,
    pub name: String,
    pub state: String,
    pub country: String,
    pub mwh: i64,
    pub power_mw: i64,
    pub owner: String,
    pub status: Status,
    pub date_first_heard: Option<NaiveDate>,
    pub start_construction: Option<NaiveDate>,
    pub start_operation: Option<NaiveDate>,
    pub start_estimated: Option<NaiveDate>,
    pub lat: Option<f64>,
    pub long: Option<f64>,
    pub detail_url: Option<String>,
}

/// Everything a feed run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedSummary {
    pub current: PeriodSummary,
    pub current_period: Period,
    /// Newest period first.
    pub period_changes: Vec<PeriodChanges>,
    /// Oldest period first.
    pub summaries: Vec<PeriodSummary>,
    pub histories: BTreeMap<EntityKey, EntityHistory>,
    pub short_form: BTreeMap<EntityKey, ShortRecord>,
}
