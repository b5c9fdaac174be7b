//! Folding period snapshots into per-entity histories.
//!
//! Periods must arrive strictly in chronological order. Each period is
//! classified against the one before it:
//!
//! - **new**: key absent from the previous period
//! - **updated**: key present before and the diff is non-empty
//! - **unchanged**: key present before with an empty diff (not reported)
//! - **disappeared**: key present before but absent now
//!
//! Histories are never dropped. A key that disappears and comes back later
//! is reported as new again, but its history is kept and the returning
//! record is diffed against the last known record, so a lifecycle transition
//! that happened while the key was missing is still picked up.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, info, info_span};

use mastr_model::{
    ChangeSet, DiffOptions, EntityHistory, EntityKey, EntityRecord, Period, PeriodChanges,
    UpdatedEntity,
};

use crate::diff::diff;
use crate::error::{CoreError, Result};
use crate::lifecycle::infer_milestones;

/// The keyed records of the last processed period.
#[derive(Debug, Clone)]
struct PeriodSnapshot {
    period: Period,
    records: Vec<EntityRecord>,
    keys: HashSet<EntityKey>,
}

impl PeriodSnapshot {
    fn contains(&self, key: &EntityKey) -> bool {
        self.keys.contains(key)
    }
}

/// Builds entity histories one period at a time.
#[derive(Debug, Clone, Default)]
pub struct HistoryAggregator {
    diff_options: DiffOptions,
    previous: Option<PeriodSnapshot>,
    histories: BTreeMap<EntityKey, EntityHistory>,
}

impl HistoryAggregator {
    /// `diff_options` holds the fields the differ must ignore for every
    /// period of this run.
    pub fn new(diff_options: DiffOptions) -> Self {
        Self {
            diff_options,
            previous: None,
            histories: BTreeMap::new(),
        }
    }

    pub fn previous_period(&self) -> Option<Period> {
        self.previous.as_ref().map(|snapshot| snapshot.period)
    }

    pub fn histories(&self) -> &BTreeMap<EntityKey, EntityHistory> {
        &self.histories
    }

    pub fn into_histories(self) -> BTreeMap<EntityKey, EntityHistory> {
        self.histories
    }

    fn check_period(&self, period: Period, records: &[EntityRecord]) -> Result<HashSet<EntityKey>> {
        if let Some(previous) = self.previous_period()
            && period <= previous
        {
            return Err(CoreError::OrderingViolation {
                previous,
                current: period,
            });
        }
        let mut keys = HashSet::with_capacity(records.len());
        for record in records {
            if record.period != period {
                return Err(CoreError::PeriodMismatch {
                    expected: period,
                    found: record.period,
                    key: record.key.clone(),
                });
            }
            if !keys.insert(record.key.clone()) {
                return Err(CoreError::DuplicateKey {
                    period,
                    key: record.key.clone(),
                });
            }
        }
        Ok(keys)
    }

    /// Process the next period and classify its records against the
    /// previous one.
    pub fn advance(&mut self, period: Period, records: Vec<EntityRecord>) -> Result<PeriodChanges> {
        let keys = self.check_period(period, &records)?;
        let span = info_span!("period", period = %period);
        let _guard = span.enter();

        let mut changes = PeriodChanges::new(period);
        for record in &records {
            let seen_last_period = self
                .previous
                .as_ref()
                .is_some_and(|previous| previous.contains(&record.key));
            match self.histories.get_mut(&record.key) {
                Some(history) => {
                    let record_changes = diff(&history.current, record, &self.diff_options);
                    history.milestones =
                        infer_milestones(record, &record_changes, Some(&history.milestones));
                    history.current = record.clone();
                    history.current_period = period;
                    if !record_changes.is_empty() {
                        history.changes.push(ChangeSet {
                            period,
                            changes: record_changes.clone(),
                        });
                    }
                    if !seen_last_period {
                        debug!(key = %record.key, changes = record_changes.len(), "reappeared");
                        changes.new.push(record.clone());
                    } else if !record_changes.is_empty() {
                        debug!(key = %record.key, changes = record_changes.len(), "updated");
                        changes.updated.push(UpdatedEntity {
                            record: record.clone(),
                            changes: record_changes,
                        });
                    }
                }
                None => {
                    debug!(key = %record.key, status = %record.status, "new");
                    let milestones = infer_milestones(record, &[], None);
                    self.histories.insert(
                        record.key.clone(),
                        EntityHistory::new(record.clone(), milestones),
                    );
                    changes.new.push(record.clone());
                }
            }
        }

        if let Some(previous) = &self.previous {
            changes.disappeared = previous
                .records
                .iter()
                .filter(|record| !keys.contains(&record.key))
                .cloned()
                .collect();
        }

        changes.new.sort_by(|a, b| b.power_mw.cmp(&a.power_mw));
        changes
            .updated
            .sort_by(|a, b| b.record.power_mw.cmp(&a.record.power_mw));
        changes
            .disappeared
            .sort_by(|a, b| b.power_mw.cmp(&a.power_mw));

        info!(
            records = records.len(),
            new = changes.new.len(),
            updated = changes.updated.len(),
            disappeared = changes.disappeared.len(),
            "period aggregated"
        );

        self.previous = Some(PeriodSnapshot {
            period,
            records,
            keys,
        });
        Ok(changes)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mastr_model::Status;

    use super::*;

    fn period(value: &str) -> Period {
        value.parse().unwrap()
    }

    fn record(key: &str, at: &str, status: Status, power_mw: i64) -> EntityRecord {
        EntityRecord {
            key: EntityKey::new(key).unwrap(),
            period: period(at),
            name: format!("Speicher {key}"),
            status,
            power_mw,
            energy_mwh: power_mw,
            region: "1403".to_string(),
            owner: "ABR1".to_string(),
            registration_date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            operation_start: None,
            planned_operation_start: None,
            last_update: NaiveDate::from_ymd_opt(2021, 1, 2).unwrap(),
            latitude: None,
            longitude: None,
            technology: None,
            detail_page_id: None,
            attributes: Default::default(),
        }
    }

    fn keys(records: &[EntityRecord]) -> Vec<&str> {
        records.iter().map(|record| record.key.as_str()).collect()
    }

    #[test]
    fn first_period_reports_everything_as_new() {
        let mut aggregator = HistoryAggregator::default();
        let changes = aggregator
            .advance(
                period("2021-10"),
                vec![
                    record("A", "2021-10", Status::Planning, 5),
                    record("B", "2021-10", Status::Planning, 40),
                ],
            )
            .unwrap();
        assert_eq!(keys(&changes.new), vec!["B", "A"]);
        assert!(changes.updated.is_empty());
        assert!(changes.disappeared.is_empty());
        assert_eq!(aggregator.histories().len(), 2);
        assert_eq!(aggregator.previous_period(), Some(period("2021-10")));
    }

    #[test]
    fn unchanged_entities_are_not_reported() {
        let mut aggregator = HistoryAggregator::default();
        aggregator
            .advance(period("2021-10"), vec![record("A", "2021-10", Status::Planning, 5)])
            .unwrap();
        let changes = aggregator
            .advance(period("2021-11"), vec![record("A", "2021-11", Status::Planning, 5)])
            .unwrap();
        assert!(changes.is_empty());

        let history = &aggregator.histories()[&EntityKey::new("A").unwrap()];
        assert_eq!(history.current_period, period("2021-11"));
        assert_eq!(history.first_period, period("2021-10"));
        assert!(history.changes.is_empty());
    }

    #[test]
    fn updated_and_disappeared_are_classified() {
        let mut aggregator = HistoryAggregator::default();
        aggregator
            .advance(
                period("2021-10"),
                vec![
                    record("A", "2021-10", Status::Planning, 5),
                    record("B", "2021-10", Status::Planning, 7),
                ],
            )
            .unwrap();
        let changes = aggregator
            .advance(
                period("2021-11"),
                vec![record("A", "2021-11", Status::Construction, 5)],
            )
            .unwrap();
        assert!(changes.new.is_empty());
        assert_eq!(changes.updated.len(), 1);
        assert_eq!(changes.updated[0].changes[0].field, "status");
        assert_eq!(keys(&changes.disappeared), vec!["B"]);
        assert_eq!(changes.disappeared[0].period, period("2021-10"));
    }

    #[test]
    fn returning_key_is_new_and_keeps_history() {
        let mut aggregator = HistoryAggregator::default();
        aggregator
            .advance(period("2021-10"), vec![record("A", "2021-10", Status::Planning, 5)])
            .unwrap();
        aggregator.advance(period("2021-11"), Vec::new()).unwrap();
        let changes = aggregator
            .advance(
                period("2021-12"),
                vec![record("A", "2021-12", Status::Construction, 5)],
            )
            .unwrap();
        assert_eq!(keys(&changes.new), vec!["A"]);
        assert!(changes.updated.is_empty());

        let history = &aggregator.histories()[&EntityKey::new("A").unwrap()];
        assert_eq!(history.first_period, period("2021-10"));
        assert_eq!(history.changes.len(), 1);
        assert_eq!(history.changes[0].period, period("2021-12"));
        assert!(history.milestones.start_construction.is_some());
    }

    #[test]
    fn rejects_out_of_order_periods() {
        let mut aggregator = HistoryAggregator::default();
        aggregator.advance(period("2021-11"), Vec::new()).unwrap();
        let err = aggregator.advance(period("2021-11"), Vec::new()).unwrap_err();
        assert!(matches!(err, CoreError::OrderingViolation { .. }));
        let err = aggregator.advance(period("2021-10"), Vec::new()).unwrap_err();
        assert!(matches!(err, CoreError::OrderingViolation { .. }));
    }

    #[test]
    fn rejects_duplicate_keys_without_side_effects() {
        let mut aggregator = HistoryAggregator::default();
        let err = aggregator
            .advance(
                period("2021-10"),
                vec![
                    record("A", "2021-10", Status::Planning, 5),
                    record("A", "2021-10", Status::Planning, 6),
                ],
            )
            .unwrap_err();
        assert!(matches!(err, CoreError::DuplicateKey { ref key, .. } if key.as_str() == "A"));
        assert!(aggregator.histories().is_empty());
        assert_eq!(aggregator.previous_period(), None);
    }

    #[test]
    fn rejects_records_from_another_period() {
        let mut aggregator = HistoryAggregator::default();
        let err = aggregator
            .advance(period("2021-10"), vec![record("A", "2021-09", Status::Planning, 5)])
            .unwrap_err();
        assert!(matches!(err, CoreError::PeriodMismatch { .. }));
    }
}
