//! Per-entity history and per-period classification.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{ChangeDescriptor, EntityKey, EntityRecord, Period};

/// Dated lifecycle events for one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Milestones {
    pub first_heard: Option<NaiveDate>,
    pub start_construction: Option<NaiveDate>,
    pub start_operation: Option<NaiveDate>,
    pub start_estimated: Option<NaiveDate>,
}

/// Changes recorded for one entity in one period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeSet {
    pub period: Period,
    pub changes: Vec<ChangeDescriptor>,
}

/// Running history of one entity across all periods it was observed in.
///
/// Invariant: `first_period <= changes[i].period <= current_period`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityHistory {
    pub key: EntityKey,
    pub first: EntityRecord,
    pub first_period: Period,
    pub changes: Vec<ChangeSet>,
    pub current: EntityRecord,
    pub current_period: Period,
    pub milestones: Milestones,
}

impl EntityHistory {
    pub fn new(record: EntityRecord, milestones: Milestones) -> Self {
        Self {
            key: record.key.clone(),
            first_period: record.period,
            current_period: record.period,
            first: record.clone(),
            current: record,
            changes: Vec::new(),
            milestones,
        }
    }
}

/// An entity present in two consecutive observations with a non-empty diff.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatedEntity {
    pub record: EntityRecord,
    pub changes: Vec<ChangeDescriptor>,
}

/// Classification of one period relative to the previous one.
///
/// Each list is ordered by descending power, ties in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodChanges {
    pub period: Period,
    pub new: Vec<EntityRecord>,
    pub updated: Vec<UpdatedEntity>,
    pub disappeared: Vec<EntityRecord>,
}

impl PeriodChanges {
    pub fn new(period: Period) -> Self {
        Self {
            period,
            new: Vec::new(),
            updated: Vec::new(),
            disappeared: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.new.is_empty() && self.updated.is_empty() && self.disappeared.is_empty()
    }
}
