//! Lifecycle milestone inference.
//!
//! The registry exposes an operation start date but no construction start,
//! so construction start is approximated by the last-update date of the
//! record in which the transition into construction is first observed.
//!
//! Construction and operation starts are final once set. `first_heard` is
//! only ever set on first sighting. `start_estimated` is filled from the
//! planned operation date whenever it is still unknown.

use chrono::NaiveDate;

use mastr_model::{ChangeDescriptor, EntityRecord, Milestones, Status};

/// Milestones for an entity seen for the first time.
pub fn first_sighting(record: &EntityRecord) -> Milestones {
    Milestones {
        first_heard: first_heard(record),
        start_construction: None,
        start_operation: record.operation_start,
        start_estimated: record.planned_operation_start,
    }
}

/// Registration date, unless the entity was registered after it had already
/// started operating. The registry launched after some installations were
/// built, so those registration dates say nothing about when the project
/// was first known.
fn first_heard(record: &EntityRecord) -> Option<NaiveDate> {
    let registered_late = record.status == Status::Operation
        && record
            .operation_start
            .is_some_and(|start| record.registration_date > start);
    if registered_late {
        None
    } else {
        Some(record.registration_date)
    }
}

/// Update `existing` milestones from a record and the changes that led to it.
pub fn advance(
    record: &EntityRecord,
    changes: &[ChangeDescriptor],
    existing: &Milestones,
) -> Milestones {
    let mut milestones = existing.clone();
    if milestones.start_construction.is_none()
        && changes
            .iter()
            .any(|change| change.enters(Status::Construction))
    {
        milestones.start_construction = Some(record.last_update);
    }
    if milestones.start_operation.is_none()
        && changes.iter().any(|change| change.enters(Status::Operation))
    {
        milestones.start_operation = record.operation_start;
    }
    if milestones.start_estimated.is_none() {
        milestones.start_estimated = record.planned_operation_start;
    }
    milestones
}

/// Milestones after observing `record`: first-sighting rules when there is
/// no prior history, transition rules otherwise.
pub fn infer_milestones(
    record: &EntityRecord,
    changes: &[ChangeDescriptor],
    existing: Option<&Milestones>,
) -> Milestones {
    match existing {
        Some(existing) => advance(record, changes, existing),
        None => first_sighting(record),
    }
}
