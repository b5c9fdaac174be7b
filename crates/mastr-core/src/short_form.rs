//! Projection of an entity history onto a flat output record.

use tracing::debug;

use mastr_codes::CodeTables;
use mastr_model::{EntityHistory, ShortRecord, SourceInfo};

/// Flatten a history into its short form. Unmapped region codes are passed
/// through as the label.
pub fn project(history: &EntityHistory, tables: &CodeTables, source: &SourceInfo) -> ShortRecord {
    let record = &history.current;
    let milestones = &history.milestones;
    let state = match tables.region_label(&record.region) {
        Some(label) => label.to_string(),
        None => {
            debug!(key = %record.key, region = %record.region, "region code has no label");
            record.region.clone()
        }
    };
    ShortRecord {
        data_source: source.name.clone(),
        external_id: record.key.to_string(),
        name: record.name.clone(),
        state,
        country: source.country.clone(),
        mwh: record.energy_mwh,
        power_mw: record.power_mw,
        owner: record.owner.clone(),
        status: record.status,
        date_first_heard: milestones.first_heard,
        start_construction: milestones.start_construction,
        start_operation: milestones.start_operation,
        start_estimated: milestones.start_estimated,
        lat: record.latitude,
        long: record.longitude,
        detail_url: record
            .detail_page_id
            .as_ref()
            .map(|id| format!("{}{id}", source.detail_url_base)),
    }
}
