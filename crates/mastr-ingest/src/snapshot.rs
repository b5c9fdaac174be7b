//! Reading one period snapshot into raw records.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use mastr_model::{RawPeriod, RawRecord};

use crate::discovery::{SnapshotFile, discover_snapshots};
use crate::error::{IngestError, Result};

/// Render a JSON value as the flat text the normalizer expects.
///
/// Nulls are treated as absent fields.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

/// Parse snapshot JSON text: an array of flat objects.
pub fn parse_snapshot(text: &str, path: &Path) -> Result<Vec<RawRecord>> {
    let value: Value = serde_json::from_str(text).map_err(|source| IngestError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let Value::Array(items) = value else {
        return Err(IngestError::InvalidShape {
            path: path.to_path_buf(),
            message: "top level is not an array".to_string(),
        });
    };
    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Value::Object(object) = item else {
            return Err(IngestError::InvalidShape {
                path: path.to_path_buf(),
                message: format!("element {index} is not an object"),
            });
        };
        let record: RawRecord = object
            .iter()
            .filter_map(|(field, value)| value_text(value).map(|text| (field.clone(), text)))
            .collect();
        records.push(record);
    }
    Ok(records)
}

pub fn read_snapshot(snapshot: &SnapshotFile) -> Result<RawPeriod> {
    let path = snapshot.path.as_path();
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_snapshot(&text, path)?;
    debug!(
        period = %snapshot.period,
        path = %path.display(),
        record_count = records.len(),
        "read snapshot"
    );
    Ok(RawPeriod::new(snapshot.period, records))
}

/// Load every period snapshot in a directory, oldest first.
pub fn load_periods(dir: &Path) -> Result<Vec<RawPeriod>> {
    let snapshots = discover_snapshots(dir)?;
    let periods = snapshots
        .iter()
        .map(read_snapshot)
        .collect::<Result<Vec<_>>>()?;
    info!(
        dir = %dir.display(),
        period_count = periods.len(),
        "snapshots loaded"
    );
    Ok(periods)
}
