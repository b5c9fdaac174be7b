//! Record normalization: raw registry fields to typed entity records.
//!
//! Capacities are rescaled from kW/kWh to MW/MWh, truncating toward zero;
//! results beyond the `i64` range are rejected. The status code is replaced
//! by its lifecycle label. A status code without a table entry is an error;
//! technology codes without an entry are kept verbatim since they only
//! describe the record.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use mastr_codes::CodeTables;
use mastr_model::{CodeKind, EntityKey, EntityRecord, Period, RawRecord, Status, fields};

use crate::error::{CoreError, Result, UNKNOWN_KEY};

/// 2^63, the first whole number past `i64::MAX`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Truncate toward zero, or `None` if the result does not fit an `i64`.
fn truncate(value: f64) -> Option<i64> {
    let whole = value.trunc();
    (-I64_BOUND..I64_BOUND).contains(&whole).then(|| whole as i64)
}

/// Rescale a kW (or kWh) value to MW (or MWh), truncating toward zero.
/// Returns `None` when the result is outside the `i64` range.
pub fn cast_to_mega(value: f64) -> Option<i64> {
    truncate(value / 1000.0)
}

/// Parse a registry date. Date-times keep only their date part, so
/// `2021-02-15T12:47:02.2298795` becomes `2021-02-15`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next().unwrap_or("");
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Maps raw records onto typed records using injected code tables.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    tables: &'a CodeTables,
}

/// Field access for one raw record, carrying the context errors need.
struct FieldReader<'r> {
    raw: &'r RawRecord,
    period: Period,
    key: String,
}

impl FieldReader<'_> {
    fn required(&self, field: &'static str) -> Result<&str> {
        self.raw.get(field).ok_or_else(|| CoreError::MissingField {
            period: self.period,
            key: self.key.clone(),
            field,
        })
    }

    fn invalid(&self, field: &'static str, value: &str, reason: &str) -> CoreError {
        CoreError::InvalidValue {
            period: self.period,
            key: self.key.clone(),
            field,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    fn number(&self, field: &'static str, value: &str) -> Result<f64> {
        value
            .parse::<f64>()
            .ok()
            .filter(|number| number.is_finite())
            .ok_or_else(|| self.invalid(field, value, "not a finite number"))
    }

    fn megas(&self, field: &'static str) -> Result<i64> {
        let value = self.required(field)?;
        cast_to_mega(self.number(field, value)?)
            .ok_or_else(|| self.invalid(field, value, "capacity out of range"))
    }

    /// Storage capacity in MWh. Pre-filtered snapshots drop the kWh column
    /// and carry an already scaled `mwh` value instead.
    fn energy_mwh(&self) -> Result<i64> {
        if self.raw.get(fields::ENERGY_KWH).is_some() {
            return self.megas(fields::ENERGY_KWH);
        }
        match self.raw.get(fields::ENERGY_MWH) {
            Some(value) => truncate(self.number(fields::ENERGY_MWH, value)?)
                .ok_or_else(|| self.invalid(fields::ENERGY_MWH, value, "capacity out of range")),
            None => self.megas(fields::ENERGY_KWH),
        }
    }

    fn date(&self, field: &'static str, value: &str) -> Result<NaiveDate> {
        parse_date(value).ok_or_else(|| self.invalid(field, value, "expected YYYY-MM-DD"))
    }

    fn required_date(&self, field: &'static str) -> Result<NaiveDate> {
        let value = self.required(field)?;
        self.date(field, value)
    }

    fn optional_date(&self, field: &'static str) -> Result<Option<NaiveDate>> {
        self.raw
            .get(field)
            .map(|value| self.date(field, value))
            .transpose()
    }

    fn optional_number(&self, field: &'static str) -> Result<Option<f64>> {
        self.raw
            .get(field)
            .map(|value| self.number(field, value))
            .transpose()
    }
}

impl<'a> Normalizer<'a> {
    pub fn new(tables: &'a CodeTables) -> Self {
        Self { tables }
    }

    pub fn status(&self, code: &str, period: Period, key: &str) -> Result<Status> {
        self.tables
            .status(code)
            .ok_or_else(|| CoreError::UnknownCode {
                period,
                key: key.to_string(),
                kind: CodeKind::Status,
                code: code.to_string(),
            })
    }

    /// Normalize one raw record observed in `period`.
    pub fn normalize(&self, raw: &RawRecord, period: Period) -> Result<EntityRecord> {
        let key_text = raw.get(fields::KEY).unwrap_or(UNKNOWN_KEY).to_string();
        let reader = FieldReader {
            raw,
            period,
            key: key_text,
        };
        let key = EntityKey::new(reader.required(fields::KEY)?)
            .map_err(|_| reader.invalid(fields::KEY, "", "empty key"))?;
        let status = self.status(reader.required(fields::STATUS)?, period, &reader.key)?;
        let technology = raw.get(fields::TECHNOLOGY).map(|code| {
            self.tables
                .technology_label(code)
                .unwrap_or(code)
                .to_string()
        });
        let attributes: BTreeMap<String, String> = raw
            .iter()
            .filter(|(field, _)| !fields::TYPED.contains(field))
            .map(|(field, value)| (field.to_string(), value.trim().to_string()))
            .collect();

        Ok(EntityRecord {
            key,
            period,
            name: reader.required(fields::NAME)?.to_string(),
            status,
            power_mw: reader.megas(fields::POWER_KW)?,
            energy_mwh: reader.energy_mwh()?,
            region: reader.required(fields::REGION)?.to_string(),
            owner: reader.required(fields::OWNER)?.to_string(),
            registration_date: reader.required_date(fields::REGISTRATION_DATE)?,
            operation_start: reader.optional_date(fields::OPERATION_START)?,
            planned_operation_start: reader.optional_date(fields::PLANNED_OPERATION_START)?,
            last_update: reader.required_date(fields::LAST_UPDATE)?,
            latitude: reader.optional_number(fields::LATITUDE)?,
            longitude: reader.optional_number(fields::LONGITUDE)?,
            technology,
            detail_page_id: raw.get(fields::DETAIL_PAGE_ID).map(str::to_string),
            attributes,
        })
    }
}
