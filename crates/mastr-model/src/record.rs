//! Raw and normalized entity records.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{EntityKey, Period, Status};

/// One flat source record as delivered by the loader: field name to text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(BTreeMap<String, String>);

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    /// Returns the trimmed value, treating blank values as absent.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// All raw records observed in one period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPeriod {
    pub period: Period,
    pub records: Vec<RawRecord>,
}

impl RawPeriod {
    pub fn new(period: Period, records: Vec<RawRecord>) -> Self {
        Self { period, records }
    }
}

/// A comparable field value.
///
/// Values of different variants are never equal: a field that changes its
/// representable type is reported as changed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
    Date(NaiveDate),
    Status(Status),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(value) => f.write_str(value),
            FieldValue::Integer(value) => write!(f, "{value}"),
            FieldValue::Decimal(value) => write!(f, "{value}"),
            FieldValue::Date(value) => write!(f, "{value}"),
            FieldValue::Status(value) => write!(f, "{value}"),
        }
    }
}

/// One normalized observation of one installation in one period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityRecord {
    pub key: EntityKey,
    /// Period the record was observed in. Not part of the field view.
    pub period: Period,
    pub name: String,
    pub status: Status,
    /// Net rated power in MW, truncated toward zero.
    pub power_mw: i64,
    /// Usable storage capacity in MWh, truncated toward zero.
    pub energy_mwh: i64,
    /// Raw region code; mapped to a label only for display.
    pub region: String,
    pub owner: String,
    pub registration_date: NaiveDate,
    pub operation_start: Option<NaiveDate>,
    pub planned_operation_start: Option<NaiveDate>,
    pub last_update: NaiveDate,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub technology: Option<String>,
    pub detail_page_id: Option<String>,
    /// Remaining source fields, verbatim.
    pub attributes: BTreeMap<String, String>,
}

/// Names of the typed fields in the field view, in view order.
pub const VIEW_FIELDS: [&str; 14] = [
    "name",
    "status",
    "power_mw",
    "energy_mwh",
    "region",
    "owner",
    "registration_date",
    "operation_start",
    "planned_operation_start",
    "last_update",
    "latitude",
    "longitude",
    "technology",
    "detail_page_id",
];

/// Prefix given to attribute names that would otherwise clash with a typed
/// field (or with another prefixed attribute) in the field view.
pub const ATTRIBUTE_PREFIX: &str = "attributes.";

/// View name of an attribute. Every view name is unique within a record.
pub fn attribute_view_name(name: &str) -> Cow<'_, str> {
    if VIEW_FIELDS.contains(&name) || name.starts_with(ATTRIBUTE_PREFIX) {
        Cow::Owned(format!("{ATTRIBUTE_PREFIX}{name}"))
    } else {
        Cow::Borrowed(name)
    }
}

impl EntityRecord {
    /// Comparable fields in a fixed order: typed fields in declaration order,
    /// then attributes by name. Absent optional fields are left out.
    pub fn fields(&self) -> Vec<(Cow<'_, str>, FieldValue)> {
        let mut fields: Vec<(&str, FieldValue)> = vec![
            ("name", FieldValue::Text(self.name.clone())),
            ("status", FieldValue::Status(self.status)),
            ("power_mw", FieldValue::Integer(self.power_mw)),
            ("energy_mwh", FieldValue::Integer(self.energy_mwh)),
            ("region", FieldValue::Text(self.region.clone())),
            ("owner", FieldValue::Text(self.owner.clone())),
            ("registration_date", FieldValue::Date(self.registration_date)),
        ];
        if let Some(date) = self.operation_start {
            fields.push(("operation_start", FieldValue::Date(date)));
        }
        if let Some(date) = self.planned_operation_start {
            fields.push(("planned_operation_start", FieldValue::Date(date)));
        }
        fields.push(("last_update", FieldValue::Date(self.last_update)));
        if let Some(value) = self.latitude {
            fields.push(("latitude", FieldValue::Decimal(value)));
        }
        if let Some(value) = self.longitude {
            fields.push(("longitude", FieldValue::Decimal(value)));
        }
        if let Some(value) = &self.technology {
            fields.push(("technology", FieldValue::Text(value.clone())));
        }
        if let Some(value) = &self.detail_page_id {
            fields.push(("detail_page_id", FieldValue::Text(value.clone())));
        }
        let mut view: Vec<(Cow<'_, str>, FieldValue)> = fields
            .into_iter()
            .map(|(name, value)| (Cow::Borrowed(name), value))
            .collect();
        view.extend(
            self.attributes
                .iter()
                .map(|(name, value)| (attribute_view_name(name), FieldValue::Text(value.clone()))),
        );
        view
    }
}
