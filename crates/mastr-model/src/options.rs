//! Configuration options for building a change feed.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Options for the field differ.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Field names (as in the record field view) never reported as changed.
    pub ignored_fields: BTreeSet<String>,
}

impl DiffOptions {
    pub fn ignoring<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignored_fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_ignored(&self, field: &str) -> bool {
        self.ignored_fields.contains(field)
    }
}

/// Records dropped before summarizing and aggregating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordFilter {
    /// Keys known to carry unusable capacity data.
    pub excluded_keys: BTreeSet<String>,
    /// Drop records below this net power in MW.
    pub min_power_mw: Option<i64>,
}

/// Describes the data source in projected short records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceInfo {
    pub name: String,
    pub country: String,
    /// Detail page URL prefix; the detail page id is appended.
    pub detail_url_base: String,
}

impl Default for SourceInfo {
    fn default() -> Self {
        Self {
            name: "de_mastr".to_string(),
            country: "germany".to_string(),
            detail_url_base:
                "https://www.marktstammdatenregister.de/MaStR/Einheit/Detail/IndexOeffentlich/"
                    .to_string(),
        }
    }
}

/// Options controlling a feed run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedOptions {
    pub diff: DiffOptions,
    pub filter: RecordFilter,
    pub source: SourceInfo,
}

impl FeedOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ignored_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.diff
            .ignored_fields
            .extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn with_min_power_mw(mut self, min_power_mw: Option<i64>) -> Self {
        self.filter.min_power_mw = min_power_mw;
        self
    }
}
