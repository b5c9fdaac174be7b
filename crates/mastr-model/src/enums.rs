//! Type-safe enumerations for registry concepts.
//!
//! The registry encodes these as numeric codes; the code tables in
//! `mastr-codes` translate codes into the labels parsed here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Lifecycle phase of an installation at observation time.
///
/// Variants are declared in lifecycle order so that `Ord` follows the
/// planning → construction → operation → decommissioned progression.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Registered but not yet being built.
    Planning,
    /// Under construction.
    Construction,
    /// In operation.
    Operation,
    /// Temporarily shut down.
    TemporarilyDecommissioned,
    /// Permanently shut down.
    PermanentlyDecommissioned,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Planning,
        Status::Construction,
        Status::Operation,
        Status::TemporarilyDecommissioned,
        Status::PermanentlyDecommissioned,
    ];

    /// Returns the canonical label used in code tables and output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Planning => "planning",
            Status::Construction => "construction",
            Status::Operation => "operation",
            Status::TemporarilyDecommissioned => "temporarily_decommissioned",
            Status::PermanentlyDecommissioned => "permanently_decommissioned",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ModelError;

    /// Parse a status label (case-insensitive, `-`/space accepted for `_`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "planning" => Ok(Status::Planning),
            "construction" => Ok(Status::Construction),
            "operation" => Ok(Status::Operation),
            "temporarily_decommissioned" => Ok(Status::TemporarilyDecommissioned),
            "permanently_decommissioned" => Ok(Status::PermanentlyDecommissioned),
            _ => Err(ModelError::UnknownStatus {
                label: s.to_string(),
            }),
        }
    }
}

/// Which code table a registry code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeKind {
    Status,
    Region,
    Technology,
}

impl CodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodeKind::Status => "status",
            CodeKind::Region => "region",
            CodeKind::Technology => "technology",
        }
    }
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
