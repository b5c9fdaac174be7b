use thiserror::Error;

use mastr_model::{CodeKind, EntityKey, Period, Status};

/// Placeholder used in errors for records without a usable key.
pub const UNKNOWN_KEY: &str = "<unknown>";

/// Errors raised while building the change feed. None of them are recovered
/// from: a partially processed period would corrupt totals and histories.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{period} {key}: unknown {kind} code '{code}'")]
    UnknownCode {
        period: Period,
        key: String,
        kind: CodeKind,
        code: String,
    },

    #[error("{period} {key}: missing required field {field}")]
    MissingField {
        period: Period,
        key: String,
        field: &'static str,
    },

    #[error("{period} {key}: invalid {field} value '{value}': {reason}")]
    InvalidValue {
        period: Period,
        key: String,
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("period {current} supplied after {previous}; periods must be strictly increasing")]
    OrderingViolation { previous: Period, current: Period },

    #[error("period {period}: duplicate entity key {key}")]
    DuplicateKey { period: Period, key: EntityKey },

    #[error("record {key} observed in {found} was supplied for period {expected}")]
    PeriodMismatch {
        expected: Period,
        found: Period,
        key: EntityKey,
    },

    #[error("period {period}: {status} capacity totals exceed the supported range")]
    TotalsOverflow { period: Period, status: Status },

    #[error("no periods supplied")]
    NoPeriods,
}

pub type Result<T> = std::result::Result<T, CoreError>;
