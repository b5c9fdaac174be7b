use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("entity key must not be empty")]
    EmptyEntityKey,
    #[error("invalid period '{value}': expected YYYY-MM")]
    InvalidPeriod { value: String },
    #[error("unknown lifecycle status label: {label}")]
    UnknownStatus { label: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
