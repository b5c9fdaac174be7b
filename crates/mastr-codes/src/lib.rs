#![deny(unsafe_code)]

pub mod error;
pub mod loader;
pub mod paths;
pub mod tables;

pub use crate::error::{CodesError, Result};
pub use crate::loader::{
    default_code_tables, load_code_tables, parse_code_tables, resolve_code_tables,
};
pub use crate::paths::{CODES_ENV_VAR, codes_file};
pub use crate::tables::CodeTables;
