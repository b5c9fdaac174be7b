use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use mastr_model::Status;

use crate::error::{CodesError, Result};
use crate::paths::codes_file;
use crate::tables::CodeTables;

const DEFAULT_CODES: &str = include_str!("../codes/default.toml");
const DEFAULT_CODES_ORIGIN: &str = "<embedded default.toml>";

#[derive(Debug, Deserialize)]
struct CodeTablesFile {
    #[serde(default)]
    status: BTreeMap<String, String>,
    #[serde(default)]
    region: BTreeMap<String, String>,
    #[serde(default)]
    technology: BTreeMap<String, String>,
}

/// Parse code tables from TOML text. `origin` is only used in errors.
pub fn parse_code_tables(text: &str, origin: &Path) -> Result<CodeTables> {
    let file: CodeTablesFile = toml::from_str(text).map_err(|source| CodesError::Toml {
        path: origin.to_path_buf(),
        source,
    })?;
    if file.status.is_empty() {
        return Err(CodesError::EmptyStatusTable {
            path: origin.to_path_buf(),
        });
    }
    let mut tables = CodeTables::new();
    for (code, label) in file.status {
        let status =
            label
                .parse::<Status>()
                .map_err(|_| CodesError::UnknownStatusLabel {
                    path: origin.to_path_buf(),
                    code: code.clone(),
                    label: label.clone(),
                })?;
        tables = tables.with_status(code, status);
    }
    for (code, label) in file.region {
        tables = tables.with_region(code, label);
    }
    for (code, label) in file.technology {
        tables = tables.with_technology(code, label);
    }
    Ok(tables)
}

pub fn load_code_tables(path: &Path) -> Result<CodeTables> {
    let text = std::fs::read_to_string(path).map_err(|source| CodesError::io(path, source))?;
    parse_code_tables(&text, path)
}

/// The tables shipped with the crate.
pub fn default_code_tables() -> Result<CodeTables> {
    parse_code_tables(DEFAULT_CODES, Path::new(DEFAULT_CODES_ORIGIN))
}

/// Load tables from an explicit path, the environment override, or the
/// embedded defaults, in that order.
pub fn resolve_code_tables(explicit: Option<&Path>) -> Result<CodeTables> {
    match codes_file(explicit) {
        Some(path) => {
            debug!(path = %path.display(), "loading code tables");
            load_code_tables(&path)
        }
        None => {
            debug!("using embedded code tables");
            default_code_tables()
        }
    }
}
