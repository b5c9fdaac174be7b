//! Code table path resolution.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the code tables file.
pub const CODES_ENV_VAR: &str = "MASTR_CODES_FILE";

/// Get the code tables file to load, if any.
///
/// Resolution order:
/// 1. An explicitly given path (e.g. `--codes`)
/// 2. `MASTR_CODES_FILE` environment variable
///
/// `None` means the embedded default tables apply.
pub fn codes_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    std::env::var_os(CODES_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
