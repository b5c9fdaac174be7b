use std::collections::BTreeMap;

use mastr_model::{CodeKind, Status};

/// Immutable lookup tables translating registry codes into labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTables {
    status: BTreeMap<String, Status>,
    region: BTreeMap<String, String>,
    technology: BTreeMap<String, String>,
}

impl CodeTables {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_status(mut self, code: impl Into<String>, status: Status) -> Self {
        self.status.insert(code.into(), status);
        self
    }

    #[must_use]
    pub fn with_region(mut self, code: impl Into<String>, label: impl Into<String>) -> Self {
        self.region.insert(code.into(), label.into());
        self
    }

    #[must_use]
    pub fn with_technology(mut self, code: impl Into<String>, label: impl Into<String>) -> Self {
        self.technology.insert(code.into(), label.into());
        self
    }

    pub fn status(&self, code: &str) -> Option<Status> {
        self.status.get(code.trim()).copied()
    }

    pub fn region_label(&self, code: &str) -> Option<&str> {
        self.region.get(code.trim()).map(String::as_str)
    }

    pub fn technology_label(&self, code: &str) -> Option<&str> {
        self.technology.get(code.trim()).map(String::as_str)
    }

    /// All `(code, label)` pairs of one table, ordered by code.
    pub fn entries(&self, kind: CodeKind) -> Vec<(&str, &str)> {
        match kind {
            CodeKind::Status => self
                .status
                .iter()
                .map(|(code, status)| (code.as_str(), status.as_str()))
                .collect(),
            CodeKind::Region => self
                .region
                .iter()
                .map(|(code, label)| (code.as_str(), label.as_str()))
                .collect(),
            CodeKind::Technology => self
                .technology
                .iter()
                .map(|(code, label)| (code.as_str(), label.as_str()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_trim_codes() {
        let tables = CodeTables::new()
            .with_status("31", Status::Planning)
            .with_region("1408", "lower saxony");
        assert_eq!(tables.status(" 31 "), Some(Status::Planning));
        assert_eq!(tables.status("99"), None);
        assert_eq!(tables.region_label("1408"), Some("lower saxony"));
        assert_eq!(tables.technology_label("524"), None);
    }
}
