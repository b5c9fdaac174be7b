use serde::Serialize;

use crate::{FieldValue, Status};

/// Semantic tag attached to a change of the status field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusTransition {
    pub from: Status,
    pub to: Status,
}

/// One field that differs between two versions of the same entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeDescriptor {
    pub field: String,
    pub from: FieldValue,
    pub to: FieldValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<StatusTransition>,
}

impl ChangeDescriptor {
    /// Returns true if this change moved the entity into `status`.
    pub fn enters(&self, status: Status) -> bool {
        self.transition.is_some_and(|transition| transition.to == status)
    }
}
