//! Field-level comparison of two versions of one entity.

use std::borrow::Cow;
use std::collections::HashMap;

use mastr_model::{ChangeDescriptor, DiffOptions, EntityRecord, FieldValue, StatusTransition};

/// Compare two versions of the same entity.
///
/// Only fields present in both versions are compared, in the field order of
/// `previous`. Ignored fields never appear. Returns an empty list when
/// nothing differs.
pub fn diff(
    previous: &EntityRecord,
    current: &EntityRecord,
    options: &DiffOptions,
) -> Vec<ChangeDescriptor> {
    let current_fields: HashMap<Cow<'_, str>, FieldValue> =
        current.fields().into_iter().collect();
    previous
        .fields()
        .into_iter()
        .filter(|(name, _)| !options.is_ignored(name))
        .filter_map(|(name, before)| {
            let after = current_fields.get(name.as_ref())?;
            if before == *after {
                return None;
            }
            let transition = match (&before, after) {
                (FieldValue::Status(from), FieldValue::Status(to)) => Some(StatusTransition {
                    from: *from,
                    to: *to,
                }),
                _ => None,
            };
            Some(ChangeDescriptor {
                field: name.into_owned(),
                from: before,
                to: after.clone(),
                transition,
            })
        })
        .collect()
}
