//! Validation Utilities

use validator::{Validate, ValidationErrors};

/// Flatten validation errors into one message per violated constraint.
///
/// Fields are visited in name order so the output is stable across runs.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid ({})", field, e.code))
            })
        })
        .collect()
}

/// Validate a model, returning every violation message on failure.
pub fn validate_model<T: Validate>(model: &T) -> Result<(), Vec<String>> {
    model.validate().map_err(|e| validation_messages(&e))
}
