use crate::model::ValidationPattern;
use crate::text::normalize_space;

/// Checks a submitted answer against a question's pattern.
///
/// The input is normalized first (see [`normalize_space`]). A missing input
/// never matches.
#[must_use]
pub fn validate(input: Option<&str>, pattern: &ValidationPattern) -> bool {
    let Some(normalized) = normalize_space(input) else {
        tracing::debug!(pattern = %pattern, "validate: no input to check");
        return false;
    };

    if !pattern.is_match(&normalized) {
        tracing::debug!(pattern = %pattern, input = %normalized, "validate: answer was incorrect");
        return false;
    }

    tracing::debug!(pattern = %pattern, input = %normalized, "validate: answer was correct");
    true
}

/// Value of a form's only field.
///
/// Returns `None` unless the form has exactly one field.
#[must_use]
pub fn extract_single_value(fields: &[String]) -> Option<&str> {
    match fields {
        [only] => Some(only.as_str()),
        _ => None,
    }
}
