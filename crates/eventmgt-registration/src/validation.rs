//! Validation of submitted registration field data.
//!
//! Each field of the registration form is checked against what the
//! registrant submitted for it. All problems are collected into a single
//! [`ValidationError`] keyed by `field_<uid>`, so a form can show every
//! message at once.

use std::collections::HashMap;

use eventmgt_core::logging::registration_span;
use eventmgt_core::ValidationError;

use crate::field::Field;
use crate::field_value::SubmittedValue;

/// Returns the error key used for a field uid.
pub fn field_error_key(uid: i64) -> String {
    format!("field_{uid}")
}

/// Validates submitted values, keyed by field uid, against the form fields.
///
/// - Required input fields must receive a non-blank value.
/// - Static text and divider fields never require input.
/// - Radio, checkbox and select fields only accept values of their options.
/// - Fields without a uid cannot receive submissions and are skipped.
///
/// Runs inside a [`registration_span`] for the event of the first field.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use eventmgt_registration::{validate_registration_fields, Field, FieldType};
///
/// let fields = vec![Field::new("Name", FieldType::Input).with_uid(1).with_required(true)];
/// let submitted = HashMap::new();
/// let err = validate_registration_fields(&fields, &submitted).unwrap_err();
/// assert!(err.has_field_error("field_1"));
/// ```
pub fn validate_registration_fields(
    fields: &[Field],
    submitted: &HashMap<i64, SubmittedValue>,
) -> Result<(), ValidationError> {
    let span = registration_span(fields.first().and_then(Field::event));
    let _guard = span.enter();

    let mut field_errors: HashMap<String, Vec<ValidationError>> = HashMap::new();

    for field in fields {
        let Some(uid) = field.uid() else {
            tracing::debug!(title = field.title(), "skipping unsaved registration field");
            continue;
        };
        if field.field_type().is_display_only() {
            continue;
        }

        let value = submitted.get(&uid).filter(|value| !value.is_blank());
        let errors = match value {
            None if field.required() => vec![ValidationError::new(
                "This field is required.",
                "required",
            )
            .with_param("title", field.title())],
            None => Vec::new(),
            Some(value) => invalid_choices(field, value),
        };

        if !errors.is_empty() {
            tracing::debug!(field = uid, count = errors.len(), "registration field rejected");
            field_errors.insert(field_error_key(uid), errors);
        }
    }

    if field_errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::with_field_errors(field_errors))
    }
}

fn invalid_choices(field: &Field, value: &SubmittedValue) -> Vec<ValidationError> {
    if !field.field_type().has_options() {
        return Vec::new();
    }
    let options = field.settings_for_option();
    if options.is_empty() {
        return Vec::new();
    }

    value
        .entries()
        .into_iter()
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter(|entry| !options.iter().any(|option| option.value == *entry))
        .map(|entry| {
            ValidationError::new(
                format!("Select a valid choice. {entry} is not one of the available choices."),
                "invalid_choice",
            )
            .with_param("title", field.title())
            .with_param("value", entry)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_type::FieldType;

    fn form() -> Vec<Field> {
        vec![
            Field::new("Name", FieldType::Input).with_uid(1).with_required(true),
            Field::new("Notes", FieldType::Textarea).with_uid(2),
            Field::new("Diet", FieldType::Radio)
                .with_uid(3)
                .with_required(true)
                .with_settings("Vegan|vegan\nOmnivore|omni"),
            Field::new("Topics", FieldType::Check)
                .with_uid(4)
                .with_settings("Rust\nWasm"),
            Field::new("Please note", FieldType::Text)
                .with_uid(5)
                .with_required(true),
        ]
    }

    #[test]
    fn test_valid_submission() {
        let mut submitted = HashMap::new();
        submitted.insert(1, SubmittedValue::from("Ada"));
        submitted.insert(3, SubmittedValue::from("vegan"));
        submitted.insert(4, SubmittedValue::from(vec!["Rust", "Wasm"]));
        assert!(validate_registration_fields(&form(), &submitted).is_ok());
    }

    #[test]
    fn test_missing_required_fields() {
        let err = validate_registration_fields(&form(), &HashMap::new()).unwrap_err();
        assert!(err.has_field_error("field_1"));
        assert!(err.has_field_error("field_3"));
        assert!(!err.has_field_error("field_2"));
        assert!(!err.has_field_error("field_5"));
        let first = &err.field_errors["field_1"][0];
        assert_eq!(first.code, "required");
        assert_eq!(first.params["title"], "Name");
    }

    #[test]
    fn test_blank_counts_as_missing() {
        let mut submitted = HashMap::new();
        submitted.insert(1, SubmittedValue::from("   "));
        submitted.insert(3, SubmittedValue::from("omni"));
        let err = validate_registration_fields(&form(), &submitted).unwrap_err();
        assert_eq!(err.field_errors.len(), 1);
        assert!(err.has_field_error("field_1"));
    }

    #[test]
    fn test_invalid_choice() {
        let mut submitted = HashMap::new();
        submitted.insert(1, SubmittedValue::from("Ada"));
        submitted.insert(3, SubmittedValue::from("carnivore"));
        submitted.insert(4, SubmittedValue::from(vec!["Rust", "Go", ""]));
        let err = validate_registration_fields(&form(), &submitted).unwrap_err();

        let diet = &err.field_errors["field_3"];
        assert_eq!(diet.len(), 1);
        assert_eq!(diet[0].code, "invalid_choice");
        assert_eq!(diet[0].params["value"], "carnivore");

        let topics = &err.field_errors["field_4"];
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].params["value"], "Go");
    }

    #[test]
    fn test_unsaved_fields_skipped() {
        let fields = vec![Field::new("Name", FieldType::Input).with_required(true)];
        assert!(validate_registration_fields(&fields, &HashMap::new()).is_ok());
    }

    #[test]
    fn test_validation_of_event_fields_under_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();
        let mut fields = form();
        for field in &mut fields {
            field.set_event(Some(12));
        }
        let err = tracing::subscriber::with_default(subscriber, || {
            validate_registration_fields(&fields, &HashMap::new())
        })
        .unwrap_err();
        assert_eq!(err.field_errors.len(), 2);
        assert!(err.has_field_error("field_1"));
        assert!(err.has_field_error("field_3"));
    }

    #[test]
    fn test_option_field_without_settings_accepts_anything() {
        let fields = vec![Field::new("Pick", FieldType::Select).with_uid(1)];
        let mut submitted = HashMap::new();
        submitted.insert(1, SubmittedValue::from("whatever"));
        assert!(validate_registration_fields(&fields, &submitted).is_ok());
    }
}
