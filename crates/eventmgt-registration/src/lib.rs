//! # eventmgt-registration
//!
//! Registration form fields of an event. A [`Field`] is one configurable
//! element of the form (text input, radio group, checkboxes, select box,
//! textarea, or a static text/divider block). Besides plain attributes it
//! answers the questions a rendering layer asks:
//!
//! - which partial renders it ([`Field::partial_name`]),
//! - whether it binds one value or many ([`Field::value_type`]),
//! - which options it offers ([`Field::settings_for_option`]),
//! - which HTML input type its date picker uses ([`Field::datepickermode_type`]).
//!
//! ## Modules
//!
//! - [`field`] - The `Field` entity
//! - [`field_type`] - Field type names and partial names
//! - [`value_type`] - Scalar vs. multi-value classification
//! - [`options`] - Parsing option settings into selectable options
//! - [`datepicker`] - Date picker display modes
//! - [`event`] - The owning event aggregate
//! - [`field_value`] - Values submitted by registrants
//! - [`validation`] - Required-field and choice validation

pub mod datepicker;
pub mod event;
pub mod field;
pub mod field_type;
pub mod field_value;
pub mod options;
pub mod validation;
pub mod value_type;

pub use datepicker::DatepickerMode;
pub use event::Event;
pub use field::Field;
pub use field_type::FieldType;
pub use field_value::{FieldValue, SubmittedValue};
pub use options::SelectOption;
pub use validation::validate_registration_fields;
pub use value_type::FieldValueType;
