//! # eventmgt
//!
//! Meta-crate that re-exports the eventmgt-rs sub-crates. Depend on
//! `eventmgt` to get everything, or on individual crates for finer-grained
//! control.
//!
//! ```
//! use eventmgt::prelude::*;
//!
//! let field = Field::new("Newsletter", FieldType::Radio)
//!     .with_settings("Yes|1\nNo|0")
//!     .with_default_value("1");
//! assert_eq!(field.partial_name(), "Radio");
//! assert_eq!(field.value_type(), FieldValueType::Text);
//! assert!(field.settings_for_option()[0].is_selected());
//! ```

/// Error types, settings, and logging.
pub use eventmgt_core as core;

/// Row mapping: values, rows, and the `Model` trait.
pub use eventmgt_db as db;

/// Registration fields, options, and submitted values.
pub use eventmgt_registration as registration;

/// The most commonly used types.
pub mod prelude {
    pub use eventmgt_core::{EventMgtError, EventMgtResult, Settings, ValidationError, SETTINGS};
    pub use eventmgt_db::{FromValue, Model, Row, Value};
    pub use eventmgt_registration::{
        validate_registration_fields, DatepickerMode, Event, Field, FieldType, FieldValue,
        FieldValueType, SelectOption, SubmittedValue,
    };
}
