//! The event aggregate that owns registration fields.

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// An event with its registration form.
///
/// The event owns its fields. Adding a field points the field's back-reference
/// at this event.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Event {
    /// The uid, or `None` if the event was never persisted.
    pub uid: Option<i64>,
    /// The event title.
    pub title: String,
    registration_fields: Vec<Field>,
}

impl Event {
    /// Creates an event without registration fields.
    pub fn new(uid: Option<i64>, title: impl Into<String>) -> Self {
        Self {
            uid,
            title: title.into(),
            registration_fields: Vec::new(),
        }
    }

    /// Returns the registration fields in form order.
    pub fn registration_fields(&self) -> &[Field] {
        &self.registration_fields
    }

    /// Appends a field to the registration form and attaches it to this event.
    pub fn add_registration_field(&mut self, mut field: Field) {
        field.set_event(self.uid);
        self.registration_fields.push(field);
    }

    /// Looks up a registration field by uid.
    pub fn registration_field_by_uid(&self, uid: i64) -> Option<&Field> {
        self.registration_fields
            .iter()
            .find(|field| field.uid() == Some(uid))
    }

    /// Removes a registration field by uid and returns it, detached.
    pub fn remove_registration_field(&mut self, uid: i64) -> Option<Field> {
        let idx = self
            .registration_fields
            .iter()
            .position(|field| field.uid() == Some(uid))?;
        let mut field = self.registration_fields.remove(idx);
        field.set_event(None);
        Some(field)
    }

    /// Returns `true` if at least one field asks for registrant input.
    pub fn has_registration_fields(&self) -> bool {
        self.registration_fields
            .iter()
            .any(|field| !field.field_type().is_display_only())
    }
}
