//! Values submitted by registrants.
//!
//! A [`FieldValue`] keeps the value type the field had at submission time, so
//! stored data stays readable even if the field's type is changed later.
//! Multi-value submissions are stored as a JSON array string.

use eventmgt_core::{EventMgtError, EventMgtResult, SETTINGS};
use eventmgt_db::model::{Model, ModelMeta};
use eventmgt_db::row::Row;
use eventmgt_db::value::Value;
use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::value_type::FieldValueType;

/// Raw data a registrant submitted for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmittedValue {
    /// A single text value.
    Text(String),
    /// Several values, e.g. ticked checkboxes.
    List(Vec<String>),
}

impl SubmittedValue {
    /// Returns `true` if nothing meaningful was submitted.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::List(items) => items.iter().all(|item| item.trim().is_empty()),
        }
    }

    /// Returns the submitted entries.
    pub fn entries(&self) -> Vec<&str> {
        match self {
            Self::Text(text) => vec![text.as_str()],
            Self::List(items) => items.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for SubmittedValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<&str>> for SubmittedValue {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(str::to_string).collect())
    }
}

/// The stored value of one field in one registration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldValue {
    uid: Option<i64>,
    field: Option<i64>,
    value: String,
    value_type: FieldValueType,
}

impl FieldValue {
    /// Builds the stored value for a submission to `field`.
    ///
    /// A list submitted to a text field is joined with `,`; a text submitted
    /// to a multi-value field becomes a one-element list.
    ///
    /// # Examples
    ///
    /// ```
    /// use eventmgt_registration::{Field, FieldType, FieldValue};
    ///
    /// let field = Field::new("Topics", FieldType::Check).with_uid(5);
    /// let value = FieldValue::from_submission(&field, vec!["rust", "wasm"].into()).unwrap();
    /// assert_eq!(value.value(), r#"["rust","wasm"]"#);
    /// assert_eq!(value.value_for_csv_export(";"), "rust;wasm");
    /// ```
    pub fn from_submission(field: &Field, submitted: SubmittedValue) -> EventMgtResult<Self> {
        let value_type = field.value_type();
        let value = match (value_type, submitted) {
            (FieldValueType::Text, SubmittedValue::Text(text)) => text,
            (FieldValueType::Text, SubmittedValue::List(items)) => items.join(","),
            (FieldValueType::Array, SubmittedValue::Text(text)) => serde_json::to_string(&[text])?,
            (FieldValueType::Array, SubmittedValue::List(items)) => serde_json::to_string(&items)?,
        };
        Ok(Self {
            uid: None,
            field: field.uid(),
            value,
            value_type,
        })
    }

    /// Returns the uid, or `None` if the value was never persisted.
    pub const fn uid(&self) -> Option<i64> {
        self.uid
    }

    /// Returns the uid of the field this value belongs to.
    pub const fn field(&self) -> Option<i64> {
        self.field
    }

    /// Returns the stored value as persisted.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the value type recorded at submission time.
    pub const fn value_type(&self) -> FieldValueType {
        self.value_type
    }

    /// Decodes the stored value into its entries.
    ///
    /// Multi-value data that is not a JSON string array is returned as a
    /// single raw entry.
    pub fn values(&self) -> Vec<String> {
        match self.value_type {
            FieldValueType::Text => vec![self.value.clone()],
            FieldValueType::Array if self.value.is_empty() => Vec::new(),
            FieldValueType::Array => serde_json::from_str(&self.value).unwrap_or_else(|err| {
                tracing::warn!(field = ?self.field, error = %err, "undecodable multi-value field value");
                vec![self.value.clone()]
            }),
        }
    }

    /// Returns the value for CSV export, joining multiple entries with `separator`.
    pub fn value_for_csv_export(&self, separator: &str) -> String {
        match self.value_type {
            FieldValueType::Text => self.value.clone(),
            FieldValueType::Array => self.values().join(separator),
        }
    }

    /// Returns the value for CSV export using the configured separator.
    pub fn csv_value(&self) -> String {
        self.value_for_csv_export(&SETTINGS.get_or_default().csv_separator)
    }
}

impl Model for FieldValue {
    fn meta() -> &'static ModelMeta {
        static META: ModelMeta = ModelMeta {
            app_label: "sf_event_mgt",
            model_name: "registration_fieldvalue",
            db_table: "tx_sfeventmgt_domain_model_registration_fieldvalue",
            verbose_name: "registration field value",
            ordering: &["uid"],
        };
        &META
    }

    fn pk(&self) -> Option<i64> {
        self.uid
    }

    fn set_pk(&mut self, uid: i64) {
        self.uid = Some(uid);
    }

    fn field_values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("uid", self.uid.into()),
            ("field", self.field.into()),
            ("value", self.value.clone().into()),
            ("value_type", self.value_type.code().into()),
        ]
    }

    fn from_row(row: &Row) -> Result<Self, EventMgtError> {
        let code: i64 = row.get("value_type")?;
        let value_type = FieldValueType::from_code(code).ok_or_else(|| {
            EventMgtError::DatabaseError(format!("Unknown field value type code {code}"))
        })?;
        Ok(Self {
            uid: row.get("uid")?,
            field: row.get("field")?,
            value: row.get("value")?,
            value_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_type::FieldType;

    #[test]
    fn test_text_submission_stored_verbatim() {
        let field = Field::new("Name", FieldType::Input).with_uid(1);
        let value = FieldValue::from_submission(&field, "Ada".into()).unwrap();
        assert_eq!(value.value(), "Ada");
        assert_eq!(value.field(), Some(1));
        assert_eq!(value.value_type(), FieldValueType::Text);
        assert_eq!(value.values(), vec!["Ada".to_string()]);
    }

    #[test]
    fn test_list_submission_to_text_field_is_joined() {
        let field = Field::new("Name", FieldType::Radio);
        let value = FieldValue::from_submission(&field, vec!["a", "b"].into()).unwrap();
        assert_eq!(value.value(), "a,b");
    }

    #[test]
    fn test_text_submission_to_array_field_is_wrapped() {
        let field = Field::new("Size", FieldType::Select);
        let value = FieldValue::from_submission(&field, "M".into()).unwrap();
        assert_eq!(value.value(), r#"["M"]"#);
        assert_eq!(value.values(), vec!["M".to_string()]);
    }

    #[test]
    fn test_csv_export() {
        let field = Field::new("Topics", FieldType::Check);
        let value = FieldValue::from_submission(&field, vec!["a", "b", "c"].into()).unwrap();
        assert_eq!(value.value_for_csv_export(","), "a,b,c");
        assert_eq!(value.value_for_csv_export(" / "), "a / b / c");

        let text = FieldValue::from_submission(&Field::new("x", "input"), "x,y".into()).unwrap();
        assert_eq!(text.value_for_csv_export(";"), "x,y");
    }

    #[test]
    fn test_csv_value_uses_configured_separator() {
        let field = Field::new("Topics", FieldType::Check);
        let value = FieldValue::from_submission(&field, vec!["a", "b"].into()).unwrap();
        let separator = &SETTINGS.get_or_default().csv_separator;
        assert_eq!(value.csv_value(), format!("a{separator}b"));
    }

    #[test]
    fn test_undecodable_array_value_degrades() {
        let row = Row::from_pairs(vec![
            ("uid", Value::Int(1)),
            ("field", Value::Int(2)),
            ("value", Value::from("not json")),
            ("value_type", Value::Int(1)),
        ]);
        let value = FieldValue::from_row(&row).unwrap();
        assert_eq!(value.values(), vec!["not json".to_string()]);
    }

    #[test]
    fn test_empty_array_value() {
        let row = Row::from_pairs(vec![
            ("uid", Value::Null),
            ("field", Value::Null),
            ("value", Value::from("")),
            ("value_type", Value::Int(1)),
        ]);
        let value = FieldValue::from_row(&row).unwrap();
        assert!(value.values().is_empty());
        assert_eq!(value.value_for_csv_export(","), "");
    }

    #[test]
    fn test_model_roundtrip() {
        let field = Field::new("Topics", FieldType::Check).with_uid(8);
        let mut value = FieldValue::from_submission(&field, vec!["x"].into()).unwrap();
        value.set_pk(99);
        let back = FieldValue::from_row(&value.to_row()).unwrap();
        assert_eq!(back, value);
        assert_eq!(FieldValue::table_name(), "tx_sfeventmgt_domain_model_registration_fieldvalue");
    }

    #[test]
    fn test_from_row_unknown_value_type() {
        let row = Row::from_pairs(vec![
            ("uid", Value::Null),
            ("field", Value::Null),
            ("value", Value::from("")),
            ("value_type", Value::Int(9)),
        ]);
        let err = FieldValue::from_row(&row).unwrap_err();
        assert!(err.to_string().contains("Unknown field value type code 9"));
    }

    #[test]
    fn test_submitted_value_blank() {
        assert!(SubmittedValue::from("  ").is_blank());
        assert!(SubmittedValue::from(vec!["", " "]).is_blank());
        assert!(SubmittedValue::List(vec![]).is_blank());
        assert!(!SubmittedValue::from(vec!["", "a"]).is_blank());
    }

    #[test]
    fn test_submitted_value_deserializes_untagged() {
        let v: SubmittedValue = serde_json::from_str("\"a\"").unwrap();
        assert_eq!(v, SubmittedValue::Text("a".into()));
        let v: SubmittedValue = serde_json::from_str("[\"a\",\"b\"]").unwrap();
        assert_eq!(v.entries(), vec!["a", "b"]);
    }
}
