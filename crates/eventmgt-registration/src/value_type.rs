//! Scalar vs. multi-value classification of submitted field data.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field_type::FieldType;

/// How the value submitted for a field is shaped.
///
/// The integer codes are what gets persisted and what templates compare
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum FieldValueType {
    /// A single text value.
    #[default]
    Text,
    /// A list of values.
    Array,
}

impl FieldValueType {
    /// Integer code of [`FieldValueType::Text`].
    pub const TYPE_TEXT: i64 = 0;
    /// Integer code of [`FieldValueType::Array`].
    pub const TYPE_ARRAY: i64 = 1;

    /// Classifies a field type.
    ///
    /// `check` and `select` take several values; every other type, including
    /// unknown ones, takes a single text value.
    ///
    /// # Examples
    ///
    /// ```
    /// use eventmgt_registration::{FieldType, FieldValueType};
    ///
    /// assert_eq!(FieldValueType::for_field_type(&FieldType::Select), FieldValueType::Array);
    /// assert_eq!(FieldValueType::for_field_type(&FieldType::Radio), FieldValueType::Text);
    /// ```
    pub const fn for_field_type(field_type: &FieldType) -> Self {
        match field_type {
            FieldType::Check | FieldType::Select => Self::Array,
            FieldType::Input
            | FieldType::Radio
            | FieldType::Textarea
            | FieldType::Text
            | FieldType::Divider
            | FieldType::Other(_) => Self::Text,
        }
    }

    /// Returns the integer code.
    pub const fn code(self) -> i64 {
        match self {
            Self::Text => Self::TYPE_TEXT,
            Self::Array => Self::TYPE_ARRAY,
        }
    }

    /// Looks up a value type by integer code.
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            Self::TYPE_TEXT => Some(Self::Text),
            Self::TYPE_ARRAY => Some(Self::Array),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("TEXT"),
            Self::Array => f.write_str("ARRAY"),
        }
    }
}

impl From<FieldValueType> for i64 {
    fn from(value_type: FieldValueType) -> Self {
        value_type.code()
    }
}

impl TryFrom<i64> for FieldValueType {
    type Error = String;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("unknown field value type code {code}"))
    }
}
