//! Registration field types.
//!
//! The type is stored as a plain string. Known names map onto dedicated
//! variants; anything else is kept verbatim in [`FieldType::Other`] so that
//! loading and saving a field never loses data.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use eventmgt_core::utils::text::capfirst;
use serde::{Deserialize, Serialize};

/// The kind of a registration field.
///
/// # Examples
///
/// ```
/// use eventmgt_registration::FieldType;
///
/// let ty: FieldType = "radio".parse().unwrap();
/// assert_eq!(ty, FieldType::Radio);
/// assert_eq!(ty.partial_name(), "Radio");
///
/// let ty = FieldType::from("rating");
/// assert_eq!(ty.as_str(), "rating");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    /// Single-line text input.
    #[default]
    Input,
    /// Radio button group.
    Radio,
    /// Checkbox group.
    Check,
    /// Multi-line text input.
    Textarea,
    /// Static text block.
    Text,
    /// Visual divider.
    Divider,
    /// Select box.
    Select,
    /// A type name this crate does not know about.
    Other(String),
}

impl FieldType {
    /// Returns the stored type name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Input => "input",
            Self::Radio => "radio",
            Self::Check => "check",
            Self::Textarea => "textarea",
            Self::Text => "text",
            Self::Divider => "divider",
            Self::Select => "select",
            Self::Other(name) => name,
        }
    }

    /// Returns the name of the partial that renders this field type.
    ///
    /// The partial name is the type name with its first character
    /// upper-cased if it is ASCII; other leading characters are kept as they
    /// are. Whether such a partial exists is up to the templates.
    pub fn partial_name(&self) -> String {
        capfirst(self.as_str())
    }

    /// Returns `true` if the field offers options parsed from its settings.
    pub const fn has_options(&self) -> bool {
        matches!(self, Self::Radio | Self::Check | Self::Select)
    }

    /// Returns `true` if the field only displays content and takes no input.
    pub const fn is_display_only(&self) -> bool {
        matches!(self, Self::Text | Self::Divider)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FieldType {
    fn from(name: &str) -> Self {
        match name {
            "input" => Self::Input,
            "radio" => Self::Radio,
            "check" => Self::Check,
            "textarea" => Self::Textarea,
            "text" => Self::Text,
            "divider" => Self::Divider,
            "select" => Self::Select,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for FieldType {
    fn from(name: String) -> Self {
        match Self::from(name.as_str()) {
            Self::Other(_) => Self::Other(name),
            known => known,
        }
    }
}

impl From<FieldType> for String {
    fn from(ty: FieldType) -> Self {
        match ty {
            FieldType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for FieldType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        let cases = [
            ("input", FieldType::Input),
            ("radio", FieldType::Radio),
            ("check", FieldType::Check),
            ("textarea", FieldType::Textarea),
            ("text", FieldType::Text),
            ("divider", FieldType::Divider),
            ("select", FieldType::Select),
        ];
        for (name, expected) in cases {
            let ty = FieldType::from(name);
            assert_eq!(ty, expected);
            assert_eq!(ty.as_str(), name);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(FieldType::from("Radio"), FieldType::Other("Radio".into()));
    }

    #[test]
    fn test_partial_name() {
        assert_eq!(FieldType::Radio.partial_name(), "Radio");
        assert_eq!(FieldType::Textarea.partial_name(), "Textarea");
        assert_eq!(FieldType::from("rating").partial_name(), "Rating");
        assert_eq!(FieldType::from("").partial_name(), "");
    }

    #[test]
    fn test_partial_name_only_uppercases_ascii() {
        assert_eq!(FieldType::from("ßa").partial_name(), "ßa");
        assert_eq!(FieldType::from("über").partial_name(), "über");
        assert_eq!(FieldType::from("radio").partial_name(), "Radio");
    }

    #[test]
    fn test_has_options() {
        assert!(FieldType::Radio.has_options());
        assert!(FieldType::Check.has_options());
        assert!(FieldType::Select.has_options());
        assert!(!FieldType::Input.has_options());
        assert!(!FieldType::Other("x".into()).has_options());
    }

    #[test]
    fn test_display_only() {
        assert!(FieldType::Text.is_display_only());
        assert!(FieldType::Divider.is_display_only());
        assert!(!FieldType::Textarea.is_display_only());
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&FieldType::Check).unwrap();
        assert_eq!(json, "\"check\"");
        let ty: FieldType = serde_json::from_str("\"stars\"").unwrap();
        assert_eq!(ty, FieldType::Other("stars".into()));
    }
}
