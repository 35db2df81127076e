//! The registration field entity.

use eventmgt_core::EventMgtError;
use eventmgt_db::model::{Model, ModelMeta};
use eventmgt_db::row::Row;
use eventmgt_db::value::Value;
use serde::{Deserialize, Serialize};

use crate::datepicker::DatepickerMode;
use crate::field_type::FieldType;
use crate::options::{parse_options, SelectOption};
use crate::value_type::FieldValueType;

/// A configurable element of an event's registration form.
///
/// The owning event is referenced by uid only; the event owns its fields,
/// not the other way around.
///
/// # Examples
///
/// ```
/// use eventmgt_registration::{Field, FieldType, FieldValueType};
///
/// let field = Field::new("Diet", FieldType::Select)
///     .with_settings("Vegan|vegan\nOmnivore|omni")
///     .with_default_value("omni")
///     .with_required(true);
///
/// assert_eq!(field.partial_name(), "Select");
/// assert_eq!(field.value_type(), FieldValueType::Array);
/// assert!(field.settings_for_option()[1].is_selected());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Field {
    uid: Option<i64>,
    title: String,
    #[serde(rename = "type")]
    field_type: FieldType,
    required: bool,
    placeholder: String,
    default_value: String,
    settings: String,
    event: Option<i64>,
    text: Option<String>,
    datepickermode: Option<i64>,
}

impl Field {
    /// Creates an unsaved, optional field with the given title and type.
    pub fn new(title: impl Into<String>, field_type: impl Into<FieldType>) -> Self {
        Self {
            title: title.into(),
            field_type: field_type.into(),
            ..Self::default()
        }
    }

    /// Sets the uid (builder style).
    #[must_use]
    pub fn with_uid(mut self, uid: i64) -> Self {
        self.uid = Some(uid);
        self
    }

    /// Sets the required flag (builder style).
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the placeholder (builder style).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the default value (builder style).
    #[must_use]
    pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = default_value.into();
        self
    }

    /// Sets the raw option settings (builder style).
    #[must_use]
    pub fn with_settings(mut self, settings: impl Into<String>) -> Self {
        self.settings = settings.into();
        self
    }

    /// Sets the static text (builder style).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the date picker mode number (builder style).
    #[must_use]
    pub fn with_datepickermode(mut self, mode: i64) -> Self {
        self.datepickermode = Some(mode);
        self
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// Returns the uid, or `None` if the field was never persisted.
    pub const fn uid(&self) -> Option<i64> {
        self.uid
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sets the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Returns the type.
    pub const fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    /// Sets the type.
    pub fn set_field_type(&mut self, field_type: impl Into<FieldType>) {
        self.field_type = field_type.into();
    }

    /// Returns the required flag.
    pub const fn required(&self) -> bool {
        self.required
    }

    /// Sets the required flag.
    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    /// Returns the placeholder.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Sets the placeholder.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// Returns the default value.
    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    /// Sets the default value.
    pub fn set_default_value(&mut self, default_value: impl Into<String>) {
        self.default_value = default_value.into();
    }

    /// Returns the raw option settings.
    pub fn settings(&self) -> &str {
        &self.settings
    }

    /// Sets the raw option settings.
    pub fn set_settings(&mut self, settings: impl Into<String>) {
        self.settings = settings.into();
    }

    /// Returns the uid of the owning event.
    pub const fn event(&self) -> Option<i64> {
        self.event
    }

    /// Sets the owning event.
    pub fn set_event(&mut self, event: Option<i64>) {
        self.event = event;
    }

    /// Returns the static text.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Sets the static text.
    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text;
    }

    /// Returns the date picker mode number.
    pub const fn datepickermode(&self) -> Option<i64> {
        self.datepickermode
    }

    /// Sets the date picker mode number.
    pub fn set_datepickermode(&mut self, mode: Option<i64>) {
        self.datepickermode = mode;
    }

    // ── Rendering support ────────────────────────────────────────────

    /// Returns the options of a radio, checkbox or select field.
    ///
    /// See [`parse_options`] for the settings format.
    pub fn settings_for_option(&self) -> Vec<SelectOption> {
        let options = parse_options(&self.settings, &self.default_value);
        tracing::trace!(field = ?self.uid, count = options.len(), "parsed field options");
        options
    }

    /// Returns whether the field binds one value or many.
    pub const fn value_type(&self) -> FieldValueType {
        FieldValueType::for_field_type(&self.field_type)
    }

    /// Returns the name of the partial that renders this field.
    pub fn partial_name(&self) -> String {
        self.field_type.partial_name()
    }

    /// Returns the resolved date picker mode.
    pub const fn datepicker_mode(&self) -> DatepickerMode {
        DatepickerMode::from_mode(self.datepickermode)
    }

    /// Returns the HTML input type of the date picker.
    pub const fn datepickermode_type(&self) -> &'static str {
        self.datepicker_mode().as_str()
    }

    /// Returns everything a template needs to render this field.
    pub fn template_context(&self) -> serde_json::Value {
        serde_json::json!({
            "uid": self.uid,
            "title": self.title,
            "type": self.field_type.as_str(),
            "required": self.required,
            "placeholder": self.placeholder,
            "default_value": self.default_value,
            "settings": self.settings,
            "event": self.event,
            "text": self.text,
            "datepickermode": self.datepickermode,
            "datepickermode_type": self.datepickermode_type(),
            "partial_name": self.partial_name(),
            "value_type": self.value_type().code(),
            "options": self.settings_for_option(),
        })
    }
}

impl Model for Field {
    fn meta() -> &'static ModelMeta {
        static META: ModelMeta = ModelMeta {
            app_label: "sf_event_mgt",
            model_name: "registration_field",
            db_table: "tx_sfeventmgt_domain_model_registration_field",
            verbose_name: "registration field",
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
            ("title", self.title.clone().into()),
            ("type", self.field_type.as_str().into()),
            ("required", self.required.into()),
            ("placeholder", self.placeholder.clone().into()),
            ("default_value", self.default_value.clone().into()),
            ("settings", self.settings.clone().into()),
            ("event", self.event.into()),
            ("text", self.text.clone().into()),
            ("datepickermode", self.datepickermode.into()),
        ]
    }

    fn from_row(row: &Row) -> Result<Self, EventMgtError> {
        Ok(Self {
            uid: row.get("uid")?,
            title: row.get("title")?,
            field_type: FieldType::from(row.get::<String>("type")?),
            required: row.get("required")?,
            placeholder: row.get("placeholder")?,
            default_value: row.get("default_value")?,
            settings: row.get("settings")?,
            event: row.get("event")?,
            text: row.get("text")?,
            datepickermode: row.get("datepickermode")?,
        })
    }
}
