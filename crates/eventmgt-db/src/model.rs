//! Model trait and metadata.
//!
//! The [`Model`] trait is the contract between a domain entity and the
//! persistence layer that loads and stores it. The entity describes its
//! table, exposes its column values, and rebuilds itself from a [`Row`].
//! Identity, lazy loading of relations and deletion stay with the
//! persistence layer.

use eventmgt_core::EventMgtError;

use crate::row::Row;
use crate::value::Value;

/// The core trait for all persisted entities.
///
/// # Examples
///
/// ```
/// use eventmgt_db::model::{Model, ModelMeta};
/// use eventmgt_db::row::Row;
/// use eventmgt_db::value::Value;
/// use eventmgt_core::EventMgtError;
///
/// struct Speaker {
///     uid: Option<i64>,
///     name: String,
/// }
///
/// impl Model for Speaker {
///     fn meta() -> &'static ModelMeta {
///         static META: ModelMeta = ModelMeta {
///             app_label: "sf_event_mgt",
///             model_name: "speaker",
///             db_table: "tx_sfeventmgt_domain_model_speaker",
///             verbose_name: "speaker",
///             ordering: &["name"],
///         };
///         &META
///     }
///
///     fn pk(&self) -> Option<i64> { self.uid }
///     fn set_pk(&mut self, uid: i64) { self.uid = Some(uid); }
///     fn field_values(&self) -> Vec<(&'static str, Value)> {
///         vec![("uid", self.uid.into()), ("name", self.name.clone().into())]
///     }
///     fn from_row(row: &Row) -> Result<Self, EventMgtError> {
///         Ok(Speaker { uid: row.get("uid")?, name: row.get("name")? })
///     }
/// }
///
/// let speaker = Speaker { uid: None, name: "Ada".into() };
/// assert_eq!(Speaker::table_name(), "tx_sfeventmgt_domain_model_speaker");
/// assert_eq!(speaker.non_pk_field_values().len(), 1);
/// ```
pub trait Model: Send + Sync + 'static {
    /// Returns the static metadata for this model type.
    fn meta() -> &'static ModelMeta;

    /// Returns the database table name.
    fn table_name() -> &'static str {
        Self::meta().db_table
    }

    /// Returns the primary key, or `None` if the instance was never persisted.
    fn pk(&self) -> Option<i64>;

    /// Sets the primary key on this instance (used after INSERT).
    fn set_pk(&mut self, uid: i64);

    /// Returns the name of the primary key column.
    fn pk_field_name() -> &'static str {
        "uid"
    }

    /// Returns all column name-value pairs for this instance.
    fn field_values(&self) -> Vec<(&'static str, Value)>;

    /// Returns column name-value pairs excluding the primary key.
    /// Used for INSERT operations where the key is generated by the store.
    fn non_pk_field_values(&self) -> Vec<(&'static str, Value)> {
        let pk_name = Self::pk_field_name();
        self.field_values()
            .into_iter()
            .filter(|(name, _)| *name != pk_name)
            .collect()
    }

    /// Constructs a model instance from a row.
    fn from_row(row: &Row) -> Result<Self, EventMgtError>
    where
        Self: Sized;

    /// Returns this instance as a row, the inverse of [`Model::from_row`].
    fn to_row(&self) -> Row {
        Row::from_pairs(self.field_values())
    }
}

/// Static metadata about a model.
#[derive(Debug)]
pub struct ModelMeta {
    /// The application label (e.g. "sf_event_mgt").
    pub app_label: &'static str,
    /// The model name in lowercase (e.g. "registration_field").
    pub model_name: &'static str,
    /// The database table name.
    pub db_table: &'static str,
    /// Human-readable singular name.
    pub verbose_name: &'static str,
    /// Default ordering columns.
    pub ordering: &'static [&'static str],
}
