//! # eventmgt-db
//!
//! The boundary between the registration domain types and whatever
//! persistence layer hosts them. Models describe themselves through the
//! [`Model`](model::Model) trait: static table metadata, their column values,
//! and how to rebuild an instance from a [`Row`](row::Row).
//!
//! ## Modules
//!
//! - [`value`] - Backend-agnostic column values
//! - [`row`] - Result rows and typed extraction via [`FromValue`](row::FromValue)
//! - [`model`] - The `Model` trait and `ModelMeta`

pub mod model;
pub mod row;
pub mod value;

pub use model::{Model, ModelMeta};
pub use row::{FromValue, Row};
pub use value::Value;
