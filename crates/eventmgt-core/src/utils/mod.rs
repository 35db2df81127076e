//! Utility helpers shared across the eventmgt-rs crates.

pub mod text;
