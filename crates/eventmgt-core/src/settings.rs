//! Settings for eventmgt-rs.
//!
//! This module provides the [`Settings`] struct, which holds the workspace
//! configuration, and [`LazySettings`], a globally-accessible, lazily-initialized
//! settings instance.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// The complete set of settings.
///
/// # Examples
///
/// ```
/// use eventmgt_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.csv_separator, ",");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // ── Core ─────────────────────────────────────────────────────────

    /// Whether debug mode is enabled. Selects the pretty log format.
    pub debug: bool,

    // ── Logging ──────────────────────────────────────────────────────

    /// The log filter directive (e.g. "info", "eventmgt_registration=debug").
    pub log_level: String,

    // ── Registration ─────────────────────────────────────────────────

    /// Separator used when exporting multi-value field values to CSV.
    pub csv_separator: String,

    // ── Escape hatch ─────────────────────────────────────────────────

    /// Arbitrary additional settings.
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            csv_separator: ",".to_string(),
            extra: HashMap::new(),
        }
    }
}

/// A lazily-initialized, globally accessible settings container.
///
/// Call [`LazySettings::configure`] once at startup. Code that may run before
/// configuration should use [`LazySettings::get_or_default`], which does not
/// prevent a later `configure`.
pub struct LazySettings {
    inner: OnceLock<Settings>,
}

impl Default for LazySettings {
    fn default() -> Self {
        Self::new()
    }
}

impl LazySettings {
    /// Creates an unconfigured settings container.
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Installs the settings.
    ///
    /// Returns the rejected settings if the container was already configured.
    pub fn configure(&self, settings: Settings) -> Result<(), Settings> {
        self.inner.set(settings)
    }

    /// Returns the configured settings, if any.
    pub fn get(&self) -> Option<&Settings> {
        self.inner.get()
    }

    /// Returns the configured settings, or the defaults if nothing has been
    /// configured yet. The defaults are not stored in the container.
    pub fn get_or_default(&self) -> &Settings {
        match self.inner.get() {
            Some(settings) => settings,
            None => default_settings(),
        }
    }

    /// Returns `true` if settings have been configured.
    pub fn is_configured(&self) -> bool {
        self.inner.get().is_some()
    }
}

fn default_settings() -> &'static Settings {
    static DEFAULT: OnceLock<Settings> = OnceLock::new();
    DEFAULT.get_or_init(Settings::default)
}

/// The global settings instance.
pub static SETTINGS: LazySettings = LazySettings::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let s = Settings::default();
        assert!(s.debug);
        assert_eq!(s.log_level, "info");
        assert_eq!(s.csv_separator, ",");
        assert!(s.extra.is_empty());
    }

    #[test]
    fn test_lazy_settings_configure_once() {
        let lazy = LazySettings::new();
        assert!(!lazy.is_configured());
        assert!(lazy.get().is_none());

        let settings = Settings {
            csv_separator: ";".to_string(),
            ..Settings::default()
        };
        assert!(lazy.configure(settings).is_ok());
        assert!(lazy.is_configured());
        assert_eq!(lazy.get().unwrap().csv_separator, ";");

        let rejected = lazy.configure(Settings::default()).unwrap_err();
        assert_eq!(rejected.csv_separator, ",");
        assert_eq!(lazy.get().unwrap().csv_separator, ";");
    }

    #[test]
    fn test_lazy_settings_get_or_default() {
        let lazy = LazySettings::new();
        assert_eq!(lazy.get_or_default().csv_separator, ",");
        assert!(!lazy.is_configured());

        let settings = Settings {
            csv_separator: ";".to_string(),
            ..Settings::default()
        };
        assert!(lazy.configure(settings).is_ok());
        assert_eq!(lazy.get_or_default().csv_separator, ";");
    }

    #[test]
    fn test_settings_serde_roundtrip() {
        let s = Settings::default();
        let json = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.csv_separator, s.csv_separator);
    }
}
